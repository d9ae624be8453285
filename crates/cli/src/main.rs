//! optel-vclgen: writes the unrolled fingerprint VCL to stdout.
//!
//! Run it and paste the output into the service's VCL. `--verbose`
//! interleaves diagnostic `log` statements in the generated code; it
//! never changes the computed match.

#![deny(unsafe_code)]

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use optel_fingerprint::FingerprintParams;
use optel_vclgen::VclGenerator;

/// Generate Fastly VCL for Optel path matching.
#[derive(Parser)]
#[command(name = "optel-vclgen")]
#[command(about = "Generate loop-free Fastly VCL for the Optel path fingerprint")]
#[command(version)]
struct Cli {
    /// Include debug logging in the generated VCL
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let generated = VclGenerator::new(FingerprintParams::deployed())
        .verbose(cli.verbose)
        .generate()?;
    debug!(hash = %generated.content_hash, bytes = generated.size_bytes, "emitting vcl");

    print!("{}", generated.content);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_flag_parses() {
        let cli = Cli::try_parse_from(["optel-vclgen", "--verbose"]).unwrap();
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["optel-vclgen", "-v"]).unwrap();
        assert!(cli.verbose);

        let cli = Cli::try_parse_from(["optel-vclgen"]).unwrap();
        assert!(!cli.verbose);
    }

    #[test]
    fn unknown_flags_rejected() {
        assert!(Cli::try_parse_from(["optel-vclgen", "--output", "x"]).is_err());
        assert!(Cli::try_parse_from(["optel-vclgen", "extra"]).is_err());
    }
}
