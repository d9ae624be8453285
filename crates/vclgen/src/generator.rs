//! The unrolling generator.
//!
//! Fastly VCL has no loop construct, no indexed character access, and
//! no charCodeAt equivalent, so the 21-position checksum cannot be
//! written as a loop on the edge. Instead, every position gets its own
//! self-contained block, fixed at generation time:
//!
//! - extract the single character at that position with a
//!   position-anchored regex, guarded by a length check so short
//!   strings yield an empty extraction rather than an error;
//! - replace each lowercase letter with its pre-multiplied
//!   `weight * charcode` literal (the multiplication happens here, at
//!   generation time, because VCL cannot multiply by a runtime
//!   character code);
//! - `std.atoi` the result, where an empty string parses to 0.
//!
//! A fixed tail block accumulates the 21 values with 21 separate `+=`
//! statements, reduces with `%=`, and sets `req.http.X-Optel-Match` on
//! both branches of the final comparison.
//!
//! Emission order is canonical: positions 0→20, letters a→z,
//! accumulation 0→20. The sum itself would not care, but verbose
//! diagnostic traces are only comparable across runs if every run emits
//! in the same order.

use tracing::debug;

use crate::error::GeneratorResult;
use crate::types::GeneratedVcl;
use optel_fingerprint::{FingerprintParams, POSITION_COUNT};

/// Regex pair extracting exactly the character at `pos`: the pattern to
/// match against the normalized path and the replacement group.
///
/// The pattern is anchored on a literal position count, so it is a
/// constant per emitted block, never parameterized at VCL run time.
pub fn pattern_for_position(pos: usize) -> (String, &'static str) {
    if pos == 0 {
        ("^(.).*$".to_string(), "\\1")
    } else {
        (format!("^.{{{pos}}}(.).*$"), "\\1")
    }
}

/// Generates loop-free VCL reproducing the fingerprint bit-for-bit.
pub struct VclGenerator {
    params: FingerprintParams,
    verbose: bool,
}

impl VclGenerator {
    pub fn new(params: FingerprintParams) -> Self {
        Self {
            params,
            verbose: false,
        }
    }

    /// Interleave diagnostic `log` statements in the output. Pure
    /// observers: they never touch a declared variable or the output
    /// header, so the computed match is identical either way.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Emit the full VCL block.
    ///
    /// Validates the parameters first and rejects malformed
    /// configuration before any text is produced.
    pub fn generate(&self) -> GeneratorResult<GeneratedVcl> {
        self.params.validate()?;

        let mut code = String::new();
        self.emit_prelude(&mut code);
        for (pos, &weight) in self.params.weights.iter().enumerate() {
            self.emit_position_block(&mut code, pos, weight);
        }
        self.emit_final_check(&mut code);

        debug!(
            positions = POSITION_COUNT,
            verbose = self.verbose,
            size_bytes = code.len(),
            "generated unrolled vcl"
        );
        Ok(GeneratedVcl::new(code))
    }

    fn emit_prelude(&self, code: &mut String) {
        code.push_str(
            "# ---- PRELUDE ----------------------------------------------------------\n",
        );
        code.push_str("# normalise the incoming path once\n");
        code.push_str("declare local var.norm STRING;\n");
        // regsuball, not regsub: every non-letter must go, not just the
        // first one.
        code.push_str(
            "set var.norm = std.tolower(regsuball(req.url.path, \"[^a-zA-Z]\", \"\"));\n",
        );
        if self.verbose {
            code.push_str("log \"Optel Debug - Normalized Path: \" + var.norm;\n");
        }
        code.push('\n');
    }

    fn emit_position_block(&self, code: &mut String, pos: usize, weight: i64) {
        let (pattern, replacement) = pattern_for_position(pos);

        code.push_str(&format!(
            "# --- position {pos} (weight = {weight}) ----------------------------------\n"
        ));
        code.push_str(&format!("declare local var.c{pos} STRING;\n"));
        code.push_str(&format!("declare local var.v{pos} INTEGER;\n"));

        // Guarded extraction: a too-short path leaves var.c{pos} empty.
        code.push_str(&format!("set var.c{pos} = \"\";\n"));
        code.push_str(&format!("if (std.strlen(var.norm) > {pos}) {{\n"));
        code.push_str(&format!(
            "    set var.c{pos} = regsub(var.norm, \"{pattern}\", \"{replacement}\");\n"
        ));
        code.push_str("}\n");
        if self.verbose {
            code.push_str(&format!(
                "log \"Optel Debug - Position {pos} - Character: \" + var.c{pos};\n"
            ));
        }

        // One substitution per letter, a..z, each carrying the
        // pre-multiplied weight * charcode literal. At most one can
        // match a single-character input.
        for letter in b'a'..=b'z' {
            let value = weight * i64::from(letter);
            code.push_str(&format!(
                "set var.c{pos} = regsub(var.c{pos}, \"{}\", \"{value}\");\n",
                letter as char
            ));
        }

        // std.atoi parses the empty string as 0, so an absent position
        // degrades to 0 without an extra guard.
        code.push_str(&format!("set var.v{pos} = std.atoi(var.c{pos});\n"));
        if self.verbose {
            code.push_str(&format!(
                "log \"Optel Debug - Position {pos} - Value: \" + var.v{pos};\n"
            ));
        }
        code.push('\n');
    }

    fn emit_final_check(&self, code: &mut String) {
        let modulus = self.params.modulus;

        code.push_str(
            "# --- final check --------------------------------------------------------\n",
        );
        code.push_str("declare local var.sum INTEGER;\n");
        code.push_str("set var.sum = 0;\n");
        if self.verbose {
            code.push_str("log \"Optel Debug - Initial Sum: \" + var.sum;\n");
        }
        for pos in 0..self.params.weights.len() {
            code.push_str(&format!("set var.sum += var.v{pos};\n"));
            if self.verbose {
                code.push_str(&format!(
                    "log \"Optel Debug - After adding v{pos}: Sum = \" + var.sum;\n"
                ));
            }
        }
        code.push('\n');

        if self.verbose {
            code.push_str("log \"Optel Debug - Path: \" + var.norm + \", Total Sum: \" + var.sum;\n");
        }
        code.push_str(&format!("set var.sum %= {modulus};\n"));
        if self.verbose {
            code.push_str(&format!(
                "log \"Optel Debug - After modulo {modulus}: \" + var.sum;\n"
            ));
        }

        code.push_str("if (var.sum == 0) {\n");
        code.push_str("  set req.http.X-Optel-Match = \"true\";\n");
        if self.verbose {
            code.push_str("  log \"Optel Debug - MATCH FOUND!\";\n");
        }
        code.push_str("} else {\n");
        code.push_str("  set req.http.X-Optel-Match = \"false\";\n");
        if self.verbose {
            code.push_str("  log \"Optel Debug - NO MATCH\";\n");
        }
        code.push_str("}\n");

        if self.verbose {
            code.push_str(
                "log \"Optel Debug - Final - Path: \" + var.norm + \", Sum Remainder: \" + var.sum + \", Match: \" + req.http.X-Optel-Match;\n",
            );
        }
        code.push_str(
            "# -----------------------------------------------------------------------\n",
        );
    }
}
