//! Generator error types.
//!
//! The generator cannot fail on well-formed configuration; the only
//! failure mode is a rejected weight table or modulus, caught before a
//! single statement is emitted.

use optel_fingerprint::ConfigError;
use thiserror::Error;

/// Errors that can occur during VCL generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeneratorError {
    /// Fingerprint parameters failed validation.
    #[error("rejected configuration: {0}")]
    RejectedConfiguration(#[from] ConfigError),
}

/// Result type for generator operations.
pub type GeneratorResult<T> = Result<T, GeneratorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_config_errors() {
        let e: GeneratorError = ConfigError::ZeroModulus.into();
        assert!(e.to_string().contains("rejected configuration"));
        assert!(e.to_string().contains("non-zero"));
    }

    #[test]
    fn error_is_std_error() {
        let e: Box<dyn std::error::Error> =
            Box::new(GeneratorError::RejectedConfiguration(ConfigError::ZeroModulus));
        assert!(!e.to_string().is_empty());
    }
}
