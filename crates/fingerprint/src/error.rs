//! Configuration error types.

use thiserror::Error;

/// Errors raised when fingerprint parameters fail validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The weight table does not have exactly one entry per position.
    #[error("weight table must have exactly 21 entries, got {0}")]
    WeightTableLength(usize),

    /// The target modulus is zero; reduction would divide by zero.
    #[error("target modulus must be non-zero")]
    ZeroModulus,
}

/// Result type for configuration validation.
pub type ConfigResult<T> = Result<T, ConfigError>;
