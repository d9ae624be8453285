//! Fingerprint parameters and the checksum itself.
//!
//! The weight table and target modulus are generation-time
//! configuration: they are fixed for a deployed instance and are never
//! derived from user input. Everything computed from them per input
//! string (normalized path, positional values, checksum, match flag)
//! lives only for the duration of one [`FingerprintParams::evaluate`]
//! call.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::normalize::normalize;

/// Number of character positions the fingerprint inspects.
pub const POSITION_COUNT: usize = 21;

/// Weight table of the deployed instance.
pub const DEPLOYED_WEIGHTS: [i64; POSITION_COUNT] = [
    1969, -50, 18, 43, 11, -5, 6, 9, 14, 42, //
    29, 39, 32, -40, -38, -15, -14, -10, 4, -48, //
    -12,
];

/// Target modulus of the deployed instance.
pub const DEPLOYED_MODULUS: i64 = 220_578;

/// Weight table plus target modulus for one fingerprint instance.
///
/// Construct with [`FingerprintParams::new`] and call
/// [`FingerprintParams::validate`] before generating code; evaluation
/// itself tolerates any table length (missing positions contribute 0,
/// surplus weights are ignored) but generation must reject malformed
/// configuration up front.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FingerprintParams {
    pub weights: Vec<i64>,
    pub modulus: i64,
}

impl FingerprintParams {
    pub fn new(weights: Vec<i64>, modulus: i64) -> Self {
        Self { weights, modulus }
    }

    /// Parameters of the deployed instance.
    pub fn deployed() -> Self {
        Self::new(DEPLOYED_WEIGHTS.to_vec(), DEPLOYED_MODULUS)
    }

    /// Reject malformed configuration: the weight table must have
    /// exactly one entry per position and the modulus must be non-zero.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.weights.len() != POSITION_COUNT {
            return Err(ConfigError::WeightTableLength(self.weights.len()));
        }
        if self.modulus == 0 {
            return Err(ConfigError::ZeroModulus);
        }
        Ok(())
    }

    /// Weighted positional checksum of `raw`, reduced modulo the target.
    ///
    /// Positions beyond the end of the normalized string contribute 0;
    /// characters beyond position 20 are ignored. The reduction uses
    /// Rust's `%`, a truncating remainder whose sign follows the
    /// dividend, the same convention as Fastly VCL's `%=`, so this
    /// function and the generated code agree bit-for-bit.
    pub fn checksum(&self, raw: &str) -> i64 {
        let norm = normalize(raw);
        let sum: i64 = norm
            .bytes()
            .take(POSITION_COUNT)
            .zip(&self.weights)
            .map(|(c, w)| w * i64::from(c))
            .sum();
        sum % self.modulus
    }

    /// `true` iff the checksum of `raw` is exactly zero.
    ///
    /// Total over all inputs: an empty or letter-free string normalizes
    /// to "", sums to 0, and therefore matches.
    pub fn evaluate(&self, raw: &str) -> bool {
        self.checksum(raw) == 0
    }
}

impl Default for FingerprintParams {
    fn default() -> Self {
        Self::deployed()
    }
}
