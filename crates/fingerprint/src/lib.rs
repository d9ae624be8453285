//! # optel-fingerprint
//!
//! The Optel path fingerprint: a weighted positional checksum over a
//! normalized request path. An input string is stripped to its ASCII
//! letters, lower-cased, and the first 21 character codes are combined
//! with a fixed weight table; the sum reduced modulo the target
//! constant decides the match.
//!
//! Everything here is pure and total: no I/O, no shared state, and no
//! input (empty strings included) can make evaluation fail.

#![deny(unsafe_code)]

pub mod collide;
pub mod error;
pub mod normalize;
pub mod params;

// ── Re-exports ──────────────────────────────────────────────────────

pub use collide::{CollisionFinder, KNOWN_PATTERNS};
pub use error::{ConfigError, ConfigResult};
pub use normalize::normalize;
pub use params::{FingerprintParams, DEPLOYED_MODULUS, DEPLOYED_WEIGHTS, POSITION_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evaluate_agrees_with_checksum() {
        let params = FingerprintParams::deployed();
        for input in ["", "rum", "abc", "the-optel-path-example", "/RUM/"] {
            assert_eq!(params.evaluate(input), params.checksum(input) == 0);
        }
    }

    #[test]
    fn evaluation_is_normalization_invariant() {
        let params = FingerprintParams::deployed();
        for input in ["HELLO-world", "/optel?x=1", "123!!!", "the-optel-path-example"] {
            assert_eq!(params.evaluate(input), params.evaluate(&normalize(input)));
        }
    }

    #[test]
    fn collision_finder_uses_public_surface() {
        let mut finder = CollisionFinder::with_seed(FingerprintParams::deployed(), 1);
        if let Some(hit) = finder.find(Some("optel")) {
            assert!(FingerprintParams::deployed().evaluate(&hit));
        }
    }
}
