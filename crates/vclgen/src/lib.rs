//! # optel-vclgen
//!
//! Unrolling code generator for the Optel path fingerprint. Takes the
//! fingerprint parameters (21 weights plus target modulus) and emits
//! Fastly VCL that computes the identical match result without loops,
//! indexed character access, or runtime multiplication: one fixed
//! block per character position and one fixed tail block for the
//! reduction and branch.
//!
//! The emitted text is byte-for-byte reproducible for a given
//! configuration; `verbose` only interleaves pure `log` observers.

#![deny(unsafe_code)]

pub mod error;
pub mod generator;
pub mod types;

// ── Re-exports ──────────────────────────────────────────────────────

pub use error::{GeneratorError, GeneratorResult};
pub use generator::{pattern_for_position, VclGenerator};
pub use types::GeneratedVcl;
