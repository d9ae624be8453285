//! Path normalization.
//!
//! A path is reduced to the letters it contains before any positional
//! analysis: every character outside `[A-Za-z]` is dropped (order and
//! adjacency of the surviving letters are untouched), and the survivors
//! are lower-cased. The result contains only `a`–`z` and may be empty.

/// Normalize a raw input string for fingerprinting.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
