//! Algebraic properties of the fingerprint algorithm.

use optel_fingerprint::{normalize, FingerprintParams, POSITION_COUNT};
use proptest::prelude::*;

proptest! {
    #[test]
    fn evaluation_is_deterministic(input in ".{0,64}") {
        let params = FingerprintParams::deployed();
        prop_assert_eq!(params.evaluate(&input), params.evaluate(&input));
        prop_assert_eq!(params.checksum(&input), params.checksum(&input));
    }

    #[test]
    fn normalization_is_idempotent(input in ".{0,64}") {
        let once = normalize(&input);
        prop_assert_eq!(normalize(&once), once.clone());

        let params = FingerprintParams::deployed();
        prop_assert_eq!(params.evaluate(&input), params.evaluate(&once));
    }

    #[test]
    fn normalized_output_is_lowercase_letters(input in ".{0,64}") {
        prop_assert!(normalize(&input).bytes().all(|b| b.is_ascii_lowercase()));
    }

    #[test]
    fn letters_beyond_position_twenty_never_matter(
        head in "[a-z]{21,30}",
        tail in ".{0,16}",
    ) {
        let params = FingerprintParams::deployed();
        let extended = format!("{head}{tail}");
        prop_assert_eq!(params.checksum(&extended), params.checksum(&head));
    }

    #[test]
    fn non_letters_never_matter(
        letters in "[a-z]{0,25}",
        noise_positions in prop::collection::vec(0usize..26, 0..8),
    ) {
        // Splice separators into the letter string; the checksum must
        // not move.
        let mut noisy: Vec<char> = letters.chars().collect();
        for &pos in &noise_positions {
            let at = pos.min(noisy.len());
            noisy.insert(at, '-');
        }
        let noisy: String = noisy.into_iter().collect();

        let params = FingerprintParams::deployed();
        prop_assert_eq!(params.checksum(&noisy), params.checksum(&letters));
    }

    #[test]
    fn checksum_stays_within_modulus_magnitude(input in ".{0,64}") {
        let params = FingerprintParams::deployed();
        prop_assert!(params.checksum(&input).abs() < params.modulus.abs());
    }

    #[test]
    fn arbitrary_valid_params_never_panic(
        weights in prop::collection::vec(-10_000i64..10_000, POSITION_COUNT),
        modulus in prop_oneof![1i64..1_000_000, -1_000_000i64..-1],
        input in ".{0,64}",
    ) {
        let params = FingerprintParams::new(weights, modulus);
        prop_assert!(params.validate().is_ok());
        let _ = params.evaluate(&input);
    }
}

#[test]
fn empty_input_is_a_match() {
    assert!(FingerprintParams::deployed().evaluate(""));
}

#[test]
fn letter_free_input_is_a_match() {
    assert!(FingerprintParams::deployed().evaluate("123!!!"));
}
