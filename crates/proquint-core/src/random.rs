//! Cryptographically random proquint phrases.

use num_bigint::BigUint;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::ProquintError;
use crate::phrase;

/// Generate a random phrase with a capacity of at least `min_bits`.
///
/// The bit budget rounds up to `min_bits/16 + 1` whole words and the
/// value is drawn uniformly from the full range of that many words,
/// so the phrase never exceeds that token count (lead words that come
/// up zero are trimmed by the encoder). Callers are expected to pass a
/// non-zero `min_bits`.
pub fn random_phrase(min_bits: u64) -> Result<String, ProquintError> {
    let words = min_bits / 16 + 1;
    let mut bytes = vec![0u8; (words * 2) as usize];
    OsRng.try_fill_bytes(&mut bytes)?;
    let value = BigUint::from_bytes_be(&bytes);
    Ok(phrase::encode(&value, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn token_count(phrase: &str) -> usize {
        phrase.split('-').count()
    }

    #[test]
    fn one_word_budget_yields_one_token() {
        for _ in 0..32 {
            let phrase = random_phrase(1).unwrap();
            assert_eq!(token_count(&phrase), 1);
        }
    }

    #[test]
    fn token_count_never_exceeds_word_budget() {
        for (min_bits, words) in [(16u64, 2), (17, 2), (31, 2), (32, 3), (64, 5)] {
            for _ in 0..8 {
                let phrase = random_phrase(min_bits).unwrap();
                assert!(
                    token_count(&phrase) <= words,
                    "{min_bits} bits produced {phrase}"
                );
            }
        }
    }

    #[test]
    fn output_decodes_successfully() {
        for _ in 0..32 {
            let phrase = random_phrase(48).unwrap();
            phrase::decode(&phrase).unwrap();
        }
    }

    #[test]
    fn values_spread_across_the_range() {
        // 256 draws from a 2^16 range: statistically certain to hit
        // both halves and to not collapse onto a handful of values.
        let mut values = BTreeSet::new();
        for _ in 0..256 {
            let phrase = random_phrase(1).unwrap();
            let value: u32 = phrase::decode(&phrase).unwrap().parse().unwrap();
            assert!(value <= u32::from(u16::MAX));
            values.insert(value);
        }
        assert!(values.len() > 64, "only {} distinct values", values.len());
        assert!(*values.iter().next().unwrap() < 0x8000);
        assert!(*values.iter().next_back().unwrap() >= 0x8000);
    }
}
