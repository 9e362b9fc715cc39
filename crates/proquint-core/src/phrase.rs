//! Arbitrary-precision integer ↔ hyphen-joined proquint phrase.
//!
//! A phrase lists its 16-bit words most-significant first. Suppressed
//! leading zero characters from the original numeral text survive the
//! round trip as extra zero-valued lead tokens: one token per zero
//! character.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::codec;
use crate::error::ProquintError;

const WORD_BITS: u64 = 16;
const WORD_MASK: u32 = 0xffff;

/// Number of 16-bit words needed for an integer of `bit_len` bits.
///
/// Zero still occupies one word, so the result is never 0.
pub fn proquint_words(bit_len: u64) -> usize {
    (bit_len.saturating_sub(1) / WORD_BITS + 1) as usize
}

/// Encode a non-negative integer as a proquint phrase, prepending one
/// zero-valued token per suppressed leading zero character.
pub fn encode(value: &BigUint, leading_zeros: usize) -> String {
    let count = proquint_words(value.bits());
    let mask = BigUint::from(WORD_MASK);
    let mut rest = value.clone();
    let mut tokens = vec![codec::encode_word(0); leading_zeros + count];
    // Words come out least-significant first; fill the tail backwards
    // so the phrase reads most-significant first.
    for slot in tokens[leading_zeros..].iter_mut().rev() {
        let low = (&rest & &mask).iter_u32_digits().next().unwrap_or(0);
        *slot = codec::encode_word(low as u16);
        rest >>= WORD_BITS;
    }
    tokens.join("-")
}

/// Decode a proquint phrase into the decimal text of the integer it
/// represents, re-materializing zero-valued lead words as literal `0`
/// characters.
///
/// The phrase is rejected wholesale if any token is malformed. An
/// all-zero phrase decodes to plain `"0"` with no prefix.
pub fn decode(phrase: &str) -> Result<String, ProquintError> {
    let mut words = Vec::new();
    for token in phrase.split('-') {
        let word = codec::decode_word(token)
            .ok_or_else(|| ProquintError::InvalidPhrase(phrase.to_string()))?;
        words.push(word);
    }

    let mut zeros = words.iter().take_while(|&&word| word == 0).count();
    if zeros == words.len() {
        zeros = 0;
    }

    let mut value = BigUint::zero();
    for &word in &words[zeros..] {
        value = (value << WORD_BITS) | BigUint::from(word);
    }

    Ok(format!("{}{}", "0".repeat(zeros), value))
}
