//! Classification and parsing of numeral input.
//!
//! The CLI accepts decimal text (`291`), hex text with a `0x` prefix
//! (`0x123`), or a proquint phrase. Anything that is not numeric falls
//! through to phrase decoding.

use num_bigint::BigUint;

use crate::error::ProquintError;

/// A parsed numeral: the integer value plus the number of suppressed
/// leading zero characters from the original text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Numeral {
    pub value: BigUint,
    pub leading_zeros: usize,
}

/// True iff `input` looks like a numeral.
///
/// With a `0x` prefix every remaining character must be a hex digit
/// (case-insensitive); without one, a decimal digit. Hex letters
/// without the prefix do NOT classify as numeric — such input is
/// treated as a phrase instead.
pub fn is_number(input: &str) -> bool {
    let (digits, is_hex) = strip_hex_prefix(input);
    digits.chars().all(|c| {
        let c = c.to_ascii_lowercase();
        c.is_ascii_digit() || (is_hex && ('a'..='f').contains(&c))
    })
}

/// Parse numeral text into a value and its leading-zero count.
///
/// All-zero text keeps one `0` as the significant part, so `"0"`
/// parses to value 0 with no leading zeros and `"000"` to value 0
/// with two.
pub fn parse(input: &str) -> Result<Numeral, ProquintError> {
    let (digits, is_hex) = strip_hex_prefix(input);
    if digits.is_empty() {
        return Err(ProquintError::MalformedNumeral(input.to_string()));
    }

    let mut leading_zeros = digits.bytes().take_while(|&b| b == b'0').count();
    if leading_zeros == digits.len() {
        leading_zeros -= 1;
    }
    let significant = &digits[leading_zeros..];

    let radix = if is_hex { 16 } else { 10 };
    let value = BigUint::parse_bytes(significant.as_bytes(), radix)
        .ok_or_else(|| ProquintError::MalformedNumeral(input.to_string()))?;

    Ok(Numeral {
        value,
        leading_zeros,
    })
}

fn strip_hex_prefix(input: &str) -> (&str, bool) {
    match input.strip_prefix("0x") {
        Some(rest) => (rest, true),
        None => (input, false),
    }
}
