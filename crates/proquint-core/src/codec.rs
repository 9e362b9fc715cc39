//! 16-bit word ↔ five-letter proquint token.
//!
//! A token is consonant-vowel-consonant-vowel-consonant. The 16 bits
//! split as 4+2+4+2+4: four bits index the consonant alphabet, two
//! bits the vowel alphabet.

/// Consonant alphabet; a 4-bit field selects one of these 16 letters.
pub const CONSONANTS: [u8; 16] = *b"bdfghjklmnprstvz";

/// Vowel alphabet; a 2-bit field selects one of these 4 letters.
pub const VOWELS: [u8; 4] = *b"aiou";

/// Encode a 16-bit word as a five-letter token.
///
/// Total over the full `u16` range; `encode_word(0)` is always
/// `"babab"`.
pub fn encode_word(value: u16) -> String {
    let value = value as usize;
    let mut token = String::with_capacity(5);
    token.push(CONSONANTS[value >> 12 & 0xf] as char);
    token.push(VOWELS[value >> 10 & 0x3] as char);
    token.push(CONSONANTS[value >> 6 & 0xf] as char);
    token.push(VOWELS[value >> 4 & 0x3] as char);
    token.push(CONSONANTS[value & 0xf] as char);
    token
}

/// Validate and decode a token in one pass.
///
/// Returns `None` unless the token is exactly five characters with
/// consonants at positions 0, 2, 4 and vowels at positions 1, 3.
pub fn decode_word(token: &str) -> Option<u16> {
    let bytes = token.as_bytes();
    if bytes.len() != 5 {
        return None;
    }
    Some(
        consonant_index(bytes[0])? << 12
            | vowel_index(bytes[1])? << 10
            | consonant_index(bytes[2])? << 6
            | vowel_index(bytes[3])? << 4
            | consonant_index(bytes[4])?,
    )
}

/// True iff `token` is a well-formed proquint token.
pub fn is_valid_word(token: &str) -> bool {
    decode_word(token).is_some()
}

fn consonant_index(letter: u8) -> Option<u16> {
    CONSONANTS.iter().position(|&c| c == letter).map(|i| i as u16)
}

fn vowel_index(letter: u8) -> Option<u16> {
    VOWELS.iter().position(|&v| v == letter).map(|i| i as u16)
}
