use thiserror::Error;

/// Canonical error type exposed by the conversion routines.
#[derive(Debug, Error)]
pub enum ProquintError {
    /// A string classified as a phrase failed tokenization or alphabet
    /// validation. Carries the full offending input for diagnostics.
    #[error("invalid proquint: {0}")]
    InvalidPhrase(String),

    /// Numeral text could not be parsed as a non-negative integer.
    #[error("invalid number: {0}")]
    MalformedNumeral(String),

    /// The secure random source could not produce output.
    #[error("secure random source failed: {0}")]
    Entropy(#[from] rand::Error),
}
