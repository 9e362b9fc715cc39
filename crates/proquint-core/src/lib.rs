//! Core primitives for proquint conversion.
//!
//! A proquint is a PROnounceable QUINTuplet: a five-letter
//! consonant-vowel-consonant-vowel-consonant token that encodes one
//! 16-bit word. Larger integers become hyphen-joined phrases of such
//! tokens, most-significant word first, so `0x7F000001` reads as
//! `lusab-babad`.
//!
//! The crate exposes four building blocks that the CLI combines:
//!
//! * [`codec`] — 16-bit word ↔ five-letter token, table driven.
//! * [`phrase`] — arbitrary-precision integer ↔ hyphen-joined phrase,
//!   including the leading-zero preservation rules.
//! * [`numeral`] — classification and parsing of decimal/hex numeral
//!   text.
//! * [`random`] — cryptographically random phrase generation from OS
//!   entropy.
//!
//! The modules are intentionally small and focused; none of them hold
//! state beyond the fixed read-only alphabet tables.

pub mod codec;
pub mod numeral;
pub mod phrase;
pub mod random;

mod error;

pub use error::ProquintError;
