//! Main module for Roman numeral conversion
//!
//! The conversion runs as a two-stage pipeline:
//! 1. Lexing: the input string is tokenized into [`Symbol`] values; anything
//!    outside the seven canonical characters is a
//!    [`ConvertError::InvalidSymbol`].
//! 2. Accumulation: the symbol sequence is scanned right to left into the
//!    integer value, applying the subtractive-notation rule.

pub mod converter;
pub mod error;
pub mod symbol;

pub use converter::roman_to_integer;
pub use error::ConvertError;
pub use symbol::{lex_symbols, Symbol};
