//! # romanum
//!
//! A converter for Roman numeral strings.
//!
//! The crate turns a numeral such as `"MCMXCIV"` into its integer value. The
//! input is first lexed into the seven canonical symbols, so any other
//! character is reported as an error instead of producing an undefined value.

pub mod roman;

pub use roman::{roman_to_integer, ConvertError, Symbol};
