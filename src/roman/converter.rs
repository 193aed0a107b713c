//! Roman-to-integer conversion
//!
//! The numeral is scanned right to left (least-significant symbol first),
//! accumulating a running sum. A symbol is subtracted when its weight is
//! strictly below the sum so far and it differs from the previous symbol;
//! otherwise it is added. The previous-symbol marker updates on every step,
//! which keeps repeated symbols (the I run in "III", the X run in "XXIX")
//! from being subtracted more than once.
//!
//! For well-formed numerals this produces the standard value. Malformed but
//! lexable inputs ("IIX", "VX") yield deterministic results from the same
//! rule, with no further meaning attached; they are not rejected.

use crate::roman::error::ConvertError;
use crate::roman::symbol::{lex_symbols, Symbol};

/// Convert a Roman numeral string to its integer value
///
/// Processing pipeline:
/// 1. Reject the empty string.
/// 2. `lex_symbols()` - symbols in source order, or the first invalid character.
/// 3. `accumulate()` - right-to-left running-sum scan.
pub fn roman_to_integer(source: &str) -> Result<u32, ConvertError> {
    if source.is_empty() {
        return Err(ConvertError::EmptyInput);
    }

    let symbols = lex_symbols(source)?;
    Ok(accumulate(&symbols))
}

/// Right-to-left accumulation over an already-lexed symbol sequence
fn accumulate(symbols: &[Symbol]) -> u32 {
    let mut sum: u32 = 0;
    let mut prev: Option<Symbol> = None;

    for &symbol in symbols.iter().rev() {
        let weight = symbol.weight();
        // Subtracting only when the weight is below the running sum keeps the
        // sum from going negative on any input.
        if weight < sum && prev != Some(symbol) {
            sum -= weight;
        } else {
            sum += weight;
        }
        prev = Some(symbol);
    }

    sum
}
