//! Symbol definitions for Roman numerals
//!
//! The seven canonical symbols are defined using the logos derive macro.
//! A `Symbol` can only be one of the seven characters, so the weight lookup
//! is total by construction: there is no fall-through case to leave undefined.

use crate::roman::error::ConvertError;
use logos::Logos;

/// The seven canonical Roman numeral symbols
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    #[token("I")]
    I,
    #[token("V")]
    V,
    #[token("X")]
    X,
    #[token("L")]
    L,
    #[token("C")]
    C,
    #[token("D")]
    D,
    #[token("M")]
    M,
}

impl Symbol {
    /// Fixed integer weight of this symbol
    pub fn weight(&self) -> u32 {
        match self {
            Symbol::I => 1,
            Symbol::V => 5,
            Symbol::X => 10,
            Symbol::L => 50,
            Symbol::C => 100,
            Symbol::D => 500,
            Symbol::M => 1000,
        }
    }

    /// Character-level lookup; `None` for anything outside the seven symbols
    pub fn from_char(c: char) -> Option<Symbol> {
        match c {
            'I' => Some(Symbol::I),
            'V' => Some(Symbol::V),
            'X' => Some(Symbol::X),
            'L' => Some(Symbol::L),
            'C' => Some(Symbol::C),
            'D' => Some(Symbol::D),
            'M' => Some(Symbol::M),
            _ => None,
        }
    }
}

/// Tokenize a numeral string into symbols
///
/// Symbols are collected in source order. The first character the lexer cannot
/// type becomes an [`ConvertError::InvalidSymbol`] carrying the character and
/// its byte position, rather than being skipped.
pub fn lex_symbols(source: &str) -> Result<Vec<Symbol>, ConvertError> {
    let mut lexer = Symbol::lexer(source);
    let mut symbols = Vec::new();

    while let Some(result) = lexer.next() {
        match result {
            Ok(symbol) => symbols.push(symbol),
            Err(()) => {
                let position = lexer.span().start;
                let found = source[position..].chars().next().unwrap_or('\u{FFFD}');
                return Err(ConvertError::InvalidSymbol { found, position });
            }
        }
    }

    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights() {
        assert_eq!(Symbol::I.weight(), 1);
        assert_eq!(Symbol::V.weight(), 5);
        assert_eq!(Symbol::X.weight(), 10);
        assert_eq!(Symbol::L.weight(), 50);
        assert_eq!(Symbol::C.weight(), 100);
        assert_eq!(Symbol::D.weight(), 500);
        assert_eq!(Symbol::M.weight(), 1000);
    }

    #[test]
    fn test_weight_is_stable() {
        // Lookup for a fixed symbol always returns the same weight
        assert_eq!(Symbol::X.weight(), Symbol::X.weight());
    }

    #[test]
    fn test_from_char() {
        assert_eq!(Symbol::from_char('M'), Some(Symbol::M));
        assert_eq!(Symbol::from_char('A'), None);
        assert_eq!(Symbol::from_char('i'), None);
    }

    #[test]
    fn test_lex_valid_numeral() {
        let symbols = lex_symbols("MCMXCIV").unwrap();
        assert_eq!(
            symbols,
            vec![
                Symbol::M,
                Symbol::C,
                Symbol::M,
                Symbol::X,
                Symbol::C,
                Symbol::I,
                Symbol::V,
            ]
        );
    }

    #[test]
    fn test_lex_empty_input() {
        assert_eq!(lex_symbols(""), Ok(vec![]));
    }

    #[test]
    fn test_lex_invalid_character() {
        assert_eq!(
            lex_symbols("XAX"),
            Err(ConvertError::InvalidSymbol {
                found: 'A',
                position: 1
            })
        );
    }

    #[test]
    fn test_lex_reports_first_invalid_character() {
        assert_eq!(
            lex_symbols("IVB2"),
            Err(ConvertError::InvalidSymbol {
                found: 'B',
                position: 2
            })
        );
    }
}
