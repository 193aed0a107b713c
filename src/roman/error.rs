//! Error types for Roman numeral conversion

use std::fmt;

/// Errors that can occur while converting a numeral string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// A character outside the seven Roman symbols
    InvalidSymbol { found: char, position: usize },
    /// The input string was empty
    EmptyInput,
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidSymbol { found, position } => {
                write!(f, "Invalid symbol '{}' at position {}", found, position)
            }
            ConvertError::EmptyInput => {
                write!(f, "Empty numeral string")
            }
        }
    }
}

impl std::error::Error for ConvertError {}
