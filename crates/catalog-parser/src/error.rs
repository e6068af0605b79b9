//! Parser error types

use thiserror::Error;

/// Parser error
///
/// The token parser itself is total; these errors only come from the strict
/// entry points (`str::parse::<RangeToken>()`).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Range token with a non-numeric side
    #[error("Invalid range token '{token}': {message}")]
    InvalidRangeToken { token: String, message: String },

    /// Range token whose min exceeds its max
    #[error("Inverted range token '{0}'")]
    InvertedRange(String),
}

/// Result type for parser operations
pub type Result<T> = std::result::Result<T, ParseError>;
