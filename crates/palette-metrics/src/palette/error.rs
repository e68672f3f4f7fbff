//! Error type for hex color parsing.

use thiserror::Error;

/// Error type for parsing hex color strings.
///
/// Returned when a string is not exactly six hex digits after stripping an
/// optional `#`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Wrong number of characters after stripping `#`
    #[error("invalid hex color {input:?}: expected 6 hex digits, found {len} characters")]
    InvalidLength {
        /// The string as given
        input: String,
        /// Characters remaining after the prefix was stripped
        len: usize,
    },
    /// Right length, but not all characters are hex digits
    #[error("invalid hex color {input:?}: {source}")]
    InvalidHex {
        /// The string as given
        input: String,
        /// Decoder error naming the offending character
        #[source]
        source: hex::FromHexError,
    },
}

impl ParseColorError {
    /// The string that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            ParseColorError::InvalidLength { input, .. } => input,
            ParseColorError::InvalidHex { input, .. } => input,
        }
    }
}
