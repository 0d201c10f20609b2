// ============================================================================
// Conversion Errors
// Error types for text-to-words conversion
// ============================================================================

use std::fmt;

/// Errors that can occur while converting a value to Persian words.
///
/// Every numeric entry point is total; only textual input can fail.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConvertError {
    /// Input text is not an integer, a decimal, or a big integer
    Parse {
        /// The original, unparsed input
        input: String,
    },
}

impl ConvertError {
    /// Create a parse error for the given input
    pub fn parse(input: impl Into<String>) -> Self {
        ConvertError::Parse {
            input: input.into(),
        }
    }

    /// The original text that failed to parse
    pub fn input(&self) -> &str {
        match self {
            ConvertError::Parse { input } => input,
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::Parse { input } => {
                write!(f, "cannot parse \"{}\" as a number", input)
            },
        }
    }
}

impl std::error::Error for ConvertError {}

/// Result type alias for conversions
pub type ConvertResult<T> = Result<T, ConvertError>;
