//! Error handling.
//!
//! Parse failures carry a reason tag but no position information. Failures
//! are never retried or recovered internally; they propagate unchanged to
//! the caller, which owns all user-facing messaging.

use thiserror::Error;

/// The reasons a document can fail to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token stream did not match the grammar at this point.
    #[error("unexpected {found} where {expected} was expected")]
    UnexpectedToken {
        /// What the grammar required here
        expected: &'static str,
        /// Display text of the offending token
        found: String,
    },

    /// A string ran to the end of input without a closing quote.
    #[error("unterminated string")]
    UnterminatedString,

    /// A backslash inside a string that does not begin a recognized escape
    /// form.
    #[error("malformed escape sequence")]
    MalformedEscape,

    /// A numeric literal that does not form a single valid number, such as
    /// one with leading zeros.
    #[error("malformed number literal '{literal}'")]
    MalformedNumber {
        /// The offending literal text
        literal: String,
    },

    /// Extra tokens after the top-level object.
    #[error("trailing {found} after the top-level object")]
    TrailingContent {
        /// Display text of the first extra token
        found: String,
    },
}

impl ParseError {
    /// The variant name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            ParseError::UnexpectedToken { .. } => "UnexpectedToken",
            ParseError::UnterminatedString => "UnterminatedString",
            ParseError::MalformedEscape => "MalformedEscape",
            ParseError::MalformedNumber { .. } => "MalformedNumber",
            ParseError::TrailingContent { .. } => "TrailingContent",
        }
    }
}

/// Result type for parse operations.
pub type ParseResult<T> = Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ParseError::UnexpectedToken {
            expected: "value",
            found: "']'".to_string(),
        };
        assert_eq!(err.to_string(), "unexpected ']' where value was expected");
        assert_eq!(ParseError::UnterminatedString.to_string(), "unterminated string");
    }

    #[test]
    fn test_names() {
        assert_eq!(ParseError::MalformedEscape.name(), "MalformedEscape");
        assert_eq!(
            ParseError::MalformedNumber {
                literal: "012".to_string()
            }
            .name(),
            "MalformedNumber"
        );
    }
}
