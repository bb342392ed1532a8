//! Parser error types.

use thiserror::Error;

/// A parse error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The token stream was empty.
    #[error("Empty statement")]
    Empty,

    /// The statement does not start with SELECT.
    #[error("Not yet implemented: {keyword} statements are not supported")]
    UnsupportedStatement {
        /// Value of the first token.
        keyword: String,
        /// Position of the first token.
        position: usize,
    },

    /// A required token is missing or out of place.
    #[error("Expected {expected} at position {position}")]
    Syntax {
        /// What the parser was looking for.
        expected: String,
        /// Position of the token found instead, or of the last consumed token
        /// at end of input.
        position: usize,
    },

    /// The token is valid SQL but outside the accepted grammar.
    #[error("Unsupported construct {construct} at position {position}")]
    UnsupportedConstruct {
        /// The offending token value.
        construct: String,
        /// Position of the offending token.
        position: usize,
    },
}

impl ParseError {
    /// Creates a syntax error.
    #[must_use]
    pub fn expected(expected: impl Into<String>, position: usize) -> Self {
        Self::Syntax {
            expected: expected.into(),
            position,
        }
    }

    /// Creates an unsupported construct error.
    #[must_use]
    pub fn unsupported(construct: impl Into<String>, position: usize) -> Self {
        Self::UnsupportedConstruct {
            construct: construct.into(),
            position,
        }
    }

    /// Returns the source position the error refers to, if any.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Empty => None,
            Self::UnsupportedStatement { position, .. }
            | Self::Syntax { position, .. }
            | Self::UnsupportedConstruct { position, .. } => Some(*position),
        }
    }

    /// Returns a short machine-readable name for the error category.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::UnsupportedStatement { .. } => "unsupported_statement",
            Self::Syntax { .. } => "syntax",
            Self::UnsupportedConstruct { .. } => "unsupported_construct",
        }
    }

    /// Returns true for errors caused by SQL outside the supported subset,
    /// as opposed to malformed input.
    #[must_use]
    pub const fn is_unsupported(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedStatement { .. } | Self::UnsupportedConstruct { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_message() {
        let err = ParseError::expected("FROM", 9);
        assert_eq!(err.to_string(), "Expected FROM at position 9");
        assert_eq!(err.position(), Some(9));
        assert_eq!(err.kind(), "syntax");
        assert!(!err.is_unsupported());
    }

    #[test]
    fn test_unsupported_statement_message() {
        let err = ParseError::UnsupportedStatement {
            keyword: "CREATE".into(),
            position: 0,
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Not yet implemented"));
        assert!(msg.contains("not supported"));
        assert!(err.is_unsupported());
    }

    #[test]
    fn test_empty_has_no_position() {
        assert_eq!(ParseError::Empty.position(), None);
    }
}
