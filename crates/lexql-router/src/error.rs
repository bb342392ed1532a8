//! Error types for request handling.

use lexql_core::ParseError;
use thiserror::Error;

/// Errors surfaced by the adapter.
#[derive(Debug, Error)]
pub enum RouterError {
    /// No route matched the request.
    #[error("no route matched: {method} {path}")]
    NotFound { method: String, path: String },

    /// Method not allowed for this route.
    #[error("method not allowed: {method} for {path}")]
    MethodNotAllowed { method: String, path: String },

    /// The request body could not be turned into SQL text.
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// The request body exceeded the configured limit.
    #[error("request body exceeds the {limit} byte limit")]
    BodyTooLarge { limit: usize },

    /// The SQL text failed to parse.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl RouterError {
    /// HTTP status code for this error.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::NotFound { .. } => 404,
            Self::MethodNotAllowed { .. } => 405,
            Self::InvalidBody(_) | Self::Parse(_) => 400,
            Self::BodyTooLarge { .. } => 413,
        }
    }

    /// Short machine-readable category, used in JSON error bodies.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::MethodNotAllowed { .. } => "method_not_allowed",
            Self::InvalidBody(_) => "invalid_body",
            Self::BodyTooLarge { .. } => "body_too_large",
            Self::Parse(e) => e.kind(),
        }
    }

    /// Source position for parse errors.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Parse(e) => e.position(),
            _ => None,
        }
    }
}

/// Result type alias for adapter operations.
pub type Result<T> = std::result::Result<T, RouterError>;
