//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Geofleet
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum GeofleetError {
    /// An interval whose exit precedes its enter time
    #[error("Malformed interval: {0}")]
    MalformedInterval(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for Geofleet operations
pub type Result<T> = std::result::Result<T, GeofleetError>;

impl GeofleetError {
    /// Prefix the message with `context` (a line number, a path), keeping
    /// the variant.
    #[must_use]
    pub fn with_context(self, context: &str) -> Self {
        let wrap = |message: String| format!("{context}: {message}");
        match self {
            Self::MalformedInterval(m) => Self::MalformedInterval(wrap(m)),
            Self::Config(m) => Self::Config(wrap(m)),
            Self::InvalidInput(m) => Self::InvalidInput(wrap(m)),
            Self::Io(m) => Self::Io(wrap(m)),
            Self::NotFound(m) => Self::NotFound(wrap(m)),
            Self::Internal(m) => Self::Internal(wrap(m)),
        }
    }
}
