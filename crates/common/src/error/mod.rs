//! Common error types and utilities for Geofleet crates
//!
//! This module provides the error patterns shared by the ingestion,
//! configuration and reporting layers. Domain errors live in
//! `geofleet-domain`; infrastructure code converts [`CommonError`] into the
//! domain error at the port boundary.
//!
//! # Error Handling Architecture
//!
//! 1. **`CommonError`**: the failure shapes third-party errors collapse into
//!    (serialization, persistence, validation).
//!
//! 2. **`ErrorClassification` trait**: a standard interface for classifying
//!    errors by severity and by a stable label that logging and exit-code
//!    mapping can rely on.
//!
//! 3. **`ErrorSeverity` enum**: a unified severity level.
//!
//! ## ErrorSeverity Levels
//!
//! | Level | Use Case | Examples |
//! |-------|----------|----------|
//! | **Info** | Expected conditions | Optional config file absent |
//! | **Warning** | Degraded but operational | Input file not found |
//! | **Error** | Failure requiring attention | Malformed CSV row, invalid config |
//! | **Critical** | Invariant violated | Internal errors |

use std::fmt;

/// Error shapes produced by the standard conversions below
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommonError {
    /// Serialization or deserialization errors (`format` is `JSON`, `TOML`)
    Serialization { message: String, format: String },

    /// Data persistence errors (file I/O)
    Persistence { message: String },

    /// Validation errors
    Validation { field: String, message: String },
}

impl fmt::Display for CommonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialization { message, format } => {
                write!(f, "Serialization error ({}): {}", format, message)
            }
            Self::Persistence { message } => write!(f, "Persistence error: {}", message),
            Self::Validation { field, message } => {
                write!(f, "Validation error for field '{}': {}", field, message)
            }
        }
    }
}

impl std::error::Error for CommonError {}

impl ErrorClassification for CommonError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Error
    }

    fn is_critical(&self) -> bool {
        false
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Serialization { .. } => "serialization",
            Self::Persistence { .. } => "persistence",
            Self::Validation { .. } => "validation",
        }
    }
}

impl CommonError {
    fn serialization(format: &str, message: String) -> Self {
        Self::Serialization { message, format: format.to_string() }
    }
}

/// Error classification trait for consistent error handling across modules
///
/// Lets the binary pick a log level and an exit code without matching on
/// every concrete error type.
pub trait ErrorClassification {
    /// Get the error severity level
    fn severity(&self) -> ErrorSeverity;

    /// Check if this is a critical error (an internal invariant was broken)
    fn is_critical(&self) -> bool;

    /// Stable, lowercase identifier for metrics and log fields
    fn label(&self) -> &'static str;
}

/// Error severity levels for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// Informational, typically for debugging
    Info,
    /// Warning, should be monitored but not critical
    Warning,
    /// Error, requires attention and action
    Error,
    /// Critical, immediate action required
    Critical,
}

// Standard conversions from common error types
impl From<serde_json::Error> for CommonError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization("JSON", err.to_string())
    }
}

impl From<std::io::Error> for CommonError {
    fn from(err: std::io::Error) -> Self {
        Self::Persistence { message: err.to_string() }
    }
}

impl From<toml::de::Error> for CommonError {
    fn from(err: toml::de::Error) -> Self {
        Self::serialization("TOML", err.to_string())
    }
}

impl From<crate::validation::ValidationError> for CommonError {
    fn from(err: crate::validation::ValidationError) -> Self {
        match err.errors.first() {
            Some(first) if err.errors.len() == 1 => {
                Self::Validation { field: first.field.clone(), message: first.message.clone() }
            }
            _ => Self::Validation { field: "_multiple".to_string(), message: err.to_string() },
        }
    }
}

/// Emit a tracing event for a classified error at the level matching its
/// severity.
///
/// `context` names the operation that failed (e.g. `"load_presence_csv"`).
#[cfg(feature = "observability")]
pub fn trace_error<E>(err: &E, context: &str)
where
    E: ErrorClassification + fmt::Display + ?Sized,
{
    let label = err.label();
    match err.severity() {
        ErrorSeverity::Info => {
            tracing::info!(context, error_type = label, error = %err, "operation failed");
        }
        ErrorSeverity::Warning => {
            tracing::warn!(context, error_type = label, error = %err, "operation failed");
        }
        ErrorSeverity::Error | ErrorSeverity::Critical => {
            tracing::error!(
                context,
                error_type = label,
                critical = err.is_critical(),
                error = %err,
                "operation failed"
            );
        }
    }
}
