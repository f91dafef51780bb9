//! Modular common utilities shared across Geofleet crates.
//!
//! # Feature Tiers
//!
//! Enable cargo features to opt into the tiers you need:
//! - `foundation`: errors and validation
//! - `observability`: tracing helpers for reporting classified errors

#![forbid(unsafe_code)]
#![warn(rust_2018_idioms)]
#![warn(clippy::all, clippy::perf, clippy::complexity, clippy::suspicious)]

// Foundation tier
// -----------------------------------------------------------------
#[cfg(feature = "foundation")]
pub mod error;
#[cfg(feature = "foundation")]
pub mod validation;

// Re-export commonly used types and traits for convenience
// ------------------------
#[cfg(feature = "foundation")]
pub use error::{CommonError, ErrorClassification, ErrorSeverity};
#[cfg(feature = "observability")]
pub use error::trace_error;
#[cfg(feature = "foundation")]
pub use validation::{
    CollectionValidator, FieldError, FieldValidator, RangeValidator, ValidationError,
    ValidationResult, Validator,
};
