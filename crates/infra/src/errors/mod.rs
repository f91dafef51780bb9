//! Infrastructure error handling
//!
//! `InfraError` wraps the domain error so conversions from third-party
//! error types stay in this crate, and classifies it for logging and exit
//! codes.

mod conversions;

pub use conversions::InfraError;
