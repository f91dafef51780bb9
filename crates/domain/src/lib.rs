//! # Geofleet Domain
//!
//! Business domain types and models for fleet coverage analysis.
//!
//! This crate contains:
//! - Presence intervals, datasets and week keys
//! - Domain error types and Result definitions
//! - Analysis configuration with documented defaults
//! - Report types produced by the analysis
//!
//! ## Architecture
//! - No dependencies on other Geofleet crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
