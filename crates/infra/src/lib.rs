//! # Geofleet Infrastructure
//!
//! Infrastructure implementations of core ports.
//!
//! This crate contains:
//! - The CSV presence source
//! - Configuration loading (files and environment)
//! - Report rendering
//! - Error conversions and classification
//!
//! ## Architecture
//! - Implements traits defined in `geofleet-core`
//! - Contains all "impure" code (file system, environment)

pub mod config;
pub mod errors;
pub mod ingest;
pub mod report;

// Re-export commonly used items
pub use errors::InfraError;
pub use ingest::{parse_presence_csv, CsvPresenceSource};
pub use report::{render, render_json, render_text};
