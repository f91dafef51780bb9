//! # Geofleet Core
//!
//! Pure analysis logic - no file system or terminal access.
//!
//! This crate contains:
//! - The weekly coverage estimator
//! - The fleet reduction simulator and the driver over every removal count
//! - Port interfaces for presence data
//! - Configuration validation
//!
//! ## Architecture Principles
//! - Depends only on `geofleet-common` and `geofleet-domain`
//! - Input arrives through the `PresenceSource` port
//! - Deterministic: the same dataset and config always give the same report

pub mod coverage;
pub mod ports;
pub mod simulation;
pub mod validation;

pub use coverage::{CoverageSpans, WeeklyCoverageEstimator};
pub use ports::PresenceSource;
pub use simulation::{
    removal_order, FleetReductionSimulator, ReductionOutcome, UnavailabilityAnalysis,
    WeekPartition,
};
pub use validation::{validate_analysis_config, validate_config};
