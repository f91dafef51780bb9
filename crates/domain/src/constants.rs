//! Application constants
//!
//! Defaults for the analysis configuration. Every value here can be
//! overridden through `AnalysisConfig`.

// Business window (UTC wall clock)
pub const DEFAULT_BUSINESS_START_HOUR: u32 = 8;
pub const DEFAULT_BUSINESS_START_MINUTE: u32 = 30;
pub const DEFAULT_BUSINESS_END_HOUR: u32 = 17;
pub const DEFAULT_BUSINESS_END_MINUTE: u32 = 0;

// Sampling granularity inside the business window
pub const DEFAULT_SAMPLE_MINUTES: u32 = 15;

/// Hours charged for a week with no coverage at all (5 days × 8.5 hours)
pub const MAX_HOURS_PER_WEEK: f64 = 42.5;

pub const MINUTES_PER_HOUR: f64 = 60.0;
pub const DAYS_PER_WEEK: u32 = 7;

// Logging
pub const DEFAULT_LOG_LEVEL: &str = "info";
