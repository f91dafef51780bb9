//! Configuration validation
//!
//! Every invalid field is collected before the analysis starts so a bad
//! config file is reported in one pass.

use geofleet_common::validation::{CollectionValidator, RangeValidator, Validator};
use geofleet_domain::{AnalysisConfig, Config, GeofleetError, LoggingConfig, Result};
use tracing::warn;

/// Longest sampling step that still yields one sample per day
const MAX_SAMPLE_MINUTES: u32 = 24 * 60;

/// Validate the full configuration
///
/// # Errors
/// Returns `GeofleetError::Config` naming each invalid field.
pub fn validate_config(config: &Config) -> Result<()> {
    let mut validator = Validator::new();
    validator.validate_nested("analysis", |v| check_analysis(v, &config.analysis));
    validator.validate_nested("logging", |v| check_logging(v, &config.logging));
    finish(validator, &config.analysis)
}

/// Validate only the analysis section
///
/// # Errors
/// Returns `GeofleetError::Config` naming each invalid field.
pub fn validate_analysis_config(config: &AnalysisConfig) -> Result<()> {
    let mut validator = Validator::new();
    validator.validate_nested("analysis", |v| check_analysis(v, config));
    finish(validator, config)
}

fn check_analysis(v: &mut Validator, config: &AnalysisConfig) {
    v.validate_ordered("business_window", config.business_start, config.business_end);
    v.validate_field(
        "sample_minutes",
        &config.sample_minutes,
        &RangeValidator::new(1, MAX_SAMPLE_MINUTES),
    );
    v.validate_field(
        "business_days",
        &config.business_days,
        &CollectionValidator::new().min_size(1).unique(),
    );
    v.validate_non_negative_finite("max_weekly_hours", config.max_weekly_hours);
}

fn check_logging(v: &mut Validator, config: &LoggingConfig) {
    if config.level.trim().is_empty() {
        v.add_error("level", "must not be empty");
    }
}

fn finish(validator: Validator, analysis: &AnalysisConfig) -> Result<()> {
    validator.finalize().map_err(|err| GeofleetError::Config(err.to_string()))?;

    let derived = analysis.business_hours_per_week();
    if (derived - analysis.max_weekly_hours).abs() > f64::EPSILON {
        warn!(
            max_weekly_hours = analysis.max_weekly_hours,
            business_hours_per_week = derived,
            "max_weekly_hours differs from the sampled business week; averages may exceed it"
        );
    }
    Ok(())
}
