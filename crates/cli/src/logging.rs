//! Logging setup and error reporting helpers

use geofleet_common::{trace_error, ErrorClassification};
use geofleet_domain::{GeofleetError, LoggingConfig};
use geofleet_infra::InfraError;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber. Logs go to stderr so stdout carries only
/// the report.
///
/// `RUST_LOG` wins over the configured level; each `-v` raises the level
/// one step. Calling this twice is a no-op.
pub fn init(config: &LoggingConfig, verbosity: u8) {
    let directive = match verbosity {
        0 => config.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if config.json {
        registry.with(fmt::layer().json().with_writer(std::io::stderr)).try_init()
    } else {
        registry.with(fmt::layer().with_writer(std::io::stderr).with_target(false)).try_init()
    };

    if result.is_ok() {
        tracing::debug!(level = %config.level, json = config.json, verbosity, "logging initialized");
    }
}

/// Convert a `GeofleetError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &GeofleetError) -> &'static str {
    InfraError(error.clone()).label()
}

/// Log a failed operation at the level its classification calls for.
pub fn log_failure(error: &GeofleetError, operation: &str) {
    trace_error(&InfraError(error.clone()), operation);
}
