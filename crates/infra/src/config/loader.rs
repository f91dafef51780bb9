//! Configuration loader
//!
//! Loads application configuration from files and environment variables.
//!
//! ## Loading Strategy
//! 1. Reads the explicit config file, or the first file found in the standard locations
//! 2. Falls back to built-in defaults when no file exists
//! 3. Applies environment variable overrides on top
//! 4. Validates the merged result
//!
//! ## Environment Variables
//! - `GEOFLEET_BUSINESS_START`: Start of the business window (`HH:MM`)
//! - `GEOFLEET_BUSINESS_END`: End of the business window (`HH:MM`)
//! - `GEOFLEET_SAMPLE_MINUTES`: Sampling step in minutes
//! - `GEOFLEET_MAX_WEEKLY_HOURS`: Hours charged for a vanished week
//! - `GEOFLEET_WEEK_START`: First weekday of a week (`mon`, `sunday`, ...)
//! - `GEOFLEET_REMOVAL_POLICY`: Sell order (`first_appearance`,
//!   `ascending_id`, `descending_id`, `explicit:3,1,2`)
//! - `GEOFLEET_LOG_LEVEL`: `tracing` filter directive
//! - `GEOFLEET_LOG_JSON`: Emit JSON logs (`1`/`0`, `true`/`false`,
//!   `yes`/`no`, `on`/`off`)
//!
//! ## File Locations
//! The loader searches the following paths (in order):
//! 1. `./geofleet.toml`, `./geofleet.json` (current working directory)
//! 2. `./config.toml`, `./config.json` (current working directory)
//! 3. The same names next to the executable

use std::path::{Path, PathBuf};
use std::str::FromStr;

use geofleet_core::validate_config;
use geofleet_domain::utils::{parse_clock_time, parse_weekday};
use geofleet_domain::{Config, GeofleetError, RemovalPolicy, Result};

const CONFIG_FILE_NAMES: [&str; 4] = ["geofleet.toml", "geofleet.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// Searches the standard locations for a config file, falls back to defaults
/// when none exists, then applies environment overrides and validates.
///
/// # Errors
/// Returns `GeofleetError::Config` if a found file is invalid, an
/// environment override cannot be parsed, or validation fails.
pub fn load() -> Result<Config> {
    load_from(None)
}

/// Load configuration from `path` when given, otherwise as [`load`] does.
///
/// # Errors
/// Returns `GeofleetError::Config` if the explicit file is missing or
/// invalid, an override cannot be parsed, or validation fails.
pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let config = load_unvalidated(path)?;
    validate_config(&config)?;
    Ok(config)
}

/// Load the file (or defaults) and apply environment overrides without
/// validating.
///
/// For callers that layer further overrides on top and validate once at the
/// end.
///
/// # Errors
/// Returns `GeofleetError::Config` if the explicit file is missing or
/// invalid, or an override cannot be parsed.
pub fn load_unvalidated(path: Option<PathBuf>) -> Result<Config> {
    let mut config = match path {
        Some(path) => load_from_file(Some(path))?,
        None => match find_config_file() {
            Some(found) => load_from_file(Some(found))?,
            None => {
                tracing::debug!("No config file found, using defaults");
                Config::default()
            }
        },
    };

    apply_env_overrides(&mut config)?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, searches multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Arguments
/// * `path` - Optional path to config file. If `None`, uses
///   [`find_config_file`].
///
/// # Errors
/// Returns `GeofleetError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(GeofleetError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => find_config_file().ok_or_else(|| {
            GeofleetError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| GeofleetError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`). Missing
/// sections and fields keep their defaults.
///
/// # Errors
/// Returns `GeofleetError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| GeofleetError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| GeofleetError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(GeofleetError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Search multiple paths for configuration files
///
/// Searches the current working directory first, then the directory of the
/// running executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn find_config_file() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(CONFIG_FILE_NAMES.iter().map(|name| cwd.join(name)));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(CONFIG_FILE_NAMES.iter().map(|name| exe_dir.join(name)));
        }
    }

    candidates.into_iter().find(|path| path.is_file())
}

/// Apply `GEOFLEET_*` environment variables on top of `config`
///
/// Unset or blank variables leave the current value untouched.
///
/// # Errors
/// Returns `GeofleetError::Config` naming the variable that failed to parse.
pub fn apply_env_overrides(config: &mut Config) -> Result<()> {
    let analysis = &mut config.analysis;

    if let Some(time) = env_parse("GEOFLEET_BUSINESS_START", parse_clock_time)? {
        analysis.business_start = time;
    }
    if let Some(time) = env_parse("GEOFLEET_BUSINESS_END", parse_clock_time)? {
        analysis.business_end = time;
    }
    if let Some(minutes) = env_parse("GEOFLEET_SAMPLE_MINUTES", |s| s.parse::<u32>().ok())? {
        analysis.sample_minutes = minutes;
    }
    if let Some(hours) = env_parse("GEOFLEET_MAX_WEEKLY_HOURS", |s| s.parse::<f64>().ok())? {
        analysis.max_weekly_hours = hours;
    }
    if let Some(day) = env_parse("GEOFLEET_WEEK_START", parse_weekday)? {
        analysis.week_start = day;
    }
    if let Some(policy) = env_parse("GEOFLEET_REMOVAL_POLICY", |s| RemovalPolicy::from_str(s).ok())? {
        analysis.removal_policy = policy;
    }

    if let Some(level) = env_var("GEOFLEET_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Some(json) = env_parse("GEOFLEET_LOG_JSON", parse_bool)? {
        config.logging.json = json;
    }

    Ok(())
}

/// Get a non-blank environment variable
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Parse an optional environment variable with `parse`
///
/// # Errors
/// Returns `GeofleetError::Config` if the variable is set but `parse`
/// rejects it.
fn env_parse<T>(key: &str, parse: impl Fn(&str) -> Option<T>) -> Result<Option<T>> {
    match env_var(key) {
        None => Ok(None),
        Some(raw) => parse(&raw)
            .map(Some)
            .ok_or_else(|| GeofleetError::Config(format!("Invalid value for {}: {}", key, raw))),
    }
}

/// Parse a boolean flag
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
