//! Configuration management

use chrono::{NaiveTime, TimeDelta, Weekday};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_BUSINESS_END_HOUR, DEFAULT_BUSINESS_END_MINUTE, DEFAULT_BUSINESS_START_HOUR,
    DEFAULT_BUSINESS_START_MINUTE, DEFAULT_LOG_LEVEL, DEFAULT_SAMPLE_MINUTES, MAX_HOURS_PER_WEEK,
    MINUTES_PER_HOUR,
};
use crate::types::RemovalPolicy;
use crate::utils::serde::clock_time;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub logging: LoggingConfig,
}

/// Parameters of the coverage analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// First sampled instant of each business day (UTC)
    #[serde(with = "clock_time")]
    pub business_start: NaiveTime,
    /// End of the business window, exclusive
    #[serde(with = "clock_time")]
    pub business_end: NaiveTime,
    pub sample_minutes: u32,
    /// Hours charged for a week that vanishes once its vehicles are sold
    pub max_weekly_hours: f64,
    pub business_days: Vec<Weekday>,
    pub week_start: Weekday,
    /// Count weeks with a different first weekday for the average's divisor
    pub averaging_week_start: Option<Weekday>,
    pub removal_policy: RemovalPolicy,
}

impl AnalysisConfig {
    pub fn sample_step(&self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.sample_minutes))
    }

    /// Hours accrued by one uncovered sample
    pub fn sample_hours(&self) -> f64 {
        f64::from(self.sample_minutes) / MINUTES_PER_HOUR
    }

    /// Sample instants in `[business_start, business_end)` for one day
    pub fn samples_per_day(&self) -> u32 {
        let window = (self.business_end - self.business_start).num_seconds();
        let step = i64::from(self.sample_minutes) * 60;
        if window <= 0 || step == 0 {
            return 0;
        }
        u32::try_from((window + step - 1) / step).unwrap_or(u32::MAX)
    }

    /// Business hours sampled in one full week (42.5 with the defaults)
    pub fn business_hours_per_week(&self) -> f64 {
        let samples = f64::from(self.samples_per_day()) * self.business_days.len() as f64;
        samples * self.sample_hours()
    }

    pub fn is_business_day(&self, day: Weekday) -> bool {
        self.business_days.contains(&day)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            business_start: NaiveTime::from_hms_opt(
                DEFAULT_BUSINESS_START_HOUR,
                DEFAULT_BUSINESS_START_MINUTE,
                0,
            )
            .unwrap_or(NaiveTime::MIN),
            business_end: NaiveTime::from_hms_opt(
                DEFAULT_BUSINESS_END_HOUR,
                DEFAULT_BUSINESS_END_MINUTE,
                0,
            )
            .unwrap_or(NaiveTime::MIN),
            sample_minutes: DEFAULT_SAMPLE_MINUTES,
            max_weekly_hours: MAX_HOURS_PER_WEEK,
            business_days: vec![Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri],
            week_start: Weekday::Mon,
            averaging_week_start: None,
            removal_policy: RemovalPolicy::default(),
        }
    }
}

/// Log output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `info` or `geofleet_core=debug`
    pub level: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: DEFAULT_LOG_LEVEL.to_string(), json: false }
    }
}
