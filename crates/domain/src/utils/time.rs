//! Textual time parsing for configuration values and input records

use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc, Weekday};

/// Format used by presence exports: `2024-03-04 08:15:00Z`
pub const PRESENCE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%SZ";

/// Parse a wall-clock time written as `HH:MM` or `HH:MM:SS`.
pub fn parse_clock_time(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

/// Parse a weekday name (`mon`, `Monday`, `SUN`, ...).
pub fn parse_weekday(value: &str) -> Option<Weekday> {
    value.trim().parse::<Weekday>().ok()
}

/// Parse a presence timestamp as UTC.
///
/// Accepts the export format (`YYYY-MM-DD HH:MM:SSZ`) and RFC 3339.
pub fn parse_presence_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, PRESENCE_TIMESTAMP_FORMAT) {
        return Some(naive.and_utc());
    }
    DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.with_timezone(&Utc))
}
