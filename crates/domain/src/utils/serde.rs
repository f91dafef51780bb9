//! Serialization utilities for configuration values
//!
//! Business windows are written as `"08:30"` in config files, which is how
//! operators read them; chrono's default `NaiveTime` encoding would force
//! `"08:30:00"`.

use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serializer};

/// Custom serialization module for `NaiveTime` as `HH:MM`
///
/// # Usage
/// ```rust
/// use chrono::NaiveTime;
/// use geofleet_domain::utils::serde::clock_time;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Serialize, Deserialize)]
/// struct Shift {
///     #[serde(with = "clock_time")]
///     starts: NaiveTime,
/// }
/// ```
pub mod clock_time {
    use super::*;
    use crate::utils::time::parse_clock_time;

    /// Serde serialization result type
    type SerializeResult<S> = Result<<S as Serializer>::Ok, <S as Serializer>::Error>;

    /// Serialize a time as `HH:MM` (seconds are written only when non-zero)
    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> SerializeResult<S>
    where
        S: Serializer,
    {
        let text = if chrono::Timelike::second(time) == 0 {
            time.format("%H:%M").to_string()
        } else {
            time.format("%H:%M:%S").to_string()
        };
        serializer.serialize_str(&text)
    }

    /// Deserialize `HH:MM` or `HH:MM:SS` into a `NaiveTime`
    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_clock_time(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid clock time '{raw}', expected HH:MM"))
        })
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Serialize, Deserialize, PartialEq, Debug)]
    struct Window {
        #[serde(with = "clock_time")]
        start: NaiveTime,
    }

    #[test]
    fn test_clock_time_serializes_without_seconds() {
        let window = Window { start: NaiveTime::from_hms_opt(8, 30, 0).unwrap() };
        assert_eq!(serde_json::to_string(&window).unwrap(), r#"{"start":"08:30"}"#);
    }

    #[test]
    fn test_clock_time_rejects_garbage() {
        let result = serde_json::from_str::<Window>(r#"{"start":"8h30"}"#);
        assert!(result.unwrap_err().to_string().contains("invalid clock time"));
    }
}
