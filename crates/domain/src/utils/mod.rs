//! Parsing and serialization helpers shared by configuration and ingestion

pub mod serde;
pub mod time;

pub use time::{parse_clock_time, parse_presence_timestamp, parse_weekday};
