//! Presence data ingestion

pub mod csv_source;

pub use csv_source::{parse_presence_csv, CsvPresenceSource};
