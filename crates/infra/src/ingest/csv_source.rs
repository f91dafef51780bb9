//! CSV-backed presence source
//!
//! Reads geofence exports of the form
//!
//! ```text
//! vehicle_id,enter_time,exit_time
//! 17,2024-03-04 08:12:09Z,2024-03-04 11:40:00Z
//! ```
//!
//! The first line is a header and is skipped. Timestamps are UTC, either in
//! the export format above or RFC 3339.

use std::path::{Path, PathBuf};

use geofleet_core::PresenceSource;
use geofleet_domain::utils::parse_presence_timestamp;
use geofleet_domain::{GeofleetError, PresenceDataset, PresenceInterval, Result, VehicleId};
use tracing::debug;

use crate::errors::InfraError;

const EXPECTED_COLUMNS: usize = 3;

/// Where the CSV text comes from
#[derive(Debug, Clone)]
enum Origin {
    File(PathBuf),
    Text { name: String, contents: String },
}

/// `PresenceSource` over a CSV file or an in-memory CSV string
#[derive(Debug, Clone)]
pub struct CsvPresenceSource {
    origin: Origin,
}

impl CsvPresenceSource {
    /// Source that reads `path` on every load
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self { origin: Origin::File(path.as_ref().to_path_buf()) }
    }

    /// Source over already-read text; `name` appears in logs and errors
    pub fn from_text(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self { origin: Origin::Text { name: name.into(), contents: contents.into() } }
    }
}

impl PresenceSource for CsvPresenceSource {
    fn load(&self) -> Result<PresenceDataset> {
        let dataset = match &self.origin {
            Origin::File(path) => {
                let contents = std::fs::read_to_string(path).map_err(|e| {
                    GeofleetError::from(InfraError::from(e)).with_context(&path.display().to_string())
                })?;
                parse_presence_csv(&contents)?
            }
            Origin::Text { contents, .. } => parse_presence_csv(contents)?,
        };

        debug!(
            source = %self.describe(),
            intervals = dataset.len(),
            vehicles = dataset.fleet_size(),
            "loaded presence csv"
        );
        Ok(dataset)
    }

    fn describe(&self) -> String {
        match &self.origin {
            Origin::File(path) => path.display().to_string(),
            Origin::Text { name, .. } => name.clone(),
        }
    }
}

/// Parse CSV text into a dataset
///
/// # Errors
/// Fails on the first bad row with a message naming its 1-based line:
/// `GeofleetError::InvalidInput` for a wrong column count or an unparsable
/// field, `GeofleetError::MalformedInterval` when exit precedes enter.
pub fn parse_presence_csv(contents: &str) -> Result<PresenceDataset> {
    let intervals = contents
        .lines()
        .enumerate()
        .skip(1)
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_record(index + 1, line))
        .collect::<Result<Vec<_>>>()?;

    Ok(PresenceDataset::new(intervals))
}

fn parse_record(line_no: usize, line: &str) -> Result<PresenceInterval> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() != EXPECTED_COLUMNS {
        return Err(GeofleetError::InvalidInput(format!(
            "line {line_no}: expected {EXPECTED_COLUMNS} columns, found {}",
            fields.len()
        )));
    }

    let vehicle_id: VehicleId = fields[0]
        .parse()
        .map_err(|e: GeofleetError| e.with_context(&format!("line {line_no}")))?;
    let enter = parse_timestamp(line_no, "enter_time", fields[1])?;
    let exit = parse_timestamp(line_no, "exit_time", fields[2])?;

    PresenceInterval::new(vehicle_id, enter, exit)
        .map_err(|e| e.with_context(&format!("line {line_no}")))
}

fn parse_timestamp(line_no: usize, column: &str, raw: &str) -> Result<chrono::DateTime<chrono::Utc>> {
    parse_presence_timestamp(raw).ok_or_else(|| {
        GeofleetError::InvalidInput(format!("line {line_no}: invalid {column} '{raw}'"))
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    const HEADER: &str = "VehicleId,EnterTime,ExitTime";

    #[test]
    fn parses_rows_and_skips_header_and_blank_lines() {
        let text = format!(
            "{HEADER}\n2,2024-03-05 09:00:00Z,2024-03-05 10:00:00Z\n\n 1 , 2024-03-04 08:00:00Z , 2024-03-04T17:00:00Z \n"
        );
        let dataset = parse_presence_csv(&text).unwrap();

        assert_eq!(dataset.len(), 2);
        // Time ordered: vehicle 1 entered first
        assert_eq!(dataset.fleet(), &[VehicleId(1), VehicleId(2)]);
    }

    #[test]
    fn header_only_yields_empty_dataset() {
        assert!(parse_presence_csv(HEADER).unwrap().is_empty());
        assert!(parse_presence_csv("").unwrap().is_empty());
    }

    #[test]
    fn wrong_column_count_names_the_line() {
        let text = format!("{HEADER}\n1,2024-03-04 08:00:00Z,2024-03-04 09:00:00Z\n2,2024-03-04 08:00:00Z\n");
        let err = parse_presence_csv(&text).unwrap_err();
        assert_eq!(
            err,
            GeofleetError::InvalidInput("line 3: expected 3 columns, found 2".to_string())
        );
    }

    #[test]
    fn bad_id_and_timestamp_are_invalid_input() {
        let bad_id = format!("{HEADER}\nabc,2024-03-04 08:00:00Z,2024-03-04 09:00:00Z");
        let err = parse_presence_csv(&bad_id).unwrap_err();
        assert!(matches!(err, GeofleetError::InvalidInput(ref m) if m.starts_with("line 2")));

        let bad_time = format!("{HEADER}\n1,yesterday,2024-03-04 09:00:00Z");
        let err = parse_presence_csv(&bad_time).unwrap_err();
        assert_eq!(
            err,
            GeofleetError::InvalidInput("line 2: invalid enter_time 'yesterday'".to_string())
        );
    }

    #[test]
    fn exit_before_enter_is_malformed() {
        let text = format!("{HEADER}\n1,2024-03-04 09:00:00Z,2024-03-04 08:00:00Z");
        let err = parse_presence_csv(&text).unwrap_err();
        assert!(matches!(err, GeofleetError::MalformedInterval(ref m) if m.starts_with("line 2")));
    }

    #[test]
    fn file_source_reads_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{HEADER}").unwrap();
        writeln!(file, "7,2024-03-04 08:00:00Z,2024-03-04 18:00:00Z").unwrap();

        let source = CsvPresenceSource::from_path(file.path());
        let dataset = source.load().unwrap();
        assert_eq!(dataset.fleet(), &[VehicleId(7)]);
        assert_eq!(source.describe(), file.path().display().to_string());
    }

    #[test]
    fn missing_file_is_not_found() {
        let source = CsvPresenceSource::from_path("/nonexistent/presence.csv");
        let err = source.load().unwrap_err();
        assert!(matches!(err, GeofleetError::NotFound(ref m) if m.contains("/nonexistent/presence.csv")));
    }
}
