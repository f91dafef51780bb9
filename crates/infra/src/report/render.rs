//! Text and JSON renderings of an `UnavailabilityReport`

use std::fmt::Write;

use geofleet_domain::{ReportFormat, Result, UnavailabilityReport};

use crate::errors::InfraError;

const TEXT_HEADER: &str = "Number of vehicles sold\t\tNumber of hours per week during which no vehicles are available (inside the geofence)";

/// Render `report` in the requested format
///
/// # Errors
/// Returns `GeofleetError::InvalidInput` if JSON serialization fails.
pub fn render(report: &UnavailabilityReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(report)),
        ReportFormat::Json => render_json(report),
    }
}

/// Two tab-separated columns: vehicles sold, average unavailable hours
pub fn render_text(report: &UnavailabilityReport) -> String {
    let mut out = String::with_capacity(TEXT_HEADER.len() + report.rows.len() * 16);
    out.push_str(TEXT_HEADER);
    out.push('\n');
    for row in &report.rows {
        // Writing to a String cannot fail
        let _ = writeln!(
            out,
            "{}\t\t{}",
            row.removed_count,
            format_hours(row.average_unavailable_hours)
        );
    }
    out
}

/// Pretty-printed JSON of the whole report
///
/// # Errors
/// Returns `GeofleetError::InvalidInput` if serialization fails (for
/// example on a non-finite average).
pub fn render_json(report: &UnavailabilityReport) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report).map_err(InfraError::from)?;
    json.push('\n');
    Ok(json)
}

/// At most four fractional digits, trailing zeros trimmed (`42.5`, `17`,
/// `12.3333`)
pub fn format_hours(hours: f64) -> String {
    let fixed = format!("{hours:.4}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}
