//! Result of a fleet reduction analysis

use serde::{Deserialize, Serialize};

use crate::impl_domain_enum_conversions;

/// Average weekly unavailability after selling `removed_count` vehicles
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnavailabilityRow {
    pub removed_count: usize,
    pub average_unavailable_hours: f64,
}

/// One row per removal count, from 0 up to the fleet size
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UnavailabilityReport {
    pub fleet_size: usize,
    pub observed_weeks: usize,
    pub rows: Vec<UnavailabilityRow>,
}

impl UnavailabilityReport {
    /// Row for a given removal count, if it was evaluated
    pub fn row(&self, removed_count: usize) -> Option<&UnavailabilityRow> {
        self.rows.iter().find(|row| row.removed_count == removed_count)
    }

    /// Removal counts whose average is lower than the previous row's.
    ///
    /// Selling a vehicle should never improve coverage when fleets are
    /// nested; a non-empty result points at input where it does.
    pub fn monotonicity_violations(&self) -> Vec<usize> {
        self.rows
            .windows(2)
            .filter(|pair| pair[1].average_unavailable_hours < pair[0].average_unavailable_hours)
            .map(|pair| pair[1].removed_count)
            .collect()
    }

    pub fn max_average(&self) -> Option<f64> {
        self.rows.iter().map(|row| row.average_unavailable_hours).reduce(f64::max)
    }
}

/// Output format for rendered reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl_domain_enum_conversions!(ReportFormat {
    Text => "text" | "table",
    Json => "json",
});

#[cfg(test)]
mod tests {
    use super::*;

    fn report(averages: &[f64]) -> UnavailabilityReport {
        UnavailabilityReport {
            fleet_size: averages.len().saturating_sub(1),
            observed_weeks: 1,
            rows: averages
                .iter()
                .enumerate()
                .map(|(n, avg)| UnavailabilityRow {
                    removed_count: n,
                    average_unavailable_hours: *avg,
                })
                .collect(),
        }
    }

    #[test]
    fn test_monotonic_report_has_no_violations() {
        let report = report(&[0.0, 0.0, 12.25, 42.5]);
        assert!(report.monotonicity_violations().is_empty());
        assert_eq!(report.max_average(), Some(42.5));
    }

    #[test]
    fn test_violations_name_the_offending_rows() {
        let report = report(&[1.0, 3.0, 2.0, 42.5, 40.0]);
        assert_eq!(report.monotonicity_violations(), vec![2, 4]);
    }

    #[test]
    fn test_row_lookup() {
        let report = report(&[0.0, 5.5]);
        assert_eq!(report.row(1).map(|r| r.average_unavailable_hours), Some(5.5));
        assert!(report.row(2).is_none());
        assert_eq!(UnavailabilityReport::default().max_average(), None);
    }

    #[test]
    fn test_report_format_parse() {
        assert_eq!("TABLE".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("json".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!("xml".parse::<ReportFormat>().is_err());
    }
}
