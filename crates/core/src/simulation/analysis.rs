//! Driver that evaluates every removal count from zero to the fleet size

use geofleet_domain::{
    AnalysisConfig, PresenceDataset, Result, UnavailabilityReport, UnavailabilityRow,
};
use tracing::{debug, info, info_span, warn};

use super::simulator::FleetReductionSimulator;
use crate::ports::PresenceSource;
use crate::validation::validate_analysis_config;

/// Unavailability analysis over a presence dataset
#[derive(Debug, Clone)]
pub struct UnavailabilityAnalysis {
    config: AnalysisConfig,
}

impl UnavailabilityAnalysis {
    /// Create an analysis with a validated configuration
    ///
    /// # Errors
    /// Returns `GeofleetError::Config` listing every invalid field.
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        validate_analysis_config(&config)?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Evaluate removal counts `0..=fleet_size`.
    ///
    /// An empty dataset yields a single `(0, 0.0)` row.
    pub fn run(&self, dataset: &PresenceDataset) -> UnavailabilityReport {
        let span = info_span!("unavailability_analysis", intervals = dataset.len());
        let _guard = span.enter();

        let simulator = FleetReductionSimulator::new(dataset, &self.config);
        let fleet_size = simulator.fleet_size();

        let rows: Vec<UnavailabilityRow> = (0..=fleet_size)
            .map(|removed_count| {
                let average = simulator.average_unavailable_hours(removed_count);
                debug!(removed_count, average, "evaluated removal count");
                UnavailabilityRow { removed_count, average_unavailable_hours: average }
            })
            .collect();

        let report = UnavailabilityReport {
            fleet_size,
            observed_weeks: simulator.observed_weeks(),
            rows,
        };

        let violations = report.monotonicity_violations();
        if !violations.is_empty() {
            warn!(?violations, "coverage improved after selling a vehicle");
        }
        info!(fleet_size, observed_weeks = report.observed_weeks, "analysis complete");

        report
    }

    /// Load the dataset from `source` and run the analysis on it.
    pub fn run_from(&self, source: &dyn PresenceSource) -> Result<UnavailabilityReport> {
        let dataset = source.load()?;
        debug!(source = source.describe(), intervals = dataset.len(), "loaded presence data");
        Ok(self.run(&dataset))
    }
}
