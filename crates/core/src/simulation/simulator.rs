//! Fleet reduction simulator
//!
//! Evaluates "what if the first `n` vehicles of the sell order were gone"
//! against an immutable dataset. Removal is an exclusion set over vehicle
//! ids; the dataset and its week partition are shared by every evaluation.

use std::collections::HashSet;

use geofleet_domain::{AnalysisConfig, PresenceDataset, PresenceInterval, VehicleId};
use serde::Serialize;
use tracing::debug;

use super::partition::{count_weeks, WeekPartition};
use super::removal::removal_order;
use crate::coverage::WeeklyCoverageEstimator;

/// Breakdown of one removal count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReductionOutcome {
    pub removed: Vec<VehicleId>,
    /// Weeks that still have at least one interval after removal
    pub remaining_weeks: usize,
    /// Weeks charged at `max_weekly_hours` because every interval was removed
    pub backfilled_weeks: usize,
    pub total_unavailable_hours: f64,
    pub average_unavailable_hours: f64,
}

/// Simulates selling vehicles from one dataset
#[derive(Debug)]
pub struct FleetReductionSimulator<'a> {
    config: &'a AnalysisConfig,
    partition: WeekPartition<'a>,
    order: Vec<VehicleId>,
    averaging_weeks: usize,
}

impl<'a> FleetReductionSimulator<'a> {
    /// Prepare the sell order and week partition once for `dataset`.
    pub fn new(dataset: &'a PresenceDataset, config: &'a AnalysisConfig) -> Self {
        let partition = WeekPartition::new(dataset, config.week_start);
        let averaging_weeks = match config.averaging_week_start {
            Some(day) if day != config.week_start => count_weeks(dataset, day),
            _ => partition.week_count(),
        };
        let order = removal_order(dataset, &config.removal_policy);

        debug!(
            fleet_size = order.len(),
            observed_weeks = partition.week_count(),
            averaging_weeks,
            policy = %config.removal_policy,
            "prepared fleet reduction"
        );

        Self { config, partition, order, averaging_weeks }
    }

    pub fn fleet_size(&self) -> usize {
        self.order.len()
    }

    /// Distinct weeks in the unmodified dataset
    pub fn observed_weeks(&self) -> usize {
        self.partition.week_count()
    }

    pub fn removal_order(&self) -> &[VehicleId] {
        &self.order
    }

    /// Average weekly unavailable hours after removing `removed_count`
    /// vehicles. Counts past the fleet size remove everyone.
    pub fn average_unavailable_hours(&self, removed_count: usize) -> f64 {
        self.simulate(removed_count).average_unavailable_hours
    }

    pub fn simulate(&self, removed_count: usize) -> ReductionOutcome {
        let removed = &self.order[..removed_count.min(self.order.len())];
        let excluded: HashSet<VehicleId> = removed.iter().copied().collect();
        let estimator = WeeklyCoverageEstimator::new(self.config);

        let mut total = 0.0;
        let mut remaining_weeks = 0;
        for (_, intervals) in self.partition.iter() {
            let kept: Vec<&PresenceInterval> = intervals
                .iter()
                .copied()
                .filter(|interval| !excluded.contains(&interval.vehicle_id()))
                .collect();
            if kept.is_empty() {
                continue;
            }
            remaining_weeks += 1;
            total += estimator.unavailable_hours(&kept);
        }

        let backfilled_weeks = self.observed_weeks() - remaining_weeks;
        total += self.config.max_weekly_hours * backfilled_weeks as f64;

        let average = if self.averaging_weeks == 0 { 0.0 } else { total / self.averaging_weeks as f64 };

        ReductionOutcome {
            removed: removed.to_vec(),
            remaining_weeks,
            backfilled_weeks,
            total_unavailable_hours: total,
            average_unavailable_hours: average,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc, Weekday};
    use geofleet_domain::RemovalPolicy;

    use super::*;

    fn at(day: u32, h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, h, m, 0).unwrap()
    }

    fn full_day(id: i64, day: u32) -> PresenceInterval {
        PresenceInterval::new(VehicleId(id), at(day, 0, 0), at(day, 23, 59)).unwrap()
    }

    fn full_week(id: i64, monday: u32) -> Vec<PresenceInterval> {
        (monday..monday + 5).map(|d| full_day(id, d)).collect()
    }

    #[test]
    fn test_one_vehicle_one_week() {
        let dataset = PresenceDataset::new(full_week(1, 4));
        let config = AnalysisConfig::default();
        let sim = FleetReductionSimulator::new(&dataset, &config);

        assert_eq!(sim.average_unavailable_hours(0), 0.0);
        assert_eq!(sim.average_unavailable_hours(1), 42.5);
    }

    #[test]
    fn test_excess_removals_are_a_no_op() {
        let dataset = PresenceDataset::new(full_week(1, 4));
        let config = AnalysisConfig::default();
        let sim = FleetReductionSimulator::new(&dataset, &config);

        let outcome = sim.simulate(10);
        assert_eq!(outcome.removed, vec![VehicleId(1)]);
        assert_eq!(outcome.average_unavailable_hours, 42.5);
    }

    #[test]
    fn test_vanished_week_is_backfilled_at_max() {
        // Vehicle 1 covers week one, vehicle 2 covers week two
        let mut intervals = full_week(1, 4);
        intervals.extend(full_week(2, 11));
        let dataset = PresenceDataset::new(intervals);
        let config = AnalysisConfig { max_weekly_hours: 50.0, ..AnalysisConfig::default() };
        let sim = FleetReductionSimulator::new(&dataset, &config);

        let outcome = sim.simulate(1);
        assert_eq!(outcome.remaining_weeks, 1);
        assert_eq!(outcome.backfilled_weeks, 1);
        assert_eq!(outcome.total_unavailable_hours, 50.0);
        assert_eq!(outcome.average_unavailable_hours, 25.0);
    }

    #[test]
    fn test_partial_week_is_estimated_not_backfilled() {
        // Vehicle 2 is present Monday only in the same week as vehicle 1
        let mut intervals = full_week(1, 4);
        intervals.push(full_day(2, 4));
        let dataset = PresenceDataset::new(intervals);
        let config = AnalysisConfig::default();
        let sim = FleetReductionSimulator::new(&dataset, &config);

        let outcome = sim.simulate(1);
        assert_eq!(outcome.removed, vec![VehicleId(1)]);
        assert_eq!(outcome.backfilled_weeks, 0);
        assert_eq!(outcome.average_unavailable_hours, 34.0);
    }

    #[test]
    fn test_policy_changes_who_is_removed() {
        let mut intervals = full_week(1, 4);
        intervals.push(full_day(2, 4));
        let dataset = PresenceDataset::new(intervals);
        let config = AnalysisConfig {
            removal_policy: RemovalPolicy::DescendingId,
            ..AnalysisConfig::default()
        };
        let sim = FleetReductionSimulator::new(&dataset, &config);

        assert_eq!(sim.removal_order(), &[VehicleId(2), VehicleId(1)]);
        assert_eq!(sim.average_unavailable_hours(1), 0.0);
    }

    #[test]
    fn test_averaging_week_start_changes_divisor_only() {
        // Friday and the following Sunday: one Monday-first week, two
        // Sunday-first weeks
        let dataset = PresenceDataset::new(vec![
            PresenceInterval::new(VehicleId(1), at(8, 8, 0), at(8, 18, 0)).unwrap(),
            PresenceInterval::new(VehicleId(1), at(10, 8, 0), at(10, 18, 0)).unwrap(),
        ]);
        let config = AnalysisConfig {
            averaging_week_start: Some(Weekday::Sun),
            ..AnalysisConfig::default()
        };
        let sim = FleetReductionSimulator::new(&dataset, &config);

        assert_eq!(sim.observed_weeks(), 1);
        // Four uncovered weekdays spread over two averaging weeks
        assert_eq!(sim.average_unavailable_hours(0), 34.0 / 2.0);
    }

    #[test]
    fn test_empty_dataset_averages_zero() {
        let dataset = PresenceDataset::default();
        let config = AnalysisConfig::default();
        let sim = FleetReductionSimulator::new(&dataset, &config);

        assert_eq!(sim.fleet_size(), 0);
        assert_eq!(sim.average_unavailable_hours(0), 0.0);
        assert_eq!(sim.average_unavailable_hours(3), 0.0);
    }
}
