//! The validated, time-ordered interval collection for one analysis run

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::interval::{PresenceInterval, VehicleId};

/// Immutable set of presence intervals ordered by `enter_time`.
///
/// Intervals with equal `enter_time` keep their input order, so the fleet
/// order (first appearance) is deterministic for a given input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<PresenceInterval>", into = "Vec<PresenceInterval>")]
pub struct PresenceDataset {
    intervals: Vec<PresenceInterval>,
    fleet: Vec<VehicleId>,
}

impl PresenceDataset {
    pub fn new(mut intervals: Vec<PresenceInterval>) -> Self {
        // `sort_by_key` is stable
        intervals.sort_by_key(PresenceInterval::enter_time);

        let mut seen = HashSet::new();
        let fleet = intervals
            .iter()
            .map(PresenceInterval::vehicle_id)
            .filter(|id| seen.insert(*id))
            .collect();

        Self { intervals, fleet }
    }

    pub fn intervals(&self) -> &[PresenceInterval] {
        &self.intervals
    }

    /// Distinct vehicle ids in order of first appearance
    pub fn fleet(&self) -> &[VehicleId] {
        &self.fleet
    }

    pub fn fleet_size(&self) -> usize {
        self.fleet.len()
    }

    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }
}

impl From<Vec<PresenceInterval>> for PresenceDataset {
    fn from(intervals: Vec<PresenceInterval>) -> Self {
        Self::new(intervals)
    }
}

impl From<PresenceDataset> for Vec<PresenceInterval> {
    fn from(dataset: PresenceDataset) -> Self {
        dataset.intervals
    }
}

impl FromIterator<PresenceInterval> for PresenceDataset {
    fn from_iter<I: IntoIterator<Item = PresenceInterval>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::*;

    fn at(day: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, h, 0, 0).unwrap()
    }

    fn interval(id: i64, day: u32, from: u32, to: u32) -> PresenceInterval {
        PresenceInterval::new(VehicleId(id), at(day, from), at(day, to)).unwrap()
    }

    #[test]
    fn test_sorts_by_enter_time_and_keeps_ties_stable() {
        let dataset = PresenceDataset::new(vec![
            interval(3, 5, 9, 10),
            interval(1, 4, 12, 13),
            interval(2, 4, 12, 14),
        ]);

        let ids: Vec<i64> = dataset.intervals().iter().map(|i| i.vehicle_id().0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_fleet_is_first_appearance_order() {
        let dataset = PresenceDataset::new(vec![
            interval(9, 4, 8, 9),
            interval(4, 4, 10, 11),
            interval(9, 5, 8, 9),
            interval(2, 6, 8, 9),
        ]);

        assert_eq!(dataset.fleet(), &[VehicleId(9), VehicleId(4), VehicleId(2)]);
        assert_eq!(dataset.fleet_size(), 3);
        assert_eq!(dataset.len(), 4);
    }

    #[test]
    fn test_empty_dataset() {
        let dataset = PresenceDataset::default();
        assert!(dataset.is_empty());
        assert_eq!(dataset.fleet_size(), 0);
    }

    #[test]
    fn test_json_is_a_plain_interval_list() {
        let dataset: PresenceDataset = vec![interval(5, 4, 8, 9)].into_iter().collect();
        let json = serde_json::to_value(&dataset).unwrap();
        assert!(json.is_array());

        let back: PresenceDataset = serde_json::from_value(json).unwrap();
        assert_eq!(back, dataset);
    }
}
