//! Week buckets of a dataset

use std::collections::BTreeMap;

use chrono::Weekday;
use geofleet_domain::{PresenceDataset, PresenceInterval, WeekKey};

/// Intervals grouped by the week of their `enter_time`.
///
/// Buckets are ordered by key and keep the dataset's time order inside each
/// bucket.
#[derive(Debug, Clone)]
pub struct WeekPartition<'a> {
    weeks: BTreeMap<WeekKey, Vec<&'a PresenceInterval>>,
}

impl<'a> WeekPartition<'a> {
    pub fn new(dataset: &'a PresenceDataset, week_start: Weekday) -> Self {
        let mut weeks: BTreeMap<WeekKey, Vec<&'a PresenceInterval>> = BTreeMap::new();
        for interval in dataset.intervals() {
            let key = WeekKey::containing(interval.enter_time().date_naive(), week_start);
            weeks.entry(key).or_default().push(interval);
        }
        Self { weeks }
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&WeekKey, &[&'a PresenceInterval])> {
        self.weeks.iter().map(|(key, intervals)| (key, intervals.as_slice()))
    }
}

/// Distinct week keys in `dataset` when weeks begin on `week_start`
pub fn count_weeks(dataset: &PresenceDataset, week_start: Weekday) -> usize {
    WeekPartition::new(dataset, week_start).week_count()
}
