//! Week buckets used to group presence intervals
//!
//! A week is the seven-day span that begins on a configurable weekday. Its
//! key is derived from the span's first day, so every day of the span maps
//! to the same `(year, week)` pair even when the span crosses New Year.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::constants::DAYS_PER_WEEK;

/// Identity of a week bucket.
///
/// `week` counts weeks under the "first day" rule: week 1 is the (possibly
/// partial) week containing January 1, and every following week begins on
/// the configured start weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WeekKey {
    pub year: i32,
    pub week: u32,
}

impl WeekKey {
    /// Key of the week (starting on `week_start`) that contains `date`.
    pub fn containing(date: NaiveDate, week_start: Weekday) -> Self {
        let start = week_start_date(date, week_start);
        Self { year: start.year(), week: week_of_year(start, week_start) }
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-W{:02}", self.year, self.week)
    }
}

/// Walk back from `date` to the most recent `week_start` (inclusive).
pub fn week_start_date(date: NaiveDate, week_start: Weekday) -> NaiveDate {
    let back = days_after(date.weekday(), week_start);
    date.checked_sub_days(Days::new(u64::from(back))).unwrap_or(date)
}

/// Days from `from` forward to `day` within one week (0..=6).
fn days_after(day: Weekday, from: Weekday) -> u32 {
    (day.num_days_from_monday() + DAYS_PER_WEEK - from.num_days_from_monday()) % DAYS_PER_WEEK
}

/// Week-of-year under the "first day" rule.
fn week_of_year(date: NaiveDate, week_start: Weekday) -> u32 {
    let ordinal0 = date.ordinal0();
    let jan1 = NaiveDate::from_yo_opt(date.year(), 1).map_or(week_start, |d| d.weekday());
    let lead = days_after(jan1, week_start);
    (ordinal0 + lead) / DAYS_PER_WEEK + 1
}
