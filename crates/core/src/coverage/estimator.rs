//! Weekly coverage estimator
//!
//! Samples the business window of every business day in one week and
//! reports how many hours had no vehicle inside the geofence.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc};
use geofleet_domain::{week_start_date, AnalysisConfig, PresenceInterval};
use tracing::trace;

use super::spans::CoverageSpans;

/// Estimates uncovered business hours for one week of intervals
#[derive(Debug, Clone, Copy)]
pub struct WeeklyCoverageEstimator<'a> {
    config: &'a AnalysisConfig,
}

impl<'a> WeeklyCoverageEstimator<'a> {
    pub fn new(config: &'a AnalysisConfig) -> Self {
        Self { config }
    }

    /// Business hours with zero coverage during the week of `intervals`.
    ///
    /// The week is the one containing the earliest `enter_time`. An empty
    /// slice yields the configured full week of business hours.
    pub fn unavailable_hours(&self, intervals: &[&PresenceInterval]) -> f64 {
        let Some(first_enter) = intervals.iter().map(|i| i.enter_time()).min() else {
            return self.config.business_hours_per_week();
        };

        let week_start = week_start_date(first_enter.date_naive(), self.config.week_start);
        let spans = CoverageSpans::from_intervals(intervals.iter().copied());
        let uncovered = self.uncovered_samples(week_start, &spans);

        trace!(
            week_start = %week_start,
            spans = spans.as_slice().len(),
            uncovered_samples = uncovered,
            "estimated weekly coverage"
        );

        f64::from(uncovered) * self.config.sample_hours()
    }

    /// Count sample instants of the week starting at `week_start` that no
    /// span covers.
    fn uncovered_samples(&self, week_start: NaiveDate, spans: &CoverageSpans) -> u32 {
        let mut cursor = spans.cursor();
        let mut uncovered = 0;

        for offset in 0..7 {
            let Some(day) = week_start.checked_add_days(Days::new(offset)) else {
                break;
            };
            if !self.config.is_business_day(day.weekday()) {
                continue;
            }

            for instant in self.sample_instants(day) {
                if !cursor.covers(instant) {
                    uncovered += 1;
                }
            }
        }

        uncovered
    }

    /// Sample instants `business_start, business_start + step, ...` strictly
    /// before `business_end` on `day`.
    fn sample_instants(&self, day: NaiveDate) -> impl Iterator<Item = DateTime<Utc>> {
        let start = day.and_time(self.config.business_start).and_utc();
        let end = day.and_time(self.config.business_end).and_utc();
        let step = self.config.sample_step();

        std::iter::successors(Some(start), move |t| Some(*t + step))
            .take(self.config.samples_per_day() as usize)
            .take_while(move |t| *t < end)
    }
}
