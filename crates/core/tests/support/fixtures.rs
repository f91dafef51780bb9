use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use geofleet_domain::{PresenceDataset, PresenceInterval, VehicleId};

/// Monday 2024-03-04, the first day of the reference week.
pub fn reference_monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 4).unwrap()
}

/// UTC instant `day` days after the reference Monday.
pub fn instant(day: u64, hour: u32, minute: u32) -> DateTime<Utc> {
    let date = reference_monday() + Days::new(day);
    Utc.from_utc_datetime(&date.and_hms_opt(hour, minute, 0).unwrap())
}

/// Interval for `id` on one day, `(hour, minute)` to `(hour, minute)`.
pub fn stay(id: i64, day: u64, from: (u32, u32), to: (u32, u32)) -> PresenceInterval {
    PresenceInterval::new(VehicleId(id), instant(day, from.0, from.1), instant(day, to.0, to.1))
        .unwrap()
}

/// `id` present all day Monday through Friday of the week at `week_offset`.
pub fn full_week(id: i64, week_offset: u64) -> Vec<PresenceInterval> {
    (0..5).map(|d| stay(id, week_offset * 7 + d, (0, 0), (23, 59))).collect()
}

/// Nested fleet: vehicle `k` (1-based) covers the first `fleet - k + 1`
/// weekdays of every week, so each vehicle's coverage contains the next one's.
pub fn nested_fleet(fleet: i64, weeks: u64) -> PresenceDataset {
    let mut intervals = Vec::new();
    for week in 0..weeks {
        for id in 1..=fleet {
            let days = (fleet - id + 1).min(5) as u64;
            for d in 0..days {
                intervals.push(stay(id, week * 7 + d, (8, 0), (17, 30)));
            }
        }
    }
    PresenceDataset::new(intervals)
}
