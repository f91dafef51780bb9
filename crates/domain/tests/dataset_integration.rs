//! Integration tests for presence datasets and week keys
//!
//! Covers the paths a loaded export takes before analysis: interval
//! validation, time ordering, fleet discovery and week bucketing.

use chrono::{DateTime, Datelike, TimeZone, Utc, Weekday};
use geofleet_domain::utils::parse_presence_timestamp;
use geofleet_domain::{
    week_start_date, GeofleetError, PresenceDataset, PresenceInterval, RemovalPolicy, VehicleId,
    WeekKey,
};

// ============================================================================
// Helpers
// ============================================================================

fn ts(text: &str) -> DateTime<Utc> {
    parse_presence_timestamp(text).unwrap()
}

fn stay(id: i64, enter: &str, exit: &str) -> PresenceInterval {
    PresenceInterval::new(VehicleId(id), ts(enter), ts(exit)).unwrap()
}

// ============================================================================
// Dataset Integration Tests
// ============================================================================

/// Test an export whose rows arrive out of order
///
/// Scenario: three vehicles, rows shuffled, one vehicle seen twice
#[test]
fn test_shuffled_export_is_ordered_and_fleet_discovered() {
    let dataset = PresenceDataset::new(vec![
        stay(30, "2024-03-06 09:00:00Z", "2024-03-06 12:00:00Z"),
        stay(10, "2024-03-04 08:00:00Z", "2024-03-04 18:00:00Z"),
        stay(20, "2024-03-05 07:45:00Z", "2024-03-05 16:00:00Z"),
        stay(10, "2024-03-07 08:00:00Z", "2024-03-07 18:00:00Z"),
    ]);

    let enters: Vec<DateTime<Utc>> = dataset.intervals().iter().map(|i| i.enter_time()).collect();
    assert!(enters.windows(2).all(|w| w[0] <= w[1]), "intervals must be time ordered");
    assert_eq!(dataset.fleet(), &[VehicleId(10), VehicleId(20), VehicleId(30)]);
}

/// Test that one malformed row is rejected rather than silently dropped
#[test]
fn test_malformed_interval_is_rejected() {
    let result = PresenceInterval::new(
        VehicleId(1),
        ts("2024-03-04 12:00:00Z"),
        ts("2024-03-04 11:59:59Z"),
    );

    match result {
        Err(GeofleetError::MalformedInterval(message)) => assert!(message.contains("vehicle 1")),
        other => panic!("expected MalformedInterval, got {other:?}"),
    }
}

// ============================================================================
// Week Bucketing Integration Tests
// ============================================================================

/// Test that a whole Monday-first week maps to one key and the next week
/// to a later key
#[test]
fn test_week_buckets_follow_week_start() {
    let monday = Utc.with_ymd_and_hms(2024, 3, 4, 0, 0, 0).unwrap().date_naive();
    let key = WeekKey::containing(monday, Weekday::Mon);

    for offset in 0..7 {
        let day = monday + chrono::Days::new(offset);
        assert_eq!(WeekKey::containing(day, Weekday::Mon), key);
        assert_eq!(week_start_date(day, Weekday::Mon), monday);
    }

    let next = WeekKey::containing(monday + chrono::Days::new(7), Weekday::Mon);
    assert!(next > key);
}

/// Test that Sunday-first and Monday-first bucketing disagree on Sundays
#[test]
fn test_sunday_lands_in_different_buckets_per_week_start() {
    let sunday = ts("2024-03-10 10:00:00Z").date_naive();
    assert_eq!(sunday.weekday(), Weekday::Sun);

    assert_eq!(week_start_date(sunday, Weekday::Mon).day(), 4);
    assert_eq!(week_start_date(sunday, Weekday::Sun).day(), 10);
}

/// Test the removal policy textual forms used by the command line
#[test]
fn test_removal_policy_cli_forms() {
    let explicit: RemovalPolicy = "explicit:20,10".parse().unwrap();
    assert_eq!(explicit, RemovalPolicy::Explicit(vec![VehicleId(20), VehicleId(10)]));
    assert_eq!(RemovalPolicy::default(), RemovalPolicy::FirstAppearance);
}
