use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Deserialize;

use difftime::format::{
    Bucket, DAY_SECS, Direction, FormatError, HOUR_SECS, MINUTE_SECS, MONTH_SECS, Side,
    WEEK_SECS, YEAR_SECS, format_delta, format_relative_time, format_relative_time_str, is_now,
    pluralize,
};

#[derive(Deserialize)]
struct GoldenTable {
    now: String,
    vectors: Vec<GoldenVector>,
}

#[derive(Deserialize)]
struct GoldenVector {
    offset_secs: i64,
    expected: String,
}

fn golden() -> GoldenTable {
    serde_json::from_str(include_str!("fixtures/golden_vectors.json")).unwrap()
}

fn now() -> DateTime<Utc> {
    "2025-10-19T12:00:00Z".parse().unwrap()
}

fn fmt_offset(secs: i64) -> String {
    let now = now();
    format_relative_time(&(now + TimeDelta::seconds(secs)), &now)
}

fn compose(bucket: Bucket, secs: u64) -> String {
    bucket.compose(Duration::from_secs(secs))
}

// --- Golden vectors ---

#[test]
fn test_golden_vectors() {
    let table = golden();
    let now: DateTime<Utc> = table.now.parse().unwrap();
    for v in &table.vectors {
        let target = now + TimeDelta::seconds(v.offset_secs);
        assert_eq!(
            format_relative_time(&target, &now),
            v.expected,
            "offset {}",
            v.offset_secs
        );
    }
}

// --- "now" band ---

#[test]
fn test_now_band_is_inclusive_both_sides() {
    for secs in -5..=5 {
        assert_eq!(fmt_offset(secs), "now", "offset {}", secs);
    }
}

#[test]
fn test_just_outside_now_band() {
    assert_eq!(fmt_offset(6), "6 seconds later");
    assert_eq!(fmt_offset(-6), "6 seconds ago");
}

#[test]
fn test_sub_second_past_threshold_floors_seconds() {
    let now = now();
    let target = now + TimeDelta::milliseconds(5_500);
    assert_eq!(format_relative_time(&target, &now), "5 seconds later");
}

#[test]
fn test_sub_second_inside_threshold_is_now() {
    assert_eq!(format_delta(TimeDelta::milliseconds(4_999)), "now");
    assert_eq!(format_delta(TimeDelta::milliseconds(-5_000)), "now");
}

// --- Direction ---

#[test]
fn test_direction_of_negative_is_ago() {
    assert_eq!(Direction::of(TimeDelta::seconds(-100)), Direction::Ago);
    assert_eq!(Direction::Ago.to_string(), "ago");
}

#[test]
fn test_direction_of_positive_is_later() {
    assert_eq!(Direction::of(TimeDelta::seconds(100)), Direction::Later);
    assert_eq!(Direction::Later.to_string(), "later");
}

#[test]
fn test_direction_of_zero_is_later() {
    assert_eq!(Direction::of(TimeDelta::zero()), Direction::Later);
}

// --- Pluralization ---

#[test]
fn test_pluralize_singular() {
    assert_eq!(pluralize(1, "hour"), "1 hour");
}

#[test]
fn test_pluralize_plural() {
    assert_eq!(pluralize(2, "hour"), "2 hours");
}

#[test]
fn test_pluralize_zero_is_plural() {
    assert_eq!(pluralize(0, "hour"), "0 hours");
}

// --- Bucket boundaries ---

#[test]
fn test_classify_exact_thresholds_go_to_higher_bucket() {
    let cases = [
        (MINUTE_SECS, Bucket::Minutes),
        (HOUR_SECS, Bucket::Hours),
        (DAY_SECS, Bucket::Days),
        (WEEK_SECS, Bucket::Weeks),
        (MONTH_SECS, Bucket::Months),
        (YEAR_SECS, Bucket::Years),
    ];
    for (secs, bucket) in cases {
        assert_eq!(Bucket::classify(Duration::from_secs(secs)), bucket);
        assert_ne!(Bucket::classify(Duration::from_secs(secs - 1)), bucket);
    }
}

#[test]
fn test_classify_below_a_minute_is_seconds() {
    assert_eq!(Bucket::classify(Duration::from_secs(59)), Bucket::Seconds);
}

#[test]
fn test_boundary_just_below_each_unit() {
    assert_eq!(fmt_offset(59), "59 seconds later");
    assert_eq!(fmt_offset(3_599), "59 minutes 59 seconds later");
    assert_eq!(fmt_offset(86_399), "23 hours 59 minutes later");
    assert_eq!(fmt_offset(604_799), "6 days later");
    assert_eq!(fmt_offset(2_591_999), "4 weeks later");
    assert_eq!(fmt_offset(31_557_599), "12 months 5 days later");
}

#[test]
fn test_exactly_one_day_is_days_not_hours() {
    assert_eq!(fmt_offset(86_400), "1 day later");
}

// --- Per-bucket composition ---

#[test]
fn test_compose_seconds() {
    assert_eq!(compose(Bucket::Seconds, 45), "45 seconds");
}

#[test]
fn test_compose_minutes_only() {
    assert_eq!(compose(Bucket::Minutes, 120), "2 minutes");
}

#[test]
fn test_compose_minutes_with_seconds() {
    assert_eq!(compose(Bucket::Minutes, 150), "2 minutes 30 seconds");
}

#[test]
fn test_compose_hours_only() {
    assert_eq!(compose(Bucket::Hours, 7_200), "2 hours");
}

#[test]
fn test_compose_hours_with_minutes() {
    assert_eq!(compose(Bucket::Hours, 9_000), "2 hours 30 minutes");
}

#[test]
fn test_compose_hours_ignores_leftover_seconds() {
    assert_eq!(compose(Bucket::Hours, 3_659), "1 hour");
}

#[test]
fn test_compose_days_has_no_remainder() {
    assert_eq!(compose(Bucket::Days, 172_800), "2 days");
    assert_eq!(compose(Bucket::Days, 172_800 + 12 * HOUR_SECS), "2 days");
}

#[test]
fn test_compose_weeks_has_no_remainder() {
    assert_eq!(compose(Bucket::Weeks, 1_209_600), "2 weeks");
    assert_eq!(compose(Bucket::Weeks, 1_209_600 + 3 * DAY_SECS), "2 weeks");
}

#[test]
fn test_compose_months_only() {
    assert_eq!(compose(Bucket::Months, 5_184_000), "2 months");
}

#[test]
fn test_compose_months_with_days() {
    assert_eq!(compose(Bucket::Months, 5_270_400), "2 months 1 day");
}

#[test]
fn test_compose_years_only() {
    assert_eq!(compose(Bucket::Years, 63_115_200), "2 years");
}

#[test]
fn test_compose_years_with_months() {
    assert_eq!(
        compose(Bucket::Years, YEAR_SECS + 2 * MONTH_SECS),
        "1 year 2 months"
    );
}

#[test]
fn test_compose_years_with_months_and_days() {
    let secs = 2 * YEAR_SECS + MONTH_SECS + DAY_SECS;
    assert_eq!(compose(Bucket::Years, secs), "2 years 1 month 1 day");
}

#[test]
fn test_compose_years_skips_days_without_months() {
    // 20 days over a year: below a month, so nothing after the years
    assert_eq!(compose(Bucket::Years, YEAR_SECS + 20 * DAY_SECS), "1 year");
}

// --- Totality and purity ---

#[test]
fn test_far_future_and_far_past() {
    let min = DateTime::<Utc>::MIN_UTC;
    let max = DateTime::<Utc>::MAX_UTC;

    let later = format_relative_time(&max, &min);
    assert!(later.ends_with(" later"));
    assert!(later.contains("years"));

    let ago = format_relative_time(&min, &max);
    assert!(ago.ends_with(" ago"));
    assert!(ago.contains("years"));
}

#[test]
fn test_same_inputs_same_output() {
    let now = now();
    let target = now - TimeDelta::seconds(7_777);
    assert_eq!(
        format_relative_time(&target, &now),
        format_relative_time(&target, &now)
    );
}

// --- Serialized input ---

#[test]
fn test_format_str_accepts_rfc3339_with_offset() {
    let text = format_relative_time_str("2025-10-19T15:00:00+02:00", "2025-10-19T12:00:00Z").unwrap();
    assert_eq!(text, "1 hour later");
}

#[test]
fn test_format_str_rejects_bad_target() {
    let err = format_relative_time_str("yesterday", "2025-10-19T12:00:00Z").unwrap_err();
    assert!(matches!(
        err,
        FormatError::InvalidInstant {
            side: Side::Target,
            ..
        }
    ));
    assert!(err.to_string().contains("yesterday"));
}

#[test]
fn test_format_str_rejects_bad_now() {
    let err = format_relative_time_str("2025-10-19T12:00:00Z", "").unwrap_err();
    assert!(matches!(
        err,
        FormatError::InvalidInstant { side: Side::Now, .. }
    ));
}

#[test]
fn test_is_now_matches_formatter_band() {
    assert!(is_now(TimeDelta::milliseconds(5_000)));
    assert!(is_now(TimeDelta::milliseconds(-5_000)));
    assert!(!is_now(TimeDelta::milliseconds(5_001)));
    assert_eq!(format_delta(TimeDelta::milliseconds(5_001)), "5 seconds later");
}
