use std::fmt;
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};

pub const MINUTE_SECS: u64 = 60;
pub const HOUR_SECS: u64 = 60 * MINUTE_SECS;
pub const DAY_SECS: u64 = 24 * HOUR_SECS;
pub const WEEK_SECS: u64 = 7 * DAY_SECS;
pub const MONTH_SECS: u64 = 30 * DAY_SECS;
/// 365.25 days.
pub const YEAR_SECS: u64 = 31_557_600;

/// Differences up to and including this are rendered as "now".
pub const NOW_THRESHOLD: Duration = Duration::from_secs(5);

const NOW: &str = "now";

/// Which side of `now` the target falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ago,
    Later,
}

impl Direction {
    /// A zero delta counts as "later".
    pub fn of(delta: TimeDelta) -> Self {
        if delta >= TimeDelta::zero() {
            Direction::Later
        } else {
            Direction::Ago
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Ago => "ago",
            Direction::Later => "later",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Primary unit a magnitude is reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

// Descending; a magnitude equal to a threshold lands in that threshold's bucket.
const THRESHOLDS: [(u64, Bucket); 6] = [
    (YEAR_SECS, Bucket::Years),
    (MONTH_SECS, Bucket::Months),
    (WEEK_SECS, Bucket::Weeks),
    (DAY_SECS, Bucket::Days),
    (HOUR_SECS, Bucket::Hours),
    (MINUTE_SECS, Bucket::Minutes),
];

impl Bucket {
    pub fn classify(magnitude: Duration) -> Self {
        let secs = magnitude.as_secs();
        THRESHOLDS
            .iter()
            .find(|(threshold, _)| secs >= *threshold)
            .map(|(_, bucket)| *bucket)
            .unwrap_or(Bucket::Seconds)
    }

    /// Build the unit phrase for `magnitude` in this bucket, without the direction label.
    ///
    /// Years may carry months and days; months carry days, hours carry minutes and
    /// minutes carry seconds. Weeks, days and seconds are always a single unit.
    pub fn compose(self, magnitude: Duration) -> String {
        let secs = magnitude.as_secs();
        match self {
            Bucket::Years => {
                let years = secs / YEAR_SECS;
                let rest = secs % YEAR_SECS;
                let mut parts = vec![pluralize(years, "year")];
                if rest >= MONTH_SECS {
                    parts.push(pluralize(rest / MONTH_SECS, "month"));
                    let rest = rest % MONTH_SECS;
                    if rest >= DAY_SECS {
                        parts.push(pluralize(rest / DAY_SECS, "day"));
                    }
                }
                parts.join(" ")
            }
            Bucket::Months => with_remainder(secs, (MONTH_SECS, "month"), (DAY_SECS, "day")),
            Bucket::Weeks => pluralize(secs / WEEK_SECS, "week"),
            Bucket::Days => pluralize(secs / DAY_SECS, "day"),
            Bucket::Hours => with_remainder(secs, (HOUR_SECS, "hour"), (MINUTE_SECS, "minute")),
            Bucket::Minutes => with_remainder(secs, (MINUTE_SECS, "minute"), (1, "second")),
            Bucket::Seconds => pluralize(secs, "second"),
        }
    }
}

fn with_remainder(secs: u64, primary: (u64, &str), secondary: (u64, &str)) -> String {
    let (unit, word) = primary;
    let head = pluralize(secs / unit, word);
    let (sub_unit, sub_word) = secondary;
    let rest = (secs % unit) / sub_unit;
    if rest >= 1 {
        format!("{} {}", head, pluralize(rest, sub_word))
    } else {
        head
    }
}

/// `"1 hour"`, `"2 hours"`, `"0 hours"`.
pub fn pluralize(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("{} {}", count, unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

fn magnitude(delta: TimeDelta) -> Duration {
    Duration::from_millis(delta.num_milliseconds().unsigned_abs())
}

/// True when `delta` falls inside the "now" band.
pub fn is_now(delta: TimeDelta) -> bool {
    magnitude(delta) <= NOW_THRESHOLD
}

/// Format a signed duration (`target - now`) as a relative time string.
pub fn format_delta(delta: TimeDelta) -> String {
    if is_now(delta) {
        return NOW.to_string();
    }

    let magnitude = magnitude(delta);
    let bucket = Bucket::classify(magnitude);
    format!("{} {}", bucket.compose(magnitude), Direction::of(delta))
}

/// Format `target` relative to `now`, e.g. `"2 hours ago"` or `"3 days later"`.
pub fn format_relative_time(target: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    format_delta(target.signed_duration_since(*now))
}
