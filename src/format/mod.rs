mod error;
mod relative;

pub use error::{FormatError, Side};
pub use relative::{
    Bucket, DAY_SECS, Direction, HOUR_SECS, MINUTE_SECS, MONTH_SECS, NOW_THRESHOLD, WEEK_SECS,
    YEAR_SECS, format_delta, format_relative_time, is_now, pluralize,
};

use crate::util::time::parse_instant;

/// Parse both instants and format them. Fails on the first side that does not parse.
pub fn format_relative_time_str(target: &str, now: &str) -> Result<String, FormatError> {
    let target_at = parse_instant(target).map_err(|source| FormatError::InvalidInstant {
        side: Side::Target,
        input: target.to_string(),
        source,
    })?;
    let now_at = parse_instant(now).map_err(|source| FormatError::InvalidInstant {
        side: Side::Now,
        input: now.to_string(),
        source,
    })?;
    Ok(format_relative_time(&target_at, &now_at))
}
