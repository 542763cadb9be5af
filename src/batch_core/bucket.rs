//! Timestamp rounding to 5-minute aggregation buckets
//!
//! Stock price data is only available at 5-minute granularity, so tweet
//! timestamps are floored to the same grid before aggregation.

use chrono::{DateTime, Timelike};

/// Twitter API timestamp format, e.g. `Mon Feb 08 11:57:23 +0000 2016`.
const SOURCE_TIME_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Bucket width in minutes.
const ROUND_INTERVAL_MINUTES: u32 = 5;

/// Convert a raw tweet timestamp into its 5-minute bucket key,
/// formatted as `YYYY-MM-DD HH:MM:SS`.
///
/// The minute is floored to the preceding multiple of 5 and seconds are
/// zeroed, so the bucket never lies after the source timestamp.
pub fn bucket_time(raw: &str) -> Result<String, chrono::ParseError> {
    let parsed = DateTime::parse_from_str(raw.trim(), SOURCE_TIME_FORMAT)?;
    let utc = parsed.naive_utc();
    let minute = utc.minute() - utc.minute() % ROUND_INTERVAL_MINUTES;
    Ok(format!(
        "{} {:02}:{:02}:00",
        utc.format("%Y-%m-%d"),
        utc.hour(),
        minute
    ))
}
