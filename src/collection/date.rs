//! Conversions between epoch milliseconds and `chrono` timestamps.

use chrono::{DateTime, TimeZone, Utc};

/// Errors raised by date conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// The timestamp cannot be represented as a `DateTime<Utc>`.
    #[error("{millis} ms since the Unix epoch is outside the representable date range")]
    OutOfRange {
        /// The rejected number of milliseconds.
        millis: i64,
    },
}

/// Converts milliseconds since the Unix epoch into a UTC timestamp.
///
/// # Errors
///
/// Returns [`DateError::OutOfRange`] for values chrono cannot represent.
///
/// # Examples
///
/// ```rust
/// use frostpipe::collection::{to_date, to_unix_time};
///
/// let date = to_date(1_711_688_078_000).unwrap();
/// assert_eq!(date.to_rfc3339(), "2024-03-29T04:54:38+00:00");
/// assert_eq!(to_unix_time(date), 1_711_688_078_000);
/// ```
pub fn to_date(millis: i64) -> Result<DateTime<Utc>, DateError> {
    DateTime::from_timestamp_millis(millis).ok_or(DateError::OutOfRange { millis })
}

/// Converts a timestamp into milliseconds since the Unix epoch.
///
/// Sub-millisecond precision is truncated.
pub fn to_unix_time<Tz: TimeZone>(date: DateTime<Tz>) -> i64 {
    date.timestamp_millis()
}
