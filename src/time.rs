//! Lenient calendar timestamp construction.
//!
//! PHA header times sometimes carry components outside their nominal range
//! (minute 60 at an hour boundary, second 60.0, day 0). [`lenient_utc`]
//! normalizes such values instead of rejecting them.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::{PhaError, Result};

/// Build a UTC timestamp from calendar components, normalizing components
/// that fall outside their nominal range.
///
/// The month is folded into the year first; day, hour, minute and the
/// fractional seconds are then applied as a signed microsecond offset from
/// the first of that month. `lenient_utc(2001, 1, 15, 8, 60, 0.0)` is
/// 09:00, not an error. Only timestamps outside the representable calendar
/// range fail.
pub fn lenient_utc(
    year: i32,
    month: i32,
    day: i32,
    hour: i32,
    minute: i32,
    seconds: f64,
) -> Result<DateTime<Utc>> {
    let months = (year as i64) * 12 + (month as i64 - 1);
    let norm_year =
        i32::try_from(months.div_euclid(12)).map_err(|_| out_of_range(year, month, day))?;
    let norm_month = months.rem_euclid(12) as u32 + 1;

    let base = NaiveDate::from_ymd_opt(norm_year, norm_month, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or_else(|| out_of_range(year, month, day))?
        .and_utc();

    let micros = (seconds * 1e6).round() as i64
        + (minute as i64) * 60_000_000
        + (hour as i64) * 3_600_000_000
        + (day as i64 - 1) * 86_400_000_000;

    base.checked_add_signed(Duration::microseconds(micros))
        .ok_or_else(|| out_of_range(year, month, day))
}

/// Signed seconds from `from` to `to`, at microsecond resolution.
pub fn seconds_between(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let delta = to.signed_duration_since(from);
    match delta.num_microseconds() {
        Some(us) => us as f64 / 1e6,
        None => delta.num_milliseconds() as f64 / 1e3,
    }
}

fn out_of_range(year: i32, month: i32, day: i32) -> PhaError {
    PhaError::TimeOutOfRange(format!("{year:04}-{month:02}-{day:02}"))
}
