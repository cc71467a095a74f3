//! Date string parsing for the `--since` / `--until` options
//!
//! Accepted forms, tried in order:
//!
//! - `now`
//! - unix seconds (`1700000000`)
//! - RFC 3339 (`2024-01-31T12:00:00+02:00`)
//! - local date and time (`2024-01-31 12:00`, `2024-01-31T12:00:00`)
//! - local date (`2024-01-31`, midnight)
//! - local time of today (`12:30`)
//! - relative offsets (`2h ago`, `-30m`, `3 days ago`)

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone};

/// Why a date string was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateParseError {
    /// Empty or whitespace-only input
    #[error("empty date")]
    Empty,
    /// None of the supported formats matched
    #[error("unrecognized date format")]
    UnknownFormat,
    /// A relative offset used an unknown unit
    #[error("unknown time unit '{0}'")]
    UnknownUnit(String),
    /// The result does not fit in the supported range
    #[error("date out of range")]
    OutOfRange,
    /// The local time does not exist (e.g. skipped by a DST change)
    #[error("nonexistent local time")]
    NonexistentLocalTime,
}

const DATETIME_FORMATS: &[&str] =
    &["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse a date string relative to the current local time
pub fn parse_datetime(value: &str) -> Result<i64, DateParseError> {
    parse_datetime_at(value, Local::now())
}

/// Parse a date string relative to `now`
pub fn parse_datetime_at(value: &str, now: DateTime<Local>) -> Result<i64, DateParseError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DateParseError::Empty);
    }

    if value.eq_ignore_ascii_case("now") {
        return Ok(now.timestamp());
    }

    if value.bytes().all(|b| b.is_ascii_digit()) {
        return value.parse::<i64>().map_err(|_| DateParseError::OutOfRange);
    }

    if let Ok(at) = DateTime::parse_from_rfc3339(value) {
        return Ok(at.timestamp());
    }

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return local_timestamp(naive);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0).ok_or(DateParseError::OutOfRange)?;
        return local_timestamp(midnight);
    }

    if let Ok(time) = NaiveTime::parse_from_str(value, "%H:%M") {
        return local_timestamp(now.date_naive().and_time(time));
    }

    if let Some(offset) = parse_relative(value)? {
        return now
            .checked_sub_signed(offset)
            .map(|at| at.timestamp())
            .ok_or(DateParseError::OutOfRange);
    }

    Err(DateParseError::UnknownFormat)
}

fn local_timestamp(naive: NaiveDateTime) -> Result<i64, DateParseError> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|at| at.timestamp())
        .ok_or(DateParseError::NonexistentLocalTime)
}

/// `Ok(None)` when the value is not shaped like a relative offset at all
fn parse_relative(value: &str) -> Result<Option<TimeDelta>, DateParseError> {
    let body = if let Some(rest) = value.strip_suffix("ago") {
        rest.trim_end()
    } else if let Some(rest) = value.strip_prefix('-') {
        rest.trim_start()
    } else {
        return Ok(None);
    };

    let split = body.find(|c: char| !c.is_ascii_digit()).unwrap_or(body.len());
    let (digits, unit) = body.split_at(split);
    if digits.is_empty() {
        return Ok(None);
    }

    let amount: i64 = digits.parse().map_err(|_| DateParseError::OutOfRange)?;
    let unit = unit.trim();
    let seconds_per_unit = match unit {
        "s" | "sec" | "secs" | "second" | "seconds" => 1,
        "m" | "min" | "mins" | "minute" | "minutes" => 60,
        "h" | "hour" | "hours" => 3_600,
        "d" | "day" | "days" => 86_400,
        "w" | "week" | "weeks" => 604_800,
        _ => return Err(DateParseError::UnknownUnit(unit.to_string())),
    };

    amount
        .checked_mul(seconds_per_unit)
        .and_then(TimeDelta::try_seconds)
        .map(Some)
        .ok_or(DateParseError::OutOfRange)
}
