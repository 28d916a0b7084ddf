//! 时间工具函数
//!
//! Form input → Unix millis conversion happens in the API layer; the
//! repository layer only ever sees `i64` Unix millis.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use super::{AppError, AppResult, ErrorCode};

/// Naive layouts accepted for reservation start times, read as UTC
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a reservation start time into Unix millis
///
/// Accepts RFC 3339 (with offset), `YYYY-MM-DDTHH:MM[:SS]`,
/// `YYYY-MM-DD HH:MM[:SS]` and a bare `YYYY-MM-DD` (midnight).
/// Anything else is a validation error; nothing is guessed.
pub fn parse_start_at(raw: &str) -> AppResult<i64> {
    let value = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.timestamp_millis());
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Ok(naive.and_utc().timestamp_millis());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc().timestamp_millis());
    }

    Err(AppError::with_message(
        ErrorCode::ReservationStartInvalid,
        format!("Invalid start time: '{value}'"),
    )
    .with_detail("field", "startAt"))
}
