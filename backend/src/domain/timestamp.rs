//! Defensive conversion of store timestamps to calendar dates.
//!
//! The store reports nanoseconds since the Unix epoch, but the value arrives
//! loosely typed: an integer, a numeric string (big integers travel as
//! strings on the wire), or nothing at all. Conversion never fails; any
//! invalid input falls back to the current time, and callers that must
//! distinguish invalid input use [`try_to_date`] or [`format_safe`].

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

/// Upper bound of the representable date range, in milliseconds since the
/// epoch (mirrors the JavaScript `Date` limit the original clients relied
/// on: 8.64e15 ms, roughly the year 275760).
const MAX_EPOCH_MILLIS: i128 = 8_640_000_000_000_000;

/// Convert a loose timestamp value to a date, or `None` when the value is
/// absent, non-numeric, negative, or out of range.
#[must_use]
pub fn try_to_date(value: &Value) -> Option<DateTime<Utc>> {
    let nanos = parse_nanos(value)?;
    if nanos < 0 {
        return None;
    }
    let millis = nanos / 1_000_000;
    if millis > MAX_EPOCH_MILLIS {
        return None;
    }
    let millis = i64::try_from(millis).ok()?;
    Utc.timestamp_millis_opt(millis).single()
}

/// Convert a loose timestamp value to a date, falling back to the current
/// time on any invalid input. Total; never panics.
#[must_use]
pub fn to_date(value: &Value) -> DateTime<Utc> {
    try_to_date(value).unwrap_or_else(Utc::now)
}

/// Convert a known-integer nanosecond timestamp to a date, with the same
/// range checks as [`try_to_date`].
#[must_use]
pub fn nanos_to_date(nanos: u64) -> Option<DateTime<Utc>> {
    try_to_date(&Value::from(nanos))
}

/// Format a loose timestamp with a caller-supplied formatter, returning
/// `fallback` when the value cannot be converted at all or the formatter
/// declines to produce output.
pub fn format_safe<F>(value: &Value, format: F, fallback: &str) -> String
where
    F: Fn(DateTime<Utc>) -> Option<String>,
{
    try_to_date(value)
        .and_then(format)
        .unwrap_or_else(|| fallback.to_owned())
}

fn parse_nanos(value: &Value) -> Option<i128> {
    match value {
        Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                Some(i128::from(int))
            } else if let Some(uint) = number.as_u64() {
                Some(i128::from(uint))
            } else {
                // Non-integer float: floor if finite, reject otherwise.
                let float = number.as_f64()?;
                if float.is_finite() {
                    Some(float.floor() as i128)
                } else {
                    None
                }
            }
        }
        Value::String(raw) => {
            let trimmed = raw.trim();
            let digits = trimmed.strip_prefix('-').unwrap_or(trimmed);
            if digits.is_empty() || !digits.chars().all(|ch| ch.is_ascii_digit()) {
                return None;
            }
            trimmed.parse::<i128>().ok()
        }
        _ => None,
    }
}
