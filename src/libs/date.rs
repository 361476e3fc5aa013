//! Date parsing for values received from the remote tracker.
//!
//! Jira reports timestamps in several shapes depending on the field and the
//! server flavour. Everything is normalized to `DateTime<FixedOffset>` here so
//! the rest of the engine never handles raw strings:
//!
//! - `2023-01-01T00:00:00.000+0000` (Jira's own form, no colon in the offset)
//! - RFC 3339 (`2023-01-01T00:00:00Z`, `2023-01-01T00:00:00+02:00`)
//! - Calendar dates (`2023-02-01`, used for due dates) at midnight UTC
//! - Naive date-times (`2023-01-01T10:00:00`) interpreted as UTC
//! - Epoch milliseconds, as digits or as a JSON number (legacy Jira Server)

use crate::libs::error::TimelineError;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Smallest epoch millisecond value representable as year 1.
const MIN_EPOCH_MILLIS: i64 = -62_135_596_800_000;
/// Largest epoch millisecond value representable as year 9999.
const MAX_EPOCH_MILLIS: i64 = 253_402_300_799_999;

const JIRA_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";
const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses a date string into an absolute timestamp.
///
/// Returns `Ok(None)` for empty input and for epoch values outside the
/// supported range, and `Err(TimelineError::Malformed)` for anything that is
/// not a recognized format.
pub fn parse_date(raw: &str) -> Result<Option<DateTime<FixedOffset>>, TimelineError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    if raw.chars().all(|c| c.is_ascii_digit()) {
        return match raw.parse::<i64>() {
            Ok(millis) => Ok(from_epoch_millis(millis)),
            Err(e) => {
                tracing::warn!("Failed to parse timestamp {}: {}", raw, e);
                Ok(None)
            }
        };
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(dt));
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, JIRA_FORMAT) {
        return Ok(Some(dt));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT) {
        return Ok(Some(naive.and_utc().fixed_offset()));
    }
    if let Some(naive) = NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
    {
        return Ok(Some(naive.and_utc().fixed_offset()));
    }

    tracing::warn!("Failed to parse date string '{}'", raw);
    Err(TimelineError::Malformed(format!("Invalid date format: {}", raw)))
}

/// Parses a JSON value that may hold a date string, an epoch number or null.
pub fn parse_date_value(value: &Value) -> Result<Option<DateTime<FixedOffset>>, TimelineError> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => parse_date(s),
        Value::Number(n) => match n.as_i64() {
            Some(millis) => Ok(from_epoch_millis(millis)),
            None => Err(TimelineError::Malformed(format!("Invalid date format: {}", n))),
        },
        other => Err(TimelineError::Malformed(format!("Invalid date format: {}", other))),
    }
}

fn from_epoch_millis(millis: i64) -> Option<DateTime<FixedOffset>> {
    if !(MIN_EPOCH_MILLIS..=MAX_EPOCH_MILLIS).contains(&millis) {
        tracing::warn!(
            "Timestamp {} is out of the supported range (year 1-9999), ignoring it. \
             This may occur with legacy Jira Server instances.",
            millis
        );
        return None;
    }
    DateTime::from_timestamp_millis(millis).map(|dt| dt.fixed_offset())
}
