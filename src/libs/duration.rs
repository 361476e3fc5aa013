use chrono::{DateTime, FixedOffset};

/// Whole minutes elapsed between two instants, truncated toward zero.
///
/// Callers pass chronologically ordered pairs. A reversed pair is not
/// rejected and yields a negative count, which the formatter renders as `"0m"`.
///
/// ```rust
/// use chrono::DateTime;
/// use jira_timeline::libs::duration::duration_minutes;
///
/// let start = DateTime::parse_from_rfc3339("2023-01-01T10:00:00Z").unwrap();
/// let end = DateTime::parse_from_rfc3339("2023-01-01T11:30:00Z").unwrap();
/// assert_eq!(duration_minutes(&start, &end), 90);
/// ```
pub fn duration_minutes(start: &DateTime<FixedOffset>, end: &DateTime<FixedOffset>) -> i64 {
    end.signed_duration_since(*start).num_minutes()
}
