//! Duration formatting for status timelines.
//!
//! Every duration the engine reports is carried twice: as a raw minute count
//! and as a pre-formatted string, so presentation layers never re-derive the
//! text. This module owns the string form.
//!
//! ## Format Specification
//!
//! Durations render as space separated `Nd Nh Nm` components:
//! - 1 day is 24 hours of calendar time, 1 hour is 60 minutes
//! - The day component appears only when the day count is non-zero
//! - The hour component appears when either days or hours are non-zero
//! - The minute component is always present
//! - Zero and negative counts render as `"0m"`
//!
//! ### Examples
//! - 45 → "45m"
//! - 90 → "1h 30m"
//! - 1500 → "1d 1h 0m"
//! - 4320 → "3d 0h 0m"
//! - -10 → "0m"

const MINUTES_PER_HOUR: i64 = 60;
const MINUTES_PER_DAY: i64 = 24 * MINUTES_PER_HOUR;

/// Formats a minute count as a human-readable `Nd Nh Nm` string.
///
/// # Examples
///
/// ```rust
/// use jira_timeline::libs::formatter::format_duration;
///
/// assert_eq!(format_duration(0), "0m");
/// assert_eq!(format_duration(90), "1h 30m");
/// assert_eq!(format_duration(1500), "1d 1h 0m");
/// ```
pub fn format_duration(minutes: i64) -> String {
    if minutes <= 0 {
        return "0m".to_string();
    }

    let days = minutes / MINUTES_PER_DAY;
    let remaining = minutes % MINUTES_PER_DAY;
    let hours = remaining / MINUTES_PER_HOUR;
    let mins = remaining % MINUTES_PER_HOUR;

    let mut parts = Vec::with_capacity(3);
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    // Hours stay visible once days are shown, even when zero
    if hours > 0 || days > 0 {
        parts.push(format!("{}h", hours));
    }
    parts.push(format!("{}m", mins));

    parts.join(" ")
}
