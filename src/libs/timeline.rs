//! Timeline reconstruction from sorted status transitions.
//!
//! Given the chronologically sorted transitions of one issue and its creation
//! timestamp, [`reconstruct`] produces the contiguous sequence of status
//! occupancy intervals:
//!
//! ```text
//! created        t0                 t1                 t2
//!    |-- Open ----|-- In Progress ---|-- Review --------|-- Done ...
//!    synthetic     transition 0       transition 1       transition 2 (open)
//! ```
//!
//! - The first interval is synthetic: it spans creation to the first
//!   transition and takes the first transition's source status. It is emitted
//!   only when both a creation timestamp and a non-empty source status exist.
//! - Every transition with a target status opens an interval that ends at the
//!   next transition, or stays open when it is the last one.
//! - Transitions without a target status produce no interval, but their
//!   timestamp still closes the interval before them.
//! - Without transitions the timeline is empty, even when the creation date
//!   and current status are known.

use crate::libs::changelog::ChangeEvent;
use crate::libs::duration::duration_minutes;
use crate::libs::formatter::format_duration;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A span during which the issue held one status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusInterval {
    pub status: String,
    pub entered_at: DateTime<FixedOffset>,
    /// `None` while this is the issue's current status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exited_at: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_formatted: Option<String>,
    /// Display name of whoever made the transition; `None` for the synthetic
    /// initial interval.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transitioned_by: Option<String>,
}

impl StatusInterval {
    /// Builds an interval, deriving both duration forms when it is closed.
    pub fn new(
        status: &str,
        entered_at: DateTime<FixedOffset>,
        exited_at: Option<DateTime<FixedOffset>>,
        transitioned_by: Option<String>,
    ) -> Self {
        let duration_minutes = exited_at.map(|exit| duration_minutes(&entered_at, &exit));
        Self {
            status: status.to_string(),
            entered_at,
            exited_at,
            duration_minutes,
            duration_formatted: duration_minutes.map(format_duration),
            transitioned_by,
        }
    }

    pub fn is_open(&self) -> bool {
        self.exited_at.is_none()
    }
}

/// Rebuilds the ordered interval list from sorted transitions.
pub fn reconstruct(transitions: &[ChangeEvent], created: Option<DateTime<FixedOffset>>) -> Vec<StatusInterval> {
    let mut intervals = Vec::with_capacity(transitions.len() + 1);

    if let (Some(created), Some(first)) = (created, transitions.first()) {
        if let Some(initial) = non_empty(first.from_value.as_deref()) {
            intervals.push(StatusInterval::new(initial, created, Some(first.timestamp), None));
        }
    }

    for (i, transition) in transitions.iter().enumerate() {
        let Some(status) = non_empty(transition.to_value.as_deref()) else {
            continue;
        };
        let exited_at = transitions.get(i + 1).map(|next| next.timestamp);
        intervals.push(StatusInterval::new(
            status,
            transition.timestamp,
            exited_at,
            transition.actor.clone(),
        ));
    }

    intervals
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
