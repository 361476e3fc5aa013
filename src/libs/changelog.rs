//! Change history normalization.
//!
//! An issue's change history is a list of history records, each grouping one
//! or more field changes made by one actor at one instant. Only changes to the
//! tracked status field matter for timelines; the normalizer extracts them as
//! [`ChangeEvent`]s in chronological order.
//!
//! Malformed input is skipped rather than reported:
//! - records without a timestamp cannot be sequenced and are dropped
//! - changes without a field name never match the status field
//!
//! Ordering uses a stable sort, so events sharing a timestamp keep the order
//! in which the history listed them.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Default name of the workflow field whose changes form the timeline.
pub const STATUS_FIELD: &str = "status";

/// A single field change inside a history record, as received upstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: Option<String>,
    pub from_value: Option<String>,
    pub to_value: Option<String>,
}

impl FieldChange {
    pub fn new(field: &str, from_value: Option<&str>, to_value: Option<&str>) -> Self {
        Self {
            field: Some(field.to_string()),
            from_value: from_value.map(str::to_string),
            to_value: to_value.map(str::to_string),
        }
    }
}

/// One raw history record: every field change made in a single edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawHistory {
    pub timestamp: Option<DateTime<FixedOffset>>,
    pub actor: Option<String>,
    pub items: Vec<FieldChange>,
}

/// A status transition extracted from the change history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub from_value: Option<String>,
    pub to_value: Option<String>,
    pub timestamp: DateTime<FixedOffset>,
    pub actor: Option<String>,
}

/// Extracts changes to `field` (case-insensitive) from raw history records and
/// returns them sorted ascending by timestamp.
pub fn normalize(histories: &[RawHistory], field: &str) -> Vec<ChangeEvent> {
    let mut events: Vec<ChangeEvent> = Vec::new();

    for history in histories {
        let Some(timestamp) = history.timestamp else {
            tracing::debug!("Skipping history record without a timestamp");
            continue;
        };

        for item in &history.items {
            let matches = item
                .field
                .as_deref()
                .is_some_and(|name| name.eq_ignore_ascii_case(field));
            if !matches {
                continue;
            }

            events.push(ChangeEvent {
                from_value: item.from_value.clone(),
                to_value: item.to_value.clone(),
                timestamp,
                actor: history.actor.clone(),
            });
        }
    }

    events.sort_by_key(|event| event.timestamp);
    events
}
