//! Per-issue timeline assembly.
//!
//! [`ItemTimeline::build`] is the pure half of the single-item pipeline: it
//! takes the typed history returned by a [`HistorySource`](crate::api::HistorySource)
//! and applies the inclusion options, the normalizer, the reconstructor and
//! the aggregator. No I/O happens here.

use crate::libs::changelog::{normalize, RawHistory};
use crate::libs::summary::{StateSummary, StatusAggregator};
use crate::libs::timeline::{reconstruct, StatusInterval};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Which parts of an issue's dates and history to fetch and report.
///
/// Excluding `status_changes` skips normalization and reconstruction
/// entirely, which also leaves the summary empty. Excluding `created` removes
/// the anchor for the synthetic first interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludeOptions {
    pub created: bool,
    pub updated: bool,
    pub due_date: bool,
    pub resolution_date: bool,
    pub status_changes: bool,
    pub status_summary: bool,
}

impl Default for IncludeOptions {
    fn default() -> Self {
        Self {
            created: true,
            updated: true,
            due_date: true,
            resolution_date: true,
            status_changes: true,
            status_summary: true,
        }
    }
}

impl IncludeOptions {
    /// Whether the change history has to be fetched at all.
    pub fn needs_history(&self) -> bool {
        self.status_changes || self.status_summary
    }
}

/// Typed issue data handed over by the fetch layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueHistory {
    pub created: Option<DateTime<FixedOffset>>,
    pub updated: Option<DateTime<FixedOffset>>,
    pub due_date: Option<DateTime<FixedOffset>>,
    pub resolution_date: Option<DateTime<FixedOffset>>,
    pub current_status: Option<String>,
    /// Raw, unsorted, unfiltered change history.
    pub histories: Vec<RawHistory>,
}

/// Dates, status intervals and time-in-status summary for one issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemTimeline {
    pub issue_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution_date: Option<DateTime<FixedOffset>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_status: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status_changes: Vec<StatusInterval>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub status_summary: Vec<StateSummary>,
}

impl ItemTimeline {
    /// Builds the timeline of `issue_key` from its fetched history.
    ///
    /// `status_field` names the workflow field whose changes are tracked.
    pub fn build(issue_key: &str, history: IssueHistory, options: &IncludeOptions, status_field: &str) -> Self {
        let created = history.created.filter(|_| options.created);

        let status_changes = if options.status_changes {
            let transitions = normalize(&history.histories, status_field);
            tracing::debug!(
                "{}: {} status transitions out of {} history records",
                issue_key,
                transitions.len(),
                history.histories.len()
            );
            reconstruct(&transitions, created)
        } else {
            Vec::new()
        };

        let status_summary = if options.status_summary {
            status_changes.aggregate()
        } else {
            Vec::new()
        };

        Self {
            issue_key: issue_key.to_string(),
            created,
            updated: history.updated.filter(|_| options.updated),
            due_date: history.due_date.filter(|_| options.due_date),
            resolution_date: history.resolution_date.filter(|_| options.resolution_date),
            current_status: history.current_status,
            status_changes,
            status_summary,
        }
    }

    /// Recomputes the summary from this timeline's intervals.
    pub fn summarize(&self) -> Vec<StateSummary> {
        self.status_changes.aggregate()
    }
}
