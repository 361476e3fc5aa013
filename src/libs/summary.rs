use crate::libs::formatter::format_duration;
use crate::libs::timeline::StatusInterval;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Total time an issue spent in one status across all of its visits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSummary {
    pub status: String,
    /// Sum over closed intervals only; the open interval adds nothing here.
    pub total_duration_minutes: i64,
    pub total_duration_formatted: String,
    /// Number of intervals with this status, open or closed.
    pub visit_count: u32,
}

#[derive(Debug, Default)]
struct StatusTotals {
    total_minutes: i64,
    visit_count: u32,
}

pub trait StatusAggregator {
    /// Groups intervals by status and ranks statuses by total closed time,
    /// descending. Ties keep the order in which statuses were first seen.
    fn aggregate(&self) -> Vec<StateSummary>;
}

impl StatusAggregator for [StatusInterval] {
    fn aggregate(&self) -> Vec<StateSummary> {
        // Insertion order of first occurrence drives tie-breaking
        let mut order: Vec<&str> = Vec::new();
        let mut totals: HashMap<&str, StatusTotals> = HashMap::new();

        for interval in self {
            let contributes = interval.duration_minutes.is_some() || interval.is_open();
            if !contributes {
                continue;
            }

            let entry = totals.entry(interval.status.as_str()).or_insert_with(|| {
                order.push(interval.status.as_str());
                StatusTotals::default()
            });
            if let Some(minutes) = interval.duration_minutes {
                entry.total_minutes += minutes;
            }
            entry.visit_count += 1;
        }

        let mut summaries: Vec<StateSummary> = order
            .into_iter()
            .filter_map(|status| {
                totals.get(status).map(|t| StateSummary {
                    status: status.to_string(),
                    total_duration_minutes: t.total_minutes,
                    total_duration_formatted: format_duration(t.total_minutes),
                    visit_count: t.visit_count,
                })
            })
            .collect();

        summaries.sort_by(|a, b| b.total_duration_minutes.cmp(&a.total_duration_minutes));
        summaries
    }
}

impl StatusAggregator for Vec<StatusInterval> {
    fn aggregate(&self) -> Vec<StateSummary> {
        self.as_slice().aggregate()
    }
}
