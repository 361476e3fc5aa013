use super::item::ItemTimeline;
use super::orchestrator::ItemError;
use super::summary::StateSummary;
use super::timeline::StatusInterval;
use anyhow::Result;
use chrono::{DateTime, FixedOffset};
use prettytable::{row, Table};

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";

pub struct View {}

impl View {
    pub fn dates(timeline: &ItemTimeline) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ISSUE", "STATUS", "CREATED", "UPDATED", "DUE", "RESOLVED"]);
        table.add_row(row![
            timeline.issue_key,
            timeline.current_status.as_deref().unwrap_or("-"),
            Self::date(&timeline.created),
            Self::date(&timeline.updated),
            Self::date(&timeline.due_date),
            Self::date(&timeline.resolution_date)
        ]);
        table.printstd();

        Ok(())
    }

    pub fn status_changes(intervals: &[StatusInterval]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["STATUS", "ENTERED", "EXITED", "DURATION", "BY"]);
        for interval in intervals {
            table.add_row(row![
                interval.status,
                interval.entered_at.format(DATE_TIME_FORMAT),
                Self::date(&interval.exited_at),
                interval.duration_formatted.as_deref().unwrap_or("-"),
                interval.transitioned_by.as_deref().unwrap_or("")
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn status_summary(summaries: &[StateSummary]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["STATUS", "TOTAL", "MINUTES", "VISITS"]);
        for summary in summaries {
            table.add_row(row![
                summary.status,
                summary.total_duration_formatted,
                summary.total_duration_minutes,
                summary.visit_count
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn batch_errors(errors: &[ItemError]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ISSUE", "ERROR"]);
        for error in errors {
            table.add_row(row![error.issue_key, error.error]);
        }
        table.printstd();

        Ok(())
    }

    fn date(value: &Option<DateTime<FixedOffset>>) -> String {
        value
            .map(|dt| dt.format(DATE_TIME_FORMAT).to_string())
            .unwrap_or_else(|| "-".to_string())
    }
}
