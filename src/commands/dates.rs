use super::{build_orchestrator, print_json, IncludeArgs};
use crate::{
    libs::{item::ItemTimeline, messages::Message, view::View},
    msg_error_anyhow, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DatesArgs {
    #[arg(help = "Issue key, e.g. PROJ-123")]
    issue_key: String,
    #[command(flatten)]
    include: IncludeArgs,
    #[arg(long, help = "Print JSON instead of tables")]
    json: bool,
}

pub async fn cmd(dates_args: DatesArgs) -> Result<()> {
    let timeline = build_orchestrator(dates_args.include.options(), None)?
        .item_timeline(&dates_args.issue_key)
        .await
        .map_err(|e| msg_error_anyhow!(Message::IssueFailed(dates_args.issue_key.clone(), e.to_string())))?;

    if dates_args.json {
        return print_json(&timeline);
    }
    render(&timeline, &dates_args.include)
}

/// Prints one issue's dates, intervals and summary as tables.
pub(super) fn render(timeline: &ItemTimeline, include: &IncludeArgs) -> Result<()> {
    msg_print!(Message::IssueHeader(timeline.issue_key.clone()), true);
    View::dates(timeline)?;

    let options = include.options();
    if options.status_changes {
        if timeline.status_changes.is_empty() {
            msg_print!(Message::NoStatusChanges(timeline.issue_key.clone()));
        } else {
            msg_print!(Message::StatusChangesHeader);
            View::status_changes(&timeline.status_changes)?;
        }
    }
    if options.status_summary && !timeline.status_summary.is_empty() {
        msg_print!(Message::StatusSummaryHeader);
        View::status_summary(&timeline.status_summary)?;
    }

    Ok(())
}
