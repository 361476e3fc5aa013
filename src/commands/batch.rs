use super::{build_orchestrator, dates::render, print_json, IncludeArgs};
use crate::{
    libs::{messages::Message, view::View},
    msg_bail_anyhow, msg_error_anyhow, msg_info, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct BatchArgs {
    #[arg(help = "Issue keys", num_args = 1..)]
    issue_keys: Vec<String>,
    #[command(flatten)]
    include: IncludeArgs,
    #[arg(short, long, help = "Issues fetched at once (overrides the configured value)")]
    concurrency: Option<usize>,
    #[arg(long, help = "Print JSON instead of tables")]
    json: bool,
}

pub async fn cmd(batch_args: BatchArgs) -> Result<()> {
    if batch_args.issue_keys.is_empty() {
        msg_bail_anyhow!(Message::NoIssueKeys);
    }

    let orchestrator = build_orchestrator(batch_args.include.options(), batch_args.concurrency)?;
    if !batch_args.json {
        msg_info!(Message::BatchProcessing(batch_args.issue_keys.len(), orchestrator.concurrency()));
    }

    let result = orchestrator
        .batch(&batch_args.issue_keys)
        .await
        .map_err(|e| msg_error_anyhow!(Message::BatchAborted(e.to_string())))?;

    if batch_args.json {
        return print_json(&result);
    }

    for timeline in &result.issues {
        render(timeline, &batch_args.include)?;
    }

    msg_print!(
        Message::BatchCompleted(result.total_count, result.success_count, result.error_count),
        true
    );
    if !result.errors.is_empty() {
        msg_warning!(Message::BatchErrorsHeader);
        View::batch_errors(&result.errors)?;
    }

    Ok(())
}
