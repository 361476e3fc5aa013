pub mod batch;
pub mod dates;
pub mod init;

use crate::{
    api::jira::Jira,
    libs::{config::Config, item::IncludeOptions, messages::Message, orchestrator::Orchestrator},
    msg_error_anyhow,
};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show dates, status changes and time in status for an issue")]
    Dates(dates::DatesArgs),
    #[command(about = "Build timelines for several issues", arg_required_else_help = true)]
    Batch(batch::BatchArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Dates(args) => dates::cmd(args).await,
            Commands::Batch(args) => batch::cmd(args).await,
        }
    }
}

/// Flags shared by `dates` and `batch` that leave parts out of the result.
#[derive(Debug, Args)]
pub struct IncludeArgs {
    #[arg(long, help = "Omit the creation date")]
    no_created: bool,
    #[arg(long, help = "Omit the last update date")]
    no_updated: bool,
    #[arg(long, help = "Omit the due date")]
    no_due_date: bool,
    #[arg(long, help = "Omit the resolution date")]
    no_resolution_date: bool,
    #[arg(long, help = "Omit the status change history")]
    no_history: bool,
    #[arg(long, help = "Omit the time-in-status summary")]
    no_summary: bool,
}

impl IncludeArgs {
    pub fn options(&self) -> IncludeOptions {
        IncludeOptions {
            created: !self.no_created,
            updated: !self.no_updated,
            due_date: !self.no_due_date,
            resolution_date: !self.no_resolution_date,
            status_changes: !self.no_history,
            status_summary: !self.no_summary,
        }
    }
}

/// Builds an orchestrator over the configured Jira instance.
///
/// `concurrency` overrides the configured batch concurrency.
fn build_orchestrator(options: IncludeOptions, concurrency: Option<usize>) -> Result<Orchestrator<Jira>> {
    let config = Config::read()?;
    let jira_config = config.jira.as_ref().ok_or_else(|| msg_error_anyhow!(Message::JiraNotConfigured))?;
    let timeline = config.timeline_or_default();

    Ok(Orchestrator::new(Jira::new(jira_config))
        .with_options(options)
        .with_status_field(&timeline.status_field)
        .with_concurrency(concurrency.unwrap_or(timeline.effective_concurrency())))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| msg_error_anyhow!(Message::SerializationFailed(e.to_string())))?;
    println!("{}", json);
    Ok(())
}
