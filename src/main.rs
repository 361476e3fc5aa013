use jira_timeline::commands::Cli;
use jira_timeline::libs::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    init_tracing();

    Cli::menu().await
}
