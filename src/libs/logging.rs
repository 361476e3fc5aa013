use std::env;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Application-specific filter directive, e.g. `JIRA_TIMELINE_LOG=jira_timeline=debug`.
pub const LOG_ENV: &str = "JIRA_TIMELINE_LOG";
/// Enables debug output for the crate when set to any value.
pub const DEBUG_ENV: &str = "JIRA_TIMELINE_DEBUG";

/// Builds the filter from `JIRA_TIMELINE_LOG`, then `RUST_LOG`, falling back
/// to warnings only (crate debug output with `JIRA_TIMELINE_DEBUG`).
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| {
            EnvFilter::new(if env::var(DEBUG_ENV).is_ok() {
                "jira_timeline=debug,warn"
            } else {
                "warn"
            })
        })
}

/// Installs the global subscriber. Logs go to stderr so JSON output on
/// stdout stays machine-readable. Calling it twice is a no-op.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}
