//! Remote tracker integrations.
//!
//! The timeline engine itself is pure; everything that talks to a remote
//! system sits behind the [`HistorySource`] trait. A source fetches one
//! issue's dates, current status and raw change history and maps the untyped
//! response into [`IssueHistory`] at this boundary.
//!
//! ## Failure contract
//!
//! Sources must fail distinguishably, because the batch orchestrator decides
//! between recording and aborting based on the variant:
//!
//! - [`TimelineError::NotFound`] when the key does not resolve
//! - [`TimelineError::Auth`] when credentials are rejected
//! - [`TimelineError::Transient`] for any other fetch failure
//! - [`TimelineError::Malformed`] when an item-level field cannot be decoded
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jira_timeline::api::{jira::Jira, HistorySource, JiraConfig};
//! use jira_timeline::libs::item::IncludeOptions;
//!
//! # async fn run(config: JiraConfig) -> Result<(), jira_timeline::libs::error::TimelineError> {
//! let jira = Jira::new(&config);
//! let history = jira.fetch_history("PROJ-123", &IncludeOptions::default()).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::error::TimelineError;
use crate::libs::item::{IncludeOptions, IssueHistory};
use std::future::Future;

pub mod jira;

pub use jira::JiraConfig;

/// Fetches the raw history of a single issue.
pub trait HistorySource {
    /// Returns the issue's dates, current status and unsorted change history.
    ///
    /// `options` tells the source which date fields to request and whether the
    /// change history is needed at all.
    fn fetch_history(
        &self,
        issue_key: &str,
        options: &IncludeOptions,
    ) -> impl Future<Output = Result<IssueHistory, TimelineError>> + Send;
}
