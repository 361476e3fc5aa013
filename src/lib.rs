//! # jira-timeline - Issue status timelines from Jira changelogs
//!
//! Reconstructs how long issues spent in each workflow status from their
//! change history and reports key dates alongside.
//!
//! ## Features
//!
//! - **Status Timelines**: Contiguous status intervals with durations and actors
//! - **Time in Status**: Per-status totals and visit counts, longest first
//! - **Key Dates**: Created, updated, due and resolution dates
//! - **Batch Mode**: Many issues at once with per-issue error isolation
//! - **Output**: Console tables or JSON
//!
//! ## Usage
//!
//! ```rust,no_run
//! use jira_timeline::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
