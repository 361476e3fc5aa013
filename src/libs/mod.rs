//! Core library modules for jira-timeline.
//!
//! ## Features
//!
//! - **Timeline Engine**: Changelog normalization, interval reconstruction,
//!   duration math and time-in-status aggregation
//! - **Orchestration**: Single-issue pipeline and bounded concurrent batches
//! - **Core Infrastructure**: Configuration, data storage, logging, messaging
//! - **User Interface**: Console tables and duration formatting
//!
//! ## Usage
//!
//! ```rust
//! use jira_timeline::libs::changelog::{normalize, FieldChange, RawHistory, STATUS_FIELD};
//! use jira_timeline::libs::date::parse_date;
//! use jira_timeline::libs::summary::StatusAggregator;
//! use jira_timeline::libs::timeline::reconstruct;
//!
//! let history = RawHistory {
//!     timestamp: parse_date("2024-01-01T10:00:00.000+0000")?,
//!     actor: Some("Jane".to_string()),
//!     items: vec![FieldChange::new("status", Some("Open"), Some("In Progress"))],
//! };
//! let transitions = normalize(&[history], STATUS_FIELD);
//! let intervals = reconstruct(&transitions, parse_date("2024-01-01T09:00:00.000+0000")?);
//! let summary = intervals.aggregate();
//! assert_eq!(summary[0].status, "Open");
//! assert_eq!(summary[0].total_duration_minutes, 60);
//! # Ok::<(), jira_timeline::libs::error::TimelineError>(())
//! ```

pub mod changelog;
pub mod config;
pub mod data_storage;
pub mod date;
pub mod duration;
pub mod error;
pub mod formatter;
pub mod item;
pub mod logging;
pub mod messages;
pub mod orchestrator;
pub mod summary;
pub mod timeline;
pub mod view;
