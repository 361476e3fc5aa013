//! Error taxonomy for timeline reconstruction.
//!
//! The fetch layer and the single-item pipeline report failures through
//! [`TimelineError`]. The batch orchestrator inspects the variant to decide
//! whether a failure is recorded against one item or aborts the whole batch:
//!
//! - **NotFound**: the issue key does not resolve upstream
//! - **Auth**: credentials were rejected, nothing else in the batch can succeed
//! - **Transient**: the remote call failed for another reason (network, 5xx)
//! - **Malformed**: an item-level field could not be decoded
//! - **Unexpected**: anything else raised while processing one item
//!
//! Malformed *change-history records* never surface here; the normalizer
//! drops them silently.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimelineError {
    #[error("Issue {key} not found")]
    NotFound { key: String },
    #[error("Authentication failed: {0}")]
    Auth(String),
    #[error("Failed to fetch issue: {0}")]
    Transient(String),
    #[error("{0}")]
    Malformed(String),
    #[error("{0}")]
    Unexpected(String),
}

impl TimelineError {
    pub fn not_found(key: &str) -> Self {
        Self::NotFound { key: key.to_string() }
    }

    /// Returns `true` when the error must abort a batch instead of being
    /// recorded against a single item.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Auth(_))
    }
}

impl From<serde_json::Error> for TimelineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(format!("Unexpected response format: {}", err))
    }
}
