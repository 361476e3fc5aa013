//! Single-issue pipeline and batch orchestration.
//!
//! The orchestrator wraps a [`HistorySource`] and runs the per-issue pipeline
//! (fetch, normalize, reconstruct, aggregate) for one key or for many.
//!
//! ## Batch semantics
//!
//! - Every key produces exactly one entry, either in `issues` or in `errors`,
//!   so `success_count + error_count == total_count`.
//! - A failing issue (not found, malformed data, transient fetch error, even a
//!   panic while processing it) is recorded and the batch continues.
//! - An authentication failure aborts the batch immediately. In-flight fetches
//!   are cancelled, no further fetches are issued and nothing accumulated so
//!   far is returned.
//!
//! ## Concurrency
//!
//! Fetches are issued in input order with at most `concurrency` in flight.
//! Results land in a slot per input position, so `issues` and `errors` keep
//! input order whatever order the fetches complete in. With the default
//! concurrency of 1 issues are processed strictly one after another.

use crate::api::HistorySource;
use crate::libs::changelog::STATUS_FIELD;
use crate::libs::error::TimelineError;
use crate::libs::item::{IncludeOptions, ItemTimeline};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::{Id, JoinError, JoinSet};

/// A per-issue failure recorded by a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemError {
    pub issue_key: String,
    pub error: String,
}

/// Outcome of a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchResult {
    pub issues: Vec<ItemTimeline>,
    pub total_count: usize,
    pub success_count: usize,
    pub error_count: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ItemError>,
}

type ItemOutcome = Result<ItemTimeline, TimelineError>;

pub struct Orchestrator<S> {
    source: Arc<S>,
    options: IncludeOptions,
    status_field: String,
    concurrency: usize,
}

impl<S> Orchestrator<S>
where
    S: HistorySource + Send + Sync + 'static,
{
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
            options: IncludeOptions::default(),
            status_field: STATUS_FIELD.to_string(),
            concurrency: 1,
        }
    }

    pub fn with_options(mut self, options: IncludeOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_status_field(mut self, status_field: &str) -> Self {
        self.status_field = status_field.to_string();
        self
    }

    /// Sets the number of fetches allowed in flight; values below 1 mean 1.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Builds the timeline of a single issue.
    ///
    /// # Errors
    ///
    /// Propagates every fetch failure, including `NotFound` and `Auth`.
    pub async fn item_timeline(&self, issue_key: &str) -> ItemOutcome {
        let outcome = process_item(self.source.as_ref(), issue_key, &self.options, &self.status_field).await;
        if let Err(e) = &outcome {
            tracing::error!("Error getting dates for issue {}: {}", issue_key, e);
        }
        outcome
    }

    /// Builds timelines for many issues with per-issue error isolation.
    ///
    /// # Errors
    ///
    /// Returns `TimelineError::Auth` as soon as any fetch reports an
    /// authentication failure; every other failure is recorded in the result.
    pub async fn batch(&self, issue_keys: &[String]) -> Result<BatchResult, TimelineError> {
        let mut slots: Vec<Option<ItemOutcome>> = (0..issue_keys.len()).map(|_| None).collect();
        let mut positions: HashMap<Id, usize> = HashMap::new();
        // Dropping the set on an early return aborts whatever is still running
        let mut tasks: JoinSet<ItemOutcome> = JoinSet::new();

        for (index, issue_key) in issue_keys.iter().enumerate() {
            while tasks.len() >= self.concurrency {
                match tasks.join_next_with_id().await {
                    Some(joined) => settle(joined, &positions, &mut slots)?,
                    None => break,
                }
            }

            let source = Arc::clone(&self.source);
            let options = self.options;
            let status_field = self.status_field.clone();
            let key = issue_key.clone();
            let handle = tasks.spawn(async move { process_item(source.as_ref(), &key, &options, &status_field).await });
            positions.insert(handle.id(), index);
            tracing::debug!("Issued fetch {}/{} for {}", index + 1, issue_keys.len(), issue_key);
        }

        while let Some(joined) = tasks.join_next_with_id().await {
            settle(joined, &positions, &mut slots)?;
        }

        let mut issues = Vec::new();
        let mut errors = Vec::new();
        for (issue_key, slot) in issue_keys.iter().zip(slots) {
            match slot {
                Some(Ok(timeline)) => issues.push(timeline),
                Some(Err(e)) => {
                    tracing::warn!("Error getting dates for {}: {}", issue_key, e);
                    errors.push(ItemError {
                        issue_key: issue_key.clone(),
                        error: e.to_string(),
                    });
                }
                None => errors.push(ItemError {
                    issue_key: issue_key.clone(),
                    error: TimelineError::Unexpected("Issue was not processed".to_string()).to_string(),
                }),
            }
        }

        Ok(BatchResult {
            total_count: issue_keys.len(),
            success_count: issues.len(),
            error_count: errors.len(),
            issues,
            errors,
        })
    }
}

async fn process_item<S: HistorySource>(
    source: &S,
    issue_key: &str,
    options: &IncludeOptions,
    status_field: &str,
) -> ItemOutcome {
    let history = source.fetch_history(issue_key, options).await?;
    Ok(ItemTimeline::build(issue_key, history, options, status_field))
}

/// Stores a finished task's outcome in its input slot. Fatal errors are
/// returned instead so the caller can abort the batch.
fn settle(
    joined: Result<(Id, ItemOutcome), JoinError>,
    positions: &HashMap<Id, usize>,
    slots: &mut [Option<ItemOutcome>],
) -> Result<(), TimelineError> {
    let (id, outcome) = match joined {
        Ok((_, Err(e))) if e.is_fatal() => return Err(e),
        Ok((id, outcome)) => (id, outcome),
        Err(join_error) => {
            let reason = if join_error.is_panic() {
                "Issue processing panicked"
            } else {
                "Issue processing was cancelled"
            };
            (join_error.id(), Err(TimelineError::Unexpected(reason.to_string())))
        }
    };

    if let Some(slot) = positions.get(&id).and_then(|&index| slots.get_mut(index)) {
        *slot = Some(outcome);
    }
    Ok(())
}
