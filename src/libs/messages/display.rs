//! Display implementation for application messages.
//!
//! All user-facing text is defined here so commands and library code only
//! deal with typed [`Message`] values.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleJira => "Jira settings".to_string(),
            Message::ConfigModuleTimeline => "Timeline settings".to_string(),
            Message::JiraNotConfigured => "Jira is not configured. Run `jira-timeline init` first.".to_string(),
            Message::PromptSelectModules => "Select nodes to configure".to_string(),
            Message::PromptJiraLogin => "Enter your Jira login (empty for token-only auth)".to_string(),
            Message::PromptJiraApiUrl => "Enter the Jira API URL".to_string(),
            Message::PromptJiraToken => "Enter your Jira API token (empty to keep the current one)".to_string(),
            Message::PromptStatusField => "Changelog field that tracks the status".to_string(),
            Message::PromptConcurrency => "Issues fetched at once in batch mode".to_string(),

            Message::IssueHeader(key) => format!("Issue {}", key),
            Message::StatusChangesHeader => "Status changes:".to_string(),
            Message::StatusSummaryHeader => "Time in status:".to_string(),
            Message::NoStatusChanges(key) => format!("No status changes recorded for {}", key),
            Message::IssueFailed(key, error) => format!("Failed to build the timeline for {}: {}", key, error),

            Message::NoIssueKeys => "No issue keys provided".to_string(),
            Message::BatchProcessing(count, concurrency) => {
                format!("Processing {} issue(s), {} at a time...", count, concurrency)
            }
            Message::BatchCompleted(total, succeeded, failed) => {
                format!("Processed {} issue(s): {} succeeded, {} failed", total, succeeded, failed)
            }
            Message::BatchErrorsHeader => "Errors:".to_string(),
            Message::BatchAborted(error) => format!("Batch aborted: {}", error),

            Message::SerializationFailed(error) => format!("Failed to serialize output: {}", error),
        };

        write!(f, "{}", text)
    }
}
