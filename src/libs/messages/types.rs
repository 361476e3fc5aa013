#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleJira,
    ConfigModuleTimeline,
    JiraNotConfigured,
    PromptSelectModules,
    PromptJiraLogin,
    PromptJiraApiUrl,
    PromptJiraToken,
    PromptStatusField,
    PromptConcurrency,

    // === TIMELINE MESSAGES ===
    IssueHeader(String),
    StatusChangesHeader,
    StatusSummaryHeader,
    NoStatusChanges(String), // issue key
    IssueFailed(String, String), // issue key, error

    // === BATCH MESSAGES ===
    NoIssueKeys,
    BatchProcessing(usize, usize), // issue count, concurrency
    BatchCompleted(usize, usize, usize), // total, succeeded, failed
    BatchErrorsHeader,
    BatchAborted(String),

    // === OUTPUT MESSAGES ===
    SerializationFailed(String),
}
