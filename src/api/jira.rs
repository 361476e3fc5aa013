//! Jira REST client implementing [`HistorySource`].
//!
//! One issue is fetched per request:
//!
//! ```text
//! GET {api_url}/rest/api/2/issue/{key}?fields=status,created,...&expand=changelog
//! ```
//!
//! The changelog is only expanded when the caller needs status history. The
//! untyped JSON is decoded here and handed over as [`IssueHistory`].
//! History records are decoded one at a time; a record that cannot be read
//! is logged and skipped, never failing the issue.

use super::HistorySource;
use crate::libs::changelog::{FieldChange, RawHistory};
use crate::libs::config::ConfigModule;
use crate::libs::date::parse_date_value;
use crate::libs::error::TimelineError;
use crate::libs::item::{IncludeOptions, IssueHistory};
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use chrono::{DateTime, FixedOffset};
use dialoguer::{theme::ColorfulTheme, Input, Password};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::env;

const ISSUE_PATH: [&str; 4] = ["rest", "api", "2", "issue"];
/// Overrides the token stored in the configuration file.
pub const TOKEN_ENV: &str = "JIRA_API_TOKEN";

#[derive(Deserialize, Debug)]
struct JiraIssue {
    #[serde(default)]
    fields: JiraIssueFields,
    #[serde(default)]
    changelog: Option<JiraChangelog>,
}

#[derive(Deserialize, Debug, Default)]
struct JiraIssueFields {
    #[serde(default)]
    created: Value,
    #[serde(default)]
    updated: Value,
    #[serde(default)]
    duedate: Value,
    #[serde(default)]
    resolutiondate: Value,
    #[serde(default)]
    status: Option<JiraStatus>,
}

#[derive(Deserialize, Debug)]
struct JiraStatus {
    name: Option<String>,
}

#[derive(Deserialize, Debug)]
struct JiraChangelog {
    #[serde(default)]
    histories: Option<Vec<Value>>,
}

#[derive(Deserialize, Debug)]
struct JiraHistory {
    #[serde(default)]
    created: Value,
    #[serde(default)]
    author: Option<JiraAuthor>,
    #[serde(default)]
    items: Option<Vec<JiraHistoryItem>>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct JiraAuthor {
    display_name: Option<String>,
}

#[derive(Deserialize, Debug)]
struct JiraHistoryItem {
    field: Option<String>,
    #[serde(rename = "fromString")]
    from_string: Option<String>,
    #[serde(rename = "toString")]
    to_string: Option<String>,
}

impl JiraIssue {
    fn into_history(self, options: &IncludeOptions) -> Result<IssueHistory, TimelineError> {
        let histories = self
            .changelog
            .and_then(|changelog| changelog.histories)
            .unwrap_or_default()
            .into_iter()
            .filter_map(JiraHistory::decode)
            .map(JiraHistory::into_raw)
            .collect();

        Ok(IssueHistory {
            created: included_date(options.created, &self.fields.created)?,
            updated: included_date(options.updated, &self.fields.updated)?,
            due_date: included_date(options.due_date, &self.fields.duedate)?,
            resolution_date: included_date(options.resolution_date, &self.fields.resolutiondate)?,
            current_status: self.fields.status.and_then(|s| s.name),
            histories,
        })
    }
}

/// Parses a top-level date only when the caller asked for it.
fn included_date(included: bool, value: &Value) -> Result<Option<DateTime<FixedOffset>>, TimelineError> {
    if included {
        parse_date_value(value)
    } else {
        Ok(None)
    }
}

impl JiraHistory {
    fn decode(value: Value) -> Option<Self> {
        match serde_json::from_value(value) {
            Ok(history) => Some(history),
            Err(e) => {
                tracing::warn!("Skipping unreadable history record: {}", e);
                None
            }
        }
    }

    fn into_raw(self) -> RawHistory {
        // A record with an unreadable timestamp is kept without one and
        // dropped later by the normalizer
        let timestamp = match parse_date_value(&self.created) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!("Ignoring history timestamp: {}", e);
                None
            }
        };

        RawHistory {
            timestamp,
            actor: self.author.and_then(|a| a.display_name),
            items: self
                .items
                .unwrap_or_default()
                .into_iter()
                .map(|item| FieldChange {
                    field: item.field,
                    from_value: item.from_string,
                    to_value: item.to_string,
                })
                .collect(),
        }
    }
}

/// Decodes a Jira issue response body. Date fields excluded by `options`
/// are left empty without being parsed.
///
/// # Errors
///
/// Returns `TimelineError::Malformed` when the body is not an issue document
/// or one of the requested top-level date fields cannot be parsed.
pub fn parse_issue(body: &str, options: &IncludeOptions) -> Result<IssueHistory, TimelineError> {
    let issue: JiraIssue = serde_json::from_str(body)?;
    issue.into_history(options)
}

/// Builds the issue endpoint under `api_url`. The key is pushed as a single
/// path segment, so `/`, `?` and `#` in it are percent-encoded.
///
/// # Errors
///
/// Returns `TimelineError::Unexpected` when `api_url` is not a base URL.
pub fn issue_url(api_url: &str, issue_key: &str) -> Result<Url, TimelineError> {
    let invalid = || TimelineError::Unexpected(format!("Invalid Jira API URL: {}", api_url));
    let mut url = Url::parse(api_url).map_err(|_| invalid())?;
    url.path_segments_mut()
        .map_err(|_| invalid())?
        .pop_if_empty()
        .extend(ISSUE_PATH)
        .push(issue_key);
    Ok(url)
}

#[derive(Debug)]
pub struct Jira {
    client: Client,
    config: JiraConfig,
    token: Option<String>,
}

impl Jira {
    pub fn new(config: &JiraConfig) -> Self {
        let token = env::var(TOKEN_ENV)
            .ok()
            .filter(|t| !t.is_empty())
            .or_else(|| config.token.clone().filter(|t| !t.is_empty()));

        Self {
            client: Client::new(),
            config: config.clone(),
            token,
        }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match (&self.token, self.config.login.is_empty()) {
            (Some(token), false) => request.basic_auth(&self.config.login, Some(token)),
            (Some(token), true) => request.bearer_auth(token),
            (None, _) => request,
        }
    }
}

/// Field list requested for the given options; `status` is always included.
pub fn requested_fields(options: &IncludeOptions) -> Vec<&'static str> {
    let mut fields = vec!["status"];
    if options.created {
        fields.push("created");
    }
    if options.updated {
        fields.push("updated");
    }
    if options.due_date {
        fields.push("duedate");
    }
    if options.resolution_date {
        fields.push("resolutiondate");
    }
    fields
}

impl HistorySource for Jira {
    async fn fetch_history(&self, issue_key: &str, options: &IncludeOptions) -> Result<IssueHistory, TimelineError> {
        let mut query = vec![("fields", requested_fields(options).join(","))];
        if options.needs_history() {
            query.push(("expand", "changelog".to_string()));
        }

        let url = issue_url(&self.config.api_url, issue_key)?;
        let request = self.authorize(self.client.get(url).query(&query));
        tracing::debug!("Fetching {} from {}", issue_key, self.config.api_url);

        let res = request
            .send()
            .await
            .map_err(|e| TimelineError::Transient(e.to_string()))?;

        match res.status() {
            StatusCode::NOT_FOUND => return Err(TimelineError::not_found(issue_key)),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(TimelineError::Auth(format!("Jira responded {}", res.status())))
            }
            status if !status.is_success() => {
                return Err(TimelineError::Transient(format!("Jira responded {}", status)))
            }
            _ => {}
        }

        let body = res.text().await.map_err(|e| TimelineError::Transient(e.to_string()))?;
        parse_issue(&body, options)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct JiraConfig {
    pub login: String,
    pub api_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

impl JiraConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "jira".to_string(),
            name: "Jira".to_string(),
        }
    }

    pub fn init(config: &Option<Self>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            login: "".to_string(),
            api_url: "".to_string(),
            token: None,
        });
        msg_print!(Message::ConfigModuleJira);

        let login = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptJiraLogin.to_string())
            .default(config.login)
            .allow_empty(true)
            .interact_text()?;
        let api_url = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptJiraApiUrl.to_string())
            .default(config.api_url)
            .interact_text()?;
        let token: String = Password::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptJiraToken.to_string())
            .allow_empty_password(true)
            .interact()?;

        Ok(Self {
            login,
            api_url,
            // An empty answer keeps the stored token
            token: if token.is_empty() { config.token } else { Some(token) },
        })
    }
}
