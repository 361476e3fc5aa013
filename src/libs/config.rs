//! Configuration management for jira-timeline.
//!
//! Settings live in a single JSON file inside the platform data directory
//! (see [`DataStorage`]). Each integration has its own optional section so a
//! partially configured install still loads:
//!
//! - **jira**: instance URL, login and optional API token
//! - **timeline**: tracked status field and batch concurrency
//!
//! The `JIRA_API_TOKEN` environment variable takes precedence over the stored
//! token, which keeps secrets out of the file when preferred.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use jira_timeline::libs::config::Config;
//!
//! let config = Config::read()?;
//! let timeline = config.timeline_or_default();
//! println!("Tracking field {}", timeline.status_field);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::jira::JiraConfig;
use crate::libs::changelog::STATUS_FIELD;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name inside the application data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable section shown by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Key used for routing in the wizard
    pub key: String,
    /// Display name
    pub name: String,
}

/// Timeline engine settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TimelineConfig {
    /// Name of the changelog field whose changes define the timeline.
    #[serde(default = "default_status_field")]
    pub status_field: String,

    /// Maximum number of issues fetched at once in batch mode.
    ///
    /// `1` processes issues strictly one after another. Zero is treated as 1.
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
}

fn default_status_field() -> String {
    STATUS_FIELD.to_string()
}

fn default_concurrency() -> usize {
    1
}

impl Default for TimelineConfig {
    fn default() -> Self {
        TimelineConfig {
            status_field: default_status_field(),
            concurrency: default_concurrency(),
        }
    }
}

impl TimelineConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "timeline".to_string(),
            name: "Timeline".to_string(),
        }
    }

    /// Concurrency clamped to at least one in-flight fetch.
    pub fn effective_concurrency(&self) -> usize {
        self.concurrency.max(1)
    }
}

/// Root configuration object.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jira: Option<JiraConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<TimelineConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// A missing file is not an error: the default (empty) configuration is
    /// returned instead.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, creating the data
    /// directory when needed.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    pub fn timeline_or_default(&self) -> TimelineConfig {
        self.timeline.clone().unwrap_or_default()
    }

    /// Runs the interactive setup wizard, starting from the stored values.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![JiraConfig::module(), TimelineConfig::module()];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "jira" => config.jira = Some(JiraConfig::init(&config.jira)?),
                "timeline" => {
                    let default = config.timeline_or_default();
                    msg_print!(Message::ConfigModuleTimeline);
                    config.timeline = Some(TimelineConfig {
                        status_field: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptStatusField.to_string())
                            .default(default.status_field)
                            .interact_text()?,
                        concurrency: Input::<usize>::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptConcurrency.to_string())
                            .default(default.concurrency)
                            .interact_text()?
                            .max(1),
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
