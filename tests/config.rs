#[cfg(test)]
mod tests {
    use jira_timeline::api::jira::JiraConfig;
    use jira_timeline::libs::config::{Config, TimelineConfig};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    /// Points the platform data directory at a temporary home.
    struct ConfigTestContext {
        _temp_dir: TempDir,
        api_url: String,
        login: String,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _temp_dir: temp_dir,
                api_url: "https://jira.example.com".to_string(),
                login: "jane".to_string(),
            }
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.jira.is_none());
        assert!(config.timeline.is_none());
        assert_eq!(config.timeline_or_default(), TimelineConfig::default());
    }

    #[test]
    fn test_timeline_defaults() {
        let timeline = TimelineConfig::default();
        assert_eq!(timeline.status_field, "status");
        assert_eq!(timeline.concurrency, 1);
    }

    #[test]
    fn test_zero_concurrency_is_clamped() {
        let timeline = TimelineConfig {
            status_field: "status".to_string(),
            concurrency: 0,
        };
        assert_eq!(timeline.effective_concurrency(), 1);
    }

    #[test]
    fn test_partial_timeline_section_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"timeline": {"concurrency": 4}}"#).unwrap();
        let timeline = config.timeline.unwrap();
        assert_eq!(timeline.status_field, "status");
        assert_eq!(timeline.concurrency, 4);
    }

    #[test]
    fn test_token_is_optional() {
        let config: Config = serde_json::from_str(r#"{"jira": {"login": "jane", "api_url": "https://jira"}}"#).unwrap();
        assert_eq!(config.jira.unwrap().token, None);

        let json = serde_json::to_value(JiraConfig {
            login: "jane".to_string(),
            api_url: "https://jira".to_string(),
            token: None,
        })
        .unwrap();
        assert!(json.get("token").is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        // No file yet
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());

        let config = Config {
            jira: Some(JiraConfig {
                login: ctx.login.clone(),
                api_url: ctx.api_url.clone(),
                token: Some("secret".to_string()),
            }),
            timeline: Some(TimelineConfig {
                status_field: "Workflow Stage".to_string(),
                concurrency: 3,
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.timeline_or_default().effective_concurrency(), 3);
    }
}
