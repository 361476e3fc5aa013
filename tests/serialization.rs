#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use jira_timeline::libs::changelog::{FieldChange, RawHistory, STATUS_FIELD};
    use jira_timeline::libs::item::{IncludeOptions, IssueHistory, ItemTimeline};
    use jira_timeline::libs::orchestrator::{BatchResult, ItemError};
    use serde_json::{json, Value};

    fn history() -> IssueHistory {
        IssueHistory {
            created: Some(DateTime::parse_from_rfc3339("2024-01-01T09:00:00Z").unwrap()),
            updated: None,
            due_date: None,
            resolution_date: None,
            current_status: Some("Done".to_string()),
            histories: vec![
                RawHistory {
                    timestamp: Some(DateTime::parse_from_rfc3339("2024-01-01T10:00:00Z").unwrap()),
                    actor: Some("Jane".to_string()),
                    items: vec![FieldChange::new("status", Some("Open"), Some("In Progress"))],
                },
                RawHistory {
                    timestamp: Some(DateTime::parse_from_rfc3339("2024-01-01T12:30:00Z").unwrap()),
                    actor: Some("Bob".to_string()),
                    items: vec![FieldChange::new("status", Some("In Progress"), Some("Done"))],
                },
            ],
        }
    }

    #[test]
    fn test_item_timeline_omits_absent_fields() {
        let timeline = ItemTimeline::build("PROJ-1", history(), &IncludeOptions::default(), STATUS_FIELD);

        let value = serde_json::to_value(&timeline).unwrap();

        assert_eq!(value["issue_key"], json!("PROJ-1"));
        assert!(value.get("updated").is_none());
        assert!(value.get("due_date").is_none());
        assert!(value.get("resolution_date").is_none());

        let synthetic = &value["status_changes"][0];
        assert!(synthetic.get("transitioned_by").is_none());
        let current = &value["status_changes"][2];
        assert!(current.get("exited_at").is_none());
        assert!(current.get("duration_minutes").is_none());
        assert!(current.get("duration_formatted").is_none());
        assert_eq!(current["transitioned_by"], json!("Bob"));
    }

    #[test]
    fn test_item_timeline_summary_shape() {
        let timeline = ItemTimeline::build("PROJ-1", history(), &IncludeOptions::default(), STATUS_FIELD);

        let value = serde_json::to_value(&timeline).unwrap();

        assert_eq!(
            value["status_summary"][0],
            json!({
                "status": "In Progress",
                "total_duration_minutes": 150,
                "total_duration_formatted": "2h 30m",
                "visit_count": 1
            })
        );
    }

    #[test]
    fn test_round_trip_recomputes_same_summary() {
        let timeline = ItemTimeline::build("PROJ-1", history(), &IncludeOptions::default(), STATUS_FIELD);

        let json = serde_json::to_string(&timeline).unwrap();
        let restored: ItemTimeline = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, timeline);
        assert_eq!(restored.summarize(), timeline.status_summary);
    }

    #[test]
    fn test_excluded_history_is_omitted() {
        let options = IncludeOptions {
            status_changes: false,
            status_summary: false,
            ..IncludeOptions::default()
        };
        let timeline = ItemTimeline::build("PROJ-1", history(), &options, STATUS_FIELD);

        let value = serde_json::to_value(&timeline).unwrap();

        assert!(value.get("status_changes").is_none());
        assert!(value.get("status_summary").is_none());
        assert_eq!(value["current_status"], json!("Done"));
    }

    #[test]
    fn test_summary_without_changes_is_empty() {
        let options = IncludeOptions {
            status_changes: false,
            ..IncludeOptions::default()
        };
        let timeline = ItemTimeline::build("PROJ-1", history(), &options, STATUS_FIELD);

        assert!(timeline.status_summary.is_empty());
    }

    #[test]
    fn test_excluding_created_drops_synthetic_interval() {
        let options = IncludeOptions {
            created: false,
            ..IncludeOptions::default()
        };
        let timeline = ItemTimeline::build("PROJ-1", history(), &options, STATUS_FIELD);

        assert_eq!(timeline.created, None);
        assert_eq!(timeline.status_changes.len(), 2);
        assert_eq!(timeline.status_changes[0].status, "In Progress");
    }

    #[test]
    fn test_batch_result_errors_omitted_when_empty() {
        let result = BatchResult {
            issues: Vec::new(),
            total_count: 0,
            success_count: 0,
            error_count: 0,
            errors: Vec::new(),
        };

        let value: Value = serde_json::to_value(&result).unwrap();
        assert!(value.get("errors").is_none());

        let failed = BatchResult {
            errors: vec![ItemError {
                issue_key: "PROJ-9".to_string(),
                error: "Issue PROJ-9 not found".to_string(),
            }],
            total_count: 1,
            error_count: 1,
            ..result
        };
        let value: Value = serde_json::to_value(&failed).unwrap();
        assert_eq!(value["errors"][0]["issue_key"], json!("PROJ-9"));
    }
}
