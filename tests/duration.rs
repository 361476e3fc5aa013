#[cfg(test)]
mod tests {
    use chrono::DateTime;
    use jira_timeline::libs::duration::duration_minutes;

    #[test]
    fn test_duration_whole_minutes() {
        let start = DateTime::parse_from_rfc3339("2024-01-01T10:00:00Z").unwrap();
        let end = DateTime::parse_from_rfc3339("2024-01-01T11:30:00Z").unwrap();
        assert_eq!(duration_minutes(&start, &end), 90);
    }

    #[test]
    fn test_duration_truncates_seconds() {
        let start = DateTime::parse_from_rfc3339("2024-01-01T10:00:00Z").unwrap();
        let end = DateTime::parse_from_rfc3339("2024-01-01T10:01:59Z").unwrap();
        assert_eq!(duration_minutes(&start, &end), 1);
    }

    #[test]
    fn test_duration_across_offsets() {
        // Same instant expressed in two offsets
        let start = DateTime::parse_from_rfc3339("2024-01-01T10:00:00+02:00").unwrap();
        let end = DateTime::parse_from_rfc3339("2024-01-01T09:00:00Z").unwrap();
        assert_eq!(duration_minutes(&start, &end), 60);
    }

    #[test]
    fn test_duration_negative_when_reversed() {
        let start = DateTime::parse_from_rfc3339("2024-01-01T11:00:00Z").unwrap();
        let end = DateTime::parse_from_rfc3339("2024-01-01T10:00:00Z").unwrap();
        assert_eq!(duration_minutes(&start, &end), -60);
    }

    #[test]
    fn test_duration_zero() {
        let start = DateTime::parse_from_rfc3339("2024-01-01T10:00:00Z").unwrap();
        assert_eq!(duration_minutes(&start, &start), 0);
    }
}
