#[cfg(test)]
mod tests {
    use jira_timeline::libs::formatter::format_duration;

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(0), "0m");
    }

    #[test]
    fn test_format_duration_negative() {
        assert_eq!(format_duration(-10), "0m");
        assert_eq!(format_duration(-1440), "0m");
    }

    #[test]
    fn test_format_duration_minutes_only() {
        assert_eq!(format_duration(1), "1m");
        assert_eq!(format_duration(45), "45m");
        assert_eq!(format_duration(59), "59m");
    }

    #[test]
    fn test_format_duration_hours_and_minutes() {
        assert_eq!(format_duration(60), "1h 0m");
        assert_eq!(format_duration(90), "1h 30m");
        assert_eq!(format_duration(1439), "23h 59m");
    }

    #[test]
    fn test_format_duration_days_keep_hours() {
        assert_eq!(format_duration(1440), "1d 0h 0m");
        assert_eq!(format_duration(1500), "1d 1h 0m");
        assert_eq!(format_duration(4320), "3d 0h 0m");
        assert_eq!(format_duration(1441), "1d 0h 1m");
    }

    #[test]
    fn test_format_duration_large_values() {
        // Days never roll up into weeks
        assert_eq!(format_duration(30 * 1440 + 125), "30d 2h 5m");
    }
}
