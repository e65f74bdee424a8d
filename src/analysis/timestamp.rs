/// Format a second offset as a clock label: `HH:MM:SS` when the offset
/// reaches a full hour, `MM:SS` otherwise. The input is floored, never
/// rounded.
pub fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_timestamp(0.0), "00:00");
    }

    #[test]
    fn test_minutes_and_seconds() {
        assert_eq!(format_timestamp(65.0), "01:05");
        assert_eq!(format_timestamp(119.9), "01:59");
    }

    #[test]
    fn test_with_hours() {
        assert_eq!(format_timestamp(3661.0), "01:01:01");
        assert_eq!(format_timestamp(3600.0), "01:00:00");
    }

    #[test]
    fn test_truncates_fractional_seconds() {
        assert_eq!(format_timestamp(65.999), "01:05");
    }
}
