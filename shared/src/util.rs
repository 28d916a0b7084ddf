use chrono::{DateTime, Utc};

/// Format Unix millis as `YYYY-MM-DD HH:MM` (UTC) for display
///
/// Out-of-range values fall back to the raw number.
pub fn format_millis(millis: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| millis.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_millis() {
        // 2024-06-01T19:00:00Z
        assert_eq!(format_millis(1_717_268_400_000), "2024-06-01 19:00");
    }

    #[test]
    fn test_format_millis_out_of_range() {
        assert_eq!(format_millis(i64::MAX), i64::MAX.to_string());
    }
}
