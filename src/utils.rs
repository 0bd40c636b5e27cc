//! Utility functions for the stats engine

use chrono::{TimeZone, Utc};

/// Render a millisecond epoch timestamp for the report tables.
/// Unrepresentable values fall back to the raw number.
pub fn format_timestamp(epoch_ms: i64) -> String {
    match Utc.timestamp_millis_opt(epoch_ms).single() {
        Some(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        None => epoch_ms.to_string(),
    }
}

/// Render an elapsed duration in milliseconds as `M:SS`.
pub fn format_duration(duration_ms: i64) -> String {
    let total_seconds = duration_ms / 1000;
    format!("{}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// Render an optional ratio as a percentage, with a placeholder when the
/// ratio is undefined (zero denominator).
pub fn format_percent(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{:.1}%", r * 100.0),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(61_000), "1:01");
        assert_eq!(format_duration(3_600_000), "60:00");
        assert_eq!(format_duration(59_999), "0:59");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp(0), "1970-01-01 00:00");
        // Out-of-range values fall back to the raw number
        assert_eq!(format_timestamp(i64::MAX), i64::MAX.to_string());
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(Some(0.5)), "50.0%");
        assert_eq!(format_percent(Some(1.0)), "100.0%");
        assert_eq!(format_percent(None), "-");
    }
}
