//! Utilities for date and time formatting

use chrono::{DateTime, Local, NaiveDateTime};

const DISPLAY: &str = "%d.%m.%Y %H:%M:%S";

/// Format ISO datetime string to DD.MM.YYYY HH:MM:SS format
///
/// RFC 3339 ("2024-03-15T14:02:26.123Z", "2024-03-15T14:02:26+03:00") is
/// shown in the viewer's local time zone. Naive ISO
/// ("2024-03-15T14:02:26.123456") is shown as is. Anything else is returned
/// unchanged.
pub fn format_datetime(datetime_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return dt.with_timezone(&Local).format(DISPLAY).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(datetime_str, "%Y-%m-%dT%H:%M:%S%.f") {
        return dt.format(DISPLAY).to_string();
    }
    datetime_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_format_datetime_in_local_zone() {
        let expected = Utc
            .with_ymd_and_hms(2024, 3, 15, 14, 2, 26)
            .unwrap()
            .with_timezone(&Local)
            .format(DISPLAY)
            .to_string();
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), expected);
    }

    #[test]
    fn test_same_instant_same_display() {
        // один и тот же момент в разных смещениях
        assert_eq!(
            format_datetime("2024-12-31T23:59:59+03:00"),
            format_datetime("2024-12-31T20:59:59Z")
        );
    }

    #[test]
    fn test_format_naive_datetime() {
        assert_eq!(
            format_datetime("2024-01-01T12:30:00.654321"),
            "01.01.2024 12:30:00"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_datetime(""), "");
    }
}
