//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the list screens.
//! Absent and malformed values render the shared placeholder; cells
//! never show "Invalid Date".

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::PLACEHOLDER;

/// Format an ISO date string to DD.MM.YYYY.
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return PLACEHOLDER.to_string();
    }
    let date_part = trimmed.split('T').next().unwrap_or(trimmed);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d.%m.%Y").to_string(),
        Err(_) => PLACEHOLDER.to_string(),
    }
}

/// Format an ISO datetime string to DD.MM.YYYY HH:MM:SS.
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02:26"
pub fn format_datetime(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return PLACEHOLDER.to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return dt.format("%d.%m.%Y %H:%M:%S").to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S") {
        return dt.format("%d.%m.%Y %H:%M:%S").to_string();
    }
    PLACEHOLDER.to_string()
}

/// Date formatting over an optional field; `None` renders the placeholder.
pub fn format_date_opt(raw: Option<&str>) -> String {
    match raw {
        Some(value) => format_date(value),
        None => PLACEHOLDER.to_string(),
    }
}

/// Datetime formatting over an optional field; `None` renders the placeholder.
pub fn format_datetime_opt(raw: Option<&str>) -> String {
    match raw {
        Some(value) => format_datetime(value),
        None => PLACEHOLDER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15.03.2024 14:02:26"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59Z"),
            "31.12.2024 23:59:59"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59"),
            "31.12.2024 23:59:59"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_malformed_input_renders_placeholder() {
        assert_eq!(format_date("invalid"), "-");
        assert_eq!(format_date("2024-13-45"), "-");
        assert_eq!(format_datetime("invalid"), "-");
        assert_eq!(format_date(""), "-");
        assert_eq!(format_datetime("   "), "-");
    }

    #[test]
    fn test_optional_variants() {
        assert_eq!(format_date_opt(None), "-");
        assert_eq!(format_date_opt(Some("2024-03-15")), "15.03.2024");
        assert_eq!(format_datetime_opt(None), "-");
    }
}
