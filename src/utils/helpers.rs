//! Helper functions and utilities
//!
//! This module contains common helper functions used throughout the crate.

use std::sync::OnceLock;
use chrono::{NaiveDateTime, NaiveDate};
use regex::Regex;

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern is valid")
    })
}

/// Validate email format
pub fn is_valid_email(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Format a lecture time for list display, e.g. `Mar 01, 2025 6:30 PM`
pub fn format_lecture_time(timestamp: NaiveDateTime) -> String {
    timestamp.format("%b %d, %Y %-I:%M %p").to_string()
}

/// Format a lecture date only, e.g. `2025-03-01`
pub fn format_lecture_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a lecture timestamp as typed by an operator.
///
/// Accepts `2025-03-01T18:30`, `2025-03-01T18:30:00` and the same with a
/// space instead of `T`.
pub fn parse_lecture_time(input: &str) -> Option<NaiveDateTime> {
    let input = input.trim();
    ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
}

/// Format an attendance percentage with one decimal place
pub fn format_percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Truncate text to a maximum length with ellipsis
pub fn truncate_text(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_length.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Normalize whitespace in text
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Treat blank strings as absent
pub fn non_blank(text: Option<String>) -> Option<String> {
    text.map(|t| t.trim().to_string()).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("ada@club.example.org"));
        assert!(!is_valid_email("ada@club"));
        assert!(!is_valid_email("ada club@example.org"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_parse_lecture_time() {
        let expected = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap().and_hms_opt(18, 30, 0).unwrap();
        assert_eq!(parse_lecture_time("2025-03-01T18:30"), Some(expected));
        assert_eq!(parse_lecture_time(" 2025-03-01 18:30:00 "), Some(expected));
        assert_eq!(parse_lecture_time("next tuesday"), None);
    }

    #[test]
    fn test_format_lecture_time() {
        let ts = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap().and_hms_opt(18, 30, 0).unwrap();
        assert_eq!(format_lecture_time(ts), "Mar 01, 2025 6:30 PM");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("hello", 10), "hello");
        assert_eq!(truncate_text("hello world", 8), "hello...");
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(non_blank(Some(" x ".to_string())), Some("x".to_string()));
        assert_eq!(non_blank(None), None);
    }
}
