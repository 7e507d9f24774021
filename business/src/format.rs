//! Display formatters for customer cells.

use chrono::{DateTime, NaiveDate, Utc};

/// Text shown in a cell, optionally with a link target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellText {
    pub text: String,
    pub link: Option<String>,
}

impl CellText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: None,
        }
    }

    pub fn linked(text: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(link.into()),
        }
    }
}

/// Formats a phone number as `(555) 123-4567` with a `tel:` link.
///
/// North American numbers (10 digits, or 11 with a leading 1) are pretty-printed;
/// anything else is shown as typed.
pub fn format_phone(value: &str) -> CellText {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return CellText::plain("");
    }

    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    let national = match digits.len() {
        10 => Some(digits.as_str()),
        11 if digits.starts_with('1') => Some(&digits[1..]),
        _ => None,
    };

    match national {
        Some(n) => CellText::linked(
            format!("({}) {}-{}", &n[..3], &n[3..6], &n[6..]),
            format!("tel:+1{n}"),
        ),
        None if digits.is_empty() => CellText::plain(trimmed),
        None => CellText::linked(trimmed, format!("tel:{digits}")),
    }
}

/// Formats an email address with a `mailto:` link.
pub fn format_email(value: &str) -> CellText {
    let trimmed = value.trim();
    if trimmed.contains('@') {
        CellText::linked(trimmed, format!("mailto:{trimmed}"))
    } else {
        CellText::plain(trimmed)
    }
}

/// Formats an ISO 8601 timestamp or date as `YYYY-MM-DD`.
///
/// Unparseable input is shown unchanged.
pub fn format_date(value: &str) -> CellText {
    let trimmed = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return CellText::plain(
            timestamp
                .with_timezone(&Utc)
                .format("%Y-%m-%d")
                .to_string(),
        );
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return CellText::plain(date.format("%Y-%m-%d").to_string());
    }
    CellText::plain(trimmed)
}
