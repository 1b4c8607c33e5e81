//! Display formatting helpers

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

/// Format a timestamp like "Oct 19, 02:30 PM"
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.format("%b %-d, %I:%M %p").to_string()
}

/// Shorten long strings for single-line labels
pub fn truncate(value: &str, max_chars: usize) -> String {
    if value.chars().count() <= max_chars {
        return value.to_string();
    }
    let kept: String = value.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", kept)
}
