//! Ordered URL rules

use super::UrlCategory;
use once_cell::sync::Lazy;
use regex::Regex;

/// One URL shape and the category it maps to
pub struct UrlRule {
    pub category: UrlCategory,
    pattern: Regex,
}

impl UrlRule {
    fn new(category: UrlCategory, pattern: &str) -> Self {
        Self {
            category,
            pattern: Regex::new(pattern).unwrap(),
        }
    }

    pub fn matches(&self, input: &str) -> bool {
        self.pattern.is_match(input)
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

/// Rules in evaluation order. Video must stay ahead of short.
pub static RULES: Lazy<[UrlRule; 3]> = Lazy::new(|| {
    [
        UrlRule::new(
            UrlCategory::Video,
            r"^(https?://)?(www\.)?(youtube\.com/watch\?v=|youtu\.be/)([A-Za-z0-9_-]+)(\S*)?$",
        ),
        UrlRule::new(
            UrlCategory::Short,
            r"^(https?://)?(www\.)?(youtube\.com/shorts/|youtu\.be/)([A-Za-z0-9_-]+)(\S*)?$",
        ),
        UrlRule::new(
            UrlCategory::Playlist,
            r"^(https?://)?(www\.)?youtube\.com/playlist\?list=([A-Za-z0-9_-]+)(\S*)?$",
        ),
    ]
});
