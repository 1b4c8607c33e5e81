//! URL classification for pasted YouTube links

pub mod patterns;

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

pub use patterns::{UrlRule, RULES};

/// Kind of content a URL points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrlCategory {
    Video,
    Short,
    Playlist,
    /// Input matched none of the known shapes
    #[serde(rename = "none")]
    Unrecognized,
}

impl UrlCategory {
    /// Lowercase tag, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            UrlCategory::Video => "video",
            UrlCategory::Short => "short",
            UrlCategory::Playlist => "playlist",
            UrlCategory::Unrecognized => "none",
        }
    }

    /// Capitalized label for the "Detected type" caption
    pub fn label(&self) -> &'static str {
        match self {
            UrlCategory::Video => "Video",
            UrlCategory::Short => "Short",
            UrlCategory::Playlist => "Playlist",
            UrlCategory::Unrecognized => "Unknown",
        }
    }

    pub fn is_playlist(&self) -> bool {
        matches!(self, UrlCategory::Playlist)
    }
}

impl fmt::Display for UrlCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of classifying a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub is_valid: bool,
    pub category: UrlCategory,
}

impl Classification {
    pub const INVALID: Classification = Classification {
        is_valid: false,
        category: UrlCategory::Unrecognized,
    };

    fn matched(category: UrlCategory) -> Self {
        Self {
            is_valid: true,
            category,
        }
    }
}

impl Default for Classification {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Classify `input` against the ordered rule table.
///
/// The first matching rule wins. A `youtu.be/` link satisfies the video rule
/// before the short rule is consulted, so short links always come back as
/// [`UrlCategory::Video`].
pub fn classify(input: &str) -> Classification {
    for rule in RULES.iter() {
        if rule.matches(input) {
            debug!("Classified {:?} as {}", input, rule.category);
            return Classification::matched(rule.category);
        }
    }
    Classification::INVALID
}
