//! Application configuration

use crate::utils::error::TubeloaderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Destination label shown before the user browses
    pub default_destination: String,

    /// Canned destinations the Browse button draws from
    pub destinations: Vec<String>,

    /// Preselected output quality
    pub quality: VideoQuality,

    /// Simulated processing time for single videos (ms)
    pub video_delay_ms: u64,

    /// Simulated processing time for shorts and playlists (ms)
    pub other_delay_ms: u64,

    /// How long a notice stays on screen (ms)
    pub notice_duration_ms: u64,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_destination: "~/Downloads/YouTube".to_string(),
            destinations: vec![
                "~/Downloads/YouTube".to_string(),
                "~/Videos".to_string(),
                "~/Music/YouTube".to_string(),
                "~/Desktop/Downloads".to_string(),
                "/media/external/YouTube".to_string(),
            ],
            quality: VideoQuality::Highest,
            video_delay_ms: 3000,
            other_delay_ms: 2000,
            notice_duration_ms: 4000,
        }
    }
}

impl AppSettings {
    /// Default config location: `<config dir>/tubeloader/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tubeloader").join("config.toml"))
    }

    /// Load settings from a TOML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, TubeloaderError> {
        let raw = std::fs::read_to_string(path)?;
        let settings: AppSettings = toml::from_str(&raw)?;
        info!("Loaded settings from {}", path.display());
        Ok(settings.validated())
    }

    /// Load from `path` if given, else from the default location.
    ///
    /// An explicit path must exist; a missing default file yields defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, TubeloaderError> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Enforce sane minimums
    pub fn validated(mut self) -> Self {
        self.destinations.retain(|d| !d.trim().is_empty());
        if self.destinations.is_empty() {
            self.destinations = Self::default().destinations;
        }
        if self.default_destination.trim().is_empty() {
            self.default_destination = self.destinations[0].clone();
        }
        if self.notice_duration_ms == 0 {
            self.notice_duration_ms = 1000;
        }
        self
    }

    pub fn notice_duration(&self) -> Duration {
        Duration::from_millis(self.notice_duration_ms)
    }
}

/// Output quality options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoQuality {
    Highest,
    High,
    Medium,
    Low,
    #[serde(rename = "audio")]
    AudioOnly,
}

impl VideoQuality {
    pub const ALL: [VideoQuality; 5] = [
        VideoQuality::Highest,
        VideoQuality::High,
        VideoQuality::Medium,
        VideoQuality::Low,
        VideoQuality::AudioOnly,
    ];

    /// Short tag stored on records
    pub fn as_str(&self) -> &'static str {
        match self {
            VideoQuality::Highest => "highest",
            VideoQuality::High => "high",
            VideoQuality::Medium => "medium",
            VideoQuality::Low => "low",
            VideoQuality::AudioOnly => "audio",
        }
    }

    /// Get string representation for display
    pub fn label(&self) -> &'static str {
        match self {
            VideoQuality::Highest => "Highest (1080p+)",
            VideoQuality::High => "High (720p)",
            VideoQuality::Medium => "Medium (480p)",
            VideoQuality::Low => "Low (360p)",
            VideoQuality::AudioOnly => "Audio Only",
        }
    }

    /// Parse a short tag such as `"audio"`
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|q| q.as_str() == tag)
    }
}

// pick_list renders options through Display
impl fmt::Display for VideoQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
