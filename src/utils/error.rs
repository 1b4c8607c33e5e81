//! Error handling for Tubeloader

use crate::classifier::UrlCategory;
use thiserror::Error;

/// Main error type for Tubeloader
#[derive(Debug, Error)]
pub enum TubeloaderError {
    #[error("Please enter a valid YouTube URL")]
    InvalidUrl(String),

    #[error("A download is already in progress")]
    InProgress,

    #[error("No download is in progress")]
    NotLoading,

    #[error("Failed to download {}", noun(.category))]
    DownloadFailed { category: UrlCategory },

    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn noun(category: &UrlCategory) -> &'static str {
    if category.is_playlist() {
        "playlist"
    } else {
        "video"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url_message_hides_input() {
        let err = TubeloaderError::InvalidUrl("not a url".to_string());
        assert_eq!(err.to_string(), "Please enter a valid YouTube URL");
    }

    #[test]
    fn test_download_failed_message() {
        let playlist = TubeloaderError::DownloadFailed {
            category: UrlCategory::Playlist,
        };
        let short = TubeloaderError::DownloadFailed {
            category: UrlCategory::Short,
        };
        assert_eq!(playlist.to_string(), "Failed to download playlist");
        assert_eq!(short.to_string(), "Failed to download video");
    }
}
