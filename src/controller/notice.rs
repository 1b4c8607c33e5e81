//! Transient user-facing notices

use crate::classifier::UrlCategory;
use crate::utils::error::TubeloaderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Short message shown after a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn downloaded(category: UrlCategory) -> Self {
        let noun = if category.is_playlist() {
            "Playlist"
        } else {
            "Video"
        };
        Self {
            kind: NoticeKind::Success,
            message: format!("{} downloaded successfully!", noun),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

impl From<&TubeloaderError> for Notice {
    fn from(err: &TubeloaderError) -> Self {
        Self::error(err.to_string())
    }
}
