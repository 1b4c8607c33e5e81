//! Form state owned by the controller

use crate::classifier::{classify, Classification, UrlCategory};
use crate::utils::config::VideoQuality;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
}

/// Everything the download form shows
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub url: String,
    pub quality: VideoQuality,
    pub destination: String,
    pub classification: Classification,
    pub phase: Phase,
}

impl FormState {
    pub fn new(quality: VideoQuality, destination: String) -> Self {
        Self {
            url: String::new(),
            quality,
            destination,
            classification: Classification::INVALID,
            phase: Phase::Idle,
        }
    }

    pub fn set_url(&mut self, url: String) {
        self.classification = classify(&url);
        self.url = url;
    }

    pub fn clear_url(&mut self) {
        self.url.clear();
        self.classification = Classification::INVALID;
    }

    pub fn is_valid(&self) -> bool {
        self.classification.is_valid
    }

    pub fn category(&self) -> UrlCategory {
        self.classification.category
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Whether the submit button should accept presses
    pub fn can_submit(&self) -> bool {
        self.is_valid() && !self.is_loading()
    }
}
