//! Fabricated download records

use crate::classifier::UrlCategory;
use crate::utils::config::VideoQuality;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Result of one simulated submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadRecord {
    pub id: String,
    pub url: String,
    pub title: String,
    pub quality: VideoQuality,
    pub destination: String,
    pub created_at: DateTime<Local>,
    pub status: DownloadStatus,
    pub thumbnail_url: String,
    pub category: UrlCategory,
}

/// Record status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DownloadStatus {
    Completed,
    Failed,
    Processing,
}

impl DownloadStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DownloadStatus::Completed => "Completed",
            DownloadStatus::Failed => "Failed",
            DownloadStatus::Processing => "Processing",
        }
    }
}
