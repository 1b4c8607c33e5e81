//! Tubeloader library

pub mod app;
pub mod classifier;
pub mod controller;
pub mod gui;
pub mod history;
pub mod utils;

// Re-export main types for easier use
pub use classifier::{classify, Classification, UrlCategory};
pub use controller::{DownloadController, Notice, PendingDownload, Phase};
pub use gui::{Message, TubeloaderApp, View};
pub use history::{DownloadRecord, DownloadStatus, History, HistorySink};
pub use utils::{AppSettings, TubeloaderError, VideoQuality};
