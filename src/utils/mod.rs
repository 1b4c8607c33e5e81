//! Utility modules for error handling, configuration and formatting

pub mod config;
pub mod error;
pub mod format;

// Re-export for convenience
pub use config::{AppSettings, VideoQuality};
pub use error::TubeloaderError;
pub use format::{format_timestamp, truncate};
