//! Download history records and storage

pub mod record;
pub mod store;

pub use record::{DownloadRecord, DownloadStatus};
pub use store::{History, HistorySink};
