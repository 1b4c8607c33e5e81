//! In-memory download history

use super::record::DownloadRecord;
use std::collections::VecDeque;
use tracing::debug;

/// Receiver for completed records
pub trait HistorySink {
    fn record(&mut self, record: DownloadRecord);
}

impl<F> HistorySink for F
where
    F: FnMut(DownloadRecord),
{
    fn record(&mut self, record: DownloadRecord) {
        self(record)
    }
}

/// Session history, most recent first
#[derive(Debug, Clone, Default)]
pub struct History {
    items: VecDeque<DownloadRecord>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> impl Iterator<Item = &DownloadRecord> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn latest(&self) -> Option<&DownloadRecord> {
        self.items.front()
    }

    pub fn get(&self, id: &str) -> Option<&DownloadRecord> {
        self.items.iter().find(|r| r.id == id)
    }
}

impl HistorySink for History {
    fn record(&mut self, record: DownloadRecord) {
        debug!("History +{} ({} total)", record.id, self.items.len() + 1);
        self.items.push_front(record);
    }
}
