// src/services/cache.rs
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::Record;

/// One complete upstream response and when it was stored.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub records: Arc<Vec<Record>>,
    pub fetched_at: DateTime<Utc>,
}

/// Single-slot store for the most recent successful fetch.
///
/// `set` swaps the whole snapshot under the write lock, so readers see either
/// the previous sequence or the new one, never a mix.
#[derive(Debug, Default)]
pub struct RecordCache {
    slot: RwLock<Option<Snapshot>>,
}

impl RecordCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> Option<Snapshot> {
        self.slot.read().await.clone()
    }

    pub async fn set(&self, records: Vec<Record>) -> Snapshot {
        let snapshot = Snapshot {
            records: Arc::new(records),
            fetched_at: Utc::now(),
        };
        *self.slot.write().await = Some(snapshot.clone());
        snapshot
    }
}
