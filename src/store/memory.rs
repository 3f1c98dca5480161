//! In-memory record store.
//!
//! Every operation takes the store's single mutex for its whole critical
//! section and returns owned data, so callers never hold the lock while
//! serializing a response.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::StoreError;

use super::id::IdGenerator;
use super::record::ImageRecord;

// =============================================================================
// RecordStore Trait
// =============================================================================

/// Storage backend for image records.
///
/// Implementations must make each call atomic with respect to every other
/// call: no caller may observe a partially applied insert.
#[async_trait]
pub trait RecordStore: Send + Sync + 'static {
    /// Store `record` under a freshly generated id and return that id.
    ///
    /// Any id already present on `record` is discarded.
    async fn insert(&self, record: ImageRecord) -> String;

    /// Snapshot of every stored record, in no particular order.
    async fn get_all(&self) -> Vec<ImageRecord>;

    /// Look up a record by exact id.
    async fn get(&self, id: &str) -> Result<ImageRecord, StoreError>;

    /// Snapshot of every stored id.
    async fn list_ids(&self) -> Vec<String>;

    /// Number of stored records.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

// =============================================================================
// MemoryStore
// =============================================================================

/// A [`RecordStore`] backed by a mutex-guarded `HashMap`.
///
/// Records live until the process exits.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, ImageRecord>>,
    ids: IdGenerator,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn insert(&self, mut record: ImageRecord) -> String {
        let id = self.ids.next_id();
        record.id = id.clone();

        let mut records = self.records.lock().await;
        records.insert(id.clone(), record);
        debug!(id = %id, total = records.len(), "Inserted image record");

        id
    }

    async fn get_all(&self) -> Vec<ImageRecord> {
        let records = self.records.lock().await;
        records.values().cloned().collect()
    }

    async fn get(&self, id: &str) -> Result<ImageRecord, StoreError> {
        let records = self.records.lock().await;
        records.get(id).cloned().ok_or_else(|| StoreError::NotFound {
            id: id.to_string(),
        })
    }

    async fn list_ids(&self) -> Vec<String> {
        let records = self.records.lock().await;
        records.keys().cloned().collect()
    }

    async fn len(&self) -> usize {
        self.records.lock().await.len()
    }
}

// =============================================================================
// Tests
// =============================================================================
