//! Memory Store Module
//!
//! Process-local store backed by a HashMap.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::store::{CachedSum, SumStore};

// == Memory Store ==
/// In-memory table of sum records.
///
/// Cloning yields another handle onto the same table.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    /// Table name
    table: String,
    /// Records keyed by id
    records: Arc<RwLock<HashMap<String, CachedSum>>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty table with the given name.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    // == Length ==
    /// Returns the number of stored records.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if no record has been stored.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl SumStore for MemoryStore {
    fn table(&self) -> &str {
        &self.table
    }

    async fn get(&self, id: &str) -> Result<Option<CachedSum>> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn put(&self, record: CachedSum) -> Result<()> {
        self.records.write().await.insert(record.id.clone(), record);
        Ok(())
    }
}
