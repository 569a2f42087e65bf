//! File Store Module
//!
//! Persists a table as a JSON document so records survive restarts.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::{Result, SumError};
use crate::store::{CachedSum, SumStore};

// == File Store ==
/// Table stored at `<dir>/<table>.json` as a map from id to record.
///
/// The whole table is held in memory and the file is rewritten on every put,
/// so a put costs time proportional to the table size. The write lock is held
/// for the duration of that rewrite and every `get` waits behind it. Suited to
/// small tables and single-node deployments, not to high write volume.
#[derive(Debug)]
pub struct FileStore {
    /// Table name
    table: String,
    /// Location of the JSON document
    path: PathBuf,
    /// Records keyed by id
    records: RwLock<HashMap<String, CachedSum>>,
}

impl FileStore {
    // == Open ==
    /// Opens the table in `dir`, creating the directory if needed.
    ///
    /// A missing file is an empty table.
    pub async fn open(dir: impl AsRef<Path>, table: impl Into<String>) -> Result<Self> {
        let table = table.into();
        let dir = dir.as_ref();

        tokio::fs::create_dir_all(dir)
            .await
            .map_err(|e| unavailable(dir, e))?;

        let path = dir.join(format!("{table}.json"));
        let records = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| unavailable(&path, e))?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(unavailable(&path, e)),
        };

        info!("Opened table '{}' at {} ({} records)", table, path.display(), records.len());

        Ok(Self {
            table,
            path,
            records: RwLock::new(records),
        })
    }

    // == Path ==
    /// Returns the location of the JSON document.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // == Persist ==
    /// Writes the table to a temp file and renames it over the document.
    async fn persist(&self, records: &HashMap<String, CachedSum>) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(records).map_err(|e| unavailable(&self.path, e))?;
        let tmp = self.path.with_extension("json.tmp");

        tokio::fs::write(&tmp, bytes)
            .await
            .map_err(|e| unavailable(&tmp, e))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| unavailable(&self.path, e))?;

        debug!("Persisted {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}

#[async_trait]
impl SumStore for FileStore {
    fn table(&self) -> &str {
        &self.table
    }

    async fn get(&self, id: &str) -> Result<Option<CachedSum>> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn put(&self, record: CachedSum) -> Result<()> {
        // Held across the write so concurrent puts reach the file in order.
        let mut records = self.records.write().await;
        let previous = records.insert(record.id.clone(), record.clone());

        if let Err(err) = self.persist(&records).await {
            match previous {
                Some(previous) => records.insert(record.id, previous),
                None => records.remove(&record.id),
            };
            return Err(err);
        }
        Ok(())
    }
}

fn unavailable(path: &Path, err: impl std::fmt::Display) -> SumError {
    SumError::StoreUnavailable(format!("{}: {}", path.display(), err))
}
