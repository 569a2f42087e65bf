//! Store Module
//!
//! The key-value store that memoized sums are persisted in.
//!
//! # Backends
//! - [`MemoryStore`] - Process-local table, lost on restart
//! - [`FileStore`] - Table persisted as a JSON document on disk

mod file;
mod memory;
mod record;

use async_trait::async_trait;

use crate::error::Result;

// Re-export public types
pub use file::FileStore;
pub use memory::MemoryStore;
pub use record::{key_for, CachedSum};

// == Public Constants ==
/// Table used when none is configured
pub const DEFAULT_TABLE: &str = "sumtable";

// == Store Trait ==
/// Single-key get/put access to one table of sum records.
///
/// Implementations make each `get` and each `put` atomic on its own. Nothing
/// spans a get and a following put.
#[async_trait]
pub trait SumStore: Send + Sync {
    /// Name of the table this store reads and writes.
    fn table(&self) -> &str;

    /// Looks up a record by id.
    async fn get(&self, id: &str) -> Result<Option<CachedSum>>;

    /// Inserts the record, replacing any record with the same id.
    async fn put(&self, record: CachedSum) -> Result<()>;
}
