//! In-memory persistence engine

use super::{PersistenceEngine, RawStore, encode_pattern};
use crate::error::TransporterResult;
use crate::pattern::Pattern;
use parking_lot::Mutex;

/// Keeps raw records in memory
///
/// Useful for tests and for hosts that only need materialize within one
/// process. Saves replace the whole record set.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    records: RawStore,
    saves: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-existing records
    pub fn with_records(records: RawStore) -> Self {
        Self {
            inner: Mutex::new(MemoryInner { records, saves: 0 }),
        }
    }

    /// Copy of the current records
    pub fn records(&self) -> RawStore {
        self.inner.lock().records.clone()
    }

    /// Insert or replace one raw record
    pub fn insert_raw(&self, key: impl Into<String>, record: serde_json::Value) {
        self.inner.lock().records.insert(key.into(), record);
    }

    /// Number of successful saves
    pub fn save_count(&self) -> usize {
        self.inner.lock().saves
    }
}

impl PersistenceEngine for MemoryStore {
    fn load(&self) -> TransporterResult<RawStore> {
        Ok(self.records())
    }

    fn save(&self, pattern: &Pattern) -> TransporterResult<()> {
        let records = encode_pattern(pattern)?;
        let mut inner = self.inner.lock();
        inner.records = records;
        inner.saves += 1;
        Ok(())
    }
}
