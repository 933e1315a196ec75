//! Persistence capability
//!
//! The core never reads or writes storage itself. A [`PersistenceEngine`]
//! hands the loader a raw key to record mapping and receives the redacted
//! pattern on materialize. Two engines ship with the crate: [`JsonFileStore`]
//! and [`MemoryStore`].

mod json_file;
mod memory;
mod record;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use record::{PersistedSequence, StoredRecord, encode_pattern};

use crate::error::TransporterResult;
use crate::pattern::Pattern;
use std::collections::BTreeMap;

/// Raw persisted records keyed by sequence key
pub type RawStore = BTreeMap<String, serde_json::Value>;

/// Durable storage for a pattern
///
/// Implementations sharing one location across several states must serialize
/// their own access. Calls may block; no timeout applies at this layer.
pub trait PersistenceEngine: Send + Sync {
    /// Read every stored record
    fn load(&self) -> TransporterResult<RawStore>;

    /// Write a pattern whose persistence-disabled values are already redacted
    fn save(&self, pattern: &Pattern) -> TransporterResult<()>;
}
