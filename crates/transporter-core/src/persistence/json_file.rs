//! JSON file persistence engine

use super::{PersistenceEngine, RawStore, encode_pattern};
use crate::error::{TransporterError, TransporterResult};
use crate::pattern::Pattern;
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Stores a pattern as one pretty-printed JSON object
///
/// ```json
/// {
///   "user-age": {
///     "Name": "User's Age",
///     "Description": "",
///     "Required": false,
///     "DisablePersistence": false,
///     "Value": "21"
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    file_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PersistenceEngine for JsonFileStore {
    fn load(&self) -> TransporterResult<RawStore> {
        let _guard = self.file_lock.lock();
        let path_str = self.path.display().to_string();
        debug!("Loading JSON store from {}", path_str);

        if !self.path.exists() {
            warn!("JSON store {} does not exist", path_str);
            return Err(TransporterError::load_with_context(
                "json file does not exist",
                path_str,
            ));
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            TransporterError::load_with_context(format!("Failed to read json file: {}", e), &path_str)
        })?;

        if content.trim().is_empty() {
            return Ok(RawStore::new());
        }

        let raw: RawStore = serde_json::from_str(&content).map_err(|e| {
            TransporterError::load_with_context(format!("Failed to parse json file: {}", e), &path_str)
        })?;

        info!("Loaded {} records from {}", raw.len(), path_str);
        Ok(raw)
    }

    fn save(&self, pattern: &Pattern) -> TransporterResult<()> {
        let _guard = self.file_lock.lock();
        let path_str = self.path.display().to_string();

        let raw = encode_pattern(pattern)?;
        let content = serde_json::to_string_pretty(&raw).map_err(|e| {
            TransporterError::persistence_with_context(format!("Failed to serialize: {}", e), &path_str)
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                TransporterError::io_with_path(
                    format!("Failed to create directory: {}", e),
                    parent.display().to_string(),
                )
            })?;
        }

        fs::write(&self.path, content)
            .map_err(|e| TransporterError::io_with_path(format!("Failed to write: {}", e), &path_str))?;

        info!("Saved {} sequences to {}", pattern.len(), path_str);
        Ok(())
    }
}
