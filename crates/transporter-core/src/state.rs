//! Snapshot state
//!
//! A [`State`] holds two pattern snapshots:
//! - **Active**: the current truth, read by `get` and replaced by `set`
//! - **Stored**: the truth as of the last successful materialize
//!
//! Snapshots are immutable once published and are swapped as whole units, so
//! readers never lock and never observe a partially updated pattern. Writers
//! copy the Active snapshot, change the copy and publish it while holding a
//! writer mutex, which keeps concurrent writers from losing each other's
//! updates.

use crate::error::{TransporterError, TransporterResult};
use crate::pattern::Pattern;
use crate::persistence::PersistenceEngine;
use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;
use tracing::{info, trace, warn};

/// Resolved configuration shared across threads
pub struct State {
    active: ArcSwap<Pattern>,
    stored: ArcSwap<Pattern>,
    writer: Mutex<()>,
    persistence: Option<Arc<dyn PersistenceEngine>>,
}

impl State {
    /// Publish `pattern` as both the Active and Stored snapshot
    pub(crate) fn new(pattern: Pattern, persistence: Option<Arc<dyn PersistenceEngine>>) -> Self {
        let snapshot = Arc::new(pattern);
        Self {
            active: ArcSwap::new(Arc::clone(&snapshot)),
            stored: ArcSwap::new(snapshot),
            writer: Mutex::new(()),
            persistence,
        }
    }

    /// Current value of `key`
    pub fn get(&self, key: &str) -> TransporterResult<String> {
        trace!("Getting value for key \"{}\"", key);
        match self.active.load().value(key) {
            Some(value) => Ok(value.to_string()),
            None => {
                warn!("Key \"{}\" does not exist", key);
                Err(TransporterError::not_found(key))
            }
        }
    }

    /// Replace the value of an existing key
    pub fn set(&self, key: &str, value: impl Into<String>) -> TransporterResult<()> {
        trace!("Setting a new value for key \"{}\"", key);
        let _guard = self.writer.lock();

        let current = self.active.load_full();
        if !current.contains_key(key) {
            warn!("Key \"{}\" does not exist", key);
            return Err(TransporterError::not_found(key));
        }

        let mut next = Pattern::clone(&current);
        next.set_value(key, value);
        self.active.store(Arc::new(next));
        Ok(())
    }

    /// Redact and persist the Active snapshot
    ///
    /// Every persistence-disabled value is replaced by
    /// [`NO_PERSISTENCE_SENTINEL`](crate::NO_PERSISTENCE_SENTINEL). The
    /// redacted pattern becomes the Active snapshot before it is saved, so
    /// those values read back as the sentinel afterwards. On a successful save
    /// it also becomes the Stored snapshot.
    ///
    /// # Errors
    ///
    /// Save errors are returned unchanged. Without a persistence engine this
    /// returns [`TransporterError::Persistence`] and changes nothing.
    pub fn materialize(&self) -> TransporterResult<()> {
        let Some(engine) = self.persistence.as_deref() else {
            return Err(TransporterError::persistence(
                "no persistence engine configured",
            ));
        };

        let _guard = self.writer.lock();
        let redacted = Arc::new(self.active.load().redacted());
        self.active.store(Arc::clone(&redacted));

        engine.save(&redacted)?;
        self.stored.store(redacted);
        info!("Materialized");
        Ok(())
    }

    /// Exchange the Active and Stored roles
    ///
    /// Currently a no-op.
    pub fn switch(&self) -> TransporterResult<()> {
        Ok(())
    }

    /// The whole Active snapshot
    pub fn snapshot(&self) -> Arc<Pattern> {
        self.active.load_full()
    }

    /// The whole Stored snapshot
    pub fn stored_snapshot(&self) -> Arc<Pattern> {
        self.stored.load_full()
    }

    pub fn has_persistence(&self) -> bool {
        self.persistence.is_some()
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("active", &self.active.load_full())
            .field("stored", &self.stored.load_full())
            .field("persistence", &self.persistence.is_some())
            .finish()
    }
}
