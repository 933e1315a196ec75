//! Transporter Core Library
//!
//! Merges configuration from a persisted store, environment variables and
//! command line flags into one [`Pattern`], then serves it from a
//! concurrency-safe [`State`].
//!
//! ```no_run
//! use std::sync::Arc;
//! use transporter_core::{
//!     HostInputs, JsonFileStore, Pattern, PatternSequence, TransporterOptions, energize,
//! };
//!
//! # fn main() -> transporter_core::TransporterResult<()> {
//! let pattern = Pattern::builder()
//!     .sequence("user-age", PatternSequence::new("User's Age").with_cli_flags(["a", "age"]))
//!     .build()?;
//!
//! let options = TransporterOptions::new()
//!     .with_env_prefix("T_")
//!     .with_persistence(Arc::new(JsonFileStore::new("transporter.json")));
//!
//! let state = energize(pattern, options, HostInputs::from_process())?;
//! println!("age: {}", state.get("user-age")?);
//! state.materialize()?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;
pub mod pattern;
pub mod persistence;
pub mod resolve;
pub mod state;

// Re-export commonly used types
pub use error::{InputSource, TransporterError, TransporterResult};
pub use loader::{DumpSetting, HostInputs, LayerReport, TransporterOptions, energize};
pub use pattern::{NO_PERSISTENCE_SENTINEL, Pattern, PatternBuilder, PatternSequence};
pub use persistence::{
    JsonFileStore, MemoryStore, PersistedSequence, PersistenceEngine, RawStore, StoredRecord,
};
pub use resolve::{MatchSource, Resolution, apply_external_value, resolve};
pub use state::State;
