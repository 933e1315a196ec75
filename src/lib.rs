//! Transporter
//!
//! Layered configuration for Rust programs. A [`Pattern`] declares every key a
//! program understands; [`energize`] fills it from a persisted store, prefixed
//! environment variables and command line flags (in that order of increasing
//! precedence) and publishes the result as a [`State`].
//!
//! This crate re-exports [`transporter_core`]; see there for details.

pub use transporter_core::*;

/// Convenient re-exports for common usage patterns.
pub mod prelude {
    pub use transporter_core::{
        HostInputs, JsonFileStore, MemoryStore, Pattern, PatternSequence, PersistenceEngine,
        State, TransporterError, TransporterOptions, TransporterResult, energize,
    };
}
