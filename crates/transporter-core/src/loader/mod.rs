//! Loader pipeline
//!
//! [`energize`] layers values onto a pattern in a fixed order, later layers
//! overriding earlier ones:
//! - the persisted store (when a persistence engine is configured)
//! - environment variables carrying the configured prefix
//! - command line flags
//!
//! Broken or unknown inputs are logged and skipped. The only failure is a
//! required sequence left without a value.

mod diagnostics;
mod energize;
mod inputs;
mod layers;
mod options;

pub use energize::energize;
pub use inputs::HostInputs;
pub use layers::LayerReport;
pub use options::{
    DEFAULT_DUMP_CLI_ARGUMENTS, DEFAULT_DUMP_ENVIRONMENT, DumpSetting, TransporterOptions,
};
