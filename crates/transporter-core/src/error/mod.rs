//! Error types for Transporter
//!
//! Every fallible operation in the core returns [`TransporterResult`]. Only
//! [`TransporterError::NotFound`], [`TransporterError::Persistence`],
//! [`TransporterError::InvalidPattern`] and [`TransporterError::RequiredMissing`]
//! ever reach a caller; load and input problems are logged by the loader
//! pipeline and skipped.

mod constructors;
mod conversions;
mod types;

pub use types::{InputSource, TransporterError, TransporterResult};
