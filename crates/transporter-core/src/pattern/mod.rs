//! Pattern data model
//!
//! A [`Pattern`] is the fixed schema of a configuration set: every key it will
//! ever hold, each described by a [`PatternSequence`]. Values change over the
//! lifetime of a pattern, keys never do.

mod builder;
#[allow(clippy::module_inception)] // pattern module in pattern directory is intentional
mod pattern;
mod sequence;

pub use builder::PatternBuilder;
pub use pattern::{NO_PERSISTENCE_SENTINEL, Pattern};
pub use sequence::PatternSequence;
