//! Resolution engine
//!
//! Maps one external identifier (a store key, a stripped environment name or
//! a CLI flag name) to the sequence it belongs to and applies the value.
//!
//! For each sequence, in key order, the identifier is tested against:
//! 1. the sequence key (exact)
//! 2. each CLI flag alias
//! 3. each environment alias
//!
//! The first sequence with a satisfied test wins and scanning stops.

use crate::pattern::Pattern;
use std::fmt;
use tracing::{debug, trace, warn};

/// Which test matched an identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    Key,
    CliFlag,
    EnvVar,
}

impl fmt::Display for MatchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key => write!(f, "key"),
            Self::CliFlag => write!(f, "cli flag"),
            Self::EnvVar => write!(f, "env var"),
        }
    }
}

/// Outcome of a successful lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Key of the matched sequence
    pub key: String,
    pub source: MatchSource,
}

/// Find the sequence `identifier` refers to without changing anything
pub fn resolve(pattern: &Pattern, identifier: &str) -> Option<Resolution> {
    pattern.iter().find_map(|(key, seq)| {
        let source = if identifier == key {
            MatchSource::Key
        } else if seq.cli_flag_for(identifier).is_some() {
            MatchSource::CliFlag
        } else if seq.env_var_for(identifier).is_some() {
            MatchSource::EnvVar
        } else {
            return None;
        };
        Some(Resolution {
            key: key.to_string(),
            source,
        })
    })
}

/// Apply `value` to the sequence `identifier` refers to
///
/// Returns `true` when a sequence matched. An unmatched identifier leaves the
/// pattern untouched; the caller is expected to discard the value.
pub fn apply_external_value(pattern: &mut Pattern, identifier: &str, value: &str) -> bool {
    trace!("Searching for pattern matching \"{}\"", identifier);

    let Some(resolution) = resolve(pattern, identifier) else {
        warn!("No pattern was located for \"{}\"", identifier);
        return false;
    };

    pattern.set_value(&resolution.key, value);
    debug!(
        "Assigned \"{}\" via {} \"{}\"",
        resolution.key, resolution.source, identifier
    );
    true
}
