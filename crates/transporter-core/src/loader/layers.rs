//! The three input layers

use crate::error::{InputSource, TransporterError, TransporterResult};
use crate::pattern::Pattern;
use crate::persistence::{PersistenceEngine, StoredRecord};
use crate::resolve::apply_external_value;
use tracing::{debug, warn};

/// Counts for one applied layer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayerReport {
    /// Values assigned to a sequence
    pub applied: usize,
    /// Well-formed entries that matched no sequence
    pub unresolved: usize,
    /// Entries without a usable name/value
    pub malformed: usize,
    /// Store records skipped because persistence is disabled
    pub skipped: usize,
}

impl LayerReport {
    fn record(&mut self, matched: bool) {
        if matched {
            self.applied += 1;
        } else {
            self.unresolved += 1;
        }
    }

    fn malformed(&mut self, error: &TransporterError) {
        warn!("{}, skipping", error);
        self.malformed += 1;
    }
}

/// Apply values from the persisted store
///
/// A store that fails to load is logged and treated as empty.
pub(super) fn apply_store_layer(pattern: &mut Pattern, engine: &dyn PersistenceEngine) -> LayerReport {
    let mut report = LayerReport::default();

    let raw = match engine.load() {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Persisted store failed to load, continuing without it: {}", e);
            return report;
        }
    };

    for (key, record) in &raw {
        let record = match StoredRecord::decode(key, record) {
            Ok(record) => record,
            Err(e) => {
                report.malformed(&e);
                continue;
            }
        };

        match record.applicable_value(key) {
            Ok(Some(value)) => report.record(apply_external_value(pattern, key, value)),
            Ok(None) => {
                debug!("Store record \"{}\" has persistence disabled", key);
                report.skipped += 1;
            }
            Err(e) => report.malformed(&e),
        }
    }

    report
}

/// Split `PREFIXname=value` into `(name, value)`
///
/// `None` when the entry does not carry the prefix.
fn parse_env_entry<'a>(
    entry: &'a str,
    prefix: &str,
) -> Option<TransporterResult<(&'a str, &'a str)>> {
    let stripped = entry.strip_prefix(prefix)?;
    Some(match stripped.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        Some(_) => Err(TransporterError::malformed(
            format!("environment entry \"{}\" has an empty name", entry),
            InputSource::Environment,
        )),
        None => Err(TransporterError::malformed(
            format!("environment entry \"{}\" has no '='", entry),
            InputSource::Environment,
        )),
    })
}

/// Apply prefixed environment entries
pub(super) fn apply_env_layer(pattern: &mut Pattern, env: &[String], prefix: &str) -> LayerReport {
    let mut report = LayerReport::default();

    for entry in env {
        match parse_env_entry(entry, prefix) {
            None => continue,
            Some(Ok((name, value))) => {
                debug!("Environment entry found: {} = {}", name, value);
                report.record(apply_external_value(pattern, name, value));
            }
            Some(Err(e)) => report.malformed(&e),
        }
    }

    report
}

/// Flag name with its `--` or `-` marker removed
fn flag_name(arg: &str) -> Option<&str> {
    let name = arg.strip_prefix("--").or_else(|| arg.strip_prefix('-'))?;
    (!name.is_empty()).then_some(name)
}

/// Apply `--flag value` pairs with a single forward cursor
///
/// A flag consumes the following token only when it matched a sequence.
/// Otherwise that token is scanned again as an argument of its own.
pub(super) fn apply_cli_layer(pattern: &mut Pattern, args: &[String]) -> LayerReport {
    let mut report = LayerReport::default();
    let mut cursor = 0;

    while cursor < args.len() {
        let arg = &args[cursor];
        cursor += 1;

        let Some(name) = flag_name(arg) else {
            report.malformed(&TransporterError::malformed(
                format!("argument \"{}\" is not a flag", arg),
                InputSource::CommandLine,
            ));
            continue;
        };

        let Some(value) = args.get(cursor) else {
            report.malformed(&TransporterError::malformed(
                format!("flag \"{}\" has no value", name),
                InputSource::CommandLine,
            ));
            continue;
        };

        let matched = apply_external_value(pattern, name, value);
        report.record(matched);
        if matched {
            cursor += 1;
        }
    }

    report
}
