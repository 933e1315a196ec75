//! Validated pattern construction

use super::pattern::Pattern;
use super::sequence::{PatternSequence, identifiers_match};
use crate::error::{TransporterError, TransporterResult};
use std::collections::BTreeMap;

/// Builder for [`Pattern`]
///
/// `build` rejects:
/// - empty keys or keys outside `a-zA-Z0-9.-_`
/// - the same key declared twice
/// - any identifier (key, CLI flag or env var) that two different sequences
///   would both answer to
#[derive(Debug, Default)]
pub struct PatternBuilder {
    sequences: Vec<(String, PatternSequence)>,
}

/// One identifier a sequence answers to
struct Identifier<'a> {
    key: &'a str,
    text: &'a str,
    case_sensitive: bool,
}

impl PatternBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a sequence under `key`
    pub fn sequence(mut self, key: impl Into<String>, sequence: PatternSequence) -> Self {
        self.sequences.push((key.into(), sequence));
        self
    }

    /// Validate and build the pattern
    pub fn build(self) -> TransporterResult<Pattern> {
        let mut map = BTreeMap::new();
        for (key, seq) in self.sequences {
            validate_key(&key)?;
            if map.contains_key(&key) {
                return Err(TransporterError::invalid_pattern(format!(
                    "key \"{}\" is declared more than once",
                    key
                )));
            }
            map.insert(key, seq);
        }

        check_collisions(&map)?;
        Ok(Pattern::from_sequences_unchecked(map))
    }
}

fn validate_key(key: &str) -> TransporterResult<()> {
    if key.is_empty() {
        return Err(TransporterError::invalid_pattern("key must not be empty"));
    }
    if let Some(bad) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_')))
    {
        return Err(TransporterError::invalid_pattern(format!(
            "key \"{}\" contains invalid character '{}'",
            key, bad
        )));
    }
    Ok(())
}

fn check_collisions(map: &BTreeMap<String, PatternSequence>) -> TransporterResult<()> {
    let identifiers: Vec<Identifier<'_>> = map
        .iter()
        .flat_map(|(key, seq)| {
            let key = key.as_str();
            let own_key = std::iter::once(Identifier {
                key,
                text: key,
                case_sensitive: true,
            });
            let flags = seq.cli_flags.iter().map(move |flag| Identifier {
                key,
                text: flag,
                case_sensitive: seq.cli_case_sensitive,
            });
            let vars = seq.env_vars.iter().map(move |var| Identifier {
                key,
                text: var,
                case_sensitive: seq.env_case_sensitive,
            });
            own_key.chain(flags).chain(vars)
        })
        .collect();

    for (i, a) in identifiers.iter().enumerate() {
        for b in &identifiers[i + 1..] {
            if a.key == b.key {
                continue;
            }
            // Either side folding case is enough for the engine to confuse them.
            if identifiers_match(a.text, b.text, a.case_sensitive && b.case_sensitive) {
                return Err(TransporterError::invalid_pattern(format!(
                    "identifier \"{}\" of \"{}\" collides with \"{}\" of \"{}\"",
                    a.text, a.key, b.text, b.key
                )));
            }
        }
    }

    Ok(())
}
