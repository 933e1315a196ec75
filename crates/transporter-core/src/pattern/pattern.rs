//! The pattern: key to sequence mapping

use super::builder::PatternBuilder;
use super::sequence::PatternSequence;
use crate::error::TransporterResult;
use std::collections::BTreeMap;

/// Value written in place of every persistence-disabled sequence on materialize
pub const NO_PERSISTENCE_SENTINEL: &str = "no persistence";

/// A named set of configuration sequences
///
/// Sequences are kept in lexicographic key order. The resolution engine scans
/// them in that order, so the winner for any identifier is deterministic even
/// when a pattern skipped collision checks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pattern {
    sequences: BTreeMap<String, PatternSequence>,
}

impl Pattern {
    /// Start building a validated pattern
    pub fn builder() -> PatternBuilder {
        PatternBuilder::new()
    }

    /// Build a validated pattern from `(key, sequence)` pairs
    ///
    /// Rejects invalid keys and identifiers shared between sequences.
    pub fn new<I, K>(sequences: I) -> TransporterResult<Self>
    where
        I: IntoIterator<Item = (K, PatternSequence)>,
        K: Into<String>,
    {
        sequences
            .into_iter()
            .fold(PatternBuilder::new(), |builder, (key, seq)| {
                builder.sequence(key, seq)
            })
            .build()
    }

    /// Build a pattern without collision or key checks
    pub fn from_sequences_unchecked<I, K>(sequences: I) -> Self
    where
        I: IntoIterator<Item = (K, PatternSequence)>,
        K: Into<String>,
    {
        Self {
            sequences: sequences
                .into_iter()
                .map(|(key, seq)| (key.into(), seq))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&PatternSequence> {
        self.sequences.get(key)
    }

    /// Current value for `key`
    pub fn value(&self, key: &str) -> Option<&str> {
        self.sequences.get(key).map(|seq| seq.value.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.sequences.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sequences.keys().map(String::as_str)
    }

    /// Iterate `(key, sequence)` in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PatternSequence)> {
        self.sequences.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Replace the value of an existing key
    ///
    /// Returns `false` and changes nothing when the key is unknown; the key
    /// set of a pattern is fixed.
    pub fn set_value(&mut self, key: &str, value: impl Into<String>) -> bool {
        match self.sequences.get_mut(key) {
            Some(seq) => {
                seq.value = value.into();
                true
            }
            None => false,
        }
    }

    /// Copy with every persistence-disabled value replaced by the sentinel
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        for seq in copy.sequences.values_mut() {
            if seq.disable_persistence {
                seq.value = NO_PERSISTENCE_SENTINEL.to_string();
            }
        }
        copy
    }

    /// Keys of required sequences whose value is empty, in key order
    pub fn missing_required(&self) -> Vec<String> {
        self.sequences
            .iter()
            .filter(|(_, seq)| seq.required && seq.value.is_empty())
            .map(|(key, _)| key.clone())
            .collect()
    }
}

impl<'a> IntoIterator for &'a Pattern {
    type Item = (&'a String, &'a PatternSequence);
    type IntoIter = std::collections::btree_map::Iter<'a, String, PatternSequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sequences.iter()
    }
}
