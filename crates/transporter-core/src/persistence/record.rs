//! Typed persisted records

use super::RawStore;
use crate::error::{InputSource, TransporterError, TransporterResult};
use crate::pattern::{Pattern, PatternSequence};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const FIELD_DISABLE_PERSISTENCE: &str = "DisablePersistence";
const FIELD_VALUE: &str = "Value";

/// The externally meaningful part of a sequence, as written by `save`
///
/// Aliases, the example and case-sensitivity flags stay in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PersistedSequence {
    pub name: String,
    pub description: String,
    pub required: bool,
    pub disable_persistence: bool,
    pub value: String,
}

impl From<&PatternSequence> for PersistedSequence {
    fn from(seq: &PatternSequence) -> Self {
        Self {
            name: seq.name.clone(),
            description: seq.description.clone(),
            required: seq.required,
            disable_persistence: seq.disable_persistence,
            value: seq.value.clone(),
        }
    }
}

/// Serialize a pattern into raw records
pub fn encode_pattern(pattern: &Pattern) -> TransporterResult<RawStore> {
    pattern
        .iter()
        .map(|(key, seq)| {
            let record = serde_json::to_value(PersistedSequence::from(seq))?;
            Ok::<_, TransporterError>((key.to_string(), record))
        })
        .collect()
}

/// A record read back from the store
///
/// Decoding never trusts the record: a missing or non-boolean
/// `DisablePersistence` counts as disabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub disable_persistence: bool,
    pub value: Option<String>,
}

impl StoredRecord {
    /// Decode one raw record
    ///
    /// Fails only when the record is not an object.
    pub fn decode(key: &str, raw: &Value) -> TransporterResult<Self> {
        let Value::Object(fields) = raw else {
            return Err(TransporterError::malformed(
                format!("record \"{}\" is not an object", key),
                InputSource::Store,
            ));
        };

        Ok(Self {
            disable_persistence: fields
                .get(FIELD_DISABLE_PERSISTENCE)
                .and_then(Value::as_bool)
                .unwrap_or(true),
            value: fields
                .get(FIELD_VALUE)
                .and_then(Value::as_str)
                .map(str::to_owned),
        })
    }

    /// Value to apply on load, or `None` when the record must be skipped
    ///
    /// An enabled record without a string value is malformed.
    pub fn applicable_value(&self, key: &str) -> TransporterResult<Option<&str>> {
        if self.disable_persistence {
            return Ok(None);
        }
        match &self.value {
            Some(value) => Ok(Some(value.as_str())),
            None => Err(TransporterError::malformed(
                format!("record \"{}\" has no string value", key),
                InputSource::Store,
            )),
        }
    }
}
