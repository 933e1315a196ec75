//! Sequence descriptor: metadata and current value for one key

use serde::{Deserialize, Serialize};

/// Metadata and current value for one configuration key
///
/// The key itself lives in the owning [`Pattern`](super::Pattern). Alias
/// lists are matched by the resolution engine; `cli_case_sensitive` and
/// `env_case_sensitive` choose exact or case-folded comparison for each list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatternSequence {
    /// Human readable name
    pub name: String,
    /// What the value is used for
    pub description: String,
    /// Example value, shown to users only
    pub example: String,
    /// Energize fails if this is still empty after all layers
    pub required: bool,
    /// Never written to the persisted store
    pub disable_persistence: bool,
    pub cli_case_sensitive: bool,
    /// Flag names without the leading dashes
    pub cli_flags: Vec<String>,
    pub env_case_sensitive: bool,
    /// Variable names without the environment prefix
    pub env_vars: Vec<String>,
    /// Current value
    pub value: String,
}

impl PatternSequence {
    /// Create a new sequence with the given display name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.example = example.into();
        self
    }

    /// Mark the sequence as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Exclude the value from persistence
    pub fn without_persistence(mut self) -> Self {
        self.disable_persistence = true;
        self
    }

    /// Add CLI flag aliases
    pub fn with_cli_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cli_flags.extend(flags.into_iter().map(Into::into));
        self
    }

    /// Add environment variable aliases
    pub fn with_env_vars<I, S>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.env_vars.extend(vars.into_iter().map(Into::into));
        self
    }

    pub fn cli_case_sensitive(mut self, sensitive: bool) -> Self {
        self.cli_case_sensitive = sensitive;
        self
    }

    pub fn env_case_sensitive(mut self, sensitive: bool) -> Self {
        self.env_case_sensitive = sensitive;
        self
    }

    /// Set the default value
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Matching CLI alias for `identifier`, if any
    pub fn cli_flag_for(&self, identifier: &str) -> Option<&str> {
        self.cli_flags
            .iter()
            .find(|flag| identifiers_match(flag, identifier, self.cli_case_sensitive))
            .map(String::as_str)
    }

    /// Matching environment alias for `identifier`, if any
    pub fn env_var_for(&self, identifier: &str) -> Option<&str> {
        self.env_vars
            .iter()
            .find(|var| identifiers_match(var, identifier, self.env_case_sensitive))
            .map(String::as_str)
    }
}

/// Compare two identifiers, folding case unless `case_sensitive`
pub(crate) fn identifiers_match(a: &str, b: &str, case_sensitive: bool) -> bool {
    if case_sensitive {
        a == b
    } else {
        a.chars()
            .flat_map(char::to_lowercase)
            .eq(b.chars().flat_map(char::to_lowercase))
    }
}
