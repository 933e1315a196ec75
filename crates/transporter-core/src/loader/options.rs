//! Loader options

use crate::persistence::PersistenceEngine;
use std::fmt;
use std::sync::Arc;

/// Default when `dump_environment` is [`DumpSetting::Unset`]
pub const DEFAULT_DUMP_ENVIRONMENT: bool = false;
/// Default when `dump_cli_arguments` is [`DumpSetting::Unset`]
pub const DEFAULT_DUMP_CLI_ARGUMENTS: bool = false;

/// A switch that may be left to its documented default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DumpSetting {
    #[default]
    Unset,
    Enabled,
    Disabled,
}

impl DumpSetting {
    /// Effective value, falling back to `default` when unset
    pub fn resolve(self, default: bool) -> bool {
        match self {
            Self::Unset => default,
            Self::Enabled => true,
            Self::Disabled => false,
        }
    }
}

impl From<bool> for DumpSetting {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }
}

/// Options for [`energize`](super::energize)
#[derive(Clone, Default)]
pub struct TransporterOptions {
    /// Only environment entries starting with this prefix participate
    pub env_prefix: String,
    /// Store loaded first and written by materialize
    pub persistence: Option<Arc<dyn PersistenceEngine>>,
    /// Log every environment entry before resolution
    pub dump_environment: DumpSetting,
    /// Log every CLI argument before resolution
    pub dump_cli_arguments: DumpSetting,
}

impl TransporterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn with_persistence(mut self, engine: Arc<dyn PersistenceEngine>) -> Self {
        self.persistence = Some(engine);
        self
    }

    pub fn with_dump_environment(mut self, setting: impl Into<DumpSetting>) -> Self {
        self.dump_environment = setting.into();
        self
    }

    pub fn with_dump_cli_arguments(mut self, setting: impl Into<DumpSetting>) -> Self {
        self.dump_cli_arguments = setting.into();
        self
    }
}

impl fmt::Debug for TransporterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransporterOptions")
            .field("env_prefix", &self.env_prefix)
            .field("persistence", &self.persistence.is_some())
            .field("dump_environment", &self.dump_environment)
            .field("dump_cli_arguments", &self.dump_cli_arguments)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_dump_setting_defaults() {
        assert!(!DumpSetting::Unset.resolve(DEFAULT_DUMP_ENVIRONMENT));
        assert!(DumpSetting::Unset.resolve(true));
        assert!(DumpSetting::Enabled.resolve(false));
        assert!(!DumpSetting::Disabled.resolve(true));
        assert_eq!(DumpSetting::from(true), DumpSetting::Enabled);
    }

    #[test]
    fn test_builder() {
        let options = TransporterOptions::new()
            .with_env_prefix("T_")
            .with_persistence(Arc::new(MemoryStore::new()))
            .with_dump_cli_arguments(true);

        assert_eq!(options.env_prefix, "T_");
        assert!(options.persistence.is_some());
        assert_eq!(options.dump_environment, DumpSetting::Unset);
        assert_eq!(options.dump_cli_arguments, DumpSetting::Enabled);
        assert!(format!("{:?}", options).contains("persistence: true"));
    }
}
