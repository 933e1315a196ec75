//! Core error types for Transporter

use std::fmt;
use thiserror::Error;

/// Result type alias for Transporter operations
pub type TransporterResult<T> = Result<T, TransporterError>;

/// Which host input produced a malformed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Store,
    Environment,
    CommandLine,
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store => write!(f, "store"),
            Self::Environment => write!(f, "environment"),
            Self::CommandLine => write!(f, "command line"),
        }
    }
}

/// Main error type for Transporter
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransporterError {
    /// A key that is not part of the pattern was requested
    #[error("Key \"{key}\" does not exist")]
    NotFound { key: String },

    /// The persistence engine could not produce a raw store
    #[error("Load error: {message}")]
    Load {
        message: String,
        context: Option<String>,
    },

    /// An env, CLI or store entry without a usable name/value
    #[error("Malformed {source_kind} input: {message}")]
    MalformedInput {
        message: String,
        source_kind: InputSource,
    },

    /// The persistence engine failed to save
    #[error("Persistence error: {message}")]
    Persistence {
        message: String,
        context: Option<String>,
    },

    /// The pattern was rejected at construction time
    #[error("Invalid pattern: {message}")]
    InvalidPattern { message: String },

    /// Required sequences still empty after all layers were applied
    #[error("Required keys have no value: {}", .keys.join(", "))]
    RequiredMissing { keys: Vec<String> },

    /// A filesystem operation of a file backend failed
    #[error("IO error: {message}")]
    Io { message: String, path: Option<String> },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {message}")]
    Json { message: String },
}

impl TransporterError {
    /// Stable code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "TRANSPORTER_NOT_FOUND",
            Self::Load { .. } => "TRANSPORTER_LOAD",
            Self::MalformedInput { .. } => "TRANSPORTER_MALFORMED_INPUT",
            Self::Persistence { .. } => "TRANSPORTER_PERSISTENCE",
            Self::InvalidPattern { .. } => "TRANSPORTER_INVALID_PATTERN",
            Self::RequiredMissing { .. } => "TRANSPORTER_REQUIRED_MISSING",
            Self::Io { .. } => "TRANSPORTER_IO",
            Self::Json { .. } => "TRANSPORTER_JSON",
        }
    }

    /// Optional additional context
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Load { context, .. } | Self::Persistence { context, .. } => context.as_deref(),
            Self::Io { path, .. } => path.as_deref(),
            _ => None,
        }
    }

    /// Whether this error should stop the calling operation
    ///
    /// Load and malformed-input errors are absorbed by the loader pipeline.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Self::Load { .. } | Self::MalformedInput { .. })
    }
}
