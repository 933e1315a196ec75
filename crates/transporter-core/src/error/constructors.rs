//! Constructor methods for TransporterError

use super::types::{InputSource, TransporterError};

impl TransporterError {
    /// Create a new not found error
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    /// Create a new load error
    pub fn load(message: impl Into<String>) -> Self {
        Self::Load {
            message: message.into(),
            context: None,
        }
    }

    /// Create a load error with context
    pub fn load_with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self::Load {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a new malformed input error
    pub fn malformed(message: impl Into<String>, source_kind: InputSource) -> Self {
        Self::MalformedInput {
            message: message.into(),
            source_kind,
        }
    }

    /// Create a new persistence error
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
            context: None,
        }
    }

    /// Create a persistence error with context
    pub fn persistence_with_context(
        message: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self::Persistence {
            message: message.into(),
            context: Some(context.into()),
        }
    }

    /// Create a new invalid pattern error
    pub fn invalid_pattern(message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            message: message.into(),
        }
    }

    /// Create an IO error with path
    pub fn io_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a JSON error with message
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json {
            message: message.into(),
        }
    }
}
