//! From trait implementations for TransporterError conversions

use super::types::TransporterError;

impl From<serde_json::Error> for TransporterError {
    fn from(error: serde_json::Error) -> Self {
        Self::json(error.to_string())
    }
}
