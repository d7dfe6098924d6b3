//! Error types for per-feature data sources.

use thiserror::Error;

/// Errors a matrix source can report for a single artifact key.
///
/// These never cross the data store boundary: the store logs them and
/// resolves the request to not-found (or an empty matrix for malformed data).
#[derive(Debug, Error)]
pub enum DataError {
    /// No artifact exists for the key.
    #[error("feature data not found: {key}")]
    NotFound { key: String },

    /// The artifact exists but could not be decoded.
    #[error("malformed feature data for {key}: {message}")]
    Malformed { key: String, message: String },

    /// Reading the artifact failed for a reason other than absence.
    #[error("failed to read feature data for {key}: {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
}

impl DataError {
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    pub fn malformed(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            key: key.into(),
            source,
        }
    }

    /// Returns true if the artifact was absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, DataError::NotFound { .. })
    }

    /// Returns true if the artifact was present but ill-shaped.
    pub fn is_malformed(&self) -> bool {
        matches!(self, DataError::Malformed { .. })
    }
}

/// Result type for data-source operations.
pub type DataResult<T> = Result<T, DataError>;
