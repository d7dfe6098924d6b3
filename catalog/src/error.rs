//! Catalog error types.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog artifact could not be read.
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog artifact is not a list of feature records.
    #[error("failed to parse catalog: {message}")]
    Parse { message: String },

    /// A record has an empty id.
    #[error("feature at position {index} has an empty id")]
    EmptyId { index: usize },

    /// Two records share an id.
    #[error("duplicate feature id: {0}")]
    DuplicateFeatureId(String),
}

impl CatalogError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
