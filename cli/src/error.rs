//! CLI error types.

use overlap_catalog::CatalogError;
use thiserror::Error;

/// Message shown whenever a pair cannot be analyzed.
pub const MSG_UNABLE_TO_ANALYZE: &str = "unable to analyze compatibility";

/// Errors surfaced to the CLI user.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad command line.
    #[error("usage: {0}")]
    Usage(String),

    /// Base and target are the same feature.
    #[error("base and target must be different features (got {0} twice)")]
    SamePair(String),

    /// The dataset could not be opened.
    #[error("failed to open dataset: {0}")]
    Catalog(#[from] CatalogError),

    /// Either feature has no data.
    #[error("unable to analyze compatibility")]
    Unanalyzable,
}

impl CliError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
