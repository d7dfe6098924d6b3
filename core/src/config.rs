//! Dataset configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Environment variable overriding the dataset root.
pub const ENV_DATA_DIR: &str = "OVERLAP_DATA_DIR";
/// Environment variable overriding the search result cap.
pub const ENV_SEARCH_LIMIT: &str = "OVERLAP_SEARCH_LIMIT";

/// Default cap on search results.
pub const DEFAULT_SEARCH_LIMIT: usize = 50;

/// Where the feature dataset lives and how it is queried.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Dataset root directory.
    pub root: PathBuf,
    /// Catalog artifact file name, relative to `root`.
    pub catalog_file: String,
    /// Directory holding per-feature artifacts, relative to `root`.
    pub features_dir: String,
    /// Maximum number of search results (at least 1).
    pub search_limit: usize,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("data"),
            catalog_file: "features.json".to_string(),
            features_dir: "features".to_string(),
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl DatasetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `OVERLAP_DATA_DIR` and `OVERLAP_SEARCH_LIMIT`.
    ///
    /// An unparsable limit is ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(root) = std::env::var(ENV_DATA_DIR) {
            if !root.trim().is_empty() {
                config = config.with_root(root);
            }
        }
        if let Some(limit) = std::env::var(ENV_SEARCH_LIMIT)
            .ok()
            .and_then(|v| v.trim().parse::<usize>().ok())
        {
            config = config.with_search_limit(limit);
        }
        config
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = root.into();
        self
    }

    pub fn with_catalog_file(mut self, name: impl Into<String>) -> Self {
        self.catalog_file = name.into();
        self
    }

    pub fn with_features_dir(mut self, name: impl Into<String>) -> Self {
        self.features_dir = name.into();
        self
    }

    /// Set the search cap; clamped to at least 1.
    pub fn with_search_limit(mut self, limit: usize) -> Self {
        self.search_limit = limit.max(1);
        self
    }

    /// Full path of the catalog artifact.
    pub fn catalog_path(&self) -> PathBuf {
        self.root.join(&self.catalog_file)
    }

    /// Full path of the per-feature artifact directory.
    pub fn features_path(&self) -> PathBuf {
        self.root.join(&self.features_dir)
    }

    /// Dataset root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}
