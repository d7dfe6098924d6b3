//! On-disk dataset fixtures.

use std::fs;
use std::path::Path;

use overlap_catalog::CatalogResult;
use overlap_core::{artifact_key, DatasetConfig};
use overlap_engine::Dataset;
use serde_json::{json, Map, Value};
use tempfile::TempDir;

/// A temporary dataset directory.
///
/// Catalog records are collected in order and written when the dataset is
/// opened; per-feature artifacts are written immediately.
pub struct Fixture {
    dir: TempDir,
    catalog: Vec<Value>,
    config: DatasetConfig,
}

impl Fixture {
    /// Create an empty dataset in a fresh temporary directory.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create fixture dir");
        let config = DatasetConfig::new().with_root(dir.path());
        fs::create_dir_all(config.features_path()).expect("create features dir");
        Self {
            dir,
            catalog: Vec::new(),
            config,
        }
    }

    /// Add a catalog record.
    pub fn feature(mut self, id: &str, title: &str) -> Self {
        self.catalog.push(json!({ "id": id, "title": title }));
        self
    }

    /// Add a catalog record with a description.
    pub fn described(mut self, id: &str, title: &str, description: &str) -> Self {
        self.catalog
            .push(json!({ "id": id, "title": title, "description": description }));
        self
    }

    /// Write a per-feature artifact from `(browser, version, code)` cells.
    pub fn stats(self, id: &str, cells: &[(&str, &str, &str)]) -> Self {
        let mut stats = Map::new();
        for (browser, version, code) in cells {
            let versions = stats
                .entry(browser.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if let Value::Object(versions) = versions {
                versions.insert(version.to_string(), Value::String(code.to_string()));
            }
        }
        let artifact = json!({ "stats": Value::Object(stats) });
        self.raw_artifact(id, &artifact.to_string())
    }

    /// Write a per-feature artifact verbatim.
    pub fn raw_artifact(self, id: &str, contents: &str) -> Self {
        let path = self
            .config
            .features_path()
            .join(format!("{}.json", artifact_key(id)));
        fs::write(&path, contents).expect("write feature artifact");
        self
    }

    /// Override the search cap.
    pub fn search_limit(mut self, limit: usize) -> Self {
        self.config = self.config.with_search_limit(limit);
        self
    }

    /// Dataset configuration pointing at this fixture.
    pub fn config(&self) -> &DatasetConfig {
        &self.config
    }

    /// Dataset root.
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write the catalog artifact and open the dataset.
    pub fn open(&self) -> CatalogResult<Dataset> {
        self.write_catalog();
        Dataset::open(&self.config)
    }

    /// Write the catalog artifact without opening.
    pub fn write_catalog(&self) {
        let catalog = Value::Array(self.catalog.clone()).to_string();
        fs::write(self.config.catalog_path(), catalog).expect("write catalog");
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
