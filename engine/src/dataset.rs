//! Dataset facade: catalog, data store, engine and browser names wired together.

use overlap_catalog::{CatalogResult, FeatureCatalog};
use overlap_core::DatasetConfig;
use overlap_registry::BrowserRegistry;
use overlap_store::{DirectorySource, FeatureDataStore, MatrixSource};

use crate::{CompatibilityEngine, CompatibilityResult};

/// One immutable feature dataset and the components that read it.
pub struct Dataset<S = DirectorySource> {
    catalog: FeatureCatalog,
    engine: CompatibilityEngine<S>,
    browsers: BrowserRegistry,
}

impl Dataset<DirectorySource> {
    /// Load the catalog named by `config` and serve per-feature data from its
    /// feature directory.
    pub fn open(config: &DatasetConfig) -> CatalogResult<Self> {
        let catalog = FeatureCatalog::load(config)?;
        let source = DirectorySource::from_config(config);
        tracing::info!(
            root = %config.root().display(),
            features = catalog.len(),
            "dataset opened"
        );
        Ok(Self::new(catalog, source, BrowserRegistry::curated()))
    }
}

impl<S: MatrixSource> Dataset<S> {
    /// Assemble a dataset from explicitly constructed parts.
    pub fn new(catalog: FeatureCatalog, source: S, browsers: BrowserRegistry) -> Self {
        Self {
            catalog,
            engine: CompatibilityEngine::new(FeatureDataStore::new(source)),
            browsers,
        }
    }

    pub fn catalog(&self) -> &FeatureCatalog {
        &self.catalog
    }

    pub fn engine(&self) -> &CompatibilityEngine<S> {
        &self.engine
    }

    pub fn browsers(&self) -> &BrowserRegistry {
        &self.browsers
    }

    /// See [`CompatibilityEngine::check_compatibility`].
    pub async fn check(&self, base_id: &str, target_id: &str) -> Option<CompatibilityResult> {
        self.engine.check_compatibility(base_id, target_id).await
    }

    /// Start loading data for every catalog feature without waiting.
    pub fn warm(&self) -> usize {
        self.engine
            .store()
            .preload(self.catalog.all().iter().map(|f| f.id.as_str()))
    }
}
