//! The FeatureCatalog - immutable feature lookup and search.

use std::collections::HashMap;

use overlap_core::{DatasetConfig, Feature, DEFAULT_SEARCH_LIMIT};

use crate::{CatalogError, CatalogResult, SearchIndex};

/// All feature descriptors in load order, plus the search index over them.
/// It is immutable after construction.
#[derive(Debug, Clone)]
pub struct FeatureCatalog {
    /// Features in load order.
    features: Vec<Feature>,
    /// Position lookup by feature id.
    by_id: HashMap<String, usize>,
    /// Fuzzy index over `features`.
    index: SearchIndex,
    /// Maximum number of search results.
    search_limit: usize,
}

impl FeatureCatalog {
    /// Build a catalog, validating id uniqueness and building the index.
    pub fn from_features(features: Vec<Feature>, search_limit: usize) -> CatalogResult<Self> {
        let mut by_id = HashMap::with_capacity(features.len());
        for (position, feature) in features.iter().enumerate() {
            if feature.id.trim().is_empty() {
                return Err(CatalogError::EmptyId { index: position });
            }
            if by_id.insert(feature.id.clone(), position).is_some() {
                return Err(CatalogError::DuplicateFeatureId(feature.id.clone()));
            }
        }

        let index = SearchIndex::build(&features);
        tracing::info!(features = features.len(), "feature catalog built");

        Ok(Self {
            features,
            by_id,
            index,
            search_limit: search_limit.max(1),
        })
    }

    /// Parse a catalog artifact (a JSON array of feature records).
    pub fn from_json(json: &str, search_limit: usize) -> CatalogResult<Self> {
        let features: Vec<Feature> =
            serde_json::from_str(json).map_err(|e| CatalogError::parse(e.to_string()))?;
        Self::from_features(features, search_limit)
    }

    /// Load the catalog artifact named by `config`.
    pub fn load(config: &DatasetConfig) -> CatalogResult<Self> {
        let path = config.catalog_path();
        let json = std::fs::read_to_string(&path).map_err(|e| CatalogError::io(&path, e))?;
        tracing::debug!(path = %path.display(), "loading feature catalog");
        Self::from_json(&json, config.search_limit)
    }

    /// The full catalog in load order.
    pub fn all(&self) -> &[Feature] {
        &self.features
    }

    /// Get a feature by id.
    pub fn get(&self, id: &str) -> Option<&Feature> {
        self.by_id.get(id).map(|&i| &self.features[i])
    }

    /// Check if a feature id is known.
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Title of a feature, or the id itself when unknown.
    pub fn title_of<'a>(&'a self, id: &'a str) -> &'a str {
        self.get(id).map(|f| f.title.as_str()).unwrap_or(id)
    }

    /// Fuzzy search over title, description and id.
    ///
    /// A blank query returns the whole catalog unchanged; otherwise results are
    /// ranked best first and capped at the search limit.
    pub fn search(&self, query: &str) -> Vec<&Feature> {
        if query.trim().is_empty() {
            return self.features.iter().collect();
        }
        self.index
            .search(query, self.search_limit)
            .into_iter()
            .map(|hit| &self.features[hit.position])
            .collect()
    }

    /// The search index owned by this catalog.
    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    /// Maximum number of search results.
    pub fn search_limit(&self) -> usize {
        self.search_limit
    }

    /// Get the number of features.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

impl Default for FeatureCatalog {
    fn default() -> Self {
        Self {
            features: Vec::new(),
            by_id: HashMap::new(),
            index: SearchIndex::default(),
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}
