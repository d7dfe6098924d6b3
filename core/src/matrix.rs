//! Per-feature support matrices.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{compare_versions, DataError, DataResult, SupportCode, SupportLevel};

/// One (browser, version) cell of a support matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SupportEntry {
    pub browser_id: String,
    pub version: String,
    pub support_code: SupportCode,
    pub support_level: SupportLevel,
}

impl SupportEntry {
    /// Create an entry, classifying the code.
    pub fn new(
        browser_id: impl Into<String>,
        version: impl Into<String>,
        support_code: SupportCode,
    ) -> Self {
        let support_level = support_code.level();
        Self {
            browser_id: browser_id.into(),
            version: version.into(),
            support_code,
            support_level,
        }
    }
}

/// Browser id -> version -> raw support code, for exactly one feature.
///
/// Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSupportMatrix {
    stats: BTreeMap<String, BTreeMap<String, SupportCode>>,
}

impl FeatureSupportMatrix {
    /// Create an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a matrix from `(browser, version, code)` triples.
    pub fn from_cells<I, B, V, C>(cells: I) -> Self
    where
        I: IntoIterator<Item = (B, V, C)>,
        B: Into<String>,
        V: Into<String>,
        C: Into<SupportCode>,
    {
        let mut stats: BTreeMap<String, BTreeMap<String, SupportCode>> = BTreeMap::new();
        for (browser, version, code) in cells {
            stats
                .entry(browser.into())
                .or_default()
                .insert(version.into(), code.into());
        }
        Self { stats }
    }

    /// Decode a per-feature artifact (`{"stats": {...}}`).
    ///
    /// `key` only labels the error.
    pub fn from_artifact_json(key: &str, json: &str) -> DataResult<Self> {
        let artifact: FeatureArtifact =
            serde_json::from_str(json).map_err(|e| DataError::malformed(key, e.to_string()))?;
        Ok(artifact.stats)
    }

    /// Get the raw code for a pair.
    pub fn code(&self, browser_id: &str, version: &str) -> Option<&SupportCode> {
        self.stats.get(browser_id).and_then(|v| v.get(version))
    }

    /// Get the level for a pair. Absence means no support.
    pub fn level(&self, browser_id: &str, version: &str) -> SupportLevel {
        self.code(browser_id, version)
            .map(SupportCode::level)
            .unwrap_or(SupportLevel::None)
    }

    /// Browser ids present, in lexicographic order.
    pub fn browsers(&self) -> impl Iterator<Item = &str> {
        self.stats.keys().map(String::as_str)
    }

    /// Number of (browser, version) cells.
    pub fn cell_count(&self) -> usize {
        self.stats.values().map(BTreeMap::len).sum()
    }

    /// Check if the matrix has no cells.
    pub fn is_empty(&self) -> bool {
        self.cell_count() == 0
    }

    /// Flatten into entries: browsers lexicographically, versions in version order.
    pub fn entries(&self) -> Vec<SupportEntry> {
        let mut out = Vec::with_capacity(self.cell_count());
        for (browser, versions) in &self.stats {
            let mut cells: Vec<(&String, &SupportCode)> = versions.iter().collect();
            cells.sort_by(|a, b| compare_versions(a.0, b.0));
            for (version, code) in cells {
                out.push(SupportEntry::new(browser.clone(), version.clone(), code.clone()));
            }
        }
        out
    }
}

/// On-disk shape of a per-feature artifact. Metadata lives in the catalog.
#[derive(Deserialize)]
struct FeatureArtifact {
    stats: FeatureSupportMatrix,
}
