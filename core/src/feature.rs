//! Feature descriptors.

use serde::{Deserialize, Deserializer, Serialize};

/// A uniquely identified web-platform capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feature {
    /// Stable, catalog-unique identifier.
    pub id: String,
    /// Human-readable title. Defaults to the id.
    pub title: String,
    /// Optional longer description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Feature {
    /// Create a feature whose title is its id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            title: id.clone(),
            id,
            description: None,
        }
    }

    /// Set the title. A blank title keeps the id as title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        let title = title.into();
        if !title.trim().is_empty() {
            self.title = title;
        }
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Catalog record as it appears in the catalog artifact.
#[derive(Deserialize)]
struct RawFeature {
    id: String,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl<'de> Deserialize<'de> for Feature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawFeature::deserialize(deserializer)?;
        let mut feature = Feature::new(raw.id);
        if let Some(title) = raw.title {
            feature = feature.with_title(title);
        }
        feature.description = raw.description.filter(|d| !d.trim().is_empty());
        Ok(feature)
    }
}
