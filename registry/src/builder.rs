//! BrowserRegistryBuilder for constructing an immutable BrowserRegistry.

use std::collections::HashMap;

use thiserror::Error;

use crate::BrowserRegistry;

/// Curated display names, keyed by the dataset's browser ids.
pub const CURATED_BROWSERS: &[(&str, &str)] = &[
    ("ie", "Internet Explorer"),
    ("edge", "Edge"),
    ("firefox", "Firefox"),
    ("chrome", "Chrome"),
    ("safari", "Safari"),
    ("opera", "Opera"),
    ("ios_saf", "Safari on iOS"),
    ("op_mini", "Opera Mini"),
    ("android", "Android Browser"),
    ("bb", "Blackberry Browser"),
    ("op_mob", "Opera Mobile"),
    ("and_chr", "Chrome for Android"),
    ("and_ff", "Firefox for Android"),
    ("ie_mob", "IE Mobile"),
    ("and_uc", "UC Browser for Android"),
    ("samsung", "Samsung Internet"),
    ("and_qq", "QQ Browser"),
    ("baidu", "Baidu Browser"),
    ("kaios", "KaiOS Browser"),
];

/// Errors that can occur during registry construction.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate browser id: {0}")]
    DuplicateBrowserId(String),

    #[error("Empty browser id")]
    EmptyBrowserId,
}

/// Builder for constructing an immutable BrowserRegistry.
#[derive(Debug, Default)]
pub struct BrowserRegistryBuilder {
    names: HashMap<String, String>,
    order: Vec<String>,
}

impl BrowserRegistryBuilder {
    /// Create a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the curated names. Ids already present keep their name.
    pub fn with_curated(mut self) -> Self {
        for (id, name) in CURATED_BROWSERS {
            if !self.names.contains_key(*id) {
                self.insert(id.to_string(), name.to_string());
            }
        }
        self
    }

    /// Add a browser.
    pub fn add(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<&mut Self, RegistryError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(RegistryError::EmptyBrowserId);
        }
        if self.names.contains_key(&id) {
            return Err(RegistryError::DuplicateBrowserId(id));
        }
        self.insert(id, name.into());
        Ok(self)
    }

    fn insert(&mut self, id: String, name: String) {
        self.order.push(id.clone());
        self.names.insert(id, name);
    }

    /// Build the immutable registry.
    pub fn build(self) -> BrowserRegistry {
        BrowserRegistry::new(self.names, self.order)
    }
}
