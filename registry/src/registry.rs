//! The BrowserRegistry - immutable display-name lookup.

use std::collections::HashMap;

use crate::BrowserRegistryBuilder;

/// Runtime lookup of browser display names.
/// It is immutable after construction.
#[derive(Debug, Clone)]
pub struct BrowserRegistry {
    /// Display names by browser id.
    names: HashMap<String, String>,
    /// Browser ids in registration order.
    order: Vec<String>,
}

impl BrowserRegistry {
    pub(crate) fn new(names: HashMap<String, String>, order: Vec<String>) -> Self {
        Self { names, order }
    }

    /// A registry holding the curated browser names.
    pub fn curated() -> Self {
        BrowserRegistryBuilder::new().with_curated().build()
    }

    /// Start building a custom registry.
    pub fn builder() -> BrowserRegistryBuilder {
        BrowserRegistryBuilder::new()
    }

    /// Display name for a browser id; unknown ids are returned unchanged.
    pub fn name<'a>(&'a self, browser_id: &'a str) -> &'a str {
        self.names
            .get(browser_id)
            .map(String::as_str)
            .unwrap_or(browser_id)
    }

    /// Check whether a browser id has a curated name.
    pub fn contains(&self, browser_id: &str) -> bool {
        self.names.contains_key(browser_id)
    }

    /// All `(id, name)` pairs in registration order.
    pub fn all(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .map(move |id| (id.as_str(), self.names[id].as_str()))
    }

    /// Get the number of known browsers.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if no browsers are registered.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl Default for BrowserRegistry {
    fn default() -> Self {
        Self::curated()
    }
}
