//! Compatibility result types.

use overlap_core::{SupportEntry, SupportLevel};
use serde::Serialize;

/// Outcome of comparing a target feature against a base feature.
///
/// Derived purely from the two support matrices; never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityResult {
    /// Overall classification.
    pub compatible: SupportLevel,
    /// Base entries at full support (the supporting set).
    pub base_supported_entries: Vec<SupportEntry>,
    /// The whole target matrix, flattened.
    pub target_support_entries: Vec<SupportEntry>,
    /// Target support at each supporting-set pair; absent pairs carry the
    /// empty code and level `none`.
    pub overlapping_entries: Vec<SupportEntry>,
    /// Share of the supporting set where the target is fully supported.
    pub full_support_percentage: f64,
    /// Share of the supporting set where the target is partially supported.
    pub partial_support_percentage: f64,
    /// Size of the supporting set.
    pub total_count: usize,
    pub full_count: usize,
    pub partial_count: usize,
    pub none_count: usize,
}

impl CompatibilityResult {
    /// Overlap grouped by browser, browsers in the order they appear.
    pub fn by_browser(&self) -> Vec<BrowserOverlap> {
        let mut groups: Vec<BrowserOverlap> = Vec::new();
        for entry in &self.overlapping_entries {
            let start_new = groups
                .last()
                .map_or(true, |g| g.browser_id != entry.browser_id);
            if start_new {
                groups.push(BrowserOverlap::new(entry.browser_id.clone()));
            }
            if let Some(group) = groups.last_mut() {
                group.push(entry.support_level, entry.version.clone());
            }
        }
        groups
    }
}

/// Overlap for a single browser, versions in version order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrowserOverlap {
    pub browser_id: String,
    pub full_versions: Vec<String>,
    pub partial_versions: Vec<String>,
    pub none_versions: Vec<String>,
}

impl BrowserOverlap {
    fn new(browser_id: String) -> Self {
        Self {
            browser_id,
            full_versions: Vec::new(),
            partial_versions: Vec::new(),
            none_versions: Vec::new(),
        }
    }

    fn push(&mut self, level: SupportLevel, version: String) {
        match level {
            SupportLevel::Full => self.full_versions.push(version),
            SupportLevel::Partial => self.partial_versions.push(version),
            SupportLevel::None => self.none_versions.push(version),
        }
    }

    /// Number of supporting-set versions for this browser.
    pub fn total(&self) -> usize {
        self.full_versions.len() + self.partial_versions.len() + self.none_versions.len()
    }

    /// The weakest level seen for this browser.
    pub fn weakest(&self) -> SupportLevel {
        if !self.none_versions.is_empty() {
            SupportLevel::None
        } else if !self.partial_versions.is_empty() {
            SupportLevel::Partial
        } else {
            SupportLevel::Full
        }
    }
}
