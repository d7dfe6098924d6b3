//! Feature catalog and fuzzy search.
//!
//! The catalog holds every feature descriptor in load order and owns a
//! search index built once, at construction, over the whole set.

mod catalog;
mod error;
mod index;

pub use catalog::FeatureCatalog;
pub use error::{CatalogError, CatalogResult};
pub use index::{SearchHit, SearchIndex};
