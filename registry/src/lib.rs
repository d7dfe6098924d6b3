//! Browser display names.
//!
//! A static id -> display-name lookup with an identity fallback for ids it
//! does not know. Built once, immutable afterwards.

mod builder;
mod registry;

pub use builder::{BrowserRegistryBuilder, RegistryError, CURATED_BROWSERS};
pub use registry::BrowserRegistry;
