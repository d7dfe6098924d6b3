//! Lazy per-feature support data.
//!
//! This crate provides:
//! - `MatrixSource`: async access to per-feature artifacts by artifact key
//! - `DirectorySource` / `MemorySource`: on-disk and in-memory sources
//! - `FeatureDataStore`: a coalescing, insert-only cache in front of a source

mod source;
mod store;

pub use source::{DirectorySource, MatrixSource, MemorySource};
pub use store::{FeatureDataStore, StoreStats};
