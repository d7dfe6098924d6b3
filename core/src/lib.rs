//! Overlap Core Types
//!
//! This crate provides the foundational types used throughout the overlap system:
//! - Feature descriptors (Feature)
//! - Raw and classified support (SupportCode, SupportLevel)
//! - Per-feature support matrices and their flattened entries
//! - Version ordering and artifact key sanitizing
//! - Dataset configuration
//! - Data-source error types

mod config;
mod error;
mod feature;
mod key;
mod matrix;
mod support;
mod version;

pub use config::*;
pub use error::*;
pub use feature::*;
pub use key::*;
pub use matrix::*;
pub use support::*;
pub use version::*;
