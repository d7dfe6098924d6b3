//! Compatibility engine.
//!
//! Scores how well a target feature is supported across the browser versions
//! where a base feature is fully supported, and classifies the overlap as
//! `full`, `partial` or `none`.

mod dataset;
mod engine;
mod overlap;
mod result;

pub use dataset::Dataset;
pub use engine::CompatibilityEngine;
pub use overlap::{classify, compute_overlap, FULL_THRESHOLD, PARTIAL_THRESHOLD};
pub use result::{BrowserOverlap, CompatibilityResult};
