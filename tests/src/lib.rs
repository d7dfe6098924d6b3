//! Integration test framework for overlap.
//!
//! Builds throwaway on-disk datasets (catalog artifact plus per-feature
//! artifacts) and opens them through the public `Dataset` facade.

mod fixture;

pub use fixture::Fixture;

pub mod prelude {
    pub use crate::Fixture;
    pub use overlap_core::{DatasetConfig, SupportLevel};
    pub use overlap_engine::{CompatibilityResult, Dataset};
}
