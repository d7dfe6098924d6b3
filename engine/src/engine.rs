//! The CompatibilityEngine - pulls two matrices and scores their overlap.

use overlap_store::{FeatureDataStore, MatrixSource};

use crate::{compute_overlap, CompatibilityResult};

/// Computes compatibility between feature pairs.
///
/// Stateless apart from the data store it reads through; every call
/// recomputes its result.
pub struct CompatibilityEngine<S> {
    store: FeatureDataStore<S>,
}

impl<S> Clone for CompatibilityEngine<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<S: MatrixSource> CompatibilityEngine<S> {
    pub fn new(store: FeatureDataStore<S>) -> Self {
        Self { store }
    }

    /// The data store this engine reads through.
    pub fn store(&self) -> &FeatureDataStore<S> {
        &self.store
    }

    /// How safely `target_id` can be adopted where `base_id` is relied upon.
    ///
    /// Both matrices load concurrently. Returns `None` if either feature has no
    /// data. Equal ids are not rejected here; they score against themselves.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn check_compatibility(
        &self,
        base_id: &str,
        target_id: &str,
    ) -> Option<CompatibilityResult> {
        let (base, target) = tokio::join!(self.store.get(base_id), self.store.get(target_id));
        let (Some(base), Some(target)) = (base, target) else {
            tracing::debug!("compatibility check skipped: feature data missing");
            return None;
        };

        let result = compute_overlap(&base, &target);
        tracing::debug!(
            compatible = %result.compatible,
            full = result.full_support_percentage,
            partial = result.partial_support_percentage,
            supporting = result.total_count,
            "compatibility computed"
        );
        Some(result)
    }
}
