//! Overlap scoring and classification.

use overlap_core::{FeatureSupportMatrix, SupportCode, SupportEntry, SupportLevel};

use crate::CompatibilityResult;

/// Full-support percentage at or above which the pair is `full`.
pub const FULL_THRESHOLD: f64 = 100.0;
/// Combined full + partial percentage at or above which the pair is `partial`.
pub const PARTIAL_THRESHOLD: f64 = 70.0;

/// Classify from percentages. `full` is checked before `partial`.
pub fn classify(full_percentage: f64, partial_percentage: f64) -> SupportLevel {
    if full_percentage >= FULL_THRESHOLD {
        SupportLevel::Full
    } else if full_percentage + partial_percentage >= PARTIAL_THRESHOLD {
        SupportLevel::Partial
    } else {
        SupportLevel::None
    }
}

/// Classify from exact counts; same thresholds as [`classify`] without
/// floating-point rounding at the boundaries. An empty supporting set is `none`.
fn classify_counts(full: usize, partial: usize, total: usize) -> SupportLevel {
    if total == 0 {
        return SupportLevel::None;
    }
    let total = total as u128;
    if (full as u128) * 100 >= FULL_THRESHOLD as u128 * total {
        SupportLevel::Full
    } else if ((full + partial) as u128) * 100 >= PARTIAL_THRESHOLD as u128 * total {
        SupportLevel::Partial
    } else {
        SupportLevel::None
    }
}

fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}

/// Score `target` across the pairs where `base` is fully supported.
///
/// Pairs the target has no data for count as `none`.
pub fn compute_overlap(
    base: &FeatureSupportMatrix,
    target: &FeatureSupportMatrix,
) -> CompatibilityResult {
    let base_supported_entries: Vec<SupportEntry> = base
        .entries()
        .into_iter()
        .filter(|entry| entry.support_level == SupportLevel::Full)
        .collect();

    let overlapping_entries: Vec<SupportEntry> = base_supported_entries
        .iter()
        .map(|entry| {
            let code = target
                .code(&entry.browser_id, &entry.version)
                .cloned()
                .unwrap_or_else(SupportCode::absent);
            SupportEntry::new(entry.browser_id.clone(), entry.version.clone(), code)
        })
        .collect();

    let (mut full_count, mut partial_count, mut none_count) = (0, 0, 0);
    for entry in &overlapping_entries {
        match entry.support_level {
            SupportLevel::Full => full_count += 1,
            SupportLevel::Partial => partial_count += 1,
            SupportLevel::None => none_count += 1,
        }
    }
    let total_count = overlapping_entries.len();

    CompatibilityResult {
        compatible: classify_counts(full_count, partial_count, total_count),
        base_supported_entries,
        target_support_entries: target.entries(),
        overlapping_entries,
        full_support_percentage: percentage(full_count, total_count),
        partial_support_percentage: percentage(partial_count, total_count),
        total_count,
        full_count,
        partial_count,
        none_count,
    }
}
