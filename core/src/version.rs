//! Browser version ordering.
//!
//! Version strings in the dataset are mostly dotted numbers (`"17"`, `"15.4"`),
//! sometimes ranges (`"3.1-3.2"`), and occasionally labels (`"TP"`, `"all"`).

use std::cmp::Ordering;

/// Parse the lower bound of a version (range) into numeric components.
///
/// Returns `None` for labels that are not dotted numbers.
fn numeric_components(version: &str) -> Option<Vec<u64>> {
    let lower = version.split('-').next().unwrap_or(version).trim();
    if lower.is_empty() {
        return None;
    }
    lower
        .split('.')
        .map(|part| part.parse::<u64>().ok())
        .collect()
}

/// Total order over version strings.
///
/// Numeric versions come first, compared component-wise on the lower bound of a
/// range (missing components count as zero). Labels follow, lexicographically.
/// The raw string breaks any remaining tie so the order is total.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    match (numeric_components(a), numeric_components(b)) {
        (Some(x), Some(y)) => {
            let len = x.len().max(y.len());
            for i in 0..len {
                let xa = x.get(i).copied().unwrap_or(0);
                let yb = y.get(i).copied().unwrap_or(0);
                match xa.cmp(&yb) {
                    Ordering::Equal => continue,
                    other => return other,
                }
            }
            a.cmp(b)
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
