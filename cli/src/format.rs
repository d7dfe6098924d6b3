//! Output formatting utilities for the CLI.

use std::fmt::Write;

use overlap_catalog::FeatureCatalog;
use overlap_core::{Feature, SupportLevel};
use overlap_engine::CompatibilityResult;
use overlap_registry::BrowserRegistry;

/// One line per feature: `id  title`.
pub fn format_search(features: &[&Feature]) -> String {
    let width = features.iter().map(|f| f.id.len()).max().unwrap_or(0);
    let mut out = String::new();
    for feature in features {
        let _ = writeln!(out, "{:width$}  {}", feature.id, feature.title, width = width);
    }
    out
}

/// Browser registry listing.
pub fn format_browsers(browsers: &BrowserRegistry) -> String {
    let mut out = String::new();
    for (id, name) in browsers.all() {
        let _ = writeln!(out, "{id:10}  {name}");
    }
    out
}

fn verdict(level: SupportLevel) -> &'static str {
    match level {
        SupportLevel::Full => "compatible",
        SupportLevel::Partial => "partially compatible",
        SupportLevel::None => "not compatible",
    }
}

/// Summary plus a per-browser breakdown.
pub fn format_result(
    result: &CompatibilityResult,
    base_id: &str,
    target_id: &str,
    catalog: &FeatureCatalog,
    browsers: &BrowserRegistry,
) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} -> {}: {} ({})",
        catalog.title_of(base_id),
        catalog.title_of(target_id),
        verdict(result.compatible),
        result.compatible
    );
    let _ = writeln!(
        out,
        "  full {:.1}%  partial {:.1}%  across {} supporting versions",
        result.full_support_percentage, result.partial_support_percentage, result.total_count
    );

    for group in result.by_browser() {
        let _ = write!(
            out,
            "  {:24} {:>3}/{:<3}",
            browsers.name(&group.browser_id),
            group.full_versions.len(),
            group.total()
        );
        if !group.partial_versions.is_empty() {
            let _ = write!(out, "  partial: {}", group.partial_versions.join(", "));
        }
        if !group.none_versions.is_empty() {
            let _ = write!(out, "  missing: {}", group.none_versions.join(", "));
        }
        out.push('\n');
    }
    out
}

/// Usage text.
pub fn format_help() -> String {
    let mut out = String::new();
    out.push_str("Usage: overlap [--data DIR] [-v] <command>\n");
    out.push('\n');
    out.push_str("Commands:\n");
    out.push_str("  search <query...>        Fuzzy-search features\n");
    out.push_str("  check <base> <target>    Check whether target is safe where base is used\n");
    out.push_str("  browsers                 List browser names\n");
    out.push_str("  help                     Show this help\n");
    out.push('\n');
    out.push_str("Environment:\n");
    out.push_str("  OVERLAP_DATA_DIR         Dataset root (default ./data)\n");
    out.push_str("  OVERLAP_SEARCH_LIMIT     Maximum search results (default 50)\n");
    out.push_str("  RUST_LOG                 Log filter (default warn)\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use overlap_core::FeatureSupportMatrix;
    use overlap_engine::compute_overlap;

    #[test]
    fn test_format_result_uses_display_names() {
        let catalog = FeatureCatalog::from_features(
            vec![
                Feature::new("flexbox").with_title("Flexbox"),
                Feature::new("flexbox-gap").with_title("Flexbox gap"),
            ],
            50,
        )
        .unwrap();
        let base = FeatureSupportMatrix::from_cells([("and_chr", "120", "y"), ("and_chr", "121", "y")]);
        let target = FeatureSupportMatrix::from_cells([("and_chr", "121", "y")]);
        let result = compute_overlap(&base, &target);

        let text = format_result(
            &result,
            "flexbox",
            "flexbox-gap",
            &catalog,
            &BrowserRegistry::curated(),
        );

        assert!(text.starts_with("Flexbox -> Flexbox gap: not compatible (none)"));
        assert!(text.contains("full 50.0%"));
        assert!(text.contains("Chrome for Android"));
        assert!(text.contains("missing: 120"));
    }

    #[test]
    fn test_format_search_aligns_ids() {
        let a = Feature::new("fetch").with_title("Fetch");
        let b = Feature::new("css-grid").with_title("CSS Grid");
        let text = format_search(&[&a, &b]);

        assert_eq!(text, "fetch     Fetch\ncss-grid  CSS Grid\n");
    }
}
