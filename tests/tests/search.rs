//! Catalog search against on-disk datasets.

use overlap_tests::prelude::*;
use pretty_assertions::assert_eq;

fn catalog_fixture() -> Fixture {
    Fixture::new()
        .described(
            "flexbox",
            "CSS Flexible Box Layout Module",
            "Method of positioning elements in horizontal or vertical stacks.",
        )
        .described(
            "css-grid",
            "CSS Grid Layout (level 1)",
            "Method of using a grid concept to lay out content.",
        )
        .feature("fetch", "Fetch")
        .feature("flexbox-gap", "gap property for Flexbox")
}

fn ids(dataset: &Dataset, query: &str) -> Vec<String> {
    dataset
        .catalog()
        .search(query)
        .into_iter()
        .map(|f| f.id.clone())
        .collect()
}

#[test]
fn test_empty_query_returns_full_catalog_in_order() {
    let fixture = catalog_fixture();
    let dataset = fixture.open().unwrap();

    assert_eq!(
        ids(&dataset, ""),
        vec!["flexbox", "css-grid", "fetch", "flexbox-gap"]
    );
}

#[test]
fn test_nonexistent_query_is_empty() {
    let fixture = catalog_fixture();
    let dataset = fixture.open().unwrap();

    assert!(ids(&dataset, "xyz-nonexistent").is_empty());
}

#[test]
fn test_best_match_first() {
    let fixture = catalog_fixture();
    let dataset = fixture.open().unwrap();

    assert_eq!(ids(&dataset, "flexbox"), vec!["flexbox", "flexbox-gap"]);
    assert_eq!(ids(&dataset, "grid"), vec!["css-grid"]);
}

#[test]
fn test_description_matches() {
    let fixture = catalog_fixture();
    let dataset = fixture.open().unwrap();

    assert_eq!(ids(&dataset, "stacks"), vec!["flexbox"]);
}

#[test]
fn test_results_are_capped() {
    let mut fixture = Fixture::new().search_limit(5);
    for i in 0..20 {
        fixture = fixture.feature(&format!("intl-{i}"), &format!("Intl API {i}"));
    }
    let dataset = fixture.open().unwrap();

    assert_eq!(ids(&dataset, "intl").len(), 5);
    assert_eq!(ids(&dataset, "").len(), 20);
}

#[test]
fn test_titles() {
    let fixture = catalog_fixture();
    let dataset = fixture.open().unwrap();

    assert_eq!(dataset.catalog().title_of("fetch"), "Fetch");
    assert_eq!(dataset.catalog().title_of("unknown-id"), "unknown-id");
}

#[test]
fn test_duplicate_ids_fail_to_open() {
    let fixture = Fixture::new().feature("fetch", "Fetch").feature("fetch", "Fetch again");
    assert!(fixture.open().is_err());
}
