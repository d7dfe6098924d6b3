//! End-to-end compatibility checks against on-disk datasets.

use overlap_tests::prelude::*;

fn reference_fixture() -> Fixture {
    Fixture::new()
        .feature("base-api", "Base API")
        .feature("target-api", "Target API")
        .feature("ghost", "Listed but without data")
        .stats(
            "base-api",
            &[
                ("chrome", "1", "y"),
                ("chrome", "2", "y"),
                ("chrome", "3", "y"),
                ("chrome", "4", "y"),
                ("chrome", "5", "y"),
                ("firefox", "1", "y"),
                ("firefox", "2", "y"),
                ("firefox", "3", "y"),
            ],
        )
        .stats(
            "target-api",
            &[
                ("chrome", "1", "y"),
                ("chrome", "2", "y"),
                ("chrome", "3", "y"),
                ("chrome", "4", "n"),
                ("chrome", "5", "n"),
                ("firefox", "1", "y"),
                ("firefox", "2", "y"),
                ("firefox", "3", "y"),
            ],
        )
}

mod reference {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_reference_pair_is_partial() {
        let fixture = reference_fixture();
        let dataset = fixture.open().unwrap();

        let result = dataset.check("base-api", "target-api").await.unwrap();

        assert_eq!(result.base_supported_entries.len(), 8);
        assert_eq!(result.full_count, 6);
        assert_eq!(result.full_support_percentage, 75.0);
        assert_eq!(result.partial_support_percentage, 0.0);
        assert_eq!(result.compatible, SupportLevel::Partial);
    }

    #[tokio::test]
    async fn test_reversed_pair_is_full() {
        // Every version fully supporting target-api also fully supports base-api
        let fixture = reference_fixture();
        let dataset = fixture.open().unwrap();

        let result = dataset.check("target-api", "base-api").await.unwrap();

        assert_eq!(result.total_count, 6);
        assert_eq!(result.compatible, SupportLevel::Full);
    }

    #[tokio::test]
    async fn test_checks_are_deterministic() {
        let fixture = reference_fixture();
        let dataset = fixture.open().unwrap();

        let (a, b) = tokio::join!(
            dataset.check("base-api", "target-api"),
            dataset.check("base-api", "target-api")
        );
        let c = dataset.check("base-api", "target-api").await;

        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(dataset.engine().store().stats().loads, 2);
    }
}

mod missing_data {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_feature_without_artifact_is_not_found() {
        let fixture = reference_fixture();
        let dataset = fixture.open().unwrap();

        assert!(dataset.check("base-api", "ghost").await.is_none());
        assert!(dataset.check("not-in-catalog", "base-api").await.is_none());
    }

    #[tokio::test]
    async fn test_malformed_artifact_is_treated_as_empty() {
        let fixture = reference_fixture()
            .feature("broken", "Broken")
            .raw_artifact("broken", r#"{"stats": "#);
        let dataset = fixture.open().unwrap();

        // As target: every supporting version resolves to none
        let result = dataset.check("base-api", "broken").await.unwrap();
        assert_eq!(result.none_count, 8);
        assert_eq!(result.compatible, SupportLevel::None);

        // As base: empty supporting set
        let result = dataset.check("broken", "base-api").await.unwrap();
        assert_eq!(result.total_count, 0);
        assert_eq!(result.full_support_percentage, 0.0);
        assert_eq!(result.compatible, SupportLevel::None);
    }

    #[tokio::test]
    async fn test_ids_are_sanitized_to_artifact_keys() {
        let fixture = reference_fixture()
            .feature("css.grid/level-2", "Grid level 2")
            .stats("css.grid/level-2", &[("chrome", "1", "y")]);
        let dataset = fixture.open().unwrap();

        let result = dataset.check("css.grid/level-2", "base-api").await.unwrap();

        assert_eq!(result.compatible, SupportLevel::Full);
        assert!(fixture.root().join("features/css_grid_level-2.json").exists());
    }
}

mod warm_cache {
    use super::*;
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn test_warm_loads_each_feature_once() {
        let fixture = reference_fixture();
        let dataset = fixture.open().unwrap();

        assert_eq!(dataset.warm(), 3);
        let _ = dataset.check("base-api", "target-api").await;
        let _ = dataset.check("target-api", "ghost").await;

        assert_eq!(dataset.warm(), 0);
        assert_eq!(dataset.engine().store().stats().loads, 3);
    }
}
