//! The `overlap` command driver against on-disk datasets.

use overlap_cli::{parse_args, run, CliError, MSG_UNABLE_TO_ANALYZE};
use overlap_tests::prelude::*;

fn fixture() -> Fixture {
    Fixture::new()
        .feature("flexbox", "Flexbox")
        .feature("flexbox-gap", "Flexbox gap")
        .stats("flexbox", &[("safari", "14", "y"), ("safari", "14.1", "y")])
        .stats("flexbox-gap", &[("safari", "14", "n"), ("safari", "14.1", "y")])
}

fn args_for(fixture: &Fixture, rest: &[&str]) -> overlap_cli::Args {
    let root = fixture.root().to_string_lossy().to_string();
    let mut argv = vec!["--data".to_string(), root];
    argv.extend(rest.iter().map(|s| s.to_string()));
    parse_args(argv).unwrap()
}

#[tokio::test]
async fn test_check_prints_breakdown() {
    let fixture = fixture();
    fixture.write_catalog();

    let output = run(&args_for(&fixture, &["check", "flexbox", "flexbox-gap"]))
        .await
        .unwrap();

    assert!(output.starts_with("Flexbox -> Flexbox gap: not compatible (none)"));
    assert!(output.contains("Safari"));
    assert!(output.contains("missing: 14"));
}

#[tokio::test]
async fn test_same_pair_is_rejected_before_the_engine() {
    let fixture = fixture();
    fixture.write_catalog();

    let err = run(&args_for(&fixture, &["check", "flexbox", "flexbox"]))
        .await
        .unwrap_err();

    assert!(matches!(err, CliError::SamePair(id) if id == "flexbox"));
}

#[tokio::test]
async fn test_missing_data_shows_generic_message() {
    let fixture = fixture();
    fixture.write_catalog();

    let err = run(&args_for(&fixture, &["check", "flexbox", "nope"]))
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), MSG_UNABLE_TO_ANALYZE);
}

#[tokio::test]
async fn test_search_lists_matches() {
    let fixture = fixture();
    fixture.write_catalog();

    let output = run(&args_for(&fixture, &["search", "gap"])).await.unwrap();

    assert_eq!(output, "flexbox-gap  Flexbox gap\n");
}

#[tokio::test]
async fn test_help_returns_usage_text() {
    let args = parse_args(["help"]).unwrap();

    let output = run(&args).await.unwrap();

    assert!(output.starts_with("Usage: overlap"));
    assert!(output.contains("check <base> <target>"));
    assert!(output.contains("OVERLAP_DATA_DIR"));
}
