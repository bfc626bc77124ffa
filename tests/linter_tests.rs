#![allow(clippy::unwrap_used, clippy::expect_used)]

use api_blueprint::linter::{fail_if_errors, lint_manifest, LintSeverity};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_golden_fixtures_lint_clean_of_errors() {
    for name in ["users.yaml", "user_photos.yaml", "activity.yaml"] {
        let issues = lint_manifest(&fixture(name)).expect("lint fixture");
        assert!(
            issues.iter().all(|i| i.severity != LintSeverity::Error),
            "{name}: {issues:?}"
        );
        assert!(fail_if_errors(&issues).is_ok());
    }
}

#[test]
fn test_problem_manifest_reports_every_check() {
    let issues = lint_manifest(&fixture("lint_problems.yaml")).expect("lint fixture");
    let mut kinds: Vec<&str> = issues.iter().map(|i| i.kind.as_str()).collect();
    kinds.sort_unstable();
    assert_eq!(
        kinds,
        vec![
            "duplicate_parameter",
            "empty_versions",
            "invalid_http_method",
            "missing_method",
            "missing_resource",
            "orphan_nested_attribute",
            "unsupported_transaction_item",
        ]
    );

    let legacy: Vec<_> = issues
        .iter()
        .filter(|i| i.location == "method:PostsController::legacy")
        .collect();
    assert_eq!(legacy.len(), 2);
    assert!(fail_if_errors(&issues).is_err());
}

#[test]
fn test_missing_manifest_is_an_error() {
    assert!(lint_manifest(&fixture("does_not_exist.yaml")).is_err());
}
