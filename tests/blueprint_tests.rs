#![allow(clippy::unwrap_used, clippy::expect_used)]

use api_blueprint::{load_manifest, Blueprint, BlueprintError, Controller};
use serde_json::json;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn controllers(names: &[&str]) -> Vec<Controller> {
    names
        .iter()
        .flat_map(|name| load_manifest(&fixture(name)).expect("load fixture").controllers)
        .collect()
}

fn expected(name: &str) -> String {
    let path = fixture("expected").join(name);
    std::fs::read_to_string(&path)
        .expect("read expected document")
        .trim_end()
        .to_string()
}

#[test]
fn test_single_resource() {
    let doc = Blueprint::new()
        .generate(&controllers(&["users.yaml"]), "testing", "v1", None)
        .unwrap();
    assert_eq!(doc, expected("users_v1.apib"));
}

#[test]
fn test_multiple_resources_version_one() {
    let doc = Blueprint::new()
        .generate(
            &controllers(&["users.yaml", "user_photos.yaml"]),
            "testing",
            "v1",
            None,
        )
        .unwrap();
    assert_eq!(doc, expected("users_and_photos_v1.apib"));
}

// `index` is v1-only, so the v2 document starts at `show`.
#[test]
fn test_multiple_resources_version_two() {
    let doc = Blueprint::new()
        .generate(
            &controllers(&["users.yaml", "user_photos.yaml"]),
            "testing",
            "v2",
            None,
        )
        .unwrap();
    assert_eq!(doc, expected("users_and_photos_v2.apib"));
}

#[test]
fn test_simple_resource() {
    let doc = Blueprint::new()
        .generate(&controllers(&["activity.yaml"]), "testing", "v1", None)
        .unwrap();
    assert_eq!(doc, expected("activity_v1.apib"));
}

#[test]
fn test_overview() {
    let doc = Blueprint::new()
        .with_overview(fixture("overview.apib"))
        .generate(&controllers(&["activity.yaml"]), "testing", "v1", None)
        .unwrap();
    assert_eq!(doc, expected("activity_overview_v1.apib"));
}

#[test]
fn test_minimal_resource_document() {
    let input: Vec<Controller> = serde_json::from_value(json!([{
        "name": "UsersController",
        "annotations": [{"kind": "resource", "name": "Users", "uri": "/users"}],
        "methods": [{
            "name": "index",
            "annotations": [
                {"kind": "method", "verb": "GET", "uri": "/"},
                {"kind": "response", "status_code": 200, "body": {"id": 5}}
            ]
        }]
    }]))
    .unwrap();

    let doc = Blueprint::new().generate(&input, "testing", "v1", None).unwrap();
    assert_eq!(
        doc,
        "FORMAT: 1A\n\n# testing\n\n# Users [/users]\n\n## [GET /users]\n\n+ Response 200\n    + Body\n\n            {\n                \"id\": 5\n            }"
    );
}

#[test]
fn test_methods_outside_version_are_excluded() {
    let input = controllers(&["user_photos.yaml"]);
    let v1 = Blueprint::new().generate(&input, "testing", "v1", None).unwrap();
    assert!(!v1.contains("Show individual photo."));
    assert!(!v1.contains("[DELETE"));

    let v2 = Blueprint::new().generate(&input, "testing", "v2", None).unwrap();
    assert!(v2.contains("## Show individual photo. [GET /users/{userId}/photos/{photoId}]"));
}

#[test]
fn test_resource_without_qualifying_actions_is_omitted() {
    let doc = Blueprint::new()
        .generate(&controllers(&["activity.yaml"]), "testing", "v2", None)
        .unwrap();
    assert_eq!(doc, "FORMAT: 1A\n\n# testing");
}

#[test]
fn test_generation_is_repeatable() {
    let input = controllers(&["users.yaml", "user_photos.yaml"]);
    let blueprint = Blueprint::new();
    let first = blueprint.generate(&input, "testing", "v2", None).unwrap();
    let second = blueprint.generate(&input, "testing", "v2", None).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_resource_headers_merge_into_action_headers() {
    let input: Vec<Controller> = serde_json::from_value(json!([{
        "name": "UsersController",
        "annotations": [
            {"kind": "resource", "name": "Users", "uri": "/users"},
            {"kind": "request", "headers": {"Accept": "application/json", "X-Trace": "on"}},
            {"kind": "response", "status_code": 200, "headers": {"Cache-Control": "no-cache"}}
        ],
        "methods": [{
            "name": "store",
            "annotations": [
                {"kind": "method", "verb": "POST"},
                {"kind": "request", "headers": {"Accept": "text/plain", "Authorization": "Bearer t"}},
                {"kind": "response", "status_code": 201}
            ]
        }]
    }]))
    .unwrap();

    let doc = Blueprint::new().generate(&input, "testing", "v1", None).unwrap();
    assert!(doc.ends_with(
        "## [POST /users]

+ Request (application/json)
    + Headers

            Accept: text/plain
            X-Trace: on
            Authorization: Bearer t

+ Response 201
    + Headers

            Cache-Control: no-cache"
    ));
}

#[test]
fn test_included_body_is_read_from_include_path() {
    let input: Vec<Controller> = serde_json::from_value(json!([{
        "name": "UsersController",
        "annotations": [{"kind": "resource", "name": "Users", "uri": "/users"}],
        "methods": [{
            "name": "show",
            "annotations": [
                {"kind": "method", "verb": "GET", "uri": "/{id}"},
                {"kind": "response", "status_code": 200, "content_type": "application/json", "body": "json:user"}
            ]
        }]
    }]))
    .unwrap();

    let doc = Blueprint::new()
        .generate(&input, "testing", "v1", Some(fixture("bodies").as_path()))
        .unwrap();
    assert!(doc.ends_with(
        "+ Response 200 (application/json)
    + Body

            {
                \"id\": 7,
                \"name\": \"included\"
            }"
    ));

    let dir = tempfile::tempdir().unwrap();
    let err = Blueprint::new()
        .generate(&input, "testing", "v1", Some(dir.path()))
        .unwrap_err();
    assert!(matches!(err, BlueprintError::IncludedBodyNotFound { .. }));
}

#[test]
fn test_file_include_is_used_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("greeting.txt"), "Hello,\n\nworld").unwrap();

    let input: Vec<Controller> = serde_json::from_value(json!([{
        "name": "Greetings",
        "methods": [{
            "name": "show",
            "annotations": [
                {"kind": "method", "verb": "GET", "uri": "/greeting"},
                {"kind": "response", "status_code": 200, "content_type": "text/plain", "body": "file:greeting.txt"}
            ]
        }]
    }]))
    .unwrap();

    let doc = Blueprint::new()
        .generate(&input, "testing", "v1", Some(dir.path()))
        .unwrap();
    assert!(doc.ends_with("+ Body\n\n            Hello,\n            world"));
}

#[test]
fn test_rendered_json_body_parses_back() {
    let body = json!({"name": "Zoë", "tags": ["a", "b"], "nested": {"ok": true, "n": 1.5}});
    let input: Vec<Controller> = serde_json::from_value(json!([{
        "name": "Things",
        "methods": [{
            "name": "show",
            "annotations": [
                {"kind": "method", "verb": "GET", "uri": "/things"},
                {"kind": "response", "status_code": 200, "content_type": "application/json", "body": body.clone()}
            ]
        }]
    }]))
    .unwrap();

    let doc = Blueprint::new().generate(&input, "testing", "v1", None).unwrap();
    let rendered: String = doc
        .split_once("+ Body\n\n")
        .unwrap()
        .1
        .lines()
        .map(|line| line.strip_prefix("            ").unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n");
    let parsed: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(parsed, body);
    assert!(rendered.contains("Zoë"));
}

#[test]
fn test_groups_section_resources() {
    let doc = Blueprint::new()
        .with_groups(true)
        .generate(
            &controllers(&["users.yaml", "activity.yaml"]),
            "testing",
            "v1",
            None,
        )
        .unwrap();

    let expected = format!(
        "{}\n\n# Group Activity\n\n# Activity\n\n## Show all activities. [GET /activity]",
        expected("users_v1.apib")
    );
    assert_eq!(doc, expected);
}

#[test]
fn test_data_structures_follow_resources() {
    let input: Vec<Controller> = serde_json::from_value(json!([{
        "name": "UsersController",
        "annotations": [
            {"kind": "resource", "name": "Users", "uri": "/users"},
            {"kind": "data_structures", "types": [{
                "identifier": "User",
                "properties": [
                    {"identifier": "id", "type": "number", "sample": 1, "description": "Unique id"},
                    {"identifier": "name"}
                ]
            }]}
        ],
        "methods": [{"name": "index", "annotations": [{"kind": "method", "verb": "GET"}]}]
    }]))
    .unwrap();

    let doc = Blueprint::new().generate(&input, "testing", "v1", None).unwrap();
    assert_eq!(
        doc,
        "FORMAT: 1A\n\n# testing\n\n# Users [/users]\n\n## [GET /users]\n\n# Data Structures\n\n## User (object)\n+ id: 1 (number) - Unique id\n+ name (string)"
    );
}

#[test]
fn test_host_line() {
    let doc = Blueprint::new()
        .with_host(api_blueprint::config::HostConfig {
            scheme: "https".to_string(),
            domain: "api.example.com".to_string(),
            prefix: Some("api".to_string()),
        })
        .generate(&controllers(&["activity.yaml"]), "testing", "v1", None)
        .unwrap();
    assert!(doc.starts_with("FORMAT: 1A\nHOST: https://api.example.com/api\n\n# testing\n\n# Activity"));
}
