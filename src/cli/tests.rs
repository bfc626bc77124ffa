#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Unit tests for CLI commands

use crate::cli::{execute, Cli, Commands};
use clap::Parser;
use std::io::Write;
use tempfile::NamedTempFile;

const MANIFEST: &str = r#"
name: testing
controllers:
  - name: UsersController
    annotations:
      - kind: resource
        name: Users
        uri: /users
    methods:
      - name: index
        annotations:
          - kind: method
            verb: GET
          - kind: response
            status_code: 200
            body: {"id": 5}
"#;

fn manifest_file() -> NamedTempFile {
    let mut temp = NamedTempFile::with_suffix(".yaml").expect("create temp file");
    temp.write_all(MANIFEST.as_bytes()).expect("write manifest");
    temp.flush().expect("flush");
    temp
}

#[test]
fn test_generate_command_parses_flags() {
    let cli = Cli::try_parse_from([
        "blueprint-gen",
        "generate",
        "--manifest",
        "api.yaml",
        "--name",
        "My API",
        "--api-version",
        "v2",
        "--groups",
        "--host-domain",
        "api.example.com",
        "--output",
        "out/api.apib",
    ])
    .unwrap();

    match cli.command {
        Commands::Generate {
            manifest,
            name,
            api_version,
            groups,
            host_domain,
            output,
            include_path,
            ..
        } => {
            assert_eq!(manifest.to_string_lossy(), "api.yaml");
            assert_eq!(name.as_deref(), Some("My API"));
            assert_eq!(api_version, "v2");
            assert!(groups);
            assert_eq!(host_domain.as_deref(), Some("api.example.com"));
            assert_eq!(output.unwrap().to_string_lossy(), "out/api.apib");
            assert!(include_path.is_none());
        }
        _ => panic!("Expected Generate command"),
    }
}

#[test]
fn test_generate_requires_manifest() {
    assert!(Cli::try_parse_from(["blueprint-gen", "generate", "--api-version", "v1"]).is_err());
}

#[test]
fn test_lint_command_with_flags() {
    let cli = Cli::try_parse_from([
        "blueprint-gen",
        "lint",
        "--manifest",
        "api.yaml",
        "--fail-on-error",
        "--errors-only",
    ])
    .unwrap();

    match cli.command {
        Commands::Lint {
            manifest,
            fail_on_error,
            errors_only,
        } => {
            assert_eq!(manifest.to_string_lossy(), "api.yaml");
            assert!(fail_on_error);
            assert!(errors_only);
        }
        _ => panic!("Expected Lint command"),
    }
}

#[test]
fn test_generate_writes_output_file() {
    let manifest = manifest_file();
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("docs").join("api.apib");

    let cli = Cli::try_parse_from([
        "blueprint-gen",
        "generate",
        "--manifest",
        manifest.path().to_str().unwrap(),
        "--api-version",
        "v1",
        "--host-domain",
        "api.example.com",
        "--host-scheme",
        "https",
        "--output",
        output.to_str().unwrap(),
    ])
    .unwrap();
    execute(cli).unwrap();

    let written = std::fs::read_to_string(&output).unwrap();
    assert!(written.starts_with("FORMAT: 1A\nHOST: https://api.example.com\n\n# testing\n"));
    assert!(written.contains("## [GET /users]"));
}

#[test]
fn test_lint_fail_on_error() {
    let mut temp = NamedTempFile::with_suffix(".yaml").unwrap();
    temp.write_all(
        b"controllers:\n  - name: A\n    annotations:\n      - kind: resource\n        name: A\n      - kind: parameters\n        values:\n          - identifier: id\n          - identifier: id\n",
    )
    .unwrap();
    temp.flush().unwrap();
    let path = temp.path().to_str().unwrap();

    let cli = Cli::try_parse_from(["blueprint-gen", "lint", "--manifest", path]).unwrap();
    assert!(execute(cli).is_ok());

    let cli =
        Cli::try_parse_from(["blueprint-gen", "lint", "--manifest", path, "--fail-on-error"])
            .unwrap();
    assert!(execute(cli).is_err());
}
