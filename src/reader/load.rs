use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

use super::Controller;

/// A file listing the controllers to document.
///
/// ```yaml
/// name: My API
/// controllers:
///   - name: UsersController
///     doc: Users Resource.
///     annotations:
///       - kind: resource
///         name: Users
///         uri: /users
///     methods: []
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    /// Document name used when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub controllers: Vec<Controller>,
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext == "yaml" || ext == "yml")
        .unwrap_or(false)
}

/// Load a manifest from a YAML (`.yaml`/`.yml`) or JSON file.
pub fn load_manifest(path: &Path) -> anyhow::Result<Manifest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read manifest {}", path.display()))?;
    let manifest: Manifest = if is_yaml(path) {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML manifest {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON manifest {}", path.display()))?
    };
    tracing::debug!(
        path = %path.display(),
        controllers = manifest.controllers.len(),
        "loaded manifest"
    );
    Ok(manifest)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const YAML: &str = r#"
name: testing
controllers:
  - name: ActivityController
    annotations:
      - kind: resource
        name: Activity
    methods:
      - name: getIndex
        doc: Show all activities.
        annotations:
          - kind: method
            verb: GET
            uri: activity
"#;

    #[test]
    fn test_load_yaml_manifest() {
        let mut temp = NamedTempFile::with_suffix(".yaml").unwrap();
        temp.write_all(YAML.as_bytes()).unwrap();
        temp.flush().unwrap();

        let manifest = load_manifest(temp.path()).unwrap();
        assert_eq!(manifest.name.as_deref(), Some("testing"));
        assert_eq!(manifest.controllers.len(), 1);
        assert_eq!(manifest.controllers[0].methods[0].name, "getIndex");
    }

    #[test]
    fn test_load_json_manifest() {
        let mut temp = NamedTempFile::with_suffix(".json").unwrap();
        temp.write_all(br#"{"controllers": [{"name": "Empty"}]}"#)
            .unwrap();
        temp.flush().unwrap();

        let manifest = load_manifest(temp.path()).unwrap();
        assert!(manifest.name.is_none());
        assert!(manifest.controllers[0].methods.is_empty());
    }

    #[test]
    fn test_load_manifest_reports_path_on_parse_error() {
        let mut temp = NamedTempFile::with_suffix(".yaml").unwrap();
        temp.write_all(b"controllers: [ {").unwrap();
        temp.flush().unwrap();

        let err = load_manifest(temp.path()).unwrap_err();
        assert!(format!("{err}").contains("failed to parse YAML manifest"));
    }
}
