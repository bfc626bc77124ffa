use serde::Serialize;
use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{BlueprintError, Result};

/// Reads files referenced by `json:`/`file:` bodies and the overview file.
pub trait FileReader {
    fn read(&self, path: &Path) -> io::Result<String>;
}

/// Reads from the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsFileReader;

impl FileReader for FsFileReader {
    fn read(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Path named by a `json:<path>` or `file:<path>` body reference.
///
/// `json:` references get a `.json` extension when they lack one.
pub fn include_reference(body: &str) -> Option<String> {
    if let Some(path) = body.strip_prefix("json:") {
        let path = path.trim();
        if path.ends_with(".json") {
            Some(path.to_string())
        } else {
            Some(format!("{path}.json"))
        }
    } else {
        body.strip_prefix("file:").map(|path| path.trim().to_string())
    }
}

fn resolve_include(include_path: Option<&Path>, reference: &str) -> PathBuf {
    match include_path {
        Some(base) => base.join(reference),
        None => PathBuf::from(reference),
    }
}

/// Serialize a value as human-readable JSON with a four-space indent.
///
/// Object key order is kept and non-ASCII characters are written as-is.
pub fn pretty_json(value: &Value) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Turn a request/response body into the text rendered under `+ Body`.
///
/// 1. A `json:`/`file:` reference is read relative to `include_path`; the file is used
///    verbatim. Content that fails JSON validation is still used verbatim.
/// 2. Otherwise, under an `application/json` content type, the value is pretty-printed.
/// 3. Otherwise strings are literal text and structured values are pretty-printed.
pub fn prepare_body<F: FileReader + ?Sized>(
    files: &F,
    include_path: Option<&Path>,
    body: &Value,
    content_type: Option<&str>,
) -> Result<String> {
    if let Value::String(text) = body {
        if let Some(reference) = include_reference(text) {
            let path = resolve_include(include_path, &reference);
            let contents = files
                .read(&path)
                .map_err(|source| BlueprintError::IncludedBodyNotFound {
                    path: path.clone(),
                    source,
                })?;
            if serde_json::from_str::<Value>(&contents).is_err() {
                tracing::warn!(
                    path = %path.display(),
                    "included body is not valid JSON, rendering it as literal text"
                );
            } else {
                tracing::trace!(path = %path.display(), "included JSON body");
            }
            return Ok(contents);
        }
    }

    let is_json = content_type
        .map(|ct| ct.trim().starts_with("application/json"))
        .unwrap_or(false);
    if is_json {
        return pretty_json(body);
    }

    match body {
        Value::String(text) => Ok(text.clone()),
        other => pretty_json(other),
    }
}
