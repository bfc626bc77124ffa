//! # Configuration Module
//!
//! Generator settings loaded from a YAML file and from environment variables.
//!
//! ## Configuration File
//!
//! ```yaml
//! host:
//!   scheme: https
//!   domain: api.example.com
//!   prefix: v1
//! include_path: docs/bodies
//! overview: docs/overview.apib
//! group_resources: true
//! ```
//!
//! ## Environment Variables
//!
//! ### `BLUEPRINT_HOST_DOMAIN`
//!
//! Domain of the `HOST:` line. Without it no host line is emitted.
//!
//! ### `BLUEPRINT_HOST_SCHEME`
//!
//! URL scheme of the host line. Default: `http`
//!
//! ### `BLUEPRINT_HOST_PREFIX`
//!
//! Optional path prefix appended after the domain.
//!
//! ## Precedence
//!
//! Command-line flags override the file, and the file overrides the environment.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::blueprint::HostProvider;

fn default_scheme() -> String {
    "http".to_string()
}

/// Where the documented API is served.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostConfig {
    #[serde(default = "default_scheme")]
    pub scheme: String,
    pub domain: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

impl HostConfig {
    pub fn new(domain: impl Into<String>) -> Self {
        Self {
            scheme: default_scheme(),
            domain: domain.into(),
            prefix: None,
        }
    }

    /// Read `BLUEPRINT_HOST_*`; `None` unless a non-empty domain is set.
    pub fn from_env() -> Option<Self> {
        let domain = env::var("BLUEPRINT_HOST_DOMAIN").ok()?;
        if domain.trim().is_empty() {
            return None;
        }
        Some(Self {
            scheme: env::var("BLUEPRINT_HOST_SCHEME")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(default_scheme),
            domain,
            prefix: env::var("BLUEPRINT_HOST_PREFIX")
                .ok()
                .filter(|s| !s.trim().is_empty()),
        })
    }

    /// `<scheme>://<domain>[/<prefix>]`
    pub fn host(&self) -> String {
        let domain = self.domain.trim().trim_end_matches('/');
        match self
            .prefix
            .as_deref()
            .map(|p| p.trim().trim_matches('/'))
            .filter(|p| !p.is_empty())
        {
            Some(prefix) => format!("{}://{}/{}", self.scheme, domain, prefix),
            None => format!("{}://{}", self.scheme, domain),
        }
    }
}

impl HostProvider for HostConfig {
    fn host(&self) -> Option<String> {
        Some(HostConfig::host(self))
    }
}

/// Settings for one generator run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<HostConfig>,
    /// Directory `json:`/`file:` body references are read from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_path: Option<PathBuf>,
    /// File included between the title and the first resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<PathBuf>,
    #[serde(default)]
    pub group_resources: bool,
}

impl GeneratorConfig {
    /// Configuration from the environment alone.
    pub fn from_env() -> Self {
        Self {
            host: HostConfig::from_env(),
            ..Default::default()
        }
    }

    /// Fill settings this file leaves unset from `fallback`.
    pub fn or(self, fallback: GeneratorConfig) -> Self {
        Self {
            host: self.host.or(fallback.host),
            include_path: self.include_path.or(fallback.include_path),
            overview: self.overview.or(fallback.overview),
            group_resources: self.group_resources || fallback.group_resources,
        }
    }
}

/// Load a [`GeneratorConfig`] from a YAML file.
pub fn load_config(path: &Path) -> anyhow::Result<GeneratorConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: GeneratorConfig = serde_yaml::from_str(&content)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?config, "loaded generator config");
    Ok(config)
}
