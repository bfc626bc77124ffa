//! # Blueprint Module
//!
//! Turns annotated controllers into an API Blueprint document.
//!
//! ## Overview
//!
//! [`Blueprint::generate`] runs in two phases:
//!
//! 1. **Resolution** - every controller becomes one [`Resource`]. Methods whose
//!    `Versions` record does not list the requested version are skipped, as are methods
//!    without any annotation. Resources left without actions are dropped.
//! 2. **Rendering** - a single ordered pass emits the `FORMAT: 1A` preamble, the
//!    optional `HOST:` line, the title, then every resource and its actions with their
//!    parameters, attributes, requests, responses and transactions.
//!
//! ```text
//! FORMAT: 1A
//!
//! # testing
//!
//! # Users [/users]
//!
//! ## [GET /users]
//!
//! + Response 200
//!     + Body
//!
//!             {
//!                 "id": 5
//!             }
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use api_blueprint::{load_manifest, Blueprint};
//!
//! let manifest = load_manifest("api.yaml".as_ref())?;
//! let document = Blueprint::new().generate(&manifest.controllers, "My API", "v1", None)?;
//! ```
//!
//! The model is rebuilt on every call and nothing is cached, so one [`Blueprint`] can
//! serve any number of calls.

mod body;
mod render;
mod writer;

pub use body::{include_reference, prepare_body, pretty_json, FileReader, FsFileReader};
pub use writer::strip_slashes;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{BlueprintError, Result};
use crate::reader::{AnnotationReader, Controller, SimpleAnnotationReader};
use crate::section::{resource_record, Action, Group, Resource};
use render::Renderer;

/// Supplies the value of the optional `HOST:` line.
pub trait HostProvider {
    fn host(&self) -> Option<String>;
}

impl<T> HostProvider for T
where
    T: Fn() -> Option<String>,
{
    fn host(&self) -> Option<String> {
        self()
    }
}

/// API Blueprint document generator.
pub struct Blueprint<R = SimpleAnnotationReader, F = FsFileReader> {
    reader: R,
    files: F,
    host: Option<Box<dyn HostProvider>>,
    overview: Option<PathBuf>,
    group_resources: bool,
}

impl Blueprint {
    /// Generator over descriptor annotations and the local filesystem.
    pub fn new() -> Self {
        Self::with_reader(SimpleAnnotationReader, FsFileReader)
    }
}

impl Default for Blueprint {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: AnnotationReader, F: FileReader> Blueprint<R, F> {
    pub fn with_reader(reader: R, files: F) -> Self {
        Self {
            reader,
            files,
            host: None,
            overview: None,
            group_resources: false,
        }
    }

    /// Emit a `HOST:` line whenever the provider yields a value.
    pub fn with_host(mut self, provider: impl HostProvider + 'static) -> Self {
        self.host = Some(Box::new(provider));
        self
    }

    /// Include the contents of `path` between the title and the first resource.
    pub fn with_overview(mut self, path: impl Into<PathBuf>) -> Self {
        self.overview = Some(path.into());
        self
    }

    /// Section resources under `# Group <name>` headings.
    pub fn with_groups(mut self, enabled: bool) -> Self {
        self.group_resources = enabled;
        self
    }

    /// Render the document for `version`.
    ///
    /// `include_path` is the directory `json:`/`file:` body references are read from.
    ///
    /// # Errors
    ///
    /// - [`BlueprintError::UnsupportedTransactionAnnotation`] for a transaction item that
    ///   is neither a request nor a response
    /// - [`BlueprintError::IncludedBodyNotFound`] when a referenced body file cannot be read
    /// - [`BlueprintError::OverviewNotFound`] when the overview file cannot be read
    pub fn generate(
        &self,
        controllers: &[Controller],
        name: &str,
        version: &str,
        include_path: Option<&Path>,
    ) -> Result<String> {
        let resources = self.resolve(controllers, version);
        let resources: Vec<&Resource<'_>> = resources.iter().collect();

        let mut renderer = Renderer::new(&self.files, include_path);

        let host = self.host.as_ref().and_then(|provider| provider.host());
        renderer.header(name, host.as_deref());

        if let Some(path) = &self.overview {
            let overview =
                self.files
                    .read(path)
                    .map_err(|source| BlueprintError::OverviewNotFound {
                        path: path.clone(),
                        source,
                    })?;
            renderer.overview(&overview);
        }

        if self.group_resources {
            for group in Group::partition(&resources) {
                renderer.group(&group)?;
            }
        } else {
            for resource in &resources {
                renderer.resource(resource)?;
            }
        }

        renderer.data_structures(&resources);

        tracing::info!(
            name,
            version,
            resources = resources.len(),
            "generated blueprint"
        );
        Ok(renderer.finish())
    }

    /// Build one resource per controller from the methods valid for `version`.
    fn resolve<'c>(&self, controllers: &'c [Controller], version: &str) -> Vec<Resource<'c>> {
        controllers
            .iter()
            .filter_map(|controller| {
                let annotations = self.reader.class_annotations(controller);
                let base_uri = resource_record(&annotations).and_then(|record| record.uri.clone());

                let mut seen: HashSet<&str> = HashSet::new();
                let mut actions = Vec::new();

                for method in &controller.methods {
                    if let Some(versions) = self.reader.method_versions(controller, method) {
                        if !versions.contains(version) {
                            tracing::debug!(
                                controller = %controller.name,
                                method = %method.name,
                                version,
                                "method not documented for requested version"
                            );
                            continue;
                        }
                    }

                    let method_annotations = self.reader.method_annotations(controller, method);
                    if method_annotations.is_empty() {
                        tracing::trace!(
                            controller = %controller.name,
                            method = %method.name,
                            "method has no annotations"
                        );
                        continue;
                    }

                    if !seen.insert(method.name.as_str()) {
                        continue;
                    }

                    actions.push(Action::new(method, method_annotations, base_uri.as_deref()));
                }

                let resource =
                    Resource::new(controller.name.clone(), controller, annotations, actions);
                if resource.has_actions() {
                    Some(resource)
                } else {
                    tracing::debug!(
                        controller = %controller.name,
                        version,
                        "resource has no actions, leaving it out"
                    );
                    None
                }
            })
            .collect()
    }
}
