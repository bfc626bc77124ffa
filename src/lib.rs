//! # api-blueprint
//!
//! **api-blueprint** renders [API Blueprint](https://apiblueprint.org/) documentation from
//! structured metadata attached to API controllers and their actions.
//!
//! ## Overview
//!
//! Callers describe their endpoints as controllers carrying annotation records:
//! resource identity and URI, HTTP verb, parameters, attributes, request and response
//! examples, headers and the API versions an action applies to. The generator resolves
//! those records into a document model and serializes it in one ordered pass.
//!
//! ## Architecture
//!
//! - **[`annotation`]** - the annotation records and the [`Annotation`] tagged union
//! - **[`reader`]** - controller descriptors, the [`AnnotationReader`] seam and manifest loading
//! - **[`section`]** - the document model: resources, actions, groups and doc blocks
//! - **[`blueprint`]** - resolution and rendering ([`Blueprint`])
//! - **[`config`]** - generator settings from YAML and the environment
//! - **[`linter`]** - static checks over a manifest
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - the `blueprint-gen` command line
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant CLI as CLI<br/>(blueprint-gen)
//!     participant Reader as reader::load_manifest
//!     participant Blueprint as blueprint::Blueprint
//!     participant Files as FileReader
//!
//!     CLI->>Reader: load_manifest("api.yaml")
//!     Reader-->>CLI: Manifest { controllers }
//!     CLI->>Blueprint: generate(controllers, name, version, include_path)
//!     Blueprint->>Blueprint: resolve resources for version
//!     Blueprint->>Files: read overview / included bodies
//!     Files-->>Blueprint: contents
//!     Blueprint-->>CLI: API Blueprint text
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use api_blueprint::{load_manifest, Blueprint};
//!
//! let manifest = load_manifest("api.yaml".as_ref())?;
//! let document = Blueprint::new()
//!     .with_groups(true)
//!     .generate(&manifest.controllers, "My API", "v1", Some("docs/bodies".as_ref()))?;
//! println!("{document}");
//! ```
//!
//! ## Error Handling
//!
//! [`Blueprint::generate`] returns [`BlueprintError`] for the few conditions that abort a
//! run: an unsupported transaction item, an unreadable included body or overview file.
//! Missing optional metadata never fails; it is simply not rendered.

pub mod annotation;
pub mod blueprint;
pub mod cli;
pub mod config;
pub mod error;
pub mod linter;
pub mod logging;
pub mod reader;
pub mod section;

pub use annotation::Annotation;
pub use blueprint::{Blueprint, FileReader, FsFileReader, HostProvider};
pub use error::{BlueprintError, Result};
pub use reader::{
    load_manifest, AnnotationReader, Controller, ControllerMethod, Manifest,
    SimpleAnnotationReader,
};
