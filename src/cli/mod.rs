//! # CLI Module
//!
//! Command-line interface for the API Blueprint generator.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Render a manifest of annotated controllers into an API Blueprint document:
//!
//! ```bash
//! blueprint-gen generate --manifest api.yaml --name "My API" --api-version v1
//! ```
//!
//! Options:
//! - `--manifest <FILE>` - YAML or JSON manifest of controllers (required)
//! - `--name <NAME>` - Document title (default: the manifest's `name`)
//! - `--api-version <V>` - Version to document (required)
//! - `--include-path <DIR>` - Directory for `json:`/`file:` body references
//! - `--overview <FILE>` - File included after the title
//! - `--groups` - Section resources under `# Group` headings
//! - `--config <FILE>` - YAML generator configuration
//! - `--host-domain`, `--host-scheme`, `--host-prefix` - `HOST:` line
//! - `--output <FILE>` - Write the document to a file instead of stdout
//!
//! ### `lint`
//!
//! Check a manifest for records that render wrongly or abort generation:
//!
//! ```bash
//! blueprint-gen lint --manifest api.yaml --fail-on-error
//! ```
//!
//! ## Usage from Code
//!
//! ```rust,ignore
//! use api_blueprint::cli::{execute, Cli};
//! use clap::Parser;
//!
//! execute(Cli::parse())?;
//! ```

mod commands;

#[cfg(test)]
mod tests;

pub use commands::{execute, run_cli, Cli, Commands};
