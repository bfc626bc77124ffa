use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::blueprint::Blueprint;
use crate::config::{load_config, GeneratorConfig, HostConfig};
use crate::linter::{fail_if_errors, lint_manifest, print_lint_issues, LintSeverity};
use crate::reader::load_manifest;

/// Command-line interface for the API Blueprint generator
#[derive(Parser)]
#[command(name = "blueprint-gen")]
#[command(about = "Generate API Blueprint documents from annotated controllers", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render an API Blueprint document
    Generate {
        /// Manifest of annotated controllers (YAML or JSON)
        #[arg(short, long)]
        manifest: PathBuf,

        /// Document title; defaults to the manifest's name
        #[arg(short, long)]
        name: Option<String>,

        /// API version to document
        #[arg(long = "api-version", env = "BLUEPRINT_API_VERSION")]
        api_version: String,

        /// Directory `json:`/`file:` body references are read from
        #[arg(long)]
        include_path: Option<PathBuf>,

        /// File included between the title and the first resource
        #[arg(long)]
        overview: Option<PathBuf>,

        /// Section resources under `# Group` headings
        #[arg(long, default_value_t = false)]
        groups: bool,

        /// YAML generator configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Domain of the `HOST:` line
        #[arg(long)]
        host_domain: Option<String>,

        /// Scheme of the `HOST:` line
        #[arg(long)]
        host_scheme: Option<String>,

        /// Path prefix of the `HOST:` line
        #[arg(long)]
        host_prefix: Option<String>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Lint a manifest
    ///
    /// - duplicate parameter and attribute identifiers
    /// - transaction items other than requests and responses
    /// - invalid HTTP verbs
    /// - controllers without a resource record, methods without a method record
    /// - nested attributes declared before their parent
    /// - empty versions records
    Lint {
        /// Manifest of annotated controllers (YAML or JSON)
        #[arg(short, long)]
        manifest: PathBuf,

        /// Exit with error code if any errors are found
        #[arg(long, default_value_t = false)]
        fail_on_error: bool,

        /// Show only errors (hide warnings and info)
        #[arg(long, default_value_t = false)]
        errors_only: bool,
    },
}

/// Parse the process arguments and run the selected command.
pub fn run_cli() -> anyhow::Result<()> {
    execute(Cli::parse())
}

/// Run a parsed command.
///
/// # Errors
///
/// Returns an error if:
/// - the manifest or configuration cannot be loaded
/// - no document name is given and the manifest has none
/// - generation fails
/// - the output cannot be written
/// - `--fail-on-error` is set and the linter reports errors
pub fn execute(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Generate {
            manifest,
            name,
            api_version,
            include_path,
            overview,
            groups,
            config,
            host_domain,
            host_scheme,
            host_prefix,
            output,
        } => {
            let file_config = match &config {
                Some(path) => load_config(path)?,
                None => GeneratorConfig::default(),
            };
            let mut settings = file_config.or(GeneratorConfig::from_env());

            if let Some(domain) = host_domain {
                settings.host = Some(HostConfig {
                    domain,
                    ..settings.host.unwrap_or_else(|| HostConfig::new(""))
                });
            }
            if let Some(host) = settings.host.as_mut() {
                if let Some(scheme) = host_scheme {
                    host.scheme = scheme;
                }
                if let Some(prefix) = host_prefix {
                    host.prefix = Some(prefix);
                }
            }
            settings.include_path = include_path.or(settings.include_path);
            settings.overview = overview.or(settings.overview);
            settings.group_resources |= groups;

            let loaded = load_manifest(&manifest)?;
            let name = name.or(loaded.name).with_context(|| {
                format!(
                    "no document name: pass --name or set `name` in {}",
                    manifest.display()
                )
            })?;

            let document = generate_document(&loaded.controllers, &name, &api_version, &settings)?;

            match output {
                Some(path) => write_document(&path, &document)?,
                None => println!("{document}"),
            }
            Ok(())
        }
        Commands::Lint {
            manifest,
            fail_on_error,
            errors_only,
        } => {
            let mut issues = lint_manifest(&manifest)?;
            if errors_only {
                issues.retain(|i| i.severity == LintSeverity::Error);
            }
            print_lint_issues(&issues);
            if fail_on_error {
                fail_if_errors(&issues)?;
            }
            Ok(())
        }
    }
}

fn generate_document(
    controllers: &[crate::reader::Controller],
    name: &str,
    version: &str,
    settings: &GeneratorConfig,
) -> anyhow::Result<String> {
    let mut blueprint = Blueprint::new().with_groups(settings.group_resources);
    if let Some(host) = settings.host.clone().filter(|h| !h.domain.trim().is_empty()) {
        blueprint = blueprint.with_host(host);
    }
    if let Some(overview) = &settings.overview {
        blueprint = blueprint.with_overview(overview.clone());
    }

    let document = blueprint
        .generate(controllers, name, version, settings.include_path.as_deref())
        .with_context(|| format!("failed to generate blueprint for version {version}"))?;
    Ok(document)
}

fn write_document(path: &Path, document: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, format!("{document}\n"))
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote blueprint");
    Ok(())
}
