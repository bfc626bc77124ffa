//! # Manifest Linter Module
//!
//! Static checks over annotated controllers, run before generation to catch records
//! that would be rendered wrongly or abort the run.
//!
//! ## Checks Performed
//!
//! 1. **Duplicate identifiers** - parameter and attribute identifiers are unique per container
//! 2. **Transaction items** - only requests and responses may appear in a transaction
//! 3. **HTTP verbs** - `Method.verb` must be a valid HTTP method token
//! 4. **Resource identity** - every controller should carry a `Resource` record
//! 5. **Action routing** - every annotated method should carry a `Method` record
//! 6. **Nested attributes** - a dotted attribute should follow its parent
//! 7. **Empty versions** - a `Versions` record without values hides the method for good
//!
//! ## Usage
//!
//! ```rust,ignore
//! use api_blueprint::linter::{lint_manifest, print_lint_issues};
//!
//! let issues = lint_manifest("api.yaml".as_ref())?;
//! print_lint_issues(&issues);
//! ```

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::annotation::{Annotation, Attribute, Parameter};
use crate::reader::{load_manifest, Controller, ControllerMethod};
use crate::section::AttributeNode;


/// Severity level for lint issues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintSeverity {
    /// Error - Will cause generation to fail or render a broken document
    Error,
    /// Warning - Renders, but probably not as intended
    Warning,
    /// Info - Worth a look
    Info,
}

impl fmt::Display for LintSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LintSeverity::Error => write!(f, "error"),
            LintSeverity::Warning => write!(f, "warning"),
            LintSeverity::Info => write!(f, "info"),
        }
    }
}

/// A lint issue found in a manifest
#[derive(Debug, Clone)]
pub struct LintIssue {
    /// Where the issue occurred (e.g., "controller:UsersController", "method:UsersController::show")
    pub location: String,
    pub severity: LintSeverity,
    /// Type of lint issue (e.g., "duplicate_parameter", "missing_method")
    pub kind: String,
    pub message: String,
    /// Optional suggestion for how to fix it
    pub suggestion: Option<String>,
}

impl LintIssue {
    pub fn new(
        location: impl Into<String>,
        severity: LintSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        LintIssue {
            location: location.into(),
            severity,
            kind: kind.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    /// Add a suggestion for fixing the issue
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

/// Lint a YAML or JSON manifest file.
pub fn lint_manifest(manifest_path: &Path) -> anyhow::Result<Vec<LintIssue>> {
    let manifest = load_manifest(manifest_path)?;
    Ok(lint_controllers(&manifest.controllers))
}

/// Lint controller descriptors.
pub fn lint_controllers(controllers: &[Controller]) -> Vec<LintIssue> {
    let mut issues = Vec::new();

    for controller in controllers {
        let location = format!("controller:{}", controller.name);

        if !controller
            .annotations
            .iter()
            .any(|a| matches!(a, Annotation::Resource(_)))
        {
            issues.push(
                LintIssue::new(
                    &location,
                    LintSeverity::Warning,
                    "missing_resource",
                    format!(
                        "Controller '{}' has no resource record; its name is used as the heading and it has no base URI",
                        controller.name
                    ),
                )
                .with_suggestion("Add a `kind: resource` record with a name and uri"),
            );
        }

        lint_annotations(&mut issues, &location, &controller.annotations);

        for method in &controller.methods {
            lint_method(&mut issues, controller, method);
        }
    }

    tracing::debug!(
        controllers = controllers.len(),
        issues = issues.len(),
        "linted controllers"
    );
    issues
}

fn lint_method(issues: &mut Vec<LintIssue>, controller: &Controller, method: &ControllerMethod) {
    let location = format!("method:{}::{}", controller.name, method.name);
    if method.annotations.is_empty() {
        return;
    }

    let routed = method.annotations.iter().any(|annotation| match annotation {
        Annotation::Method(_) => true,
        Annotation::Resource(resource) => resource.method.is_some() || resource.uri.is_some(),
        _ => false,
    });
    if !routed {
        issues.push(
            LintIssue::new(
                &location,
                LintSeverity::Warning,
                "missing_method",
                format!(
                    "Method '{}' has no method record; it is documented as GET on the resource URI",
                    method.name
                ),
            )
            .with_suggestion("Add a `kind: method` record with verb and uri"),
        );
    }

    for annotation in &method.annotations {
        match annotation {
            Annotation::Method(record) => {
                let verb = record.verb();
                if verb.is_empty() || http::Method::from_bytes(verb.as_bytes()).is_err() {
                    issues.push(
                        LintIssue::new(
                            &location,
                            LintSeverity::Error,
                            "invalid_http_method",
                            format!("'{}' is not a valid HTTP method", record.verb),
                        )
                        .with_suggestion("Use GET, POST, PUT, PATCH, DELETE, HEAD or OPTIONS"),
                    );
                }
            }
            Annotation::Versions(versions) if versions.values.is_empty() => {
                issues.push(
                    LintIssue::new(
                        &location,
                        LintSeverity::Info,
                        "empty_versions",
                        format!(
                            "Method '{}' declares no versions and is never documented",
                            method.name
                        ),
                    )
                    .with_suggestion("List the versions or remove the versions record"),
                );
            }
            _ => {}
        }
    }

    lint_annotations(issues, &location, &method.annotations);
}

/// Checks shared by class-level and method-level records.
fn lint_annotations(issues: &mut Vec<LintIssue>, location: &str, annotations: &[Annotation]) {
    for annotation in annotations {
        match annotation {
            Annotation::Parameters(parameters) => {
                lint_parameters(issues, location, &parameters.values);
            }
            Annotation::Attributes(attributes) => {
                lint_attributes(issues, location, &attributes.values);
            }
            Annotation::Request(request) => {
                lint_attributes(issues, location, &request.attributes);
            }
            Annotation::Response(response) => {
                lint_attributes(issues, location, &response.attributes);
            }
            Annotation::Transaction(transaction) => {
                for item in &transaction.items {
                    match item {
                        Annotation::Request(request) => {
                            lint_attributes(issues, location, &request.attributes);
                        }
                        Annotation::Response(response) => {
                            lint_attributes(issues, location, &response.attributes);
                        }
                        other => issues.push(
                            LintIssue::new(
                                location,
                                LintSeverity::Error,
                                "unsupported_transaction_item",
                                format!(
                                    "Transaction contains a '{}' record; only request and response are allowed",
                                    other.kind()
                                ),
                            )
                            .with_suggestion("Move the record out of the transaction"),
                        ),
                    }
                }
            }
            _ => {}
        }
    }
}

fn lint_parameters(issues: &mut Vec<LintIssue>, location: &str, parameters: &[Parameter]) {
    let mut seen = HashSet::new();
    for parameter in parameters {
        if !seen.insert(parameter.identifier.as_str()) {
            issues.push(
                LintIssue::new(
                    location,
                    LintSeverity::Error,
                    "duplicate_parameter",
                    format!("Parameter '{}' is declared twice", parameter.identifier),
                )
                .with_suggestion("Remove or rename one of the parameters"),
            );
        }
    }
}

fn lint_attributes(issues: &mut Vec<LintIssue>, location: &str, attributes: &[Attribute]) {
    let mut seen: HashSet<&str> = HashSet::new();
    for node in AttributeNode::nodes(attributes) {
        let identifier = node.attribute().identifier.as_str();

        if let Some(parent) = node.parent_path() {
            if !seen.contains(parent.as_str()) {
                issues.push(
                    LintIssue::new(
                        location,
                        LintSeverity::Warning,
                        "orphan_nested_attribute",
                        format!(
                            "Attribute '{identifier}' is nested under '{parent}', which is not declared before it"
                        ),
                    )
                    .with_suggestion(format!("Declare '{parent}' before '{identifier}'")),
                );
            }
        }

        if !seen.insert(identifier) {
            issues.push(
                LintIssue::new(
                    location,
                    LintSeverity::Error,
                    "duplicate_attribute",
                    format!("Attribute '{identifier}' is declared twice"),
                )
                .with_suggestion("Remove or rename one of the attributes"),
            );
        }
    }
}

/// Print lint issues to stderr, grouped by severity
pub fn print_lint_issues(issues: &[LintIssue]) {
    if issues.is_empty() {
        eprintln!("No lint issues found");
        return;
    }

    let by_severity = |severity: LintSeverity| -> Vec<&LintIssue> {
        issues.iter().filter(|i| i.severity == severity).collect()
    };
    let errors = by_severity(LintSeverity::Error);
    let warnings = by_severity(LintSeverity::Warning);
    let infos = by_severity(LintSeverity::Info);

    eprintln!("\nLint results:");
    eprintln!(
        "   {} error(s), {} warning(s), {} info(s)\n",
        errors.len(),
        warnings.len(),
        infos.len()
    );

    for (heading, group) in [
        ("Errors (must fix):", errors),
        ("Warnings (should fix):", warnings),
        ("Info:", infos),
    ] {
        if group.is_empty() {
            continue;
        }
        eprintln!("{heading}");
        for issue in &group {
            eprintln!("   [{}] {}", issue.kind, issue.location);
            eprintln!("      {}", issue.message);
            if let Some(suggestion) = &issue.suggestion {
                eprintln!("      Suggestion: {suggestion}");
            }
        }
        eprintln!();
    }
}

/// Fail when any error-level issue is present
pub fn fail_if_errors(issues: &[LintIssue]) -> anyhow::Result<()> {
    let errors = issues
        .iter()
        .filter(|i| i.severity == LintSeverity::Error)
        .count();
    if errors > 0 {
        anyhow::bail!("manifest has {errors} lint error(s)");
    }
    Ok(())
}
