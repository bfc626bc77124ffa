//! # Annotation Module
//!
//! Metadata records attached to controllers and their methods. Each record is one
//! parsed annotation; the [`Annotation`] enum is the tagged union the rest of the
//! crate matches on.
//!
//! Records are plain data. They are produced by an
//! [`AnnotationReader`](crate::reader::AnnotationReader), usually deserialized from a
//! YAML or JSON manifest where every entry carries a `kind` discriminator:
//!
//! ```yaml
//! - kind: method
//!   verb: GET
//!   uri: /{id}
//! - kind: parameters
//!   values:
//!     - identifier: id
//!       type: integer
//!       required: true
//!       description: ID of user to retrieve
//! - kind: response
//!   status_code: 200
//!   content_type: application/json
//!   body: { "id": 5 }
//! ```

mod records;

pub use records::*;

use serde::{Deserialize, Serialize};

/// One parsed annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Annotation {
    Resource(Resource),
    Group(Group),
    Versions(Versions),
    Method(Method),
    Parameters(Parameters),
    Parameter(Parameter),
    Attributes(Attributes),
    Attribute(Attribute),
    Member(Member),
    Request(Request),
    Response(Response),
    Transaction(Transaction),
    DataStructures(DataStructures),
}

impl Annotation {
    /// The `kind` discriminator as it appears in manifests.
    pub fn kind(&self) -> &'static str {
        match self {
            Annotation::Resource(_) => "resource",
            Annotation::Group(_) => "group",
            Annotation::Versions(_) => "versions",
            Annotation::Method(_) => "method",
            Annotation::Parameters(_) => "parameters",
            Annotation::Parameter(_) => "parameter",
            Annotation::Attributes(_) => "attributes",
            Annotation::Attribute(_) => "attribute",
            Annotation::Member(_) => "member",
            Annotation::Request(_) => "request",
            Annotation::Response(_) => "response",
            Annotation::Transaction(_) => "transaction",
            Annotation::DataStructures(_) => "data_structures",
        }
    }
}

/// Renders a scalar metadata value (example, sample, default) as document text.
///
/// Strings are emitted verbatim, other values in their JSON text form.
pub fn scalar_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}
