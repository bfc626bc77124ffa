use indexmap::IndexMap;

use super::{Action, DocBlock, Section};
use crate::annotation::{self, Annotation, TypeDefinition};
use crate::reader::Controller;

/// One documented endpoint group: a controller and its qualifying actions.
#[derive(Debug, Clone)]
pub struct Resource<'a> {
    identifier: String,
    controller: &'a Controller,
    annotations: Vec<Annotation>,
    actions: Vec<Action<'a>>,
    doc: DocBlock,
}

impl<'a> Resource<'a> {
    pub fn new(
        identifier: impl Into<String>,
        controller: &'a Controller,
        annotations: Vec<Annotation>,
        actions: Vec<Action<'a>>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            controller,
            annotations,
            actions,
            doc: DocBlock::from_option(controller.doc.as_deref()),
        }
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn controller(&self) -> &'a Controller {
        self.controller
    }

    fn record(&self) -> Option<&annotation::Resource> {
        resource_record(&self.annotations)
    }

    /// Resource name; the identifier when no `Resource` record names it.
    pub fn name(&self) -> &str {
        self.record()
            .map(|r| r.name.as_str())
            .unwrap_or(self.identifier.as_str())
    }

    pub fn uri(&self) -> Option<&str> {
        self.record().and_then(|r| r.uri.as_deref())
    }

    pub fn group_identifier(&self) -> Option<&str> {
        self.annotations.iter().find_map(|annotation| match annotation {
            Annotation::Group(group) => Some(group.name.as_str()),
            _ => None,
        })
    }

    /// `# <name> [<uri>]`, or `# <name>` without a URI.
    pub fn definition(&self) -> String {
        match self.uri() {
            Some(uri) => format!("# {} [{}]", self.name(), uri),
            None => format!("# {}", self.name()),
        }
    }

    pub fn description(&self) -> Option<String> {
        self.doc.text()
    }

    /// Actions in declaration order. Resolution only builds actions for methods
    /// that carry annotations, so every action here has at least one.
    pub fn actions(&self) -> &[Action<'a>] {
        &self.actions
    }

    pub fn has_actions(&self) -> bool {
        !self.actions.is_empty()
    }

    fn request_headers_record(&self) -> Option<&IndexMap<String, String>> {
        self.annotations.iter().find_map(|annotation| match annotation {
            Annotation::Request(request) => Some(&request.headers),
            _ => None,
        })
    }

    fn response_headers_record(&self) -> Option<&IndexMap<String, String>> {
        self.annotations.iter().find_map(|annotation| match annotation {
            Annotation::Response(response) => Some(&response.headers),
            _ => None,
        })
    }

    pub fn has_request_headers(&self) -> bool {
        self.request_headers_record()
            .map(|headers| !headers.is_empty())
            .unwrap_or(false)
    }

    pub fn has_response_headers(&self) -> bool {
        self.response_headers_record()
            .map(|headers| !headers.is_empty())
            .unwrap_or(false)
    }

    /// Default request headers every action's requests inherit.
    pub fn request_headers(&self) -> IndexMap<String, String> {
        self.request_headers_record().cloned().unwrap_or_default()
    }

    /// Default response headers every action's responses inherit.
    pub fn response_headers(&self) -> IndexMap<String, String> {
        self.response_headers_record().cloned().unwrap_or_default()
    }

    /// Named types declared for the `Data Structures` section.
    pub fn data_structures(&self) -> Vec<&TypeDefinition> {
        self.annotations
            .iter()
            .filter_map(|annotation| match annotation {
                Annotation::DataStructures(structures) => Some(structures.types.iter()),
                _ => None,
            })
            .flatten()
            .collect()
    }
}

impl Section for Resource<'_> {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

/// The first `Resource` record in a bag of annotations.
pub(crate) fn resource_record(annotations: &[Annotation]) -> Option<&annotation::Resource> {
    annotations.iter().find_map(|annotation| match annotation {
        Annotation::Resource(resource) => Some(resource),
        _ => None,
    })
}

/// Merge resource-level default headers with an action's own headers.
///
/// Defaults keep their position; the action's value wins on a shared key, and keys
/// only the action declares follow in its order.
pub fn merge_headers(
    defaults: &IndexMap<String, String>,
    own: &IndexMap<String, String>,
) -> IndexMap<String, String> {
    let mut merged = defaults.clone();
    for (name, value) in own {
        merged.insert(name.clone(), value.clone());
    }
    merged
}
