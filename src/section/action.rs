use super::{DocBlock, Section};
use crate::annotation::{Annotation, Request, Response, Transaction};
use crate::reader::ControllerMethod;

/// One documented HTTP operation.
#[derive(Debug, Clone)]
pub struct Action<'a> {
    method: &'a ControllerMethod,
    annotations: Vec<Annotation>,
    base_uri: Option<String>,
    doc: DocBlock,
}

impl<'a> Action<'a> {
    /// `base_uri` is the owning resource's URI; the action's own fragment is joined to it.
    pub fn new(
        method: &'a ControllerMethod,
        annotations: Vec<Annotation>,
        base_uri: Option<&str>,
    ) -> Self {
        Self {
            method,
            annotations,
            base_uri: base_uri.map(str::to_string),
            doc: DocBlock::from_option(method.doc.as_deref()),
        }
    }

    pub fn method(&self) -> &'a ControllerMethod {
        self.method
    }

    pub fn name(&self) -> &str {
        &self.method.name
    }

    /// HTTP verb, upper-cased; `GET` when none is declared.
    pub fn verb(&self) -> String {
        self.annotations
            .iter()
            .find_map(|annotation| match annotation {
                Annotation::Method(method) => Some(method.verb()),
                _ => None,
            })
            .or_else(|| {
                self.annotations.iter().find_map(|annotation| match annotation {
                    Annotation::Resource(resource) => resource
                        .method
                        .as_deref()
                        .map(|m| m.trim().to_ascii_uppercase()),
                    _ => None,
                })
            })
            .unwrap_or_else(|| "GET".to_string())
    }

    fn fragment(&self) -> Option<&str> {
        self.annotations
            .iter()
            .find_map(|annotation| match annotation {
                Annotation::Method(method) => method.uri.as_deref(),
                _ => None,
            })
            .or_else(|| {
                self.annotations.iter().find_map(|annotation| match annotation {
                    Annotation::Resource(resource) => resource.uri.as_deref(),
                    _ => None,
                })
            })
    }

    /// Full path: resource URI joined with the action's fragment.
    pub fn uri(&self) -> String {
        join_uri(self.base_uri.as_deref(), self.fragment())
    }

    /// `## <summary> [<VERB> <path>]`, or `## [<VERB> <path>]` without a summary.
    pub fn definition(&self) -> String {
        match self.doc.summary() {
            Some(summary) => format!("## {} [{} {}]", summary, self.verb(), self.uri()),
            None => format!("## [{} {}]", self.verb(), self.uri()),
        }
    }

    pub fn description(&self) -> Option<&str> {
        self.doc.description()
    }

    pub fn transaction(&self) -> Option<&Transaction> {
        self.annotations.iter().find_map(|annotation| match annotation {
            Annotation::Transaction(transaction) => Some(transaction),
            _ => None,
        })
    }

    /// The action's request; `None` whenever a transaction is declared.
    pub fn request(&self) -> Option<&Request> {
        if self.transaction().is_some() {
            return None;
        }
        self.annotations.iter().find_map(|annotation| match annotation {
            Annotation::Request(request) => Some(request),
            _ => None,
        })
    }

    /// The action's response; `None` whenever a transaction is declared.
    pub fn response(&self) -> Option<&Response> {
        if self.transaction().is_some() {
            return None;
        }
        self.annotations.iter().find_map(|annotation| match annotation {
            Annotation::Response(response) => Some(response),
            _ => None,
        })
    }
}

impl Section for Action<'_> {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

/// Join a resource URI and an action fragment into an absolute path.
pub(crate) fn join_uri(base: Option<&str>, fragment: Option<&str>) -> String {
    let base = base.unwrap_or("").trim().trim_end_matches('/');
    let fragment = fragment.unwrap_or("").trim().trim_matches('/');

    let mut uri = if fragment.is_empty() {
        base.to_string()
    } else if fragment.starts_with("{?") {
        format!("{base}{fragment}")
    } else {
        format!("{base}/{fragment}")
    };

    if !uri.starts_with('/') {
        uri.insert(0, '/');
    }
    uri
}
