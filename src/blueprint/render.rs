use indexmap::IndexMap;
use serde_json::Value;
use std::path::Path;

use super::body::{prepare_body, FileReader};
use super::writer::Writer;
use crate::annotation::{scalar_text, Annotation, Member, Parameter, Request, Response};
use crate::error::{BlueprintError, Result};
use crate::section::{merge_headers, Action, AttributeNode, Group, Resource, Section};

const FORMAT: &str = "FORMAT: 1A";

/// Single rendering pass over a resolved model.
pub(crate) struct Renderer<'f, F: FileReader + ?Sized> {
    files: &'f F,
    include_path: Option<&'f Path>,
    out: Writer,
}

fn type_label(r#type: &str, members: &[Member]) -> String {
    if members.is_empty() {
        r#type.to_string()
    } else {
        format!("enum[{}]", r#type)
    }
}

fn requirement(required: bool) -> &'static str {
    if required {
        "required"
    } else {
        "optional"
    }
}

fn present(value: &Option<Value>) -> Option<String> {
    value
        .as_ref()
        .map(scalar_text)
        .filter(|text| !text.is_empty())
}

impl<'f, F: FileReader + ?Sized> Renderer<'f, F> {
    pub(crate) fn new(files: &'f F, include_path: Option<&'f Path>) -> Self {
        Self {
            files,
            include_path,
            out: Writer::new(),
        }
    }

    pub(crate) fn finish(self) -> String {
        self.out.finish()
    }

    pub(crate) fn header(&mut self, name: &str, host: Option<&str>) {
        self.out.push(FORMAT);
        if let Some(host) = host {
            self.out.line(1);
            self.out.push(&format!("HOST: {host}"));
        }
        self.out.line(2);
        self.out.push(&format!("# {name}"));
        self.out.line(2);
    }

    pub(crate) fn overview(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.out.push(text);
        self.out.line(2);
    }

    pub(crate) fn group(&mut self, group: &Group<'_, '_>) -> Result<()> {
        if let Some(definition) = group.definition() {
            self.out.push(&definition);
            self.out.line(2);
        }
        for resource in group.resources() {
            self.resource(resource)?;
        }
        Ok(())
    }

    pub(crate) fn resource(&mut self, resource: &Resource<'_>) -> Result<()> {
        self.out.push(&resource.definition());

        if let Some(description) = resource.description() {
            self.out.line(1);
            self.out.push(&description);
        }

        let parameters = resource.parameters();
        if !parameters.is_empty() {
            self.parameters(&parameters);
        }

        for action in resource.actions() {
            self.action(resource, action)?;
        }

        self.out.line(2);
        Ok(())
    }

    fn action(&mut self, resource: &Resource<'_>, action: &Action<'_>) -> Result<()> {
        self.out.line(2);
        self.out.push(&action.definition());

        if let Some(description) = action.description() {
            self.out.line(1);
            self.out.push(description);
        }

        let attributes = action.attributes();
        if !attributes.is_empty() {
            self.attributes(&attributes, 0);
        }

        let parameters = action.parameters();
        if !parameters.is_empty() {
            self.parameters(&parameters);
        }

        if let Some(request) = action.request() {
            self.request(resource, request)?;
        }

        if let Some(response) = action.response() {
            self.response(resource, response)?;
        }

        if let Some(transaction) = action.transaction() {
            for item in &transaction.items {
                match item {
                    Annotation::Request(request) => self.request(resource, request)?,
                    Annotation::Response(response) => self.response(resource, response)?,
                    other => {
                        return Err(BlueprintError::UnsupportedTransactionAnnotation {
                            action: action.definition(),
                            kind: other.kind(),
                        })
                    }
                }
            }
        }

        Ok(())
    }

    fn parameters(&mut self, parameters: &[&Parameter]) {
        self.out.section("Parameters", 0, 2);

        for parameter in parameters {
            let mut entry = format!("+ {}:", parameter.identifier);
            if let Some(example) = present(&parameter.example) {
                entry.push_str(&format!(" `{example}`"));
            }
            entry.push_str(&format!(
                " ({}, {})",
                type_label(&parameter.r#type, &parameter.members),
                requirement(parameter.required)
            ));
            if !parameter.description.is_empty() {
                entry.push_str(&format!(" - {}", parameter.description));
            }

            self.out.line(1);
            self.out.tab(1);
            self.out.push(&entry);
            self.defaults_and_members(parameter.default.as_ref(), &parameter.members, 2);
        }
    }

    /// Attribute bullets nest one level deeper per dotted path segment.
    fn attributes(&mut self, attributes: &[AttributeNode<'_>], indent: usize) {
        self.out.section("Attributes", indent, 2);

        for node in attributes {
            let attribute = node.attribute();
            let level = indent + node.depth();

            let mut entry = format!("+ {}", node.label());
            if let Some(sample) = present(&attribute.sample) {
                entry.push_str(&format!(": {sample}"));
            }
            entry.push_str(&format!(
                " ({}, {})",
                type_label(&attribute.r#type, &attribute.members),
                requirement(attribute.required)
            ));
            if !attribute.description.is_empty() {
                entry.push_str(&format!(" - {}", attribute.description));
            }

            self.out.line(1);
            self.out.tab(level);
            self.out.push(&entry);
            self.defaults_and_members(attribute.default.as_ref(), &attribute.members, level + 1);
        }
    }

    fn defaults_and_members(&mut self, default: Option<&Value>, members: &[Member], level: usize) {
        if let Some(default) = default {
            self.out
                .section(&format!("Default: {}", scalar_text(default)), level, 1);
        }

        if !members.is_empty() {
            self.out.section("Members", level, 1);
            for member in members {
                let entry = if member.description.is_empty() {
                    format!("`{}`", member.identifier)
                } else {
                    format!("`{}` - {}", member.identifier, member.description)
                };
                self.out.section(&entry, level + 1, 1);
            }
        }
    }

    fn request(&mut self, resource: &Resource<'_>, request: &Request) -> Result<()> {
        self.out.section("Request", 0, 2);

        if let Some(identifier) = &request.identifier {
            self.out.push(&format!(" {identifier}"));
        }

        self.out.push(&format!(" ({})", request.content_type));

        let headers = merge_headers(&resource.request_headers(), &request.headers);
        if !headers.is_empty() {
            self.headers(&headers);
        }

        let attributes = AttributeNode::nodes(&request.attributes);
        if !attributes.is_empty() {
            self.attributes(&attributes, 1);
        }

        if let Some(body) = &request.body {
            let text = prepare_body(
                self.files,
                self.include_path,
                body,
                Some(request.content_type.as_str()),
            )?;
            self.body(&text);
        }

        Ok(())
    }

    fn response(&mut self, resource: &Resource<'_>, response: &Response) -> Result<()> {
        self.out
            .section(&format!("Response {}", response.status_code), 0, 2);

        if let Some(content_type) = &response.content_type {
            self.out.push(&format!(" ({content_type})"));
        }

        let headers = merge_headers(&resource.response_headers(), &response.headers);
        if !headers.is_empty() {
            self.headers(&headers);
        }

        let attributes = AttributeNode::nodes(&response.attributes);
        if !attributes.is_empty() {
            self.attributes(&attributes, 1);
        }

        if let Some(body) = &response.body {
            let text = prepare_body(
                self.files,
                self.include_path,
                body,
                response.content_type.as_deref(),
            )?;
            self.body(&text);
        }

        Ok(())
    }

    fn headers(&mut self, headers: &IndexMap<String, String>) {
        self.out.section("Headers", 1, 1);
        self.out.line(1);

        for (name, value) in headers {
            self.out.line(1);
            self.out.tab(3);
            self.out.push(&format!("{name}: {value}"));
        }
    }

    /// Body lines re-indented three levels; empty lines are dropped.
    fn body(&mut self, body: &str) {
        self.out.section("Body", 1, 1);
        self.out.line(2);

        let lines = body.split(['\r', '\n']).filter(|line| !line.is_empty());
        for (i, line) in lines.enumerate() {
            if i > 0 {
                self.out.line(1);
            }
            self.out.tab(3);
            self.out.push(line);
        }
    }

    pub(crate) fn data_structures(&mut self, resources: &[&Resource<'_>]) {
        let types: Vec<_> = resources
            .iter()
            .flat_map(|resource| resource.data_structures())
            .collect();
        if types.is_empty() {
            return;
        }

        self.out.push("# Data Structures");

        for definition in types {
            self.out.line(2);
            self.out
                .push(&format!("## {} ({})", definition.identifier, definition.r#type));

            for property in &definition.properties {
                let mut entry = format!("+ {}", property.identifier);
                if let Some(sample) = present(&property.sample) {
                    entry.push_str(&format!(": {sample}"));
                }
                entry.push_str(&format!(" ({})", property.r#type));
                if !property.description.is_empty() {
                    entry.push_str(&format!(" - {}", property.description));
                }
                self.out.line(1);
                self.out.push(&entry);
            }
        }
    }
}
