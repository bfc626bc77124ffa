//! # Section Module
//!
//! The transient document model the renderer walks: [`Resource`]s own [`Action`]s,
//! and both are [`Section`]s exposing their parameters and attributes. [`Group`]
//! collects resources that share a group name.
//!
//! A model is built per [`Blueprint::generate`](crate::blueprint::Blueprint::generate)
//! call and dropped with it; nothing here is mutated after construction.

mod action;
mod docblock;
mod group;
mod resource;

pub use action::Action;
pub use docblock::DocBlock;
pub use group::Group;
pub use resource::{merge_headers, Resource};
pub(crate) use resource::resource_record;

use crate::annotation::{Annotation, Attribute, Parameter};

/// Shared parameter/attribute extraction over a bag of annotations.
pub trait Section {
    /// The section's annotations in declaration order.
    fn annotations(&self) -> &[Annotation];

    /// Parameters of the first `Parameters` container, in source order.
    fn parameters(&self) -> Vec<&Parameter> {
        self.annotations()
            .iter()
            .find_map(|annotation| match annotation {
                Annotation::Parameters(parameters) => Some(parameters.values.iter().collect()),
                _ => None,
            })
            .unwrap_or_default()
    }

    /// Attributes of the first `Attributes` container, in source order.
    fn attributes(&self) -> Vec<AttributeNode<'_>> {
        self.annotations()
            .iter()
            .find_map(|annotation| match annotation {
                Annotation::Attributes(attributes) => Some(AttributeNode::nodes(&attributes.values)),
                _ => None,
            })
            .unwrap_or_default()
    }
}

/// An attribute together with its dotted path split into segments.
///
/// `author.name` has segments `["author", "name"]`, label `name` and depth 2.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeNode<'a> {
    segments: Vec<&'a str>,
    attribute: &'a Attribute,
}

impl<'a> AttributeNode<'a> {
    pub fn new(attribute: &'a Attribute) -> Self {
        let mut segments: Vec<&'a str> = attribute
            .identifier
            .split('.')
            .filter(|segment| !segment.is_empty())
            .collect();
        if segments.is_empty() {
            segments.push(attribute.identifier.as_str());
        }
        Self {
            segments,
            attribute,
        }
    }

    pub fn nodes(attributes: &'a [Attribute]) -> Vec<Self> {
        attributes.iter().map(Self::new).collect()
    }

    pub fn attribute(&self) -> &'a Attribute {
        self.attribute
    }

    pub fn segments(&self) -> &[&'a str] {
        &self.segments
    }

    /// The last path segment, used as the bullet label.
    pub fn label(&self) -> &'a str {
        self.segments
            .last()
            .copied()
            .unwrap_or(self.attribute.identifier.as_str())
    }

    /// Nesting depth; a plain identifier has depth 1.
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Dotted path of the enclosing object, if nested.
    pub fn parent_path(&self) -> Option<String> {
        match self.segments.len() {
            0 | 1 => None,
            n => Some(self.segments[..n - 1].join(".")),
        }
    }
}
