//! # Reader Module
//!
//! The annotation source the renderer consumes. Discovering annotations is not the
//! renderer's job: callers hand over [`Controller`] descriptors and an
//! [`AnnotationReader`] answers three questions about them.
//!
//! - [`AnnotationReader::class_annotations`] - records declared on the controller
//! - [`AnnotationReader::method_annotations`] - records declared on one method
//! - [`AnnotationReader::method_versions`] - the method's `Versions` record, if any
//!
//! [`SimpleAnnotationReader`] serves the records stored on the descriptors themselves,
//! which is what [`load_manifest`] produces from a YAML or JSON file.

mod descriptor;
mod load;

pub use descriptor::*;
pub use load::*;

use crate::annotation::{Annotation, Versions};

/// Source of parsed annotations for controllers and their methods.
pub trait AnnotationReader {
    /// Records declared on the controller itself, in declaration order.
    fn class_annotations(&self, controller: &Controller) -> Vec<Annotation>;

    /// Records declared on one method, in declaration order.
    fn method_annotations(&self, controller: &Controller, method: &ControllerMethod)
        -> Vec<Annotation>;

    /// The method's `Versions` record, when it declares one.
    fn method_versions(&self, controller: &Controller, method: &ControllerMethod)
        -> Option<Versions> {
        self.method_annotations(controller, method)
            .into_iter()
            .find_map(|annotation| match annotation {
                Annotation::Versions(versions) => Some(versions),
                _ => None,
            })
    }
}

/// Reads the annotations stored on the descriptors.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleAnnotationReader;

impl AnnotationReader for SimpleAnnotationReader {
    fn class_annotations(&self, controller: &Controller) -> Vec<Annotation> {
        controller.annotations.clone()
    }

    fn method_annotations(
        &self,
        _controller: &Controller,
        method: &ControllerMethod,
    ) -> Vec<Annotation> {
        method.annotations.clone()
    }

    fn method_versions(
        &self,
        _controller: &Controller,
        method: &ControllerMethod,
    ) -> Option<Versions> {
        method.annotations.iter().find_map(|annotation| match annotation {
            Annotation::Versions(versions) => Some(versions.clone()),
            _ => None,
        })
    }
}
