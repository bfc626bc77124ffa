use serde::{Deserialize, Serialize};

use crate::annotation::Annotation;

/// A documented unit exposing one or more HTTP actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Controller {
    /// Controller identity, also the fallback resource name.
    pub name: String,
    /// Doc comment, used for the resource description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub methods: Vec<ControllerMethod>,
}

/// One declared method of a [`Controller`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ControllerMethod {
    /// Method identity; two methods with the same name never produce two actions.
    pub name: String,
    /// Doc comment: the summary becomes the action heading, the rest its description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}
