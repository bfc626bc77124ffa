//! Errors that abort document generation.
//!
//! Missing optional metadata is never an error; only the cases below stop a
//! [`Blueprint::generate`](crate::blueprint::Blueprint::generate) call, and no partial
//! document is returned when they do.

use std::{io, path::PathBuf, result};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlueprintError {
    /// A transaction item that is neither a request nor a response.
    #[error("unsupported annotation type `{kind}` given in transaction of {action}")]
    UnsupportedTransactionAnnotation {
        /// Definition line of the offending action
        action: String,
        /// Kind of the offending record
        kind: &'static str,
    },

    /// A `json:`/`file:` body reference that could not be read.
    #[error("included body '{}' could not be read: {source}", path.display())]
    IncludedBodyNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The overview file could not be read.
    #[error("overview '{}' could not be read: {source}", path.display())]
    OverviewNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A body value could not be serialized.
    #[error("failed to serialize body: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = result::Result<T, BlueprintError>;
