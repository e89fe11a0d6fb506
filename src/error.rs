//! Error types for coreapp-detect.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for detection operations.
#[derive(Error, Debug)]
pub enum DetectError {
    #[error("Source path is missing in the argument")]
    MissingSourcePath,

    #[error("Path {path:?} does not exist")]
    RootNotFound { path: PathBuf },

    #[error("Failed to walk {path:?}: {source}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error(
        "Found {count} project files but exactly one was required: {paths}"
    )]
    AmbiguousProject { count: usize, paths: String },

    #[error("Invalid project descriptor: {0}")]
    InvalidDescriptor(String),

    #[error("XML parse error: {0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("JSON parse error: {0}")]
    JsonParseError(#[from] serde_json::Error),
}

/// Result type alias using DetectError
pub type Result<T> = std::result::Result<T, DetectError>;

impl DetectError {
    /// Create an invalid descriptor error
    pub fn invalid_descriptor(msg: impl Into<String>) -> Self {
        Self::InvalidDescriptor(msg.into())
    }

    /// Create an ambiguous project error from the offending paths
    pub fn ambiguous_project(paths: &[String]) -> Self {
        Self::AmbiguousProject {
            count: paths.len(),
            paths: paths.join(", "),
        }
    }
}
