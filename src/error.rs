// src/error.rs
use layouter_layout::LayoutError;
use thiserror::Error;

/// A comprehensive error type for loading and laying out a document.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Document defines no profile named '{0}'.")]
    UnknownProfile(String),

    #[error("No node is labelled '{0}'.")]
    UnknownLabel(String),
}
