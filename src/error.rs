// src/error.rs
use pagenav_core::NavigatorError;
use thiserror::Error;

/// Errors raised while loading a page layout for the in-memory simulator.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Layout JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Section #{index} has an empty id")]
    EmptySectionId { index: usize },

    #[error("Duplicate section id '{0}'")]
    DuplicateSectionId(String),

    #[error("Section '{id}' has an invalid top offset ({top})")]
    InvalidTop { id: String, top: f64 },

    #[error(transparent)]
    Navigator(#[from] NavigatorError),
}
