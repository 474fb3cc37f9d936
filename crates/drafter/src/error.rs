//! Error types for Drafter operations.
//!
//! Lookup misses on unknown element ids are not errors; the scene and editor
//! report them as `None`. [`Error`] covers the failures that abort a whole
//! operation: reading a scene document, exporting, and resolving settings.

use std::io;

use thiserror::Error;

/// The main error type for Drafter operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The scene document is not valid JSON or has the wrong shape.
    #[error("Error importing diagram: {0}")]
    Import(#[from] serde_json::Error),

    /// Export was requested for a scene without elements.
    #[error("No elements to export")]
    EmptyScene,

    #[error("Rasterization error: {0}")]
    Rasterize(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
