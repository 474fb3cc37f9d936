//! The persisted scene file format.
//!
//! ```json
//! {
//!   "elements": [
//!     {"id": "element-1", "type": "rectangle", "x": 100.0, "y": 100.0, ...}
//!   ],
//!   "version": "1.0"
//! }
//! ```
//!
//! A missing `elements` key reads as an empty list. `version` is written on
//! export and not checked on import.

use serde::{Deserialize, Serialize};

use drafter_core::element::Element;

use crate::Error;

/// Format version written by [`SceneDocument::new`].
pub const DOCUMENT_VERSION: &str = "1.0";

/// Serialized form of a scene: the element list plus a version tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    #[serde(default)]
    elements: Vec<Element>,
    #[serde(default = "current_version")]
    version: String,
}

fn current_version() -> String {
    DOCUMENT_VERSION.to_string()
}

impl SceneDocument {
    pub fn new(elements: Vec<Element>) -> Self {
        Self {
            elements,
            version: current_version(),
        }
    }

    /// Parses a document from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Import`] for malformed JSON or elements missing
    /// `id`, `type`, `x` or `y`.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializes the document as 2-space indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Import`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn into_elements(self) -> Vec<Element> {
        self.elements
    }
}
