//! Image export of a scene.
//!
//! # Pipeline Position
//!
//! ```text
//! Scene elements
//!     ↓ render (per element)
//! VisualNodes
//!     ↓ svg (this module)
//! Standalone SVG document
//!     ↓ png (this module)
//! PNG bytes
//! ```
//!
//! # Available Backends
//!
//! - [`svg::SvgExporter`] - standalone SVG cropped to the content
//! - [`png::PngExporter`] - the SVG export rasterized with `resvg`
//!
//! Exporting an empty scene fails with [`Error::EmptyScene`] and produces no
//! output.

pub mod png;
pub mod svg;

pub use self::{png::PngExporter, svg::SvgExporter};

use drafter_core::{color::Color, element::Element};

use crate::{Error, config::ExportConfig};

/// Abstraction for export backends.
pub trait Exporter {
    /// Exports `elements` (bottom first) to the backend's format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyScene`] when `elements` is empty and
    /// [`Error::Rasterize`] when a bitmap backend fails.
    fn export(&self, elements: &[Element]) -> Result<Vec<u8>, Error>;
}

/// Resolved export settings.
#[derive(Debug, Clone)]
pub struct ExportSettings {
    margin: f32,
    background: Color,
    marker_color: Color,
}

impl ExportSettings {
    pub fn new(margin: f32, background: Color, marker_color: Color) -> Self {
        Self {
            margin,
            background,
            marker_color,
        }
    }

    /// # Errors
    ///
    /// Returns [`Error::Config`] for unparsable colors.
    pub fn from_config(config: &ExportConfig) -> Result<Self, Error> {
        Ok(Self::new(
            config.margin(),
            config.background_color()?,
            config.marker_color()?,
        ))
    }

    pub fn margin(&self) -> f32 {
        self.margin
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn marker_color(&self) -> Color {
        self.marker_color
    }
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            margin: 20.0,
            background: Color::from_rgb8(0x0a, 0x16, 0x28),
            marker_color: Color::from_rgb8(0x56, 0xff, 0xc5),
        }
    }
}
