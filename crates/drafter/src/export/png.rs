//! PNG export: the SVG export rasterized with `resvg`.

use log::{error, info};
use resvg::{tiny_skia, usvg};

use drafter_core::element::Element;

use super::{Exporter, SvgExporter};
use crate::Error;

/// Rasterizes the standalone SVG export.
#[derive(Debug, Clone, Default)]
pub struct PngExporter {
    svg: SvgExporter,
}

impl PngExporter {
    pub fn new(svg: SvgExporter) -> Self {
        Self { svg }
    }
}

impl Exporter for PngExporter {
    fn export(&self, elements: &[Element]) -> Result<Vec<u8>, Error> {
        let svg = self.svg.render_svg(elements)?;
        let font_family = primary_font(self.svg.style().label().font_family());
        let png = rasterize(&svg, font_family)?;
        info!(bytes = png.len(); "PNG exported");
        Ok(png)
    }
}

/// Rasterizes `svg` to PNG bytes, rounding the size up to whole pixels.
///
/// # Errors
///
/// Returns [`Error::Rasterize`] if the SVG cannot be parsed, has an empty
/// size, or the bitmap cannot be encoded.
pub fn rasterize(svg: &str, font_family: &str) -> Result<Vec<u8>, Error> {
    let mut options = usvg::Options::default();
    options.font_family = font_family.to_string();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options).map_err(|err| {
        error!(err:err; "Failed to parse SVG for rasterization");
        Error::Rasterize(err.to_string())
    })?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        error!(width = size.width(), height = size.height(); "Failed to allocate pixmap");
        Error::Rasterize(format!(
            "cannot allocate a {}x{} bitmap",
            size.width(),
            size.height()
        ))
    })?;

    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap.encode_png().map_err(|err| {
        error!(err:err; "Failed to encode PNG");
        Error::Rasterize(err.to_string())
    })
}

/// Returns the first family of a CSS font list.
fn primary_font(fonts: &str) -> &str {
    fonts
        .split(',')
        .map(|family| family.trim().trim_matches('"'))
        .find(|family| !family.is_empty())
        .unwrap_or("sans-serif")
}
