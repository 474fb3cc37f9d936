//! Standalone SVG export.
//!
//! The document is cropped to the content box plus a margin. The content box
//! pads every element by its `size` on each side, regardless of kind, so a
//! wide rectangle can extend past the exported area.

use ::svg::{Document, node::element::Rectangle};
use log::{debug, info};

use drafter_core::{
    draw::arrowhead_definitions,
    element::Element,
    geometry::{Bounds, Point},
};

use super::{ExportSettings, Exporter};
use crate::{
    Error,
    render::{self, RenderStyle},
};

/// Returns the box covering every element padded by its `size`.
///
/// Returns `None` for an empty slice.
pub fn content_bounds(elements: &[Element]) -> Option<Bounds> {
    elements
        .iter()
        .map(|element| Bounds::new_padded(element.position(), element.size()))
        .reduce(|acc, bounds| acc.merge(&bounds))
}

/// Builds standalone SVG documents from scene elements.
#[derive(Debug, Clone, Default)]
pub struct SvgExporter {
    style: RenderStyle,
    settings: ExportSettings,
}

impl SvgExporter {
    pub fn new(style: RenderStyle, settings: ExportSettings) -> Self {
        Self { style, settings }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Builds the export document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyScene`] when `elements` is empty.
    pub fn document(&self, elements: &[Element]) -> Result<Document, Error> {
        let bounds = content_bounds(elements).ok_or(Error::EmptyScene)?;
        let margin = self.settings.margin();
        let area = bounds.expand(margin);
        let (width, height) = (area.width(), area.height());

        // Shift content so the padded box starts at (margin, margin)
        let offset = Point::new(margin - bounds.min_x(), margin - bounds.min_y());
        debug!(width, height, offset_x = offset.x(), offset_y = offset.y(); "Export area");

        let background = Rectangle::new()
            .set("width", width)
            .set("height", height)
            .set("fill", self.settings.background().to_rgb_hex());

        let doc = Document::new()
            .set("width", width)
            .set("height", height)
            .set("viewBox", format!("0 0 {width} {height}"))
            .add(background)
            .add(arrowhead_definitions(self.settings.marker_color()));

        Ok(elements.iter().fold(doc, |doc, element| {
            doc.add(render::render(element, &self.style).to_group_offset(offset))
        }))
    }

    /// Renders the export document to SVG text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyScene`] when `elements` is empty.
    pub fn render_svg(&self, elements: &[Element]) -> Result<String, Error> {
        let svg = self.document(elements)?.to_string();
        info!(count = elements.len(), bytes = svg.len(); "SVG exported");
        Ok(svg)
    }
}

impl Exporter for SvgExporter {
    fn export(&self, elements: &[Element]) -> Result<Vec<u8>, Error> {
        self.render_svg(elements).map(String::into_bytes)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use drafter_core::element::{ElementId, ElementKind, ElementPatch};

    use super::*;

    fn element(n: u64, kind: ElementKind, x: f32, y: f32) -> Element {
        Element::new(ElementId::from_sequence(n), kind, Point::new(x, y))
    }

    #[test]
    fn test_empty_scene() {
        let exporter = SvgExporter::default();
        assert!(matches!(exporter.render_svg(&[]), Err(Error::EmptyScene)));
        assert!(content_bounds(&[]).is_none());
    }

    #[test]
    fn test_bounds_ignore_width_and_height() {
        // A 400 wide rectangle is still padded by its size of 60
        let mut rect = element(1, ElementKind::Rectangle, 100.0, 100.0);
        rect.apply(&ElementPatch::new().with_width(400.0).with_height(300.0));

        let bounds = content_bounds(&[rect]).unwrap();
        assert_approx_eq!(f32, bounds.min_x(), 40.0);
        assert_approx_eq!(f32, bounds.max_x(), 160.0);
        assert_approx_eq!(f32, bounds.width(), 120.0);
        assert_approx_eq!(f32, bounds.height(), 120.0);
    }

    #[test]
    fn test_bounds_cover_all_elements() {
        let elements = [
            element(1, ElementKind::Circle, 0.0, 0.0),
            element(2, ElementKind::Circle, 200.0, 100.0),
        ];
        let bounds = content_bounds(&elements).unwrap();
        assert_approx_eq!(f32, bounds.min_x(), -60.0);
        assert_approx_eq!(f32, bounds.min_y(), -60.0);
        assert_approx_eq!(f32, bounds.max_x(), 260.0);
        assert_approx_eq!(f32, bounds.max_y(), 160.0);
    }

    #[test]
    fn test_document_size_and_offset() {
        let svg = SvgExporter::default()
            .render_svg(&[element(1, ElementKind::Circle, 100.0, 100.0)])
            .unwrap();

        // 120 content + 2 * 20 margin
        assert!(svg.contains("width=\"160\""));
        assert!(svg.contains("viewBox=\"0 0 160 160\""));
        assert!(svg.contains("fill=\"#0a1628\""));
        assert!(svg.contains("id=\"arrowhead\""));
        // Element center moves to margin + size
        assert!(svg.contains("transform=\"translate(80, 80) rotate(0)\""));
    }

    #[test]
    fn test_export_bytes() {
        let bytes = SvgExporter::default()
            .export(&[element(1, ElementKind::Button, 0.0, 0.0)])
            .unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("<svg"));
        assert!(text.contains("Button"));
    }
}
