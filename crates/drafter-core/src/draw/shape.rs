//! Per-kind drawing recipes.
//!
//! [`Shape`] captures the geometry and color of an element and draws the
//! recipe for its [`ElementKind`]. Rectangle-family kinds use `width` and
//! `height`; circle, diamond, triangle, arrow and line use `size`.

use svg::node::element as svg_element;

use crate::{
    apply_fill, apply_stroke,
    color::Color,
    draw::{ARROWHEAD_ID, Drawable, LayeredOutput, RenderLayer, StrokeDefinition, StrokeStyle},
    element::{Element, ElementKind},
    geometry::{Point, Size},
};

const OUTLINE_WIDTH: f32 = 2.0;
const GRID_LINE_WIDTH: f32 = 1.0;
const GRID_LINE_OPACITY: f32 = 0.5;

const CARD_TINT: Color = Color::from_rgba8(86, 255, 197, 26);
const MODAL_TINT: Color = Color::from_rgba8(86, 255, 197, 51);
const MODAL_SHADE: Color = Color::from_rgba8(0, 0, 0, 77);
const NAVBAR_ITEM: Color = Color::from_rgba8(10, 22, 40, 204);

/// The body of an element, without its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    kind: ElementKind,
    color: Color,
    size: f32,
    width: f32,
    height: f32,
}

impl Shape {
    pub fn new(kind: ElementKind, color: Color) -> Self {
        Self {
            kind,
            color,
            size: crate::element::DEFAULT_SIZE,
            width: crate::element::DEFAULT_WIDTH,
            height: crate::element::DEFAULT_HEIGHT,
        }
    }

    /// Sets the side length used by size-only kinds.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Sets the box used by rectangle-family kinds.
    pub fn with_dimensions(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn from_element(element: &Element) -> Self {
        Self::new(element.kind(), element.color())
            .with_size(element.size())
            .with_dimensions(element.width(), element.height())
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    fn outline(&self) -> StrokeDefinition {
        StrokeDefinition::solid(self.color, OUTLINE_WIDTH)
    }

    /// Rectangle of `width`×`height` centered on `position`.
    fn rect(&self, position: Point, scale: f32) -> svg_element::Rectangle {
        centered_rect(
            position,
            Size::new(self.width * scale, self.height * scale),
        )
    }

    /// Horizontal segment of length `size` through `position`.
    fn segment(&self, position: Point) -> svg_element::Line {
        let half = self.size / 2.0;
        svg_element::Line::new()
            .set("x1", position.x() - half)
            .set("y1", position.y())
            .set("x2", position.x() + half)
            .set("y2", position.y())
    }

    fn polygon(&self, position: Point, corners: &[(f32, f32)]) -> svg_element::Polygon {
        let half = self.size / 2.0;
        let points = corners
            .iter()
            .map(|(dx, dy)| {
                format!(
                    "{},{}",
                    position.x() + dx * half,
                    position.y() + dy * half
                )
            })
            .collect::<Vec<_>>()
            .join(" ");
        svg_element::Polygon::new().set("points", points)
    }

    /// Outlined rectangle with corner radius `rx` (0 for square corners).
    fn outlined_rect(&self, position: Point, rx: u8, style: StrokeStyle) -> svg_element::Rectangle {
        let mut rect = apply_stroke!(
            apply_fill!(self.rect(position, 1.0), None),
            &self.outline().with_style(style)
        );
        if rx > 0 {
            rect = rect.set("rx", rx);
        }
        rect
    }

    /// Rectangle filled and stroked with the element color.
    fn filled_rect(&self, position: Point, rx: u8) -> svg_element::Rectangle {
        apply_stroke!(
            apply_fill!(self.rect(position, 1.0), Some(self.color)),
            &self.outline()
        )
        .set("rx", rx)
    }

    fn render_card(&self, position: Point, output: &mut LayeredOutput) {
        let background = apply_stroke!(
            apply_fill!(self.rect(position, 1.0), Some(CARD_TINT)),
            &self.outline()
        )
        .set("rx", 8);
        output.add_to_layer(RenderLayer::Body, Box::new(background));

        let strip = svg_element::Rectangle::new()
            .set("x", position.x() - 0.45 * self.width)
            .set("y", position.y() - 0.4 * self.height)
            .set("width", 0.9 * self.width)
            .set("height", 0.2 * self.height);
        let strip = apply_fill!(strip, Some(self.color)).set("rx", 2);
        output.add_to_layer(RenderLayer::Detail, Box::new(strip));
    }

    fn render_modal(&self, position: Point, output: &mut LayeredOutput) {
        let backdrop = apply_fill!(self.rect(position, 1.2), Some(MODAL_SHADE)).set("rx", 4);
        output.add_to_layer(RenderLayer::Backdrop, Box::new(backdrop));

        let panel = apply_stroke!(
            apply_fill!(self.rect(position, 1.0), Some(MODAL_TINT)),
            &self.outline()
        )
        .set("rx", 8);
        output.add_to_layer(RenderLayer::Body, Box::new(panel));
    }

    fn render_navbar(&self, position: Point, output: &mut LayeredOutput) {
        output.add_to_layer(RenderLayer::Body, Box::new(self.filled_rect(position, 4)));

        let item_size = Size::new(0.15 * self.width, 0.4 * self.height);
        for i in 0..3 {
            let left = position.x() - 0.4 * self.width + i as f32 * 0.25 * self.width;
            let item = svg_element::Rectangle::new()
                .set("x", left)
                .set("y", position.y() - item_size.height() / 2.0)
                .set("width", item_size.width())
                .set("height", item_size.height());
            let item = apply_fill!(item, Some(NAVBAR_ITEM)).set("rx", 2);
            output.add_to_layer(RenderLayer::Detail, Box::new(item));
        }
    }

    fn render_grid(&self, position: Point, output: &mut LayeredOutput) {
        output.add_to_layer(
            RenderLayer::Body,
            Box::new(self.outlined_rect(position, 4, StrokeStyle::Solid)),
        );

        let rule = StrokeDefinition::solid(self.color, GRID_LINE_WIDTH).with_opacity(GRID_LINE_OPACITY);
        let left = position.x() - self.width / 2.0;
        let top = position.y() - self.height / 2.0;
        for i in 1..=2 {
            let x = left + i as f32 * self.width / 3.0;
            let vertical = svg_element::Line::new()
                .set("x1", x)
                .set("y1", top)
                .set("x2", x)
                .set("y2", top + self.height);
            output.add_to_layer(RenderLayer::Detail, Box::new(apply_stroke!(vertical, &rule)));

            let y = top + i as f32 * self.height / 3.0;
            let horizontal = svg_element::Line::new()
                .set("x1", left)
                .set("y1", y)
                .set("x2", left + self.width)
                .set("y2", y);
            output.add_to_layer(RenderLayer::Detail, Box::new(apply_stroke!(horizontal, &rule)));
        }
    }
}

impl Drawable for Shape {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let body: Box<dyn svg::Node> = match self.kind {
            ElementKind::Rectangle
            | ElementKind::Input
            | ElementKind::Sidebar
            | ElementKind::Generic => Box::new(self.outlined_rect(position, 4, StrokeStyle::Solid)),
            ElementKind::Circle => {
                let circle = svg_element::Circle::new()
                    .set("cx", position.x())
                    .set("cy", position.y())
                    .set("r", self.size / 2.0);
                Box::new(apply_stroke!(apply_fill!(circle, None), &self.outline()))
            }
            ElementKind::Diamond => {
                let diamond = self.polygon(position, &[(0.0, -1.0), (1.0, 0.0), (0.0, 1.0), (-1.0, 0.0)]);
                Box::new(apply_stroke!(apply_fill!(diamond, None), &self.outline()))
            }
            ElementKind::Triangle => {
                let triangle = self.polygon(position, &[(0.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]);
                Box::new(apply_stroke!(apply_fill!(triangle, None), &self.outline()))
            }
            ElementKind::Button => Box::new(self.filled_rect(position, 8)),
            ElementKind::Header | ElementKind::Footer => Box::new(self.filled_rect(position, 4)),
            ElementKind::Text => Box::new(apply_fill!(self.rect(position, 1.0), None).set("stroke", "none")),
            ElementKind::Image => Box::new(self.outlined_rect(position, 0, StrokeStyle::Dashed)),
            ElementKind::Container => Box::new(self.outlined_rect(position, 8, StrokeStyle::LongDashed)),
            ElementKind::Arrow => Box::new(
                apply_stroke!(self.segment(position), &self.outline())
                    .set("marker-end", format!("url(#{ARROWHEAD_ID})")),
            ),
            ElementKind::Line => Box::new(apply_stroke!(self.segment(position), &self.outline())),
            ElementKind::Card => {
                self.render_card(position, &mut output);
                return output;
            }
            ElementKind::Modal => {
                self.render_modal(position, &mut output);
                return output;
            }
            ElementKind::Navbar => {
                self.render_navbar(position, &mut output);
                return output;
            }
            ElementKind::Grid => {
                self.render_grid(position, &mut output);
                return output;
            }
        };

        output.add_to_layer(RenderLayer::Body, body);
        output
    }
}

fn centered_rect(center: Point, size: Size) -> svg_element::Rectangle {
    let bounds = center.to_bounds(size);
    svg_element::Rectangle::new()
        .set("x", bounds.min_x())
        .set("y", bounds.min_y())
        .set("width", size.width())
        .set("height", size.height())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(shape: &Shape) -> String {
        shape
            .render_to_layers(Point::default())
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect()
    }

    fn mint() -> Color {
        Color::from_rgb8(0x56, 0xff, 0xc5)
    }

    #[test]
    fn test_rectangle_recipe() {
        let svg = render(&Shape::new(ElementKind::Rectangle, mint()).with_dimensions(200.0, 60.0));
        assert!(svg.contains("x=\"-100\""));
        assert!(svg.contains("y=\"-30\""));
        assert!(svg.contains("width=\"200\""));
        assert!(svg.contains("height=\"60\""));
        assert!(svg.contains("rx=\"4\""));
        assert!(svg.contains("fill=\"none\""));
        assert!(svg.contains("stroke=\"#56ffc5\""));
        assert!(svg.contains("stroke-width=\"2\""));
    }

    #[test]
    fn test_generic_draws_as_rectangle() {
        let generic = render(&Shape::new(ElementKind::Generic, mint()));
        let rectangle = render(&Shape::new(ElementKind::Rectangle, mint()));
        assert_eq!(generic, rectangle);
    }

    #[test]
    fn test_circle_uses_size() {
        let svg = render(&Shape::new(ElementKind::Circle, mint()).with_size(80.0));
        assert!(svg.contains("<circle"));
        assert!(svg.contains("r=\"40\""));
    }

    #[test]
    fn test_diamond_and_triangle_points() {
        let diamond = render(&Shape::new(ElementKind::Diamond, mint()));
        assert!(diamond.contains("points=\"0,-30 30,0 0,30 -30,0\""));

        let triangle = render(&Shape::new(ElementKind::Triangle, mint()));
        assert!(triangle.contains("points=\"0,-30 30,30 -30,30\""));
    }

    #[test]
    fn test_button_is_filled() {
        let svg = render(&Shape::new(ElementKind::Button, mint()));
        assert!(svg.contains("fill=\"#56ffc5\""));
        assert!(svg.contains("rx=\"8\""));
    }

    #[test]
    fn test_text_box_has_no_stroke() {
        let svg = render(&Shape::new(ElementKind::Text, mint()));
        assert!(svg.contains("stroke=\"none\""));
        assert!(!svg.contains("stroke-width"));
    }

    #[test]
    fn test_image_and_container_dashes() {
        let image = render(&Shape::new(ElementKind::Image, mint()));
        assert!(image.contains("stroke-dasharray=\"5,5\""));
        assert!(!image.contains("rx="));

        let container = render(&Shape::new(ElementKind::Container, mint()));
        assert!(container.contains("stroke-dasharray=\"8,4\""));
        assert!(container.contains("rx=\"8\""));
    }

    #[test]
    fn test_arrow_references_marker() {
        let svg = render(&Shape::new(ElementKind::Arrow, mint()));
        assert!(svg.contains("x1=\"-30\""));
        assert!(svg.contains("x2=\"30\""));
        assert!(svg.contains("marker-end=\"url(#arrowhead)\""));

        let line = render(&Shape::new(ElementKind::Line, mint()));
        assert!(!line.contains("marker-end"));
    }

    #[test]
    fn test_composite_layers() {
        let card = Shape::new(ElementKind::Card, mint()).render_to_layers(Point::default());
        assert_eq!(card.layer_len(RenderLayer::Body), 1);
        assert_eq!(card.layer_len(RenderLayer::Detail), 1);

        let modal = Shape::new(ElementKind::Modal, mint()).render_to_layers(Point::default());
        assert_eq!(modal.layer_len(RenderLayer::Backdrop), 1);
        assert_eq!(modal.layer_len(RenderLayer::Body), 1);

        let navbar = Shape::new(ElementKind::Navbar, mint()).render_to_layers(Point::default());
        assert_eq!(navbar.layer_len(RenderLayer::Detail), 3);

        let grid = Shape::new(ElementKind::Grid, mint()).render_to_layers(Point::default());
        assert_eq!(grid.layer_len(RenderLayer::Detail), 4);
    }

    #[test]
    fn test_grid_lines_are_faint() {
        let svg = render(&Shape::new(ElementKind::Grid, mint()).with_dimensions(90.0, 60.0));
        assert!(svg.contains("x1=\"-15\""));
        assert!(svg.contains("x1=\"15\""));
        assert!(svg.contains("y1=\"-10\""));
        assert!(svg.contains("opacity=\"0.5\""));
        assert!(svg.contains("stroke-width=\"1\""));
    }

    #[test]
    fn test_card_strip_geometry() {
        let svg = render(&Shape::new(ElementKind::Card, mint()).with_dimensions(100.0, 50.0));
        // strip: 90x10 at (-45, -20)
        assert!(svg.contains("x=\"-45\""));
        assert!(svg.contains("y=\"-20\""));
        assert!(svg.contains("width=\"90\""));
        assert!(svg.contains("height=\"10\""));
    }

    #[test]
    fn test_position_offsets_recipe() {
        let svg = Shape::new(ElementKind::Rectangle, mint())
            .render_to_layers(Point::new(100.0, 100.0))
            .render()
            .iter()
            .map(|node| node.to_string())
            .collect::<String>();
        assert!(svg.contains("x=\"55\""));
        assert!(svg.contains("y=\"70\""));
    }
}
