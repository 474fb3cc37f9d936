//! Element rendering.
//!
//! [`render`] turns one [`Element`] into a [`VisualNode`]: the element's SVG
//! subtree drawn around the local origin, plus the placement transform that
//! moves it into scene space. Rendering is pure, so rendering the same
//! element twice yields identical output.

use log::trace;
use svg::node::element::Group;

use drafter_core::{
    color::Color,
    draw::{Drawable, LabelDefinition, ShapeWithLabel, SvgNode},
    element::{Element, ElementId},
    geometry::Point,
};

use crate::{Error, config::StyleConfig};

/// Appearance settings shared by every rendered element.
#[derive(Debug, Clone, Default)]
pub struct RenderStyle {
    label: LabelDefinition,
}

impl RenderStyle {
    pub fn new(label: LabelDefinition) -> Self {
        Self { label }
    }

    /// Builds the style from the `[style]` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the label settings are invalid.
    pub fn from_config(config: &StyleConfig) -> Result<Self, Error> {
        Ok(Self::new(config.label_definition()?))
    }

    pub fn label(&self) -> &LabelDefinition {
        &self.label
    }
}

/// The rendered form of one element.
#[derive(Debug, Clone)]
pub struct VisualNode {
    id: ElementId,
    position: Point,
    rotation: f32,
    label_color: Option<Color>,
    layers: Vec<SvgNode>,
}

impl VisualNode {
    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Resolved label fill, or `None` for elements without a label.
    pub fn label_color(&self) -> Option<Color> {
        self.label_color
    }

    /// Returns the placement transform, e.g. `translate(100, 100) rotate(0)`.
    pub fn transform(&self) -> String {
        placement(self.position, self.rotation)
    }

    /// Updates the placement without touching the drawn subtree.
    pub fn set_placement(&mut self, position: Point, rotation: f32) {
        self.position = position;
        self.rotation = rotation;
    }

    /// Builds the `<g data-element-id>` group placed in scene space.
    pub fn to_group(&self) -> Group {
        self.group_with_transform(self.transform())
    }

    /// Builds the element group with its translation shifted by `offset`.
    pub fn to_group_offset(&self, offset: Point) -> Group {
        self.group_with_transform(placement(self.position.add_point(offset), self.rotation))
    }

    fn group_with_transform(&self, transform: String) -> Group {
        self.layers.iter().cloned().fold(
            Group::new()
                .set("data-element-id", self.id.as_str())
                .set("transform", transform),
            |group, layer| group.add(layer),
        )
    }
}

fn placement(position: Point, rotation: f32) -> String {
    format!(
        "translate({}, {}) rotate({})",
        position.x(),
        position.y(),
        rotation
    )
}

/// Renders `element` with `style`.
pub fn render(element: &Element, style: &RenderStyle) -> VisualNode {
    let drawable = ShapeWithLabel::for_element(element, style.label());
    let label_color = drawable.label().map(|label| label.color());
    let layers = drawable.render_to_layers(Point::default()).render();

    trace!(
        id:% = element.id(),
        kind:% = element.kind(),
        layers = layers.len();
        "Rendered element"
    );

    VisualNode {
        id: element.id().clone(),
        position: element.position(),
        rotation: element.rotation(),
        label_color,
        layers,
    }
}

#[cfg(test)]
mod tests {
    use drafter_core::element::{ElementKind, ElementPatch};

    use super::*;

    fn element(kind: ElementKind, color: &str) -> Element {
        Element::new(ElementId::from_sequence(1), kind, Point::new(100.0, 100.0))
            .with_color(Color::new(color).unwrap())
    }

    #[test]
    fn test_group_carries_id_and_transform() {
        let node = render(&element(ElementKind::Rectangle, "#56ffc5"), &RenderStyle::default());
        let svg = node.to_group().to_string();

        assert!(svg.contains("data-element-id=\"element-1\""));
        assert!(svg.contains("transform=\"translate(100, 100) rotate(0)\""));
        assert!(svg.contains("Rectangle"));
    }

    #[test]
    fn test_widened_rectangle() {
        let mut rect = element(ElementKind::Rectangle, "#56ffc5");
        rect.apply(&ElementPatch::new().with_width(200.0));

        let svg = render(&rect, &RenderStyle::default()).to_group().to_string();
        assert!(svg.contains("x=\"-100\""));
        assert!(svg.contains("height=\"60\""));
    }

    #[test]
    fn test_render_is_idempotent() {
        let card = element(ElementKind::Card, "#56ffc5");
        let style = RenderStyle::default();
        assert_eq!(
            render(&card, &style).to_group().to_string(),
            render(&card, &style).to_group().to_string()
        );
    }

    #[test]
    fn test_button_label_contrast() {
        let style = RenderStyle::default();

        let dark = render(&element(ElementKind::Button, "#000000"), &style);
        assert_eq!(dark.label_color().unwrap().to_string(), "#e0e0e0");

        let light = render(&element(ElementKind::Button, "#ffffff"), &style);
        assert_eq!(light.label_color().unwrap().to_string(), "#0a1628");
    }

    #[test]
    fn test_outlined_label_uses_element_color() {
        let node = render(&element(ElementKind::Circle, "#ff0000"), &RenderStyle::default());
        assert_eq!(node.label_color().unwrap().to_string(), "#ff0000");
    }

    #[test]
    fn test_arrow_has_no_label() {
        let node = render(&element(ElementKind::Arrow, "#56ffc5"), &RenderStyle::default());
        assert!(node.label_color().is_none());
        assert!(node.to_group().to_string().contains("url(#arrowhead)"));
    }

    #[test]
    fn test_rotation_and_offset() {
        let mut rect = element(ElementKind::Rectangle, "#56ffc5");
        rect.apply(&ElementPatch::new().with_rotation(45.0));

        let node = render(&rect, &RenderStyle::default());
        assert_eq!(node.transform(), "translate(100, 100) rotate(45)");

        let shifted = node.to_group_offset(Point::new(-50.0, 20.0)).to_string();
        assert!(shifted.contains("transform=\"translate(50, 120) rotate(45)\""));
    }

    #[test]
    fn test_set_placement() {
        let mut node = render(&element(ElementKind::Circle, "#56ffc5"), &RenderStyle::default());
        node.set_placement(Point::new(1.5, -2.0), 90.0);
        assert_eq!(node.transform(), "translate(1.5, -2) rotate(90)");
    }
}
