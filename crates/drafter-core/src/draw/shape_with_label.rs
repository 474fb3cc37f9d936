//! A shape together with its optional centered label.

use crate::{
    draw::{Drawable, Label, LabelDefinition, LayeredOutput, Shape},
    element::Element,
    geometry::Point,
};

/// The complete drawing of one element.
///
/// The label is centered on the same point as the shape; layering puts it
/// above every part of the body.
#[derive(Debug, Clone)]
pub struct ShapeWithLabel<'a> {
    shape: Shape,
    label: Option<Label<'a>>,
}

impl<'a> ShapeWithLabel<'a> {
    pub fn new(shape: Shape, label: Option<Label<'a>>) -> Self {
        Self { shape, label }
    }

    /// Builds the drawing for `element` with the given label settings.
    pub fn for_element(element: &'a Element, label_definition: &'a LabelDefinition) -> Self {
        Self::new(
            Shape::from_element(element),
            Label::for_element(label_definition, element),
        )
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn label(&self) -> Option<&Label<'a>> {
        self.label.as_ref()
    }
}

impl Drawable for ShapeWithLabel<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = self.shape.render_to_layers(position);
        if let Some(label) = &self.label {
            output.merge(label.render_to_layers(position));
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        draw::RenderLayer,
        element::{ElementId, ElementKind},
    };

    #[test]
    fn test_rectangle_has_label() {
        let element = Element::new(
            ElementId::from_sequence(1),
            ElementKind::Rectangle,
            Point::new(100.0, 100.0),
        );
        let definition = LabelDefinition::default();
        let drawing = ShapeWithLabel::for_element(&element, &definition);

        assert_eq!(drawing.label().map(|l| l.content()), Some("Rectangle"));
        let output = drawing.render_to_layers(Point::default());
        assert_eq!(output.layer_len(RenderLayer::Body), 1);
        assert_eq!(output.layer_len(RenderLayer::Label), 1);
    }

    #[test]
    fn test_line_has_no_label() {
        let element = Element::new(ElementId::from_sequence(2), ElementKind::Line, Point::default());
        let definition = LabelDefinition::default();
        let drawing = ShapeWithLabel::for_element(&element, &definition);

        assert!(drawing.label().is_none());
        assert_eq!(drawing.shape().kind(), ElementKind::Line);
        let output = drawing.render_to_layers(Point::default());
        assert_eq!(output.layer_len(RenderLayer::Label), 0);
    }
}
