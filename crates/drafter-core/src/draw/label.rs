//! Element labels.
//!
//! - [`LabelDefinition`] - Font and tone settings shared by every label
//! - [`Label`] - One centered line of text with a resolved fill color
//!
//! Labels on filled kinds use a contrast tone chosen from the body color;
//! every other label is drawn in the element color.

use svg::{node::Text as SvgText, node::element as svg_element};

use crate::{
    color::{Color, ContrastTone},
    draw::{Drawable, LayeredOutput, RenderLayer},
    element::Element,
    geometry::Point,
};

/// Typography and contrast tones for labels.
///
/// | Property | Default |
/// |----------|---------|
/// | Font family | `"Poppins, sans-serif"` |
/// | Font size | `12` |
/// | Font weight | `500` |
/// | Dark tone | `#0a1628` |
/// | Light tone | `#e0e0e0` |
#[derive(Debug, Clone, PartialEq)]
pub struct LabelDefinition {
    font_family: String,
    font_size: u16,
    font_weight: u16,
    dark_tone: Color,
    light_tone: Color,
}

impl LabelDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_font_family(&mut self, family: &str) {
        self.font_family = family.to_string();
    }

    pub fn set_font_size(&mut self, size: u16) {
        self.font_size = size;
    }

    pub fn set_font_weight(&mut self, weight: u16) {
        self.font_weight = weight;
    }

    /// Sets the colors used for [`ContrastTone::Dark`] and [`ContrastTone::Light`].
    pub fn set_tones(&mut self, dark: Color, light: Color) {
        self.dark_tone = dark;
        self.light_tone = light;
    }

    pub fn font_family(&self) -> &str {
        &self.font_family
    }

    pub fn font_size(&self) -> u16 {
        self.font_size
    }

    pub fn font_weight(&self) -> u16 {
        self.font_weight
    }

    /// Returns the configured color for `tone`.
    pub fn tone(&self, tone: ContrastTone) -> Color {
        match tone {
            ContrastTone::Dark => self.dark_tone,
            ContrastTone::Light => self.light_tone,
        }
    }
}

impl Default for LabelDefinition {
    fn default() -> Self {
        Self {
            font_family: "Poppins, sans-serif".to_string(),
            font_size: 12,
            font_weight: 500,
            dark_tone: Color::from_rgb8(0x0a, 0x16, 0x28),
            light_tone: Color::from_rgb8(0xe0, 0xe0, 0xe0),
        }
    }
}

/// A single centered text label.
#[derive(Debug, Clone)]
pub struct Label<'a> {
    definition: &'a LabelDefinition,
    content: &'a str,
    color: Color,
}

impl<'a> Label<'a> {
    pub fn new(definition: &'a LabelDefinition, content: &'a str, color: Color) -> Self {
        Self {
            definition,
            content,
            color,
        }
    }

    /// Builds the label for `element`, or `None` when it shows no text.
    pub fn for_element(definition: &'a LabelDefinition, element: &'a Element) -> Option<Self> {
        if !element.shows_label() {
            return None;
        }

        let color = if element.kind().is_filled() {
            definition.tone(element.color().contrast_tone())
        } else {
            element.color()
        };

        Some(Self::new(definition, element.text(), color))
    }

    pub fn content(&self) -> &str {
        self.content
    }

    /// Returns the resolved fill color.
    pub fn color(&self) -> Color {
        self.color
    }
}

impl Drawable for Label<'_> {
    fn render_to_layers(&self, position: Point) -> LayeredOutput {
        let mut output = LayeredOutput::new();

        let mut text = svg_element::Text::new("")
            .set("x", position.x())
            .set("y", position.y())
            .set("text-anchor", "middle")
            .set("dominant-baseline", "middle")
            .set("font-family", self.definition.font_family())
            .set("font-size", self.definition.font_size())
            .set("font-weight", self.definition.font_weight())
            .set("fill", self.color.to_rgb_hex())
            .add(SvgText::new(self.content));

        if self.color.alpha() < 1.0 {
            text = text.set("fill-opacity", self.color.alpha());
        }

        output.add_to_layer(RenderLayer::Label, Box::new(text));
        output
    }
}
