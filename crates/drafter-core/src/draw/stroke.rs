//! Stroke definitions for shape outlines.
//!
//! - [`StrokeDefinition`]: color, width, dash style and opacity of a stroke
//! - [`StrokeStyle`]: solid or dashed patterns used by the element recipes
//! - [`apply_stroke!`](crate::apply_stroke!): sets the stroke attributes on an SVG element
//!
//! ```
//! use drafter_core::{color::Color, draw::StrokeDefinition};
//! use svg::node::element as svg_element;
//!
//! let stroke = StrokeDefinition::dashed(Color::new("#56ffc5").unwrap(), 2.0);
//! let rect = drafter_core::apply_stroke!(svg_element::Rectangle::new(), &stroke);
//! assert!(rect.to_string().contains("stroke-dasharray=\"5,5\""));
//! ```

use crate::color::Color;

/// Line pattern of a stroke.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub enum StrokeStyle {
    #[default]
    Solid,
    /// 5px dash, 5px gap (image placeholders)
    Dashed,
    /// 8px dash, 4px gap (containers)
    LongDashed,
}

impl StrokeStyle {
    /// Returns the `stroke-dasharray` value, or `None` for solid lines.
    pub fn to_svg_value(&self) -> Option<&'static str> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5"),
            Self::LongDashed => Some("8,4"),
        }
    }
}

/// A stroke used for outlines and lines.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
    opacity: Option<f32>,
}

impl StrokeDefinition {
    /// Creates a solid stroke.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            style: StrokeStyle::Solid,
            opacity: None,
        }
    }

    /// Creates a `5,5` dashed stroke.
    pub fn dashed(color: Color, width: f32) -> Self {
        Self::solid(color, width).with_style(StrokeStyle::Dashed)
    }

    pub fn with_style(mut self, style: StrokeStyle) -> Self {
        self.style = style;
        self
    }

    /// Sets an element-level `opacity`, applied on top of the color's alpha.
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn opacity(&self) -> Option<f32> {
        self.opacity
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets `stroke`, `stroke-width`, `stroke-opacity` when the color is
/// translucent, `stroke-dasharray` when not solid and `opacity` when set.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let stroke = $stroke;
        let mut elem = $element
            .set("stroke", stroke.color().to_rgb_hex())
            .set("stroke-width", stroke.width());

        if stroke.color().alpha() < 1.0 {
            elem = elem.set("stroke-opacity", stroke.color().alpha());
        }
        if let Some(dasharray) = stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }
        if let Some(opacity) = stroke.opacity() {
            elem = elem.set("opacity", opacity);
        }

        elem
    }};
}
