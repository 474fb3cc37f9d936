//! Fill attributes for shape bodies.

/// Apply a fill to an SVG element.
///
/// `None` sets `fill="none"`. A translucent color is split into an opaque
/// `fill` and a `fill-opacity`.
///
/// ```
/// use drafter_core::color::Color;
/// use svg::node::element as svg_element;
///
/// let tint = Some(Color::from_rgb8(86, 255, 197).with_alpha(0.5));
/// let rect = drafter_core::apply_fill!(svg_element::Rectangle::new(), tint).to_string();
/// assert!(rect.contains("fill=\"#56ffc5\""));
/// assert!(rect.contains("fill-opacity="));
/// ```
#[macro_export]
macro_rules! apply_fill {
    ($element:expr, $fill:expr) => {{
        let fill: Option<$crate::color::Color> = $fill;
        match fill {
            None => $element.set("fill", "none"),
            Some(color) if color.alpha() < 1.0 => $element
                .set("fill", color.to_rgb_hex())
                .set("fill-opacity", color.alpha()),
            Some(color) => $element.set("fill", color.to_rgb_hex()),
        }
    }};
}

#[cfg(test)]
mod tests {
    use svg::node::element as svg_element;

    use crate::color::Color;

    #[test]
    fn test_fill_none() {
        let rect = apply_fill!(svg_element::Rectangle::new(), None).to_string();
        assert!(rect.contains("fill=\"none\""));
    }

    #[test]
    fn test_fill_opaque_has_no_opacity() {
        let rect = apply_fill!(svg_element::Rectangle::new(), Some(Color::from_rgb8(255, 0, 0)))
            .to_string();
        assert!(rect.contains("fill=\"#ff0000\""));
        assert!(!rect.contains("fill-opacity"));
    }
}
