//! Arrowhead marker shared by all arrow elements.

use svg::node::element::{Definitions, Marker, Polygon};

use crate::color::Color;

/// Id referenced by `marker-end="url(#arrowhead)"`.
pub const ARROWHEAD_ID: &str = "arrowhead";

/// Creates the `<defs>` block holding the arrowhead marker.
pub fn arrowhead_definitions(color: Color) -> Definitions {
    let arrowhead = Marker::new()
        .set("id", ARROWHEAD_ID)
        .set("markerWidth", 10)
        .set("markerHeight", 7)
        .set("refX", 9)
        .set("refY", 3.5)
        .set("orient", "auto")
        .add(
            Polygon::new()
                .set("points", "0 0, 10 3.5, 0 7")
                .set("fill", color.to_rgb_hex()),
        );

    Definitions::new().add(arrowhead)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrowhead_definitions() {
        let defs = arrowhead_definitions(Color::from_rgb8(0x56, 0xff, 0xc5)).to_string();
        assert!(defs.contains("id=\"arrowhead\""));
        assert!(defs.contains("refX=\"9\""));
        assert!(defs.contains("refY=\"3.5\""));
        assert!(defs.contains("points=\"0 0, 10 3.5, 0 7\""));
        assert!(defs.contains("fill=\"#56ffc5\""));
    }
}
