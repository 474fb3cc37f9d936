//! Layer-based rendering for a single element.
//!
//! Composite recipes (cards, modals, navbars, grids) emit several SVG nodes.
//! Each node is tagged with a [`RenderLayer`] and [`LayeredOutput::render`]
//! groups them bottom to top, so a label always lands above the body it
//! describes regardless of emit order.
//!
//! ```
//! # use drafter_core::draw::{RenderLayer, LayeredOutput};
//! # use svg::node::element::{Rectangle, Text};
//! let mut output = LayeredOutput::new();
//! output.add_to_layer(RenderLayer::Label, Box::new(Text::new("Card")));
//! output.add_to_layer(RenderLayer::Body, Box::new(Rectangle::new()));
//!
//! // Body group first, then the label group.
//! assert_eq!(output.render().len(), 2);
//! ```

use svg::node::element as svg_element;

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Rendering layers of an element, bottom to top in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RenderLayer {
    /// Shading drawn behind the element body (modal backdrop)
    Backdrop,
    /// The main outline or fill of the shape
    Body,
    /// Decorations drawn over the body (card strip, navbar items, grid lines)
    Detail,
    /// The element text
    Label,
}

impl RenderLayer {
    /// Returns the value used for the `data-layer` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Backdrop => "backdrop",
            Self::Body => "body",
            Self::Detail => "detail",
            Self::Label => "label",
        }
    }
}

/// SVG nodes collected per [`RenderLayer`].
#[derive(Debug, Default)]
pub struct LayeredOutput {
    items: Vec<(RenderLayer, SvgNode)>,
}

impl LayeredOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node to `layer`. Nodes keep their insertion order within a layer.
    pub fn add_to_layer(&mut self, layer: RenderLayer, node: SvgNode) {
        self.items.push((layer, node));
    }

    /// Appends every node of `other`.
    pub fn merge(&mut self, other: LayeredOutput) {
        self.items.extend(other.items);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of nodes on `layer`.
    pub fn layer_len(&self, layer: RenderLayer) -> usize {
        self.items.iter().filter(|(l, _)| *l == layer).count()
    }

    /// Renders the collected nodes into one `<g data-layer>` group per
    /// non-empty layer, bottom layer first.
    pub fn render(mut self) -> Vec<SvgNode> {
        if self.items.is_empty() {
            return Vec::new();
        }

        // Stable: nodes keep their order inside a layer
        self.items.sort_by_key(|(layer, _)| *layer);

        let mut result = Vec::new();
        let mut current_layer = self.items[0].0;
        let mut current_group = svg_element::Group::new().set("data-layer", current_layer.name());

        for (layer, node) in self.items {
            if layer != current_layer {
                result.push(Box::new(current_group) as SvgNode);
                current_layer = layer;
                current_group = svg_element::Group::new().set("data-layer", layer.name());
            }
            current_group = current_group.add(node);
        }
        result.push(Box::new(current_group) as SvgNode);

        result
    }
}

#[cfg(test)]
mod tests {
    use svg::node::element::{Group, Rectangle};

    use super::*;

    fn render_to_string(output: LayeredOutput) -> String {
        output
            .render()
            .into_iter()
            .fold(Group::new(), |group, node| group.add(node))
            .to_string()
    }

    #[test]
    fn test_layered_output_empty() {
        let output = LayeredOutput::new();
        assert!(output.is_empty());
        assert!(output.render().is_empty());
    }

    #[test]
    fn test_layered_output_orders_layers() {
        let mut output = LayeredOutput::new();
        output.add_to_layer(RenderLayer::Label, Box::new(Rectangle::new().set("id", "l")));
        output.add_to_layer(RenderLayer::Backdrop, Box::new(Rectangle::new().set("id", "bd")));
        output.add_to_layer(RenderLayer::Body, Box::new(Rectangle::new().set("id", "b")));

        let svg = render_to_string(output);
        let backdrop = svg.find("data-layer=\"backdrop\"").unwrap();
        let body = svg.find("data-layer=\"body\"").unwrap();
        let label = svg.find("data-layer=\"label\"").unwrap();
        assert!(backdrop < body && body < label);
    }

    #[test]
    fn test_layered_output_merge_same_layer() {
        let mut first = LayeredOutput::new();
        first.add_to_layer(RenderLayer::Detail, Box::new(Rectangle::new()));

        let mut second = LayeredOutput::new();
        second.add_to_layer(RenderLayer::Detail, Box::new(Rectangle::new()));

        first.merge(second);
        assert_eq!(first.layer_len(RenderLayer::Detail), 2);
        assert_eq!(first.render().len(), 1);
    }
}
