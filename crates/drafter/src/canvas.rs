//! The live canvas: one rendered node per scene element.
//!
//! [`CanvasView`] mirrors the scene. Every mutation replaces the affected
//! element's node wholesale, except for moves, which only rewrite the
//! placement transform. Node order follows scene order.

use indexmap::IndexMap;
use log::{debug, trace};
use svg::{Document, node::element::Group};

use drafter_core::{
    color::Color,
    draw::arrowhead_definitions,
    element::{DEFAULT_COLOR, Element, ElementId},
};

use crate::{
    render::{self, RenderStyle, VisualNode},
    viewport::Viewport,
};

/// Id of the root group carrying the viewport transform.
pub const MAIN_GROUP_ID: &str = "main-group";

/// Rendered nodes keyed by element id, in z-order.
#[derive(Debug, Clone)]
pub struct CanvasView {
    nodes: IndexMap<ElementId, VisualNode>,
    style: RenderStyle,
    marker_color: Color,
}

impl Default for CanvasView {
    fn default() -> Self {
        Self::new(RenderStyle::default(), DEFAULT_COLOR)
    }
}

impl CanvasView {
    pub fn new(style: RenderStyle, marker_color: Color) -> Self {
        Self {
            nodes: IndexMap::new(),
            style,
            marker_color,
        }
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Replaces the node of `element`, or appends one for a new element.
    ///
    /// A replaced node keeps its place in the z-order.
    pub fn rerender(&mut self, element: &Element) {
        let node = render::render(element, &self.style);
        self.nodes.insert(element.id().clone(), node);
    }

    /// Rewrites the placement of `element`'s node without redrawing it.
    ///
    /// Falls back to a full render when the element has no node yet.
    pub fn reposition(&mut self, element: &Element) {
        match self.nodes.get_mut(element.id()) {
            Some(node) => {
                node.set_placement(element.position(), element.rotation());
                trace!(id:% = element.id(); "Repositioned node");
            }
            None => self.rerender(element),
        }
    }

    pub fn remove(&mut self, id: &ElementId) -> Option<VisualNode> {
        self.nodes.shift_remove(id)
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Discards every node and renders `elements` from scratch.
    pub fn rebuild(&mut self, elements: &[Element]) {
        self.nodes.clear();
        for element in elements {
            self.rerender(element);
        }
        debug!(count = self.nodes.len(); "Canvas rebuilt");
    }

    pub fn get(&self, id: &ElementId) -> Option<&VisualNode> {
        self.nodes.get(id)
    }

    /// Iterates over the nodes, bottom first.
    pub fn nodes(&self) -> impl Iterator<Item = &VisualNode> {
        self.nodes.values()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether the empty-canvas hint should be shown.
    pub fn is_placeholder_visible(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Builds the live canvas document as seen through `viewport`.
    pub fn to_document(&self, viewport: &Viewport) -> Document {
        let size = viewport.canvas_size();

        let main_group = self.nodes.values().fold(
            Group::new()
                .set("id", MAIN_GROUP_ID)
                .set("transform", viewport.transform()),
            |group, node| group.add(node.to_group()),
        );

        Document::new()
            .set("width", size.width())
            .set("height", size.height())
            .add(arrowhead_definitions(self.marker_color))
            .add(main_group)
    }
}
