//! Drawable components for element rendering.
//!
//! Every element is drawn as a [`Shape`] (the per-kind recipe) plus an
//! optional [`Label`], combined by [`ShapeWithLabel`]. Drawables render into
//! a [`LayeredOutput`] so that backdrops, bodies, details and labels of one
//! element stack in a fixed order.
//!
//! Drawables are centered on the position passed to
//! [`Drawable::render_to_layers`]. The scene renderer passes the origin and
//! places the element through its group transform.
mod fill;
mod label;
mod layer;
mod marker;
mod shape;
mod shape_with_label;
mod stroke;

pub use label::{Label, LabelDefinition};
pub use layer::{LayeredOutput, RenderLayer, SvgNode};
pub use marker::{ARROWHEAD_ID, arrowhead_definitions};
pub use shape::Shape;
pub use shape_with_label::ShapeWithLabel;
pub use stroke::{StrokeDefinition, StrokeStyle};

use crate::geometry::Point;

/// Trait for anything that renders to layered SVG output.
pub trait Drawable: std::fmt::Debug {
    /// Renders this drawable centered on `position`.
    fn render_to_layers(&self, position: Point) -> LayeredOutput;
}
