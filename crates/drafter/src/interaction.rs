//! Pointer gestures: dragging elements and panning the canvas.
//!
//! A gesture starts on pointer-down, is updated on every pointer-move and
//! ends on pointer-up. Drag offsets are kept in scene coordinates, so the
//! grabbed point stays under the pointer at any zoom level.

use drafter_core::{
    element::{Element, ElementId},
    geometry::{Bounds, Point},
};

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

/// The gesture in progress between pointer-down and pointer-up.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Gesture {
    /// No gesture in progress.
    #[default]
    Idle,
    /// An element follows the pointer.
    Dragging {
        id: ElementId,
        /// Scene-space distance from the element center to the grab point.
        offset: Point,
    },
    /// The canvas follows the pointer.
    Panning {
        /// Screen position of the previous pointer event.
        last: Point,
    },
}

impl Gesture {
    /// Starts dragging `element`, grabbed at `scene_point`.
    pub fn drag(element: &Element, scene_point: Point) -> Self {
        Self::Dragging {
            id: element.id().clone(),
            offset: scene_point.sub_point(element.position()),
        }
    }

    pub fn pan(screen_point: Point) -> Self {
        Self::Panning { last: screen_point }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns the id of the dragged element, if any.
    pub fn dragged_id(&self) -> Option<&ElementId> {
        match self {
            Self::Dragging { id, .. } => Some(id),
            _ => None,
        }
    }
}

/// Whether `scene_point` lies on `element`'s rotated footprint.
pub fn hits(element: &Element, scene_point: Point) -> bool {
    let local = scene_point
        .sub_point(element.position())
        .rotate(-element.rotation());
    Bounds::new_from_center(Point::default(), element.footprint()).contains(local)
}

/// Returns the topmost element under `scene_point`.
///
/// Elements later in the slice are drawn above earlier ones and win.
pub fn hit_test(elements: &[Element], scene_point: Point) -> Option<&Element> {
    elements
        .iter()
        .rev()
        .find(|element| hits(element, scene_point))
}
