//! Pan and zoom of the canvas.
//!
//! The viewport maps scene coordinates to canvas-local screen pixels:
//! `screen = scene * zoom + pan`. It is applied as one transform on the root
//! group, so element geometry never changes when the user zooms or pans.

use log::trace;

use drafter_core::geometry::{Point, Size};

use crate::config::ViewportConfig;

/// Zoom, pan and canvas size.
#[derive(Debug, Clone)]
pub struct Viewport {
    zoom: f32,
    pan: Point,
    canvas: Size,
    min_zoom: f32,
    max_zoom: f32,
    zoom_in_factor: f32,
    zoom_out_factor: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::from_config(&ViewportConfig::default())
    }
}

impl Viewport {
    /// Creates an unzoomed, unpanned viewport using the configured limits.
    pub fn from_config(config: &ViewportConfig) -> Self {
        Self {
            zoom: 1.0,
            pan: Point::default(),
            canvas: Size::new(config.width(), config.height()),
            min_zoom: config.min_zoom(),
            max_zoom: config.max_zoom(),
            zoom_in_factor: config.zoom_in_factor(),
            zoom_out_factor: config.zoom_out_factor(),
        }
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn pan(&self) -> Point {
        self.pan
    }

    pub fn canvas_size(&self) -> Size {
        self.canvas
    }

    /// Applies one wheel event at `cursor` (canvas-local pixels).
    ///
    /// A positive `delta_y` (scrolling down) zooms out. The scene point under
    /// the cursor stays under the cursor unless the zoom is clamped.
    pub fn wheel(&mut self, cursor: Point, delta_y: f32) {
        let factor = if delta_y > 0.0 {
            self.zoom_out_factor
        } else {
            self.zoom_in_factor
        };

        let old_zoom = self.zoom;
        let new_zoom = (old_zoom * factor).clamp(self.min_zoom, self.max_zoom);
        let ratio = new_zoom / old_zoom;

        self.pan = cursor.sub_point(cursor.sub_point(self.pan).scale(ratio));
        self.zoom = new_zoom;

        trace!(zoom = self.zoom, pan_x = self.pan.x(), pan_y = self.pan.y(); "Wheel zoom");
    }

    /// Sets the zoom directly, clamped to the configured range. Pan is kept.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Moves the view by a raw screen-pixel delta.
    pub fn pan_by(&mut self, delta: Point) {
        self.pan = self.pan.add_point(delta);
    }

    /// Returns the root group transform, e.g. `translate(10, 0) scale(1.5)`.
    pub fn transform(&self) -> String {
        format!(
            "translate({}, {}) scale({})",
            self.pan.x(),
            self.pan.y(),
            self.zoom
        )
    }

    pub fn screen_to_scene(&self, screen: Point) -> Point {
        screen.sub_point(self.pan).scale(1.0 / self.zoom)
    }

    pub fn scene_to_screen(&self, scene: Point) -> Point {
        scene.scale(self.zoom).add_point(self.pan)
    }

    /// Returns the canvas-local center of the visible area.
    pub fn center(&self) -> Point {
        Point::new(self.canvas.width() / 2.0, self.canvas.height() / 2.0)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.canvas = Size::new(width, height);
    }
}
