//! The editor controller.
//!
//! [`Editor`] owns the scene, the viewport, the canvas projection and the
//! active pointer gesture. UI adapters forward toolbar, pointer, wheel and
//! properties-panel events to it and read the results back; nothing else
//! mutates the scene.

use log::{debug, info};

use drafter_core::{
    element::{Element, ElementId, ElementKind, ElementPatch},
    geometry::Point,
};

use crate::{
    Error,
    canvas::CanvasView,
    config::AppConfig,
    export::{ExportSettings, Exporter, PngExporter, SvgExporter},
    interaction::{self, Gesture, PointerButton},
    render::RenderStyle,
    scene::Scene,
    viewport::Viewport,
};

/// Single owner of the editor state.
///
/// # Examples
///
/// ```
/// use drafter::{Editor, config::AppConfig, element::ElementKind, geometry::Point};
///
/// let mut editor = Editor::new(&AppConfig::default()).unwrap();
/// let id = editor.create(ElementKind::Rectangle, Point::new(100.0, 100.0));
///
/// editor.click(Point::new(100.0, 100.0));
/// assert_eq!(editor.scene().selected_id(), Some(&id));
///
/// let json = editor.export_json().unwrap();
/// assert!(json.contains("\"element-1\""));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Editor {
    scene: Scene,
    viewport: Viewport,
    canvas: CanvasView,
    gesture: Gesture,
    exporter: SvgExporter,
}

impl Editor {
    /// Creates an empty editor from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the configuration holds invalid values.
    pub fn new(config: &AppConfig) -> Result<Self, Error> {
        config.validate()?;

        let style = RenderStyle::from_config(config.style())?;
        let settings = ExportSettings::from_config(config.export())?;

        Ok(Self {
            scene: Scene::new(config.style().default_color()?),
            viewport: Viewport::from_config(config.viewport()),
            canvas: CanvasView::new(style.clone(), settings.marker_color()),
            gesture: Gesture::Idle,
            exporter: SvgExporter::new(style, settings),
        })
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn canvas(&self) -> &CanvasView {
        &self.canvas
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    // --- Creation ---

    /// Creates an element centered on `position` (scene coordinates).
    pub fn create(&mut self, kind: ElementKind, position: Point) -> ElementId {
        let element = self.scene.create(kind, position);
        self.canvas.rerender(element);
        element.id().clone()
    }

    /// Creates an element in the middle of the visible canvas.
    pub fn create_at_center(&mut self, kind: ElementKind) -> ElementId {
        let position = self.viewport.screen_to_scene(self.viewport.center());
        self.create(kind, position)
    }

    /// Creates an element from a toolbar payload dropped at `screen`.
    ///
    /// Unknown tags create a generic element.
    pub fn drop_at(&mut self, tag: &str, screen: Point) -> ElementId {
        let position = self.viewport.screen_to_scene(screen);
        let element = self.scene.create_from_tag(tag, position);
        self.canvas.rerender(element);
        element.id().clone()
    }

    // --- Selection and editing ---

    /// Selects the topmost element under `screen`, or clears the selection
    /// when the click lands on empty canvas.
    pub fn click(&mut self, screen: Point) -> Option<&Element> {
        let point = self.viewport.screen_to_scene(screen);
        let Some(id) = interaction::hit_test(self.scene.elements(), point).map(|e| e.id().clone())
        else {
            self.scene.deselect();
            return None;
        };
        self.scene.select(&id)
    }

    pub fn select(&mut self, id: &ElementId) -> Option<&Element> {
        self.scene.select(id)
    }

    pub fn deselect(&mut self) {
        self.scene.deselect();
    }

    /// Applies `patch` to the element with `id` and redraws it.
    pub fn update(&mut self, id: &ElementId, patch: &ElementPatch) -> Option<&Element> {
        let element = self.scene.update(id, patch)?;
        self.canvas.rerender(element);
        Some(element)
    }

    /// Applies `patch` to the selected element.
    pub fn update_selected(&mut self, patch: &ElementPatch) -> Option<&Element> {
        let id = self.scene.selected_id()?.clone();
        self.update(&id, patch)
    }

    pub fn delete(&mut self, id: &ElementId) -> Option<Element> {
        let removed = self.scene.delete(id)?;
        self.canvas.remove(id);
        if self.gesture.dragged_id() == Some(id) {
            self.gesture = Gesture::Idle;
        }
        Some(removed)
    }

    /// Deletes the selected element. Does nothing without a selection.
    pub fn delete_selected(&mut self) -> Option<Element> {
        let id = self.scene.selected_id()?.clone();
        self.delete(&id)
    }

    /// Removes every element. Element ids keep counting up.
    pub fn clear(&mut self) {
        self.scene.clear();
        self.canvas.clear();
        self.gesture = Gesture::Idle;
        info!("Canvas cleared");
    }

    // --- Pointer and wheel ---

    /// Starts a drag on the element under `screen`, or a pan on empty canvas.
    ///
    /// Only the primary button starts gestures.
    pub fn pointer_down(&mut self, screen: Point, button: PointerButton) {
        if button != PointerButton::Primary {
            return;
        }

        let point = self.viewport.screen_to_scene(screen);
        self.gesture = match interaction::hit_test(self.scene.elements(), point) {
            Some(element) => Gesture::drag(element, point),
            None => Gesture::pan(screen),
        };
        debug!(gesture:? = self.gesture; "Gesture started");
    }

    /// Advances the active gesture to `screen`.
    pub fn pointer_move(&mut self, screen: Point) {
        match &mut self.gesture {
            Gesture::Idle => {}
            Gesture::Dragging { id, offset } => {
                let position = self.viewport.screen_to_scene(screen).sub_point(*offset);
                if let Some(element) = self.scene.move_to(id, position) {
                    self.canvas.reposition(element);
                }
            }
            Gesture::Panning { last } => {
                self.viewport.pan_by(screen.sub_point(*last));
                *last = screen;
            }
        }
    }

    pub fn pointer_up(&mut self) {
        self.gesture = Gesture::Idle;
    }

    /// Zooms around `cursor`; see [`Viewport::wheel`].
    pub fn wheel(&mut self, cursor: Point, delta_y: f32) {
        self.viewport.wheel(cursor, delta_y);
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.viewport.set_zoom(zoom);
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
    }

    // --- Import and export ---

    /// Replaces the scene with the document in `json`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Import`] for malformed input; the editor is left
    /// empty and usable.
    pub fn import_json(&mut self, json: &str) -> Result<(), Error> {
        self.gesture = Gesture::Idle;
        let result = self.scene.import_json(json);
        self.canvas.rebuild(self.scene.elements());
        result
    }

    /// # Errors
    ///
    /// Returns [`Error::Import`] if serialization fails.
    pub fn export_json(&self) -> Result<String, Error> {
        self.scene.to_json()
    }

    /// Renders the standalone SVG export of the scene.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyScene`] for an empty scene.
    pub fn export_svg(&self) -> Result<String, Error> {
        self.exporter.render_svg(self.scene.elements())
    }

    /// Rasterizes the SVG export to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyScene`] for an empty scene and
    /// [`Error::Rasterize`] if rasterization fails.
    pub fn export_png(&self) -> Result<Vec<u8>, Error> {
        PngExporter::new(self.exporter.clone()).export(self.scene.elements())
    }

    /// Renders the live canvas, viewport transform included.
    pub fn to_canvas_svg(&self) -> String {
        self.canvas.to_document(&self.viewport).to_string()
    }

    pub fn is_placeholder_visible(&self) -> bool {
        self.canvas.is_placeholder_visible()
    }
}
