//! The element model: one placed shape or label on the canvas.
//!
//! - [`ElementId`] - Scene-unique identifier (`element-<n>`)
//! - [`ElementKind`] - Closed set of drawable kinds
//! - [`Element`] - Position, size, rotation, color and label of one shape
//! - [`ElementPatch`] - Sparse property update applied by the properties panel
//!
//! Elements serialize to the scene document format:
//!
//! ```json
//! {"id": "element-1", "type": "rectangle", "x": 100.0, "y": 100.0,
//!  "text": "Rectangle", "color": "#56ffc5", "size": 60.0,
//!  "width": 90.0, "height": 60.0, "rotation": 0.0}
//! ```

use std::{fmt, str::FromStr};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    color::Color,
    geometry::{Point, Size},
};

/// Stroke/fill color given to newly created elements.
pub const DEFAULT_COLOR: Color = Color::from_rgb8(0x56, 0xff, 0xc5);
/// Size of size-only shapes (circle, diamond, triangle, arrow, line).
pub const DEFAULT_SIZE: f32 = 60.0;
/// Width of rectangle-family shapes.
pub const DEFAULT_WIDTH: f32 = 90.0;
/// Height of rectangle-family shapes.
pub const DEFAULT_HEIGHT: f32 = 60.0;

const ID_PREFIX: &str = "element-";

/// Identifier of an element, unique within a scene.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Creates an id from a raw string, e.g. one read from a scene file.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Creates the id `element-<n>` for a counter value.
    pub fn from_sequence(n: u64) -> Self {
        Self(format!("{ID_PREFIX}{n}"))
    }

    /// Returns the counter value when the id has the `element-<n>` form.
    ///
    /// ```
    /// use drafter_core::element::ElementId;
    ///
    /// assert_eq!(ElementId::from_sequence(7).sequence(), Some(7));
    /// assert_eq!(ElementId::new("logo").sequence(), None);
    /// ```
    pub fn sequence(&self) -> Option<u64> {
        self.0.strip_prefix(ID_PREFIX)?.parse().ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Error returned when a strict kind lookup meets an unknown tag.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown element type `{0}`")]
pub struct UnknownKindError(String);

/// The drawable kind of an element.
///
/// The kind is fixed when the element is created. Tags that match none of the
/// known kinds map to [`ElementKind::Generic`], which draws as a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum ElementKind {
    Rectangle,
    Circle,
    Diamond,
    Triangle,
    Button,
    Input,
    Text,
    Image,
    Container,
    Header,
    Sidebar,
    Footer,
    Card,
    Modal,
    Navbar,
    Grid,
    Arrow,
    Line,
    /// Fallback for unrecognized tags.
    Generic,
}

impl ElementKind {
    /// All kinds offered by the toolbar, in toolbar order.
    pub const TOOLBAR: [ElementKind; 18] = [
        Self::Rectangle,
        Self::Circle,
        Self::Diamond,
        Self::Triangle,
        Self::Button,
        Self::Input,
        Self::Text,
        Self::Image,
        Self::Container,
        Self::Header,
        Self::Sidebar,
        Self::Footer,
        Self::Card,
        Self::Modal,
        Self::Navbar,
        Self::Grid,
        Self::Arrow,
        Self::Line,
    ];

    /// Parses a toolbar payload, falling back to [`ElementKind::Generic`].
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|err: UnknownKindError| {
            debug!(err:err; "Falling back to generic element");
            Self::Generic
        })
    }

    /// Returns the lowercase tag used in scene files and toolbar payloads.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
            Self::Diamond => "diamond",
            Self::Triangle => "triangle",
            Self::Button => "button",
            Self::Input => "input",
            Self::Text => "text",
            Self::Image => "image",
            Self::Container => "container",
            Self::Header => "header",
            Self::Sidebar => "sidebar",
            Self::Footer => "footer",
            Self::Card => "card",
            Self::Modal => "modal",
            Self::Navbar => "navbar",
            Self::Grid => "grid",
            Self::Arrow => "arrow",
            Self::Line => "line",
            Self::Generic => "generic",
        }
    }

    /// Label given to a freshly created element of this kind.
    pub fn default_text(self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::Circle => "Circle",
            Self::Diamond => "Decision",
            Self::Triangle => "Triangle",
            Self::Button => "Button",
            Self::Input => "Input Field",
            Self::Text => "Text Label",
            Self::Image => "Image",
            Self::Container => "Container",
            Self::Header => "Header",
            Self::Sidebar => "Sidebar",
            Self::Footer => "Footer",
            Self::Card => "Card",
            Self::Modal => "Modal",
            Self::Navbar => "Navigation",
            Self::Grid => "Grid Layout",
            Self::Arrow | Self::Line => "",
            Self::Generic => "Element",
        }
    }

    /// Whether the shape is drawn from `width`/`height` rather than `size`.
    pub fn supports_dimensions(self) -> bool {
        !matches!(
            self,
            Self::Circle | Self::Diamond | Self::Triangle | Self::Arrow | Self::Line
        )
    }

    /// Whether the shape body is filled with the element color, so the label
    /// needs a contrasting tone.
    pub fn is_filled(self) -> bool {
        matches!(self, Self::Button | Self::Header | Self::Footer | Self::Navbar)
    }

    /// Whether the element ever shows its text.
    pub fn has_label(self) -> bool {
        !matches!(self, Self::Arrow | Self::Line)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ElementKind {
    type Err = UnknownKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::TOOLBAR
            .into_iter()
            .chain([Self::Generic])
            .find(|kind| kind.tag() == s)
            .ok_or_else(|| UnknownKindError(s.to_string()))
    }
}

impl From<String> for ElementKind {
    fn from(tag: String) -> Self {
        Self::from_tag(&tag)
    }
}

impl From<ElementKind> for &'static str {
    fn from(kind: ElementKind) -> Self {
        kind.tag()
    }
}

/// One placed shape on the canvas.
///
/// `x`/`y` is the element center in unscaled scene coordinates. The kind is
/// read-only after construction; everything else is edited through
/// [`Element::apply`] and [`Element::set_position`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawElement")]
pub struct Element {
    id: ElementId,
    #[serde(skip)]
    kind: ElementKind,
    /// Type string as written to scene files. Unknown imported types are
    /// kept verbatim while drawing as [`ElementKind::Generic`].
    #[serde(rename = "type")]
    type_tag: String,
    x: f32,
    y: f32,
    text: String,
    color: Color,
    size: f32,
    width: f32,
    height: f32,
    rotation: f32,
}

impl Element {
    /// Creates an element with the per-kind default label and the default
    /// color, size and dimensions.
    pub fn new(id: ElementId, kind: ElementKind, position: Point) -> Self {
        Self {
            id,
            kind,
            type_tag: kind.tag().to_string(),
            x: position.x(),
            y: position.y(),
            text: kind.default_text().to_string(),
            color: DEFAULT_COLOR,
            size: DEFAULT_SIZE,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            rotation: 0.0,
        }
    }

    /// Overrides the initial color (builder style).
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Returns the `type` string persisted for this element.
    pub fn type_tag(&self) -> &str {
        &self.type_tag
    }

    /// Gives the element a new id, keeping everything else.
    pub fn set_id(&mut self, id: ElementId) {
        self.id = id;
    }

    /// Returns the element center.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Rotation in degrees.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Returns the unrotated footprint the shape occupies around its center.
    pub fn footprint(&self) -> Size {
        if self.kind.supports_dimensions() {
            Size::new(self.width, self.height)
        } else {
            Size::square(self.size)
        }
    }

    /// Whether a label should be drawn.
    pub fn shows_label(&self) -> bool {
        self.kind.has_label() && !self.text.is_empty()
    }

    pub fn set_position(&mut self, position: Point) {
        self.x = position.x();
        self.y = position.y();
    }

    /// Overwrites every field present in `patch`.
    pub fn apply(&mut self, patch: &ElementPatch) {
        if let Some(text) = &patch.text {
            self.text.clone_from(text);
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
        if let Some(rotation) = patch.rotation {
            self.rotation = rotation;
        }
        if let Some(width) = patch.width {
            self.width = width;
        }
        if let Some(height) = patch.height {
            self.height = height;
        }
    }
}

/// Element as read from a scene file; optional fields fall back to the
/// creation defaults. A zero width or height also falls back.
#[derive(Deserialize)]
struct RawElement {
    id: ElementId,
    #[serde(rename = "type")]
    type_tag: String,
    x: f32,
    y: f32,
    text: Option<String>,
    color: Option<Color>,
    size: Option<f32>,
    width: Option<f32>,
    height: Option<f32>,
    rotation: Option<f32>,
}

impl From<RawElement> for Element {
    fn from(raw: RawElement) -> Self {
        let kind = ElementKind::from_tag(&raw.type_tag);
        let mut element = Element::new(raw.id, kind, Point::new(raw.x, raw.y));
        element.type_tag = raw.type_tag;
        element.apply(&ElementPatch {
            text: raw.text,
            color: raw.color,
            size: raw.size,
            rotation: raw.rotation,
            width: raw.width.filter(|width| *width != 0.0),
            height: raw.height.filter(|height| *height != 0.0),
        });
        element
    }
}

/// Sparse update for an element. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl ElementPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = Some(rotation);
        self
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rectangle() -> Element {
        Element::new(
            ElementId::from_sequence(1),
            ElementKind::Rectangle,
            Point::new(100.0, 100.0),
        )
    }

    #[test]
    fn test_new_element_defaults() {
        let element = rectangle();
        assert_eq!(element.id().as_str(), "element-1");
        assert_eq!(element.kind(), ElementKind::Rectangle);
        assert_eq!(element.text(), "Rectangle");
        assert_eq!(element.color().to_string(), "#56ffc5");
        assert_eq!(element.size(), 60.0);
        assert_eq!(element.width(), 90.0);
        assert_eq!(element.height(), 60.0);
        assert_eq!(element.rotation(), 0.0);
    }

    #[test]
    fn test_kind_tags_round_trip() {
        for kind in ElementKind::TOOLBAR {
            assert_eq!(kind.tag().parse::<ElementKind>(), Ok(kind));
        }
        assert_eq!("generic".parse::<ElementKind>(), Ok(ElementKind::Generic));
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(
            "hexagon".parse::<ElementKind>(),
            Err(UnknownKindError("hexagon".to_string()))
        );
        assert_eq!(ElementKind::from_tag("hexagon"), ElementKind::Generic);
        assert_eq!(ElementKind::Generic.default_text(), "Element");
    }

    #[test]
    fn test_kind_traits() {
        assert!(ElementKind::Button.is_filled());
        assert!(ElementKind::Navbar.is_filled());
        assert!(!ElementKind::Card.is_filled());

        assert!(!ElementKind::Arrow.has_label());
        assert!(!ElementKind::Line.has_label());
        assert!(ElementKind::Circle.has_label());

        assert!(ElementKind::Grid.supports_dimensions());
        assert!(!ElementKind::Diamond.supports_dimensions());
    }

    #[test]
    fn test_footprint_follows_kind() {
        let rect = rectangle();
        assert_eq!(rect.footprint(), Size::new(90.0, 60.0));

        let circle = Element::new(ElementId::from_sequence(2), ElementKind::Circle, Point::default());
        assert_eq!(circle.footprint(), Size::square(60.0));
    }

    #[test]
    fn test_apply_patch_touches_only_present_fields() {
        let mut element = rectangle();
        element.apply(&ElementPatch::new().with_width(200.0));

        assert_eq!(element.width(), 200.0);
        assert_eq!(element.height(), 60.0);
        assert_eq!(element.text(), "Rectangle");
        assert!(ElementPatch::new().is_empty());
    }

    #[test]
    fn test_arrow_never_shows_label() {
        let mut arrow = Element::new(ElementId::from_sequence(3), ElementKind::Arrow, Point::default());
        arrow.apply(&ElementPatch::new().with_text("ignored"));
        assert!(!arrow.shows_label());
    }

    #[test]
    fn test_serialize_uses_document_field_names() {
        let json = serde_json::to_value(rectangle()).unwrap();
        assert_eq!(json["id"], "element-1");
        assert_eq!(json["type"], "rectangle");
        assert!(json.get("kind").is_none());
        assert_eq!(json["color"], "#56ffc5");
        assert_eq!(json["width"], 90.0);
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let element: Element =
            serde_json::from_str(r#"{"id": "a", "type": "button", "x": 1, "y": 2}"#).unwrap();
        assert_eq!(element.text(), "Button");
        assert_eq!(element.color(), DEFAULT_COLOR);
        assert_eq!(element.size(), DEFAULT_SIZE);
        assert_eq!(element.position(), Point::new(1.0, 2.0));
    }

    #[test]
    fn test_deserialize_unknown_type_is_generic() {
        let element: Element =
            serde_json::from_str(r#"{"id": "a", "type": "hexagon", "x": 0, "y": 0}"#).unwrap();
        assert_eq!(element.kind(), ElementKind::Generic);
        assert_eq!(element.text(), "Element");

        let json = serde_json::to_value(&element).unwrap();
        assert_eq!(json["type"], "hexagon");
    }

    #[test]
    fn test_deserialize_zero_dimensions_use_defaults() {
        let element: Element = serde_json::from_str(
            r#"{"id": "a", "type": "card", "x": 0, "y": 0, "width": 0, "height": 0, "size": 0}"#,
        )
        .unwrap();
        assert_eq!(element.width(), DEFAULT_WIDTH);
        assert_eq!(element.height(), DEFAULT_HEIGHT);
        assert_eq!(element.size(), 0.0);
    }

    #[test]
    fn test_deserialize_keeps_explicit_empty_text() {
        let element: Element =
            serde_json::from_str(r#"{"id": "a", "type": "card", "x": 0, "y": 0, "text": ""}"#)
                .unwrap();
        assert_eq!(element.text(), "");
        assert!(!element.shows_label());
    }
}
