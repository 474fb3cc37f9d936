//! Drafter - the core of an SVG diagram and wireframe editor.
//!
//! A scene is a flat, ordered list of shape elements. This crate keeps the
//! scene, renders it to SVG, maps pointer input through a pan/zoom viewport,
//! and exports the result as JSON, SVG or PNG.
//!
//! ```text
//! toolbar / pointer / wheel events
//!     ↓
//! Editor ──→ Scene (truth) ──→ CanvasView (live SVG)
//!     ↓
//! export: JSON document, SVG, PNG
//! ```
//!
//! # Examples
//!
//! ```rust,no_run
//! use drafter::{Editor, config::AppConfig, element::ElementKind};
//!
//! let mut editor = Editor::new(&AppConfig::default()).expect("valid config");
//! editor.create_at_center(ElementKind::Button);
//!
//! let svg = editor.export_svg().expect("scene is not empty");
//! println!("{svg}");
//! ```

pub mod canvas;
pub mod config;
pub mod document;
pub mod editor;
pub mod export;
pub mod interaction;
pub mod render;
pub mod scene;
pub mod viewport;

mod error;

pub use drafter_core::{color, draw, element, geometry};

pub use editor::Editor;
pub use error::Error;
pub use scene::Scene;
