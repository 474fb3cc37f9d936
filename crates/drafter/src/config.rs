//! Configuration types for the Drafter editor.
//!
//! All types implement [`serde::Deserialize`] with per-field defaults, so a
//! configuration file only needs the values it changes.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration
//! - [`StyleConfig`] - Element and label appearance
//! - [`ViewportConfig`] - Zoom limits, wheel factors and canvas size
//! - [`ExportConfig`] - Margin and colors of exported images
//!
//! # Example
//!
//! ```
//! # use drafter::config::AppConfig;
//! let config = AppConfig::default();
//! assert!(config.style().default_color().is_ok());
//! assert_eq!(config.viewport().max_zoom(), 3.0);
//! ```

use serde::Deserialize;

use drafter_core::{color::Color, draw::LabelDefinition};

use crate::Error;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    style: StyleConfig,

    #[serde(default)]
    viewport: ViewportConfig,

    #[serde(default)]
    export: ExportConfig,
}

impl AppConfig {
    pub fn new(style: StyleConfig, viewport: ViewportConfig, export: ExportConfig) -> Self {
        Self {
            style,
            viewport,
            export,
        }
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn viewport(&self) -> &ViewportConfig {
        &self.viewport
    }

    pub fn export(&self) -> &ExportConfig {
        &self.export
    }

    /// Checks every section, returning the first invalid value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for unparsable colors, a non-positive font
    /// size, or an empty or inverted zoom range.
    pub fn validate(&self) -> Result<(), Error> {
        self.style.label_definition()?;
        self.style.default_color()?;
        self.viewport.validate()?;
        self.export.background_color()?;
        self.export.marker_color()?;
        Ok(())
    }
}

/// Appearance of new elements and their labels.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Color given to new elements, as a CSS color string.
    default_color: String,
    font_family: String,
    font_size: u16,
    font_weight: u16,
    /// Label tone on light filled bodies.
    dark_tone: String,
    /// Label tone on dark filled bodies.
    light_tone: String,
}

impl StyleConfig {
    /// Returns the parsed color for new elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the color string cannot be parsed.
    pub fn default_color(&self) -> Result<Color, Error> {
        parse_color("style.default_color", &self.default_color)
    }

    /// Builds the label settings used by the renderer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a tone cannot be parsed or the font size
    /// is zero.
    pub fn label_definition(&self) -> Result<LabelDefinition, Error> {
        if self.font_size == 0 {
            return Err(Error::Config("style.font_size must be positive".to_string()));
        }

        let mut definition = LabelDefinition::new();
        definition.set_font_family(&self.font_family);
        definition.set_font_size(self.font_size);
        definition.set_font_weight(self.font_weight);
        definition.set_tones(
            parse_color("style.dark_tone", &self.dark_tone)?,
            parse_color("style.light_tone", &self.light_tone)?,
        );
        Ok(definition)
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            default_color: "#56ffc5".to_string(),
            font_family: "Poppins, sans-serif".to_string(),
            font_size: 12,
            font_weight: 500,
            dark_tone: "#0a1628".to_string(),
            light_tone: "#e0e0e0".to_string(),
        }
    }
}

/// Zoom and canvas settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    min_zoom: f32,
    max_zoom: f32,
    /// Zoom multiplier for scrolling up.
    zoom_in_factor: f32,
    /// Zoom multiplier for scrolling down.
    zoom_out_factor: f32,
    width: f32,
    height: f32,
}

impl ViewportConfig {
    pub fn min_zoom(&self) -> f32 {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> f32 {
        self.max_zoom
    }

    pub fn zoom_in_factor(&self) -> f32 {
        self.zoom_in_factor
    }

    pub fn zoom_out_factor(&self) -> f32 {
        self.zoom_out_factor
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    fn validate(&self) -> Result<(), Error> {
        if !(self.min_zoom > 0.0 && self.min_zoom <= self.max_zoom) {
            return Err(Error::Config(format!(
                "viewport zoom range [{}, {}] is invalid",
                self.min_zoom, self.max_zoom
            )));
        }
        if self.zoom_in_factor <= 0.0 || self.zoom_out_factor <= 0.0 {
            return Err(Error::Config(
                "viewport zoom factors must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            min_zoom: 0.1,
            max_zoom: 3.0,
            zoom_in_factor: 1.1,
            zoom_out_factor: 0.9,
            width: 800.0,
            height: 600.0,
        }
    }
}

/// Settings for SVG and PNG export.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Space added on every side of the content box.
    margin: f32,
    background_color: String,
    marker_color: String,
}

impl ExportConfig {
    pub fn margin(&self) -> f32 {
        self.margin
    }

    /// # Errors
    ///
    /// Returns [`Error::Config`] if the color string cannot be parsed.
    pub fn background_color(&self) -> Result<Color, Error> {
        parse_color("export.background_color", &self.background_color)
    }

    /// Fill of the arrowhead marker.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the color string cannot be parsed.
    pub fn marker_color(&self) -> Result<Color, Error> {
        parse_color("export.marker_color", &self.marker_color)
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            margin: 20.0,
            background_color: "#0a1628".to_string(),
            marker_color: "#56ffc5".to_string(),
        }
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color, Error> {
    Color::new(value).map_err(|err| Error::Config(format!("invalid {key}: {err}")))
}
