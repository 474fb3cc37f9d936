//! Color handling for Drafter scenes
//!
//! This module provides the [`Color`] type, an 8-bit sRGB color parsed from
//! any CSS color string through the `color` crate, and the [`ContrastTone`]
//! rule used to pick a readable label color on filled shapes.

use std::{fmt, str::FromStr};

use color::{DynamicColor, Srgb};
use serde::{Deserialize, Serialize};

/// An sRGB color with 8-bit channels.
///
/// Colors are parsed from CSS strings such as `"#56ffc5"`, `"rgb(0, 0, 0)"`
/// or `"navy"` and always display as lowercase hex (`#rrggbb`, or
/// `#rrggbbaa` when not fully opaque). The hex form is also the serialized
/// form used in scene documents.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Color {
    /// Create a new `Color` from a string
    /// This will parse CSS color strings such as "#ff0000", "rgb(255, 0, 0)", "red", etc.
    ///
    /// # Examples
    ///
    /// ```
    /// use drafter_core::color::Color;
    ///
    /// let mint = Color::new("#56ffc5").unwrap();
    /// assert_eq!(mint.to_string(), "#56ffc5");
    ///
    /// let red = Color::new("red").unwrap();
    /// assert_eq!(red.to_string(), "#ff0000");
    /// ```
    pub fn new(color_str: &str) -> Result<Self, String> {
        let color = DynamicColor::from_str(color_str)
            .map_err(|err| format!("invalid color `{color_str}`: {err}"))?;
        let rgba = color.to_alpha_color::<Srgb>().to_rgba8();
        Ok(Self::from_rgba8(rgba.r, rgba.g, rgba.b, rgba.a))
    }

    /// Creates a color from raw 8-bit channels.
    pub const fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from raw 8-bit channels.
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgba8(r, g, b, u8::MAX)
    }

    /// Creates a new color with the specified alpha, between 0.0 (transparent)
    /// and 1.0 (opaque).
    ///
    /// ```
    /// use drafter_core::color::Color;
    ///
    /// let shade = Color::from_rgb8(0, 0, 0).with_alpha(0.3);
    /// assert_eq!(shade.to_string(), "#0000004d");
    /// ```
    pub fn with_alpha(self, alpha: f32) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    /// Returns the red, green and blue channels.
    pub fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Returns the opaque `#rrggbb` form, for SVG paint attributes that carry
    /// opacity separately.
    pub fn to_rgb_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Returns the alpha component between 0.0 and 1.0.
    pub fn alpha(self) -> f32 {
        f32::from(self.a) / 255.0
    }

    /// Perceived brightness of the color between 0.0 and 1.0.
    ///
    /// Weighted channel sum `0.299·R + 0.587·G + 0.114·B` over normalized
    /// sRGB channels. Alpha is ignored.
    pub fn luminance(self) -> f32 {
        (0.299 * f32::from(self.r) + 0.587 * f32::from(self.g) + 0.114 * f32::from(self.b))
            / 255.0
    }

    /// Returns the label tone that reads best on a background of this color.
    pub fn contrast_tone(self) -> ContrastTone {
        ContrastTone::for_luminance(self.luminance())
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::from_rgb8(0, 0, 0)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rgb_hex())?;
        if self.a != u8::MAX {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Label tone chosen against a filled background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContrastTone {
    /// Dark text, for light backgrounds.
    Dark,
    /// Light text, for dark backgrounds.
    Light,
}

impl ContrastTone {
    /// Picks the tone for a background luminance.
    ///
    /// Luminance strictly above 0.5 gets [`ContrastTone::Dark`]; everything
    /// else, including exactly 0.5, gets [`ContrastTone::Light`].
    pub fn for_luminance(luminance: f32) -> Self {
        if luminance > 0.5 {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_color_new() {
        let mint = Color::new("#56ffc5");
        assert!(mint.is_ok());

        let invalid = Color::new("not-a-color");
        assert!(invalid.is_err());
    }

    #[test]
    fn test_color_display_is_lowercase_hex() {
        assert_eq!(Color::new("#56FFC5").unwrap().to_string(), "#56ffc5");
        assert_eq!(Color::new("rgb(10, 22, 40)").unwrap().to_string(), "#0a1628");
        assert_eq!(Color::new("white").unwrap().to_string(), "#ffffff");
    }

    #[test]
    fn test_color_display_keeps_alpha() {
        let color = Color::from_rgb8(86, 255, 197).with_alpha(0.1);
        assert_eq!(color.to_string(), "#56ffc51a");
        assert_eq!(Color::new(&color.to_string()).unwrap(), color);
    }

    #[test]
    fn test_rgb_hex_drops_alpha() {
        let color = Color::from_rgb8(0, 0, 0).with_alpha(0.5);
        assert_eq!(color.to_rgb_hex(), "#000000");
        assert_approx_eq!(f32, color.alpha(), 128.0 / 255.0);
    }

    #[test]
    fn test_color_default() {
        assert_eq!(Color::default().to_string(), "#000000");
    }

    #[test]
    fn test_luminance_extremes() {
        assert_approx_eq!(f32, Color::from_rgb8(0, 0, 0).luminance(), 0.0);
        assert_approx_eq!(f32, Color::from_rgb8(255, 255, 255).luminance(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_contrast_tone() {
        assert_eq!(Color::new("#000000").unwrap().contrast_tone(), ContrastTone::Light);
        assert_eq!(Color::new("#ffffff").unwrap().contrast_tone(), ContrastTone::Dark);
        assert_eq!(Color::new("#56ffc5").unwrap().contrast_tone(), ContrastTone::Dark);
        assert_eq!(Color::new("#0a1628").unwrap().contrast_tone(), ContrastTone::Light);
    }

    #[test]
    fn test_contrast_tone_at_half_luminance_is_light() {
        assert_eq!(ContrastTone::for_luminance(0.5), ContrastTone::Light);
        assert_eq!(ContrastTone::for_luminance(0.500_1), ContrastTone::Dark);
    }

    #[test]
    fn test_color_serde_as_hex_string() {
        let color = Color::new("navy").unwrap();
        let json = serde_json::to_string(&color).unwrap();
        assert_eq!(json, "\"#000080\"");

        let parsed: Color = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, color);

        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
