//! Configuration enum types.

use crate::draw::{Color, color};
use log::warn;
use serde::{Deserialize, Serialize};

/// Color specification - either a named color or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// ink = "black"
///
/// # Custom RGB color (0-255 per component)
/// background = [250, 245, 235]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color: red, green, blue, yellow, orange, pink, white, black
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Named colors are mapped to predefined RGBA values. Unknown color
    /// names default to black with a warning. RGB arrays are converted from
    /// 0-255 range to 0.0-1.0 range with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => color::name_to_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                color::BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color {
                r: *r as f64 / 255.0,
                g: *g as f64 / 255.0,
                b: *b as f64 / 255.0,
                a: 1.0,
            },
        }
    }
}

/// Sticker palette entry - either a bare glyph or a glyph with its own
/// display size.
///
/// # Examples
/// ```toml
/// palette = ["🔥", { glyph = "⭐", size = 24.0 }]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(untagged)]
pub enum StickerSpec {
    /// Bare glyph rendered at the default sticker size
    Glyph(String),
    /// Glyph with an explicit display size in pixels
    Sized {
        /// Glyph text
        glyph: String,
        /// Display size in pixels
        size: f64,
    },
}

impl StickerSpec {
    /// The glyph text of this entry.
    pub fn glyph(&self) -> &str {
        match self {
            StickerSpec::Glyph(glyph) => glyph,
            StickerSpec::Sized { glyph, .. } => glyph,
        }
    }

    /// The display size, falling back to `default` for bare entries.
    pub fn size_or(&self, default: f64) -> f64 {
        match self {
            StickerSpec::Glyph(_) => default,
            StickerSpec::Sized { size, .. } => *size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, WHITE};

    #[test]
    fn color_spec_resolves_names_and_rgb() {
        assert_eq!(ColorSpec::Name("white".to_string()).to_color(), WHITE);
        assert_eq!(ColorSpec::Name("nonsense".to_string()).to_color(), BLACK);

        let orange = ColorSpec::Rgb([255, 128, 0]).to_color();
        assert_eq!(orange.r, 1.0);
        assert!((orange.g - 128.0 / 255.0).abs() < f64::EPSILON);
        assert_eq!(orange.a, 1.0);
    }

    #[test]
    fn sticker_spec_size_fallback() {
        let bare = StickerSpec::Glyph("🔥".to_string());
        assert_eq!(bare.glyph(), "🔥");
        assert_eq!(bare.size_or(16.0), 16.0);

        let sized = StickerSpec::Sized {
            glyph: "⭐".to_string(),
            size: 24.0,
        };
        assert_eq!(sized.size_or(16.0), 24.0);
    }
}
