//! Configuration type definitions.

use super::enums::{ColorSpec, StickerSpec};
use serde::{Deserialize, Serialize};

/// Canvas geometry and background.
///
/// The canvas is fixed-size for the whole session; the window is created at
/// exactly this resolution.
#[derive(Debug, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in pixels (valid range: 64 - 4096)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Canvas height in pixels (valid range: 64 - 4096)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Background color painted under every repaint and export
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

/// Marker tool settings.
///
/// The two width presets sit on the `1` and `2` keys; the ink color applies
/// to every new stroke and to the marker ghost.
#[derive(Debug, Serialize, Deserialize)]
pub struct MarkerConfig {
    /// Line width of the thin preset in pixels (valid range: 1.0 - 64.0)
    #[serde(default = "default_thin_width")]
    pub thin_width: f64,

    /// Line width of the thick preset in pixels (valid range: 1.0 - 64.0)
    #[serde(default = "default_thick_width")]
    pub thick_width: f64,

    /// Ink color for strokes - either a named color or an RGB array
    #[serde(default = "default_ink")]
    pub ink: ColorSpec,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            thin_width: default_thin_width(),
            thick_width: default_thick_width(),
            ink: default_ink(),
        }
    }
}

/// Sticker tool settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct StickerConfig {
    /// Display size for stickers without their own size (valid range: 4.0 - 128.0)
    #[serde(default = "default_sticker_size")]
    pub default_size: f64,

    /// Palette of glyphs bound to the `3`-`9` keys; entries are either bare
    /// glyph strings or `{ glyph, size }` tables
    #[serde(default = "default_palette")]
    pub palette: Vec<StickerSpec>,
}

impl Default for StickerConfig {
    fn default() -> Self {
        Self {
            default_size: default_sticker_size(),
            palette: default_palette(),
        }
    }
}

/// PNG export settings.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Uniform scale factor from canvas to PNG resolution (valid range: 1 - 8)
    #[serde(default = "default_export_scale")]
    pub scale: u32,

    /// Directory exported PNGs are written to; `~` is expanded.
    /// Defaults to the system picture directory under "Glyphpad".
    #[serde(default)]
    pub save_directory: Option<String>,

    /// Filename template (supports chrono format specifiers)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: default_export_scale(),
            save_directory: None,
            filename_template: default_filename_template(),
        }
    }
}

// ============================================================================
// Default value functions (referenced by serde attributes)
// ============================================================================

fn default_canvas_width() -> u32 {
    256
}

fn default_canvas_height() -> u32 {
    256
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_thin_width() -> f64 {
    1.0
}

fn default_thick_width() -> f64 {
    5.0
}

fn default_ink() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_sticker_size() -> f64 {
    16.0
}

fn default_palette() -> Vec<StickerSpec> {
    ["🔥", "⭐", "😀"]
        .into_iter()
        .map(|glyph| StickerSpec::Glyph(glyph.to_string()))
        .collect()
}

fn default_export_scale() -> u32 {
    4
}

fn default_filename_template() -> String {
    "sketch_%Y-%m-%d_%H%M%S".to_string()
}
