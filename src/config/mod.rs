//! Configuration file support for glyphpad.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/glyphpad/config.toml`. Settings
//! include the canvas geometry, marker presets, the sticker palette, and
//! export options.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{ColorSpec, StickerSpec};
pub use types::{CanvasConfig, ExportConfig, MarkerConfig, StickerConfig};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 256
/// height = 256
/// background = "white"
///
/// [marker]
/// thin_width = 1.0
/// thick_width = 5.0
/// ink = "black"
///
/// [sticker]
/// default_size = 16.0
/// palette = ["🔥", { glyph = "⭐", size = 24.0 }]
///
/// [export]
/// scale = 4
/// filename_template = "sketch_%Y-%m-%d_%H%M%S"
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Canvas geometry and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Marker tool presets
    #[serde(default)]
    pub marker: MarkerConfig,

    /// Sticker tool settings
    #[serde(default)]
    pub sticker: StickerConfig,

    /// PNG export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning
    /// is logged. Palette entries with empty or whitespace-only glyphs are
    /// dropped (the same validation the custom-sticker entry applies).
    ///
    /// Validated ranges:
    /// - `canvas.width` / `canvas.height`: 64 - 4096
    /// - `marker.thin_width` / `marker.thick_width`: 1.0 - 64.0
    /// - `sticker.default_size` and per-entry sizes: 4.0 - 128.0
    /// - `export.scale`: 1 - 8
    fn validate_and_clamp(&mut self) {
        if !(64..=4096).contains(&self.canvas.width) {
            warn!(
                "Invalid canvas width {}, clamping to 64-4096 range",
                self.canvas.width
            );
            self.canvas.width = self.canvas.width.clamp(64, 4096);
        }
        if !(64..=4096).contains(&self.canvas.height) {
            warn!(
                "Invalid canvas height {}, clamping to 64-4096 range",
                self.canvas.height
            );
            self.canvas.height = self.canvas.height.clamp(64, 4096);
        }

        if !(1.0..=64.0).contains(&self.marker.thin_width) {
            warn!(
                "Invalid thin_width {:.1}, clamping to 1.0-64.0 range",
                self.marker.thin_width
            );
            self.marker.thin_width = self.marker.thin_width.clamp(1.0, 64.0);
        }
        if !(1.0..=64.0).contains(&self.marker.thick_width) {
            warn!(
                "Invalid thick_width {:.1}, clamping to 1.0-64.0 range",
                self.marker.thick_width
            );
            self.marker.thick_width = self.marker.thick_width.clamp(1.0, 64.0);
        }

        if !(4.0..=128.0).contains(&self.sticker.default_size) {
            warn!(
                "Invalid sticker default_size {:.1}, clamping to 4.0-128.0 range",
                self.sticker.default_size
            );
            self.sticker.default_size = self.sticker.default_size.clamp(4.0, 128.0);
        }

        self.sticker.palette.retain(|entry| {
            let keep = !entry.glyph().trim().is_empty();
            if !keep {
                warn!("Dropping empty sticker palette entry");
            }
            keep
        });
        for entry in &mut self.sticker.palette {
            if let StickerSpec::Sized { glyph, size } = entry
                && !(4.0..=128.0).contains(size)
            {
                warn!(
                    "Invalid size {:.1} for palette sticker '{}', clamping to 4.0-128.0 range",
                    size, glyph
                );
                *size = size.clamp(4.0, 128.0);
            }
        }

        if !(1..=8).contains(&self.export.scale) {
            warn!(
                "Invalid export scale {}, clamping to 1-8 range",
                self.export.scale
            );
            self.export.scale = self.export.scale.clamp(1, 8);
        }
    }

    /// Applies command-line overrides, re-clamping the affected values.
    pub fn apply_overrides(
        &mut self,
        width: Option<u32>,
        height: Option<u32>,
        export_dir: Option<String>,
    ) {
        if let Some(width) = width {
            self.canvas.width = width;
        }
        if let Some(height) = height {
            self.canvas.height = height;
        }
        if let Some(dir) = export_dir {
            self.export.save_directory = Some(dir);
        }
        self.validate_and_clamp();
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/glyphpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("glyphpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at
    /// `~/.config/glyphpad/config.toml`. If the file doesn't exist, returns
    /// a Config with default values. All loaded values are validated and
    /// clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_in_range() {
        let mut config = Config::default();
        config.validate_and_clamp();
        assert_eq!(config.canvas.width, 256);
        assert_eq!(config.marker.thin_width, 1.0);
        assert_eq!(config.sticker.default_size, 16.0);
        assert_eq!(config.export.scale, 4);
        assert_eq!(config.sticker.palette.len(), 3);
    }

    #[test]
    fn parses_full_config() {
        let toml_str = r#"
            [canvas]
            width = 512
            height = 384
            background = [250, 245, 235]

            [marker]
            thin_width = 2.0
            thick_width = 8.0
            ink = "blue"

            [sticker]
            default_size = 20.0
            palette = ["🔥", { glyph = "⭐", size = 32.0 }]

            [export]
            scale = 2
            save_directory = "~/Sketches"
        "#;

        let mut config: Config = toml::from_str(toml_str).unwrap();
        config.validate_and_clamp();

        assert_eq!(config.canvas.width, 512);
        assert_eq!(config.marker.thick_width, 8.0);
        assert_eq!(config.sticker.palette.len(), 2);
        assert_eq!(config.sticker.palette[1].size_or(20.0), 32.0);
        assert_eq!(config.export.scale, 2);
        assert_eq!(config.export.save_directory.as_deref(), Some("~/Sketches"));
    }

    #[test]
    fn clamps_out_of_range_values() {
        let toml_str = r#"
            [canvas]
            width = 16

            [marker]
            thick_width = 500.0

            [export]
            scale = 100
        "#;

        let mut config: Config = toml::from_str(toml_str).unwrap();
        config.validate_and_clamp();

        assert_eq!(config.canvas.width, 64);
        assert_eq!(config.marker.thick_width, 64.0);
        assert_eq!(config.export.scale, 8);
    }

    #[test]
    fn drops_empty_palette_entries() {
        let toml_str = r#"
            [sticker]
            palette = ["🔥", "   ", ""]
        "#;

        let mut config: Config = toml::from_str(toml_str).unwrap();
        config.validate_and_clamp();
        assert_eq!(config.sticker.palette.len(), 1);
    }

    #[test]
    fn overrides_are_clamped() {
        let mut config = Config::default();
        config.apply_overrides(Some(10_000), None, Some("/tmp/sketches".to_string()));
        assert_eq!(config.canvas.width, 4096);
        assert_eq!(config.canvas.height, 256);
        assert_eq!(
            config.export.save_directory.as_deref(),
            Some("/tmp/sketches")
        );
    }
}
