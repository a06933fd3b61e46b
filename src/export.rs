//! PNG export of the committed history.
//!
//! Export is a one-shot, stateless operation: the committed drawables are
//! replayed onto an offscreen surface scaled uniformly from the canvas's
//! logical size, PNG-encoded, and written to the export directory. The
//! preview ghost is never included.

use crate::draw::{Color, History, render_background, render_drawables};
use chrono::Local;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while exporting the canvas.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The offscreen surface or its drawing context could not be created.
    #[error("could not obtain export surface: {0}")]
    Surface(#[from] cairo::Error),

    /// PNG encoding failed.
    #[error("failed to encode PNG: {0}")]
    Encode(#[from] cairo::IoError),

    /// The export directory or file could not be written.
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

/// Where exported PNGs are written.
#[derive(Debug, Clone)]
pub struct ExportTarget {
    /// Directory to save sketches to.
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers).
    pub filename_template: String,
}

impl Default for ExportTarget {
    fn default() -> Self {
        Self {
            save_directory: dirs::picture_dir()
                .unwrap_or_else(|| PathBuf::from("~"))
                .join("Glyphpad"),
            filename_template: "sketch_%Y-%m-%d_%H%M%S".to_string(),
        }
    }
}

impl ExportTarget {
    /// Builds a target from the export config section.
    ///
    /// A configured directory overrides the default; `~` is expanded.
    pub fn from_config(config: &crate::config::ExportConfig) -> Self {
        let mut target = Self::default();
        if let Some(dir) = &config.save_directory {
            target.save_directory = expand_tilde(dir);
        }
        target.filename_template = config.filename_template.clone();
        target
    }
}

/// Renders the committed history onto an offscreen surface scaled uniformly
/// from the canvas's logical size.
///
/// A stroke spanning (0,0)-(100,100) on a 256x256 canvas at scale 4 spans
/// (0,0)-(400,400) on the returned 1024x1024 surface.
pub fn render_scaled(
    history: &History,
    logical_width: u32,
    logical_height: u32,
    scale: u32,
    background: Color,
) -> Result<cairo::ImageSurface, ExportError> {
    let surface = cairo::ImageSurface::create(
        cairo::Format::ARgb32,
        (logical_width * scale) as i32,
        (logical_height * scale) as i32,
    )?;

    {
        let ctx = cairo::Context::new(&surface)?;
        ctx.scale(scale as f64, scale as f64);
        render_background(&ctx, background);
        render_drawables(&ctx, history.committed());
    }
    surface.flush();

    Ok(surface)
}

/// Encodes a surface as PNG bytes.
pub fn encode_png(surface: &cairo::ImageSurface) -> Result<Vec<u8>, ExportError> {
    let mut data = Vec::new();
    surface.write_to_png(&mut data)?;
    Ok(data)
}

/// Generate a filename based on the template and current time.
pub fn generate_filename(template: &str) -> String {
    let now = Local::now();
    format!("{}.png", now.format(template))
}

/// Ensure the save directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    // Canonicalize to resolve ~ and relative paths
    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Save PNG data to a file in the export target.
///
/// # Returns
/// Path to the saved file.
pub fn save_png(data: &[u8], target: &ExportTarget) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&target.save_directory)?;

    let filename = generate_filename(&target.filename_template);
    let file_path = directory.join(&filename);

    info!(
        "Saving sketch to: {} ({} bytes)",
        file_path.display(),
        data.len()
    );

    fs::write(&file_path, data)?;

    let written_size = fs::metadata(&file_path)?.len();
    debug!("File written: {} bytes", written_size);

    Ok(file_path)
}

/// One-shot export: render the committed history at scale, encode, save.
///
/// # Returns
/// Path to the saved PNG.
pub fn export_history(
    history: &History,
    logical_width: u32,
    logical_height: u32,
    scale: u32,
    background: Color,
    target: &ExportTarget,
) -> Result<PathBuf, ExportError> {
    let surface = render_scaled(history, logical_width, logical_height, scale, background)?;
    let data = encode_png(&surface)?;
    save_png(&data, target)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, Drawable, WHITE};

    #[test]
    fn test_generate_filename() {
        let filename = generate_filename("sketch_%Y%m%d");
        assert!(filename.starts_with("sketch_"));
        assert!(filename.ends_with(".png"));
        assert!(filename.contains("202")); // Assuming we're in the 2020s
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/Sketches");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn test_default_target() {
        let target = ExportTarget::default();
        assert!(
            target
                .save_directory
                .to_string_lossy()
                .contains("Glyphpad")
        );
    }

    #[test]
    fn render_scaled_matches_requested_resolution() {
        let history = History::new();
        let surface = render_scaled(&history, 256, 256, 4, WHITE).unwrap();
        assert_eq!(surface.width(), 1024);
        assert_eq!(surface.height(), 1024);
    }

    #[test]
    fn export_writes_png_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let target = ExportTarget {
            save_directory: temp.path().to_path_buf(),
            filename_template: "test_%Y%m%d".to_string(),
        };

        let mut history = History::new();
        history.commit(Drawable::Stroke {
            points: vec![(0.0, 0.0), (50.0, 50.0)],
            width: 4.0,
            color: BLACK,
        });

        let path = export_history(&history, 64, 64, 2, WHITE, &target).unwrap();
        let data = fs::read(&path).unwrap();
        // PNG signature
        assert_eq!(&data[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }
}
