//! Drawable definitions for the sketchpad canvas.

use super::color::Color;

/// A committed unit of drawing on the canvas.
///
/// Each variant owns every parameter it needs to render itself, so the
/// history can be replayed in full without consulting the tool state that
/// created it. Drawables are immutable once completed: a stroke's point list
/// grows only while the pointer is held down, and a sticker is frozen the
/// moment it is placed.
#[derive(Clone, Debug, PartialEq)]
pub enum Drawable {
    /// Freehand marker stroke - polyline connecting pointer drag points
    Stroke {
        /// Sequence of (x, y) coordinates traced by the pointer
        points: Vec<(f64, f64)>,
        /// Line thickness in pixels, fixed at creation
        width: f64,
        /// Ink color, fixed at creation
        color: Color,
    },
    /// Sticker glyph placed with a single click
    Sticker {
        /// Glyph text (usually a single emoji, occasionally a short string)
        glyph: String,
        /// Placement X coordinate (glyph center)
        x: f64,
        /// Placement Y coordinate (glyph center)
        y: f64,
        /// Display size in pixels, fixed at creation
        size: f64,
    },
}

impl Drawable {
    /// Returns whether this drawable would paint any pixels.
    ///
    /// A stroke needs at least two points to produce a visible line segment;
    /// it still occupies its slot in history either way.
    pub fn is_visible(&self) -> bool {
        match self {
            Drawable::Stroke { points, .. } => points.len() >= 2,
            Drawable::Sticker { glyph, .. } => !glyph.is_empty(),
        }
    }
}
