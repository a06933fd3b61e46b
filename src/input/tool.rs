//! Drawing tool selection.

use crate::draw::Ghost;

/// Drawing tool selection.
///
/// Exactly one tool is active at a time. The tool determines what kind of
/// drawable a pointer-down creates and what the preview ghost looks like
/// while the pointer is up.
#[derive(Debug, Clone, PartialEq)]
pub enum Tool {
    /// Freehand marker - a stroke follows the pointer while it is held down
    Marker {
        /// Line width in pixels for new strokes
        width: f64,
    },
    /// Sticker stamp - places a glyph with a single click
    Sticker {
        /// Glyph to place
        glyph: String,
        /// Display size in pixels for new stickers
        size: f64,
    },
}

impl Tool {
    /// Builds the preview ghost for this tool at the given position.
    ///
    /// The ghost mirrors the tool's visual parameters; it is rebuilt every
    /// time the tool changes.
    pub fn ghost_at(&self, x: f64, y: f64) -> Ghost {
        match self {
            Tool::Marker { width } => Ghost::Marker {
                x,
                y,
                width: *width,
            },
            Tool::Sticker { glyph, size } => Ghost::Sticker {
                x,
                y,
                glyph: glyph.clone(),
                size: *size,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ghost_mirrors_tool_parameters() {
        let marker = Tool::Marker { width: 1.0 };
        assert_eq!(
            marker.ghost_at(10.0, 10.0),
            Ghost::Marker {
                x: 10.0,
                y: 10.0,
                width: 1.0
            }
        );

        let sticker = Tool::Sticker {
            glyph: "🔥".to_string(),
            size: 16.0,
        };
        assert_eq!(
            sticker.ghost_at(4.0, 8.0),
            Ghost::Sticker {
                x: 4.0,
                y: 8.0,
                glyph: "🔥".to_string(),
                size: 16.0
            }
        );
    }
}
