//! Pointer-following preview ghost.

/// Non-committed visual hint that tracks the pointer while it is up.
///
/// The ghost mirrors the active tool's rendering parameters and is replaced
/// whenever the tool changes. It is never part of history and never appears
/// in exported output.
#[derive(Clone, Debug, PartialEq)]
pub enum Ghost {
    /// Disc the size of the marker tip, drawn at reduced opacity
    Marker {
        /// Pointer X coordinate
        x: f64,
        /// Pointer Y coordinate
        y: f64,
        /// Marker line width; the disc radius is half of this
        width: f64,
    },
    /// The sticker glyph, centered on the pointer at reduced opacity
    Sticker {
        /// Pointer X coordinate
        x: f64,
        /// Pointer Y coordinate
        y: f64,
        /// Glyph text to preview
        glyph: String,
        /// Display size in pixels
        size: f64,
    },
}

impl Ghost {
    /// Moves the ghost to a new pointer position, keeping its parameters.
    pub fn move_to(&mut self, nx: f64, ny: f64) {
        match self {
            Ghost::Marker { x, y, .. } | Ghost::Sticker { x, y, .. } => {
                *x = nx;
                *y = ny;
            }
        }
    }

    /// The ghost's current position.
    pub fn position(&self) -> (f64, f64) {
        match self {
            Ghost::Marker { x, y, .. } | Ghost::Sticker { x, y, .. } => (*x, *y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_to_keeps_parameters() {
        let mut ghost = Ghost::Marker {
            x: 0.0,
            y: 0.0,
            width: 1.0,
        };
        ghost.move_to(10.0, 10.0);
        assert_eq!(
            ghost,
            Ghost::Marker {
                x: 10.0,
                y: 10.0,
                width: 1.0
            }
        );

        let mut ghost = Ghost::Sticker {
            x: 0.0,
            y: 0.0,
            glyph: "🔥".to_string(),
            size: 16.0,
        };
        ghost.move_to(3.0, 4.0);
        assert_eq!(ghost.position(), (3.0, 4.0));
    }
}
