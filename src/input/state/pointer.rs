use crate::draw::Drawable;
use crate::input::{events::PointerButton, tool::Tool};

use super::{PointerState, SketchState};

impl SketchState {
    /// Processes a pointer button press.
    ///
    /// # Behavior
    /// - Left press while Idle with the marker: commits a new single-point
    ///   stroke (visible in history even before any drag) and enters
    ///   `Drawing`; further motion appends to it in place.
    /// - Left press while Idle with a sticker: commits the sticker at the
    ///   press position. A sticker has no drag phase, so release is treated
    ///   in the same tick and the machine stays `Idle`. The ghost is not
    ///   altered.
    /// - Presses during glyph entry are ignored.
    pub fn on_pointer_press(&mut self, button: PointerButton, x: f64, y: f64) {
        if button != PointerButton::Left {
            return;
        }
        self.cursor = (x, y);

        match self.state {
            PointerState::Idle => match &self.tool {
                Tool::Marker { width } => {
                    self.history.commit(Drawable::Stroke {
                        points: vec![(x, y)],
                        width: *width,
                        color: self.ink,
                    });
                    self.state = PointerState::Drawing;
                    self.needs_redraw = true;
                }
                Tool::Sticker { glyph, size } => {
                    self.history.commit(Drawable::Sticker {
                        glyph: glyph.clone(),
                        x,
                        y,
                        size: *size,
                    });
                    self.needs_redraw = true;
                }
            },
            PointerState::Drawing | PointerState::GlyphEntry { .. } => {}
        }
    }

    /// Processes pointer motion.
    ///
    /// # Behavior
    /// - While drawing: appends the position to the active stroke's point
    ///   sequence (history-changed redraw).
    /// - While idle or typing a glyph: repositions the preview ghost
    ///   (reposition-only redraw).
    pub fn on_pointer_motion(&mut self, x: f64, y: f64) {
        self.cursor = (x, y);

        match self.state {
            PointerState::Drawing => {
                if let Some(points) = self.history.active_stroke_mut() {
                    points.push((x, y));
                    self.needs_redraw = true;
                }
            }
            PointerState::Idle | PointerState::GlyphEntry { .. } => {
                self.reposition_ghost(x, y);
            }
        }
    }

    /// Processes a pointer button release.
    ///
    /// Releasing the left button while drawing freezes the active stroke
    /// (it is already committed) and returns to `Idle`, which lets the
    /// preview ghost reappear on the next repaint.
    pub fn on_pointer_release(&mut self, button: PointerButton, x: f64, y: f64) {
        if button != PointerButton::Left {
            return;
        }
        self.cursor = (x, y);

        if matches!(self.state, PointerState::Drawing) {
            self.state = PointerState::Idle;
            self.needs_redraw = true;
        }
    }
}
