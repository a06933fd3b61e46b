use crate::draw::render::{STICKER_GHOST_ALPHA, render_sticker};
use crate::draw::{render_background, render_drawables, render_ghost};

use super::{PointerState, SketchState};

impl SketchState {
    /// Full-surface repaint of the sketch scene.
    ///
    /// Paints the background, replays every committed drawable in draw
    /// order (draw order = z-order), then renders the preview ghost last -
    /// only while the pointer is up. During glyph entry the pending buffer
    /// is previewed at the cursor with a caret suffix in ghost styling.
    ///
    /// There is no dirty-region tracking; the canvas is small and bounded,
    /// so every change signal repaints the whole surface.
    pub fn render_scene(&self, ctx: &cairo::Context) {
        render_background(ctx, self.background);
        render_drawables(ctx, self.history.committed());

        match &self.state {
            PointerState::Idle => {
                if let Some(ghost) = &self.ghost {
                    render_ghost(ctx, ghost, self.ink);
                }
            }
            PointerState::GlyphEntry { buffer } => {
                let mut preview = buffer.clone();
                preview.push('_');
                let (x, y) = self.cursor;
                render_sticker(ctx, &preview, x, y, self.sticker_size, STICKER_GHOST_ALPHA);
            }
            PointerState::Drawing => {}
        }
    }
}
