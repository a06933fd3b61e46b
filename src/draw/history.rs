//! Command history for committed drawables.

use super::drawable::Drawable;

/// Ordered log of committed drawables plus the redo buffer.
///
/// The committed log is replayed in full on every repaint, so draw order is
/// z-order (later commits paint over earlier ones). [`undo`](History::undo)
/// moves drawables onto the redo buffer; any other mutation of the committed
/// log invalidates the redo buffer. The two sequences never share a
/// drawable.
#[derive(Debug, Default)]
pub struct History {
    /// Drawables in draw order (first = bottom layer, last = top layer)
    committed: Vec<Drawable>,
    /// Undone drawables, most recently undone last
    redo: Vec<Drawable>,
}

impl History {
    /// Creates a new empty history.
    pub fn new() -> Self {
        Self {
            committed: Vec::new(),
            redo: Vec::new(),
        }
    }

    /// The committed drawables in draw order.
    pub fn committed(&self) -> &[Drawable] {
        &self.committed
    }

    /// Number of drawables waiting in the redo buffer.
    pub fn redo_depth(&self) -> usize {
        self.redo.len()
    }

    /// Returns true when nothing is committed.
    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    /// Appends a drawable to the committed log.
    ///
    /// Committing a new drawable invalidates everything in the redo buffer.
    pub fn commit(&mut self, drawable: Drawable) {
        self.redo.clear();
        self.committed.push(drawable);
    }

    /// Moves the most recent drawable onto the redo buffer.
    ///
    /// Returns `false` (a no-op, not an error) when nothing is committed.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(drawable) => {
                self.redo.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Moves the most recently undone drawable back onto the committed log.
    ///
    /// Returns `false` when the redo buffer is empty.
    pub fn redo(&mut self) -> bool {
        match self.redo.pop() {
            Some(drawable) => {
                self.committed.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Empties the committed log.
    ///
    /// Clearing counts as an invalidating mutation, so the redo buffer is
    /// emptied as well.
    pub fn clear(&mut self) {
        self.committed.clear();
        self.redo.clear();
    }

    /// Mutable access to the point list of the stroke being drawn.
    ///
    /// The active stroke is always the last committed drawable (it is
    /// committed on pointer-down and mutated in place while the pointer is
    /// held). Returns `None` when the history is empty or the last drawable
    /// is a sticker.
    pub fn active_stroke_mut(&mut self) -> Option<&mut Vec<(f64, f64)>> {
        match self.committed.last_mut() {
            Some(Drawable::Stroke { points, .. }) => Some(points),
            _ => None,
        }
    }
}
