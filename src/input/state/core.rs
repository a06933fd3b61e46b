//! Pointer state machine and sketch session state.

use crate::draw::{Color, Ghost, History};
use crate::input::tool::Tool;

/// Current pointer mode state machine.
///
/// Tracks whether the user is idle (ghost follows the pointer), actively
/// dragging a marker stroke, or typing a custom sticker glyph. Transitions
/// occur on pointer and keyboard events.
#[derive(Debug)]
pub enum PointerState {
    /// Pointer up - waiting for input, the ghost tracks motion
    Idle,
    /// Pointer held down with the marker - points stream into the active stroke
    Drawing,
    /// Typing a custom sticker glyph - submitted with Return, cancelled with Escape
    GlyphEntry {
        /// Accumulated glyph text
        buffer: String,
    },
}

/// Main session state for the sketchpad.
///
/// Holds the command history, the active tool, the preview ghost, and the
/// pointer state machine. All input handlers mutate this struct and raise
/// `needs_redraw`; the windowing loop consumes the flag and repaints from
/// the history. One instance is owned by the event loop for the lifetime of
/// the session - there is no ambient global state.
pub struct SketchState {
    /// Committed drawables plus the redo buffer
    pub history: History,
    /// Active tool driving new drawables and the ghost
    pub tool: Tool,
    /// Preview ghost; `None` until the pointer first moves over the canvas
    pub ghost: Option<Ghost>,
    /// Pointer state machine
    pub state: PointerState,
    /// Last known pointer position in canvas coordinates
    pub cursor: (f64, f64),
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Whether the user requested to close the sketchpad
    pub should_exit: bool,
    /// Marker ink color for new strokes and the marker ghost
    pub ink: Color,
    /// Canvas background color, painted under every repaint and export
    pub background: Color,
    /// Line width of the thin marker preset
    pub thin_width: f64,
    /// Line width of the thick marker preset
    pub thick_width: f64,
    /// Display size for stickers without their own size
    pub sticker_size: f64,
    /// Sticker palette bound to the number keys: (glyph, display size)
    pub palette: Vec<(String, f64)>,
    /// Pending export request (consumed by the windowing loop)
    pending_export: bool,
}

impl SketchState {
    /// Creates a new SketchState with specified defaults.
    ///
    /// The initial tool is the thin marker; the ghost appears on the first
    /// pointer motion.
    ///
    /// # Arguments
    /// * `ink` - Marker ink color
    /// * `background` - Canvas background color
    /// * `thin_width` - Thin marker preset width in pixels
    /// * `thick_width` - Thick marker preset width in pixels
    /// * `sticker_size` - Default sticker display size in pixels
    /// * `palette` - Sticker glyphs for the number keys, with display sizes
    pub fn with_defaults(
        ink: Color,
        background: Color,
        thin_width: f64,
        thick_width: f64,
        sticker_size: f64,
        palette: Vec<(String, f64)>,
    ) -> Self {
        Self {
            history: History::new(),
            tool: Tool::Marker { width: thin_width },
            ghost: None,
            state: PointerState::Idle,
            cursor: (0.0, 0.0),
            needs_redraw: true,
            should_exit: false,
            ink,
            background,
            thin_width,
            thick_width,
            sticker_size,
            palette,
            pending_export: false,
        }
    }

    /// Returns whether the user is currently typing a custom glyph.
    pub fn in_glyph_entry(&self) -> bool {
        matches!(self.state, PointerState::GlyphEntry { .. })
    }

    /// Moves the ghost to the pointer, creating it from the active tool on
    /// first contact.
    ///
    /// This is a reposition-only change; history is untouched.
    pub(super) fn reposition_ghost(&mut self, x: f64, y: f64) {
        if let Some(ghost) = self.ghost.as_mut() {
            ghost.move_to(x, y);
        } else {
            self.ghost = Some(self.tool.ghost_at(x, y));
        }
        self.needs_redraw = true;
    }

    /// Takes and clears any pending export request.
    ///
    /// Called by the windowing loop, which owns the export pipeline.
    pub fn take_pending_export(&mut self) -> bool {
        std::mem::take(&mut self.pending_export)
    }

    /// Stores an export request for retrieval by the windowing loop.
    pub(super) fn request_export(&mut self) {
        self.pending_export = true;
    }
}
