use log::{debug, warn};

use crate::input::events::Key;
use crate::input::tool::Tool;

use super::{PointerState, SketchState};

/// Commands the keyboard can trigger.
///
/// The keyboard is the tool-selection surface of the sketchpad: marker
/// presets and palette stickers sit on the number keys, history commands on
/// letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Select the thin marker preset
    SelectThinMarker,
    /// Select the thick marker preset
    SelectThickMarker,
    /// Select the palette sticker at this index
    SelectSticker(usize),
    /// Start typing a custom sticker glyph
    EnterGlyphEntry,
    /// Move the most recent drawable to the redo buffer
    Undo,
    /// Restore the most recently undone drawable
    Redo,
    /// Clear the canvas (committed and redo buffers)
    ClearCanvas,
    /// Export the committed history as a PNG
    Export,
    /// Close the sketchpad
    Exit,
}

impl SketchState {
    /// Maps a key to its action.
    ///
    /// `1`/`2` select the marker presets, `3`-`9` select palette stickers,
    /// `T` starts custom glyph entry, `Z`/`Y` walk the history, `E` clears,
    /// `S` exports, Escape closes the sketchpad.
    fn action_for_key(key: Key) -> Option<Action> {
        match key {
            Key::Char('1') => Some(Action::SelectThinMarker),
            Key::Char('2') => Some(Action::SelectThickMarker),
            Key::Char(c @ '3'..='9') => Some(Action::SelectSticker(c as usize - '3' as usize)),
            Key::Char('t') | Key::Char('T') => Some(Action::EnterGlyphEntry),
            Key::Char('z') | Key::Char('Z') => Some(Action::Undo),
            Key::Char('y') | Key::Char('Y') => Some(Action::Redo),
            Key::Char('e') | Key::Char('E') => Some(Action::ClearCanvas),
            Key::Char('s') | Key::Char('S') => Some(Action::Export),
            Key::Escape => Some(Action::Exit),
            _ => None,
        }
    }

    /// Processes a key press event.
    ///
    /// While typing a custom glyph, printable keys feed the entry buffer and
    /// only Return/Backspace/Escape act specially; otherwise keys map to
    /// [`Action`]s.
    pub fn on_key_press(&mut self, key: Key) {
        if self.in_glyph_entry() {
            self.handle_glyph_entry_key(key);
            return;
        }

        if let Some(action) = Self::action_for_key(key) {
            self.handle_action(action);
        }
    }

    /// Handle an action triggered by a key.
    pub(super) fn handle_action(&mut self, action: Action) {
        debug!("Handling action {:?}", action);
        match action {
            Action::SelectThinMarker => {
                self.select_tool(Tool::Marker {
                    width: self.thin_width,
                });
            }
            Action::SelectThickMarker => {
                self.select_tool(Tool::Marker {
                    width: self.thick_width,
                });
            }
            Action::SelectSticker(index) => {
                if let Some((glyph, size)) = self.palette.get(index).cloned() {
                    self.select_tool(Tool::Sticker { glyph, size });
                }
            }
            Action::EnterGlyphEntry => {
                if matches!(self.state, PointerState::Idle) {
                    self.state = PointerState::GlyphEntry {
                        buffer: String::new(),
                    };
                    self.needs_redraw = true;
                }
            }
            Action::Undo => {
                if self.can_mutate_history() && self.history.undo() {
                    self.needs_redraw = true;
                }
            }
            Action::Redo => {
                if self.can_mutate_history() && self.history.redo() {
                    self.needs_redraw = true;
                }
            }
            Action::ClearCanvas => {
                if self.can_mutate_history() {
                    self.history.clear();
                    self.needs_redraw = true;
                }
            }
            Action::Export => {
                self.request_export();
            }
            Action::Exit => {
                if matches!(self.state, PointerState::Drawing) {
                    // End the stroke; a second Escape closes the sketchpad.
                    self.state = PointerState::Idle;
                    self.needs_redraw = true;
                } else {
                    self.should_exit = true;
                }
            }
        }
    }

    /// Selects a tool and rebuilds the ghost at the cursor.
    ///
    /// This is a reposition-only change: no history mutation occurs, but a
    /// redraw is signalled so the new ghost appears.
    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
        let (x, y) = self.cursor;
        self.ghost = Some(self.tool.ghost_at(x, y));
        self.needs_redraw = true;
    }

    /// Applies a custom sticker glyph, rejecting empty or whitespace-only
    /// input.
    ///
    /// Rejection is silent beyond a log line: no tool change, no ghost
    /// change, no redraw. Returns `true` when the tool changed.
    pub fn select_custom_sticker(&mut self, glyph: &str) -> bool {
        let trimmed = glyph.trim();
        if trimmed.is_empty() {
            warn!("Rejecting empty custom sticker glyph");
            return false;
        }

        self.select_tool(Tool::Sticker {
            glyph: trimmed.to_string(),
            size: self.sticker_size,
        });
        true
    }

    fn handle_glyph_entry_key(&mut self, key: Key) {
        let PointerState::GlyphEntry { buffer } = &mut self.state else {
            return;
        };

        match key {
            Key::Char(c) => {
                buffer.push(c);
                self.needs_redraw = true;
            }
            Key::Backspace => {
                buffer.pop();
                self.needs_redraw = true;
            }
            Key::Return => {
                let entry = buffer.clone();
                self.state = PointerState::Idle;
                // Empty or whitespace-only entries fall through as a no-op.
                self.select_custom_sticker(&entry);
                self.needs_redraw = true;
            }
            Key::Escape => {
                self.state = PointerState::Idle;
                self.needs_redraw = true;
            }
            Key::Unknown => {}
        }
    }

    /// History commands are ignored mid-stroke: the active stroke is the
    /// last committed drawable, and mutating the log under it would corrupt
    /// the append target.
    fn can_mutate_history(&self) -> bool {
        !matches!(self.state, PointerState::Drawing)
    }
}
