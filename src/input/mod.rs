//! Input handling and tool state machine.
//!
//! This module translates pointer and keyboard events into drawing actions.
//! It maintains the active tool, the preview ghost, the command history, and
//! the pointer state machine (idle, drawing, glyph entry).

pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use events::{Key, PointerButton};
pub use state::{Action, PointerState, SketchState};
pub use tool::Tool;
