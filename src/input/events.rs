//! Generic input event types for cross-backend compatibility.

/// Generic key representation for cross-backend compatibility.
///
/// The windowing loop maps its native key codes (and decoded unicode
/// characters) to these values for unified input handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Regular character key (a-z, 0-9, symbols, decoded unicode)
    Char(char),
    /// Escape key
    Escape,
    /// Return/Enter key
    Return,
    /// Backspace key
    Backspace,
    /// Unmapped or unrecognized key
    Unknown,
}

/// Pointer button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Left button (primary drawing button)
    Left,
    /// Right button (currently unused)
    Right,
    /// Middle button (currently unused)
    Middle,
}
