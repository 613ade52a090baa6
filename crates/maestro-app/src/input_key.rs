//! Terminal-independent key input.
//!
//! The TUI converts crossterm key events into [`InputKey`] so that the
//! update function and its tests never depend on crossterm.

/// A key press as seen by the update function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKey {
    /// Printable character without modifiers (or with Shift)
    Char(char),
    /// Character with Ctrl held (Ctrl+c, ...)
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Backspace,
}

impl InputKey {
    /// Whether this key ends the session from any view.
    pub fn is_force_quit(&self) -> bool {
        matches!(self, InputKey::CharCtrl('c'))
    }
}
