//! Terminal-agnostic input key representation.
//!
//! Keeps the app crate free of crossterm types; the TUI layer converts.

/// A normalized key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    Char(char),
    CharCtrl(char),
    Enter,
    Esc,
    Tab,
    BackTab,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
}
