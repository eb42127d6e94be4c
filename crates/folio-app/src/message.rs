//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;

/// Pointer event kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    /// Pointer moved (hover, no buttons considered)
    Moved,
    /// Left button pressed
    LeftDown,
}

/// A pointer event in terminal cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerInput {
    pub column: u16,
    pub row: u16,
    pub kind: PointerKind,
}

/// All possible messages/actions in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Pointer event from terminal (hover tilt, header clicks)
    Pointer(PointerInput),

    /// Tick event for periodic updates (drives every animation)
    Tick,

    /// Terminal was resized
    Resize { width: u16, height: u16 },

    /// Quit the application
    Quit,
}
