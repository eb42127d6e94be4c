//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use folio_app::{InputKey, Message, PointerInput, PointerKind};
use folio_core::prelude::*;
use std::time::Duration;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None, // Unsupported keys ignored
    }
}

/// Convert crossterm MouseEvent to a pointer message
pub fn mouse_event_to_pointer(mouse: crossterm::event::MouseEvent) -> Option<PointerInput> {
    let kind = match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => PointerKind::Moved,
        MouseEventKind::Down(MouseButton::Left) => PointerKind::LeftDown,
        _ => return None,
    };
    Some(PointerInput {
        column: mouse.column,
        row: mouse.row,
        kind,
    })
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    // Poll with 50ms timeout; the timeout doubles as the animation tick
    if event::poll(Duration::from_millis(50))? {
        let event = event::read()?;

        match event {
            Event::Key(key) => {
                if key.kind == event::KeyEventKind::Press {
                    Ok(key_event_to_input(key).map(Message::Key))
                } else {
                    Ok(None)
                }
            }
            Event::Mouse(mouse) => Ok(mouse_event_to_pointer(mouse).map(Message::Pointer)),
            Event::Resize(width, height) => Ok(Some(Message::Resize { width, height })),
            _ => Ok(None),
        }
    } else {
        // Generate tick on timeout for animations
        Ok(Some(Message::Tick))
    }
}
