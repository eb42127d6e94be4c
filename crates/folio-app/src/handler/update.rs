//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::AppState;

use super::{handle_key, handle_pointer, UpdateResult};

/// Process a message and update state.
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.should_quit = true;
            UpdateResult::none()
        }

        Message::Key(key) => handle_key(state, key),

        Message::Pointer(pointer) => handle_pointer(state, pointer),

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        Message::Resize { width, height } => {
            state.resize(width, height);
            UpdateResult::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use crate::state::TICK_MS;
    use folio_core::ThemeMode;

    fn state() -> AppState {
        AppState::with_seed(80, 24, ThemeMode::Dark, 1)
    }

    #[test]
    fn test_quit_message_sets_flag() {
        let mut s = state();
        update(&mut s, Message::Quit);
        assert!(s.should_quit);
    }

    #[test]
    fn test_resize_message_updates_viewport() {
        let mut s = state();
        update(&mut s, Message::Resize {
            width: 100,
            height: 30,
        });
        assert_eq!((s.width, s.height), (100, 30));
        assert_eq!(s.rain.lane_count(), 50);
    }

    #[test]
    fn test_tick_message_drives_animations() {
        let mut s = state();
        // One tick covers the first boot-log character (typed at t=0)
        update(&mut s, Message::Tick);
        assert_eq!(s.boot_log.display(), ">");
        // 100ms per char = one character every two 50ms ticks
        update(&mut s, Message::Tick);
        assert_eq!(s.boot_log.display(), "> ");
        assert_eq!(TICK_MS, 50);
    }

    #[test]
    fn test_key_messages_flow_through() {
        let mut s = state();
        let result = update(&mut s, Message::Key(InputKey::Char('t')));
        assert!(result.action.is_some());
    }
}
