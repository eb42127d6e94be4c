//! Keyboard handling.
//!
//! When the nav menu is open it captures navigation keys; everything else
//! falls through to page-level bindings.

use crate::input_key::InputKey;
use crate::state::AppState;

use super::{UpdateAction, UpdateResult};

pub fn handle_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    if state.nav.is_open() {
        return handle_menu_key(state, key);
    }

    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => {
            state.should_quit = true;
        }
        InputKey::Char('t') => {
            let mode = state.toggle_theme();
            return UpdateResult::action(UpdateAction::PersistTheme(mode));
        }
        InputKey::Char('m') => state.nav.toggle(),

        // Page scrolling
        InputKey::Up | InputKey::Char('k') => state.scroll.scroll_by(-1),
        InputKey::Down | InputKey::Char('j') => state.scroll.scroll_by(1),
        InputKey::PageUp => state.scroll.scroll_by(-(state.view_rows() as i32)),
        InputKey::PageDown => state.scroll.scroll_by(state.view_rows() as i32),
        InputKey::Home | InputKey::Char('g') => state.scroll.to_top(),
        InputKey::End | InputKey::Char('G') => state.scroll.to_bottom(),

        // Accordion
        InputKey::Tab => state.accordion.select_next(),
        InputKey::BackTab => state.accordion.select_prev(),
        InputKey::Enter => {
            state.accordion.toggle_selected();
            state.relayout();
        }

        _ => {}
    }
    UpdateResult::none()
}

fn handle_menu_key(state: &mut AppState, key: InputKey) -> UpdateResult {
    match key {
        InputKey::Up | InputKey::Char('k') => state.nav.select_prev(),
        InputKey::Down | InputKey::Char('j') => state.nav.select_next(),
        InputKey::Esc | InputKey::Char('m') => state.nav.close(),
        InputKey::Enter => {
            if let Some(index) = state.nav.activate_selected() {
                let link = state.nav.links()[index];
                if let Some(row) = state.layout.scroll_target(link) {
                    state.scroll.ease_to(row);
                }
            }
        }
        InputKey::Char('q') | InputKey::CharCtrl('c') => state.should_quit = true,
        _ => {}
    }
    UpdateResult::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{NavIcon, ThemeMode};

    fn state() -> AppState {
        AppState::with_seed(80, 24, ThemeMode::Light, 2)
    }

    #[test]
    fn test_theme_toggle_requests_persistence() {
        let mut s = state();
        let result = handle_key(&mut s, InputKey::Char('t'));
        assert_eq!(s.theme, ThemeMode::Dark);
        assert_eq!(
            result.action,
            Some(UpdateAction::PersistTheme(ThemeMode::Dark))
        );
    }

    #[test]
    fn test_theme_toggle_twice_round_trips() {
        let mut s = state();
        handle_key(&mut s, InputKey::Char('t'));
        let result = handle_key(&mut s, InputKey::Char('t'));
        assert_eq!(s.theme, ThemeMode::Light);
        assert_eq!(
            result.action,
            Some(UpdateAction::PersistTheme(ThemeMode::Light))
        );
    }

    #[test]
    fn test_menu_captures_keys_while_open() {
        let mut s = state();
        handle_key(&mut s, InputKey::Char('m'));
        assert!(s.nav.is_open());
        assert_eq!(s.nav.icon(), NavIcon::Close);

        // Down selects, not scrolls
        let before = s.scroll.offset();
        handle_key(&mut s, InputKey::Down);
        assert_eq!(s.scroll.offset(), before);
        assert_eq!(s.nav.selected(), 1);
    }

    #[test]
    fn test_link_activation_scrolls_and_closes() {
        let mut s = state();
        handle_key(&mut s, InputKey::Char('m'));
        handle_key(&mut s, InputKey::Down); // "Skills"
        handle_key(&mut s, InputKey::Enter);
        assert!(!s.nav.is_open());
        assert_eq!(s.nav.icon(), NavIcon::Menu);
        assert!(s.scroll.is_easing());
    }

    #[test]
    fn test_escape_closes_menu_without_scrolling() {
        let mut s = state();
        handle_key(&mut s, InputKey::Char('m'));
        handle_key(&mut s, InputKey::Esc);
        assert!(!s.nav.is_open());
        assert!(!s.scroll.is_easing());
    }

    #[test]
    fn test_enter_toggles_accordion_and_relayouts() {
        let mut s = state();
        let collapsed_height = s.layout.total_height;
        handle_key(&mut s, InputKey::Enter);
        assert!(s.accordion.is_expanded(0));
        assert!(s.layout.total_height > collapsed_height);

        handle_key(&mut s, InputKey::Tab);
        handle_key(&mut s, InputKey::Enter);
        assert!(!s.accordion.is_expanded(0));
        assert!(s.accordion.is_expanded(1));
    }

    #[test]
    fn test_quit_keys() {
        let mut s = state();
        handle_key(&mut s, InputKey::Char('q'));
        assert!(s.should_quit);

        let mut s = state();
        handle_key(&mut s, InputKey::CharCtrl('c'));
        assert!(s.should_quit);
    }

    #[test]
    fn test_scroll_keys_move_page() {
        let mut s = state();
        handle_key(&mut s, InputKey::Down);
        assert_eq!(s.scroll.offset(), 1);
        handle_key(&mut s, InputKey::Up);
        assert_eq!(s.scroll.offset(), 0);
        handle_key(&mut s, InputKey::End);
        assert!(s.scroll.offset() > 0);
        handle_key(&mut s, InputKey::Home);
        assert_eq!(s.scroll.offset(), 0);
    }
}
