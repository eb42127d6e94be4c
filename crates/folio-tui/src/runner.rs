//! Main TUI event loop.
//!
//! Classic TEA runner: draw the current state, poll for one message,
//! update, execute any requested side effect, repeat until quit.

use std::path::Path;

use folio_app::{initial_state, save_settings, update, AppState, Settings, UpdateAction};
use folio_core::prelude::*;

use crate::event;
use crate::render;
use crate::terminal;
use crate::theme::icons::{IconMode, IconSet};

/// Run the portfolio UI until the user quits.
pub fn run(mut settings: Settings, settings_path: &Path) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = ratatui::init();
    let setup = terminal::enable_mouse();

    let result = setup.and_then(|()| {
        let size = term
            .size()
            .map_err(|e| Error::TerminalInit(e.to_string()))?;
        let mut state = initial_state(size.width, size.height, &settings);
        let icons = IconSet::new(if settings.ascii_icons {
            IconMode::Ascii
        } else {
            IconMode::Unicode
        });
        info!("starting UI at {}x{}", size.width, size.height);
        run_loop(&mut term, &mut state, &mut settings, settings_path, icons)
    });

    terminal::disable_mouse();
    ratatui::restore();
    result
}

fn run_loop(
    term: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    settings: &mut Settings,
    settings_path: &Path,
    icons: IconSet,
) -> Result<()> {
    loop {
        term.draw(|frame| render::render(frame, state, icons))
            .map_err(|e| Error::terminal(e.to_string()))?;

        if let Some(message) = event::poll()? {
            let result = update(state, message);
            if let Some(action) = result.action {
                execute_action(action, settings, settings_path);
            }
        }

        if state.should_quit {
            info!("quit requested");
            return Ok(());
        }
    }
}

/// Execute a side effect requested by the update function.
fn execute_action(action: UpdateAction, settings: &mut Settings, settings_path: &Path) {
    match action {
        UpdateAction::PersistTheme(mode) => {
            settings.theme = Some(mode);
            if let Err(e) = save_settings(settings_path, settings) {
                // Losing the preference is not fatal; the session keeps
                // the toggled theme either way
                warn!("failed to persist theme preference: {e}");
            }
        }
    }
}
