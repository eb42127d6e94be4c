//! Terminal setup and restoration

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use folio_core::prelude::*;

/// Install a panic hook that restores the terminal
pub fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(std::io::stdout(), DisableMouseCapture);
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Enable pointer reporting; hover tilt and accordion clicks need it.
pub fn enable_mouse() -> Result<()> {
    execute!(std::io::stdout(), EnableMouseCapture)?;
    Ok(())
}

/// Disable pointer reporting. Failures during shutdown are ignored.
pub fn disable_mouse() {
    let _ = execute!(std::io::stdout(), DisableMouseCapture);
}
