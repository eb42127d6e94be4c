//! folio - an animated portfolio page for the terminal
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use clap::Parser;
use folio_app::{default_settings_path, load_settings};
use folio_core::prelude::*;
use folio_core::ThemeMode;

/// folio - an animated portfolio page for the terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "An animated portfolio page for the terminal", long_about = None)]
struct Args {
    /// Start in this theme for the session without persisting it (light|dark)
    #[arg(long, value_name = "MODE")]
    theme: Option<String>,

    /// Use ASCII-safe icon glyphs
    #[arg(long)]
    ascii: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since the TUI owns stdout)
    folio_core::logging::init()?;

    let settings_path = default_settings_path();
    let mut settings = load_settings(&settings_path);

    if args.ascii {
        settings.ascii_icons = true;
    }
    if let Some(raw) = args.theme.as_deref() {
        match ThemeMode::parse(raw) {
            Some(mode) => settings.theme = Some(mode),
            None => {
                eprintln!("Unknown theme {raw:?} (expected \"light\" or \"dark\")");
                std::process::exit(2);
            }
        }
    }

    info!("folio starting");
    info!("Settings path: {}", settings_path.display());

    let result = folio_tui::run(settings, &settings_path);

    if let Err(ref e) = result {
        error!("Application error: {:?}", e);
    }

    info!("folio exiting");
    result
}
