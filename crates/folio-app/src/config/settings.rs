//! Settings parser for folio/config.toml

use folio_core::prelude::*;
use folio_core::ThemeMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.toml";
const FOLIO_DIR: &str = "folio";

/// Persisted user preferences.
///
/// The theme key is the page's single piece of durable state. It is absent
/// on first run and only ever written by an explicit theme toggle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Saved theme preference; `None` falls back to the environment hint.
    pub theme: Option<ThemeMode>,
    /// Force ASCII-safe icon glyphs.
    pub ascii_icons: bool,
}

/// Default location: `<config-dir>/folio/config.toml`.
pub fn default_settings_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(FOLIO_DIR).join(CONFIG_FILENAME)
}

/// Load settings, falling back to defaults on a missing or unreadable file.
///
/// Never writes: a first visit must leave no trace until the user toggles.
pub fn load_settings(path: &Path) -> Settings {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(_) => return Settings::default(),
    };
    match toml::from_str(&raw) {
        Ok(settings) => settings,
        Err(e) => {
            warn!("Ignoring invalid config at {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

/// Persist settings, creating the parent directory if needed.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let raw = toml::to_string_pretty(settings)
        .map_err(|e| Error::config(format!("failed to serialize settings: {e}")))?;
    std::fs::write(path, raw)?;
    Ok(())
}
