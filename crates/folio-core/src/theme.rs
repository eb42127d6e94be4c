//! Theme preference domain type.
//!
//! The page applies exactly one mode at a time. The active mode is the
//! single source of truth: toggling derives the next mode from the mode
//! currently applied, never from shadow state.

use serde::{Deserialize, Serialize};

/// Page-wide visual mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// The mode a toggle switches to.
    pub fn opposite(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

/// Resolve the mode to apply at startup.
///
/// A persisted preference wins; otherwise fall back to the environment's
/// color-scheme hint. Nothing is persisted here — the preference is only
/// written when the user explicitly toggles.
pub fn initial_mode(saved: Option<ThemeMode>, env_prefers_dark: bool) -> ThemeMode {
    saved.unwrap_or(if env_prefers_dark {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    })
}

/// Best-effort dark-background detection for terminals.
///
/// Honors the `COLORFGBG` convention (`"15;0"` means white-on-black).
/// Terminals that don't set it are assumed dark, the common case.
pub fn env_prefers_dark(colorfgbg: Option<&str>) -> bool {
    let Some(value) = colorfgbg else {
        return true;
    };
    match value.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()) {
        Some(bg) => bg < 8,
        None => true,
    }
}
