//! Configuration file parsing for folio
//!
//! Supports:
//! - `<config-dir>/folio/config.toml` - persisted user preferences

pub mod settings;

pub use settings::{default_settings_path, load_settings, save_settings, Settings};
