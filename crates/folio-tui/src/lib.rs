//! # folio-tui - Terminal UI for folio
//!
//! The ratatui-based rendering layer. It draws the page described by
//! folio-app's state, polls terminal events into messages, and owns the
//! main loop. Everything visual (palettes, icons, widgets) lives here;
//! nothing in this crate mutates state outside the update function.

pub mod event;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
