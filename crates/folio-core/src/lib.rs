//! # folio-core - Domain Types and Animation State Machines
//!
//! Foundation crate for folio. Every interactive feature of the portfolio
//! page lives here as a pure, independently owned state machine, advanced
//! by elapsed milliseconds and fully testable without a terminal.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing, rand).
//!
//! ## Public API
//!
//! ### Theme (`theme`)
//! - [`ThemeMode`] - Light/dark preference with `opposite()`
//! - [`initial_mode()`] - Saved preference with environment fallback
//!
//! ### Features
//! - [`NavState`] - Menu open/close with derived icon glyph (`nav`)
//! - [`RevealState`] - One-shot scroll-triggered reveal (`reveal`)
//! - [`TiltState`] - Pointer-driven tilt transforms (`tilt`)
//! - [`RainField`] - Binary rain ambient animation (`rain`)
//! - [`LogTypewriter`], [`IntroTypewriter`], [`CodeTypewriter`] (`typewriter`)
//! - [`AccordionState`] - At most one panel expanded (`accordion`)
//!
//! ### Error Handling (`error`)
//! - [`Error`] / [`Result`] - Custom error enum and alias
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use folio_core::prelude::*;
//! ```

pub mod accordion;
pub mod content;
pub mod error;
pub mod logging;
pub mod nav;
pub mod rain;
pub mod reveal;
pub mod theme;
pub mod tilt;
pub mod typewriter;

/// Prelude for common imports used throughout all folio crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use accordion::{AccordionPanel, AccordionState};
pub use error::{Error, Result, ResultExt};
pub use nav::{NavIcon, NavState};
pub use rain::{RainCell, RainField, GLYPH_WIDTH};
pub use reveal::RevealState;
pub use theme::{env_prefers_dark, initial_mode, ThemeMode};
pub use tilt::{TiltProfile, TiltState, TiltTransform};
pub use typewriter::{CodePhase, CodeTypewriter, IntroStep, IntroTypewriter, LogTypewriter};
