//! Centralized theme system for the portfolio page.
//!
//! This module provides:
//! - `palette` — Light and dark color palettes, swapped page-wide
//! - `styles` — Semantic style builder functions
//! - `icons` — Glyph constants with ASCII fallbacks

pub mod icons;
pub mod palette;
pub mod styles;
