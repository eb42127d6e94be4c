//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode` — glyphs that work in most terminals
//! - `IconMode::Ascii` — plain ASCII fallbacks for constrained terminals

/// How icons should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Unicode,
    Ascii,
}

/// Runtime icon resolver.
///
/// Created from `IconMode`, returns the appropriate icon string for each
/// icon slot based on the configured mode.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Theme indicator while light mode is active.
    pub fn sun(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{2600}", // ☀
            IconMode::Ascii => "(sun)",
        }
    }

    /// Theme indicator while dark mode is active.
    pub fn moon(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{263d}", // ☽
            IconMode::Ascii => "(moon)",
        }
    }

    /// Nav trigger while the menu is closed.
    pub fn menu(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{2261}", // ≡
            IconMode::Ascii => "=",
        }
    }

    /// Nav trigger while the menu is open.
    pub fn close(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{2717}", // ✗
            IconMode::Ascii => "x",
        }
    }

    pub fn chevron_right(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{203a}", // ›
            IconMode::Ascii => ">",
        }
    }

    pub fn chevron_down(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{2304}", // ⌄
            IconMode::Ascii => "v",
        }
    }

    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{25cf}", // ●
            IconMode::Ascii => "*",
        }
    }

    pub fn prompt(&self) -> &'static str {
        match self.mode {
            IconMode::Unicode => "\u{276f}", // ❯
            IconMode::Ascii => ">",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_icons_are_non_empty() {
        for mode in [IconMode::Unicode, IconMode::Ascii] {
            let icons = IconSet::new(mode);
            assert!(!icons.sun().is_empty());
            assert!(!icons.moon().is_empty());
            assert!(!icons.menu().is_empty());
            assert!(!icons.close().is_empty());
            assert!(!icons.chevron_right().is_empty());
            assert!(!icons.chevron_down().is_empty());
            assert!(!icons.dot().is_empty());
            assert!(!icons.prompt().is_empty());
        }
    }

    #[test]
    fn test_sun_and_moon_are_mutually_exclusive_glyphs() {
        let icons = IconSet::new(IconMode::Unicode);
        assert_ne!(icons.sun(), icons.moon());
    }

    #[test]
    fn test_menu_and_close_differ() {
        for mode in [IconMode::Unicode, IconMode::Ascii] {
            let icons = IconSet::new(mode);
            assert_ne!(icons.menu(), icons.close());
        }
    }

    #[test]
    fn test_ascii_mode_is_ascii() {
        let icons = IconSet::new(IconMode::Ascii);
        for glyph in [
            icons.sun(),
            icons.moon(),
            icons.menu(),
            icons.close(),
            icons.chevron_right(),
            icons.dot(),
        ] {
            assert!(glyph.is_ascii());
        }
    }
}
