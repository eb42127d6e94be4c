//! Navigation menu state.
//!
//! The menu holds a list of section links. Its icon glyph is derived from
//! the open flag, never tracked separately, so the two can't drift apart.

/// Open/closed state of the navigation menu.
#[derive(Debug, Clone)]
pub struct NavState {
    links: Vec<&'static str>,
    open: bool,
    selected: usize,
}

/// Which glyph the nav trigger currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    /// Hamburger glyph, shown while the menu is closed.
    Menu,
    /// Close glyph, shown while the menu is open.
    Close,
}

impl NavState {
    pub fn new(links: Vec<&'static str>) -> Self {
        Self {
            links,
            open: false,
            selected: 0,
        }
    }

    /// The feature only activates when there is something to navigate to.
    pub fn is_enabled(&self) -> bool {
        !self.links.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn links(&self) -> &[&'static str] {
        &self.links
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn icon(&self) -> NavIcon {
        if self.open {
            NavIcon::Close
        } else {
            NavIcon::Menu
        }
    }

    pub fn toggle(&mut self) {
        if self.is_enabled() {
            self.open = !self.open;
        }
    }

    /// A link was activated: the menu always closes and the selection is
    /// reported to the caller. One-way — activating a link never opens it.
    pub fn activate_selected(&mut self) -> Option<usize> {
        if !self.open {
            return None;
        }
        self.open = false;
        Some(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.links.is_empty() {
            self.selected = (self.selected + 1) % self.links.len();
        }
    }

    pub fn select_prev(&mut self) {
        if !self.links.is_empty() {
            self.selected = (self.selected + self.links.len() - 1) % self.links.len();
        }
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}
