//! Fixed header bar: site title, theme indicator, nav trigger, key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use folio_app::AppState;
use folio_core::{NavIcon, ThemeMode};

use crate::theme::icons::IconSet;
use crate::theme::{palette::Palette, styles};

pub struct MainHeader<'a> {
    state: &'a AppState,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> MainHeader<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette, icons: IconSet) -> Self {
        Self {
            state,
            palette,
            icons,
        }
    }

    /// The theme slot shows exactly one of the two glyphs: sun in light
    /// mode, moon in dark mode.
    fn theme_glyph(&self) -> &'static str {
        match self.state.theme {
            ThemeMode::Light => self.icons.sun(),
            ThemeMode::Dark => self.icons.moon(),
        }
    }

    fn nav_glyph(&self) -> &'static str {
        match self.state.nav.icon() {
            NavIcon::Menu => self.icons.menu(),
            NavIcon::Close => self.icons.close(),
        }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.palette, false);
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::styled("ada.dev", styles::accent_bold(self.palette)),
            Span::styled("  portfolio", styles::text_muted(self.palette)),
        ]);
        buf.set_line(inner.x + 1, inner.y, &left, inner.width.saturating_sub(2));

        let right = Line::from(vec![
            Span::styled("t ", styles::text_muted(self.palette)),
            Span::styled(self.theme_glyph(), styles::accent(self.palette)),
            Span::styled("   m ", styles::text_muted(self.palette)),
            Span::styled(self.nav_glyph(), styles::accent(self.palette)),
            Span::styled("   q quit", styles::text_muted(self.palette)),
        ]);
        let right_width = right.width() as u16;
        if inner.width > right_width + 1 {
            buf.set_line(
                inner.x + inner.width - right_width - 1,
                inner.y,
                &right,
                right_width,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::icons::IconMode;
    use crate::theme::palette;
    use folio_app::AppState;

    fn render_header(theme: ThemeMode, nav_open: bool) -> String {
        let mut state = AppState::with_seed(60, 24, theme, 1);
        if nav_open {
            state.nav.toggle();
        }
        let area = Rect::new(0, 0, 60, 3);
        let mut buf = Buffer::empty(area);
        let icons = IconSet::new(IconMode::Unicode);
        MainHeader::new(&state, palette::for_mode(theme), icons).render(area, &mut buf);
        area.positions().map(|p| buf[(p.x, p.y)].symbol().to_string()).collect()
    }

    #[test]
    fn test_dark_mode_shows_moon_not_sun() {
        let content = render_header(ThemeMode::Dark, false);
        let icons = IconSet::new(IconMode::Unicode);
        assert!(content.contains(icons.moon()));
        assert!(!content.contains(icons.sun()));
    }

    #[test]
    fn test_light_mode_shows_sun_not_moon() {
        let content = render_header(ThemeMode::Light, false);
        let icons = IconSet::new(IconMode::Unicode);
        assert!(content.contains(icons.sun()));
        assert!(!content.contains(icons.moon()));
    }

    #[test]
    fn test_nav_glyph_follows_menu_state() {
        let icons = IconSet::new(IconMode::Unicode);
        let closed = render_header(ThemeMode::Dark, false);
        assert!(closed.contains(icons.menu()));
        let open = render_header(ThemeMode::Dark, true);
        assert!(open.contains(icons.close()));
        assert!(!open.contains(icons.menu()));
    }
}
