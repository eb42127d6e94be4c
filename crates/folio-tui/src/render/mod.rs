//! Frame composition.
//!
//! Layering, bottom to top: background fill, binary rain, the visible
//! window of the page, the fixed header, and the nav overlay when open.
//! The page is drawn off-screen in page coordinates and blitted through
//! the scroll offset; untouched page cells stay transparent so the rain
//! shows through between sections.

use ratatui::{
    buffer::{Buffer, Cell},
    layout::Rect,
    style::Style,
    widgets::{Block, Widget},
    Frame,
};

use folio_app::{AppState, HEADER_ROWS};

use crate::theme::icons::IconSet;
use crate::theme::palette;
use crate::widgets::{MainHeader, NavOverlay, PageView, RainBackdrop};

/// Render the main UI into a frame.
pub fn render(frame: &mut Frame, state: &AppState, icons: IconSet) {
    let area = frame.area();
    render_app(state, icons, area, frame.buffer_mut());
}

/// Buffer-level renderer, split out so tests can draw without a terminal.
pub fn render_app(state: &AppState, icons: IconSet, area: Rect, buf: &mut Buffer) {
    let p = palette::for_mode(state.theme);

    Block::default()
        .style(Style::default().bg(p.bg))
        .render(area, buf);

    let header_area = Rect::new(area.x, area.y, area.width, HEADER_ROWS.min(area.height));
    let body = Rect::new(
        area.x,
        area.y + header_area.height,
        area.width,
        area.height.saturating_sub(header_area.height),
    );

    RainBackdrop::new(&state.rain, p).render(body, buf);
    blit_page(state, icons, body, buf);

    MainHeader::new(state, p, icons).render(header_area, buf);

    if state.nav.is_open() {
        let overlay = NavOverlay::overlay_area(&state.nav, area);
        NavOverlay::new(&state.nav, p, icons).render(overlay, buf);
    }
}

/// Copy the visible rows of the page buffer into the frame body.
fn blit_page(state: &AppState, icons: IconSet, body: Rect, buf: &mut Buffer) {
    let p = palette::for_mode(state.theme);
    let view = PageView::new(state, p, icons);
    let mut page = view.page_buffer();
    view.render(&mut page);

    let offset = state.scroll.offset();
    for row in 0..body.height {
        let Some(src_y) = offset.checked_add(row) else {
            break;
        };
        if src_y >= page.area.height {
            break;
        }
        for x in 0..body.width.min(page.area.width) {
            let cell = &page[(x, src_y)];
            if *cell == Cell::EMPTY {
                continue;
            }
            buf[(body.x + x, body.y + row)] = cell.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::icons::IconMode;
    use folio_core::ThemeMode;

    fn draw(state: &AppState) -> Vec<String> {
        let area = Rect::new(0, 0, state.width, state.height);
        let mut buf = Buffer::empty(area);
        render_app(state, IconSet::new(IconMode::Ascii), area, &mut buf);
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect()
            })
            .collect()
    }

    fn state() -> AppState {
        AppState::with_seed(80, 24, ThemeMode::Dark, 21)
    }

    #[test]
    fn test_header_is_pinned_to_the_top() {
        let s = state();
        let rows = draw(&s);
        assert!(rows[1].contains("ada.dev"));
    }

    #[test]
    fn test_rain_shows_through_empty_page_cells() {
        let mut s = state();
        for _ in 0..5 {
            s.tick();
        }
        let rows = draw(&s);
        let glyphs: usize = rows[HEADER_ROWS as usize..]
            .iter()
            .map(|r| r.matches(['0', '1']).count())
            .sum();
        assert!(glyphs > 0, "no rain glyphs visible");
    }

    #[test]
    fn test_scroll_offset_moves_page_content() {
        let mut s = state();
        for _ in 0..20 {
            s.tick();
        }
        let at_top = draw(&s);
        assert!(at_top.iter().any(|r| r.contains("boot.log")));

        s.scroll.to_bottom();
        for _ in 0..100 {
            s.tick();
        }
        let at_bottom = draw(&s);
        assert!(!at_bottom.iter().any(|r| r.contains("boot.log")));
        assert!(at_bottom.iter().any(|r| r.contains("ada@example.dev")));
    }

    #[test]
    fn test_nav_overlay_renders_only_when_open() {
        let mut s = state();
        let closed = draw(&s);
        assert!(!closed.iter().any(|r| r.contains("Menu")));

        s.nav.toggle();
        let open = draw(&s);
        assert!(open.iter().any(|r| r.contains("Menu")));
        assert!(open.iter().any(|r| r.contains("Testimonials")));
    }
}
