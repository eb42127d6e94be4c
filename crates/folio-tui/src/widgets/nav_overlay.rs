//! Navigation menu overlay.
//!
//! Rendered centered over the page when the nav is open. Lists the section
//! links with the current selection highlighted.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Widget},
};

use folio_core::NavState;

use crate::theme::icons::IconSet;
use crate::theme::{palette::Palette, styles};

pub struct NavOverlay<'a> {
    nav: &'a NavState,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> NavOverlay<'a> {
    pub fn new(nav: &'a NavState, palette: &'a Palette, icons: IconSet) -> Self {
        Self {
            nav,
            palette,
            icons,
        }
    }

    /// Centered rect sized to the link list, clamped to the frame.
    pub fn overlay_area(nav: &NavState, frame: Rect) -> Rect {
        let longest = nav
            .links()
            .iter()
            .map(|link| link.len() as u16)
            .max()
            .unwrap_or(0);
        let width = (longest + 8).min(frame.width);
        let height = (nav.links().len() as u16 + 2).min(frame.height);
        let x = frame.x + (frame.width.saturating_sub(width)) / 2;
        let y = frame.y + (frame.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width, height)
    }
}

impl Widget for NavOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let block = styles::overlay_block(self.palette).title(" Menu ");
        let inner = block.inner(area);
        block.render(area, buf);

        for (idx, link) in self.nav.links().iter().enumerate() {
            let row = inner.y + idx as u16;
            if row >= inner.bottom() {
                break;
            }
            let selected = idx == self.nav.selected();
            let marker = if selected {
                self.icons.chevron_right()
            } else {
                " "
            };
            let style = if selected {
                styles::accent_bold(self.palette)
            } else {
                styles::text_secondary(self.palette)
            };
            let line = Line::from(vec![
                Span::styled(format!(" {marker} "), styles::accent(self.palette)),
                Span::styled(*link, style),
            ]);
            buf.set_line(inner.x, row, &line, inner.width);
        }
    }
}
