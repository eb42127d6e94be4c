//! Full-page renderer.
//!
//! Draws every section into a page-sized buffer in page coordinates; the
//! frame renderer then blits the visible window. Row positions here must
//! agree with the layout rects the pointer handler hit-tests against, so
//! interactive sections (skills, FAQ, testimonials) never shift rows for
//! a reveal in flight — they only dim.

use chrono::Datelike;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use folio_app::layout::{PageRect, Section, TITLE_H};
use folio_app::{AppState, TiltTarget};
use folio_core::{content, RevealState, TiltTransform};

use crate::theme::icons::IconSet;
use crate::theme::{palette::Palette, styles};

/// Block cursor appended to actively typing text.
const CURSOR: &str = "\u{258c}";

pub struct PageView<'a> {
    state: &'a AppState,
    palette: &'a Palette,
    icons: IconSet,
}

impl<'a> PageView<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette, icons: IconSet) -> Self {
        Self {
            state,
            palette,
            icons,
        }
    }

    /// A buffer sized to hold the whole page.
    pub fn page_buffer(&self) -> Buffer {
        Buffer::empty(Rect::new(
            0,
            0,
            self.state.width,
            self.state.layout.total_height,
        ))
    }

    pub fn render(&self, buf: &mut Buffer) {
        for &(section, rect) in self.state.layout.blocks() {
            match section {
                Section::Hero => self.render_hero(rect, buf),
                Section::Showcase => self.render_showcase(rect, buf),
                Section::BootLog => self.render_boot_log(rect, buf),
                Section::LiveCode => self.render_live_code(rect, buf),
                Section::About => self.render_about(rect, buf),
                Section::Skills => self.render_skills(rect, buf),
                Section::Projects => self.render_projects(rect, buf),
                Section::Faq => self.render_faq(rect, buf),
                Section::Testimonials => self.render_testimonials(rect, buf),
                Section::Contact => self.render_contact(rect, buf),
            }
        }
    }

    fn line(&self, buf: &mut Buffer, x: u16, y: u16, line: &Line, max_width: u16) {
        if y < buf.area.bottom() && x < buf.area.right() {
            buf.set_line(x, y, line, max_width.min(buf.area.right() - x));
        }
    }

    fn section_title(&self, buf: &mut Buffer, rect: PageRect, text: &str, style: Style) {
        let line = Line::from(vec![
            Span::styled(format!("{} ", self.icons.dot()), styles::accent(self.palette)),
            Span::styled(text.to_string(), style),
        ]);
        self.line(buf, rect.x + 1, rect.y, &line, rect.width);
    }

    /// Reveal style for a whole section; `None` while still fully hidden.
    fn reveal_of(&self, section: Section) -> Option<&RevealState> {
        self.state.section_reveals.get(&section)
    }

    // ── Hero ────────────────────────────────────────────────────

    fn render_hero(&self, rect: PageRect, buf: &mut Buffer) {
        let intro = &self.state.intro;
        let p = self.palette;
        let x = rect.x + 2;

        let typed = |text: &str, active: bool| -> String {
            let mut s = text.to_string();
            if active && !intro.is_done() {
                s.push_str(CURSOR);
            }
            s
        };

        let name_active = intro.display(1).is_empty();
        let name = typed(intro.display(0), name_active);
        self.line(buf, x, rect.y + 1, &Line::styled(name, styles::title(p)), rect.width);

        let role_active = !intro.display(1).is_empty() && intro.display(2).is_empty();
        let role = typed(intro.display(1), role_active);
        self.line(buf, x, rect.y + 2, &Line::styled(role, styles::accent(p)), rect.width);

        let desc = typed(intro.display(2), !intro.display(2).is_empty());
        self.line(
            buf,
            x,
            rect.y + 4,
            &Line::styled(desc, styles::text_secondary(p)),
            rect.width,
        );

        // Call-to-action row fades in only after the whole intro finishes
        if intro.cta_visible() {
            let cta = Line::from(vec![
                Span::styled("[ View Projects ]", styles::accent_bold(p)),
                Span::raw("  "),
                Span::styled("[ Contact Me ]", styles::accent(p)),
            ]);
            self.line(buf, x, rect.y + 6, &cta, rect.width);
        }
    }

    // ── Showcase ────────────────────────────────────────────────

    fn render_showcase(&self, rect: PageRect, buf: &mut Buffer) {
        let tilt = self.state.tilt_of(TiltTarget::Showcase);
        let active = !tilt.is_neutral();
        let title = if active {
            format!(" portrait {:.2}x ", tilt.scale)
        } else {
            " portrait ".to_string()
        };
        let inner = draw_card(buf, rect, self.palette, active, Some(&title));

        let (dx, dy) = tilt_shift(tilt);
        let art = ["  .----.  ", " ( o  o ) ", "  `----'  ", " ada reyes"];
        let cx = inner.x + inner.width.saturating_sub(10) / 2;
        for (i, row) in art.iter().enumerate() {
            let x = offset_coord(cx, dx);
            let y = offset_coord(inner.y + 1 + i as u16, dy);
            self.line(
                buf,
                x,
                y,
                &Line::styled(*row, styles::text_primary(self.palette)),
                inner.width,
            );
        }
    }

    // ── Terminal cards ──────────────────────────────────────────

    fn render_boot_log(&self, rect: PageRect, buf: &mut Buffer) {
        let inner = draw_card(buf, rect, self.palette, false, Some(" boot.log "));
        let mut text = self.state.boot_log.display().to_string();
        text.push_str(CURSOR);
        for (i, row) in text.lines().enumerate() {
            self.line(
                buf,
                inner.x + 1,
                inner.y + i as u16,
                &Line::styled(row.to_string(), styles::accent(self.palette)),
                inner.width,
            );
        }
    }

    fn render_live_code(&self, rect: PageRect, buf: &mut Buffer) {
        let inner = draw_card(buf, rect, self.palette, false, Some(" index.html "));
        let mut text = self.state.live_code.display().to_string();
        text.push_str(CURSOR);
        for (i, row) in text.lines().enumerate() {
            self.line(
                buf,
                inner.x + 1,
                inner.y + i as u16,
                &Line::styled(row.to_string(), styles::text_secondary(self.palette)),
                inner.width,
            );
        }
    }

    // ── Revealed sections ───────────────────────────────────────

    fn render_about(&self, rect: PageRect, buf: &mut Buffer) {
        let Some(reveal) = self.reveal_of(Section::About) else {
            return;
        };
        if reveal.is_hidden() {
            return;
        }
        let style = styles::revealing(self.palette, reveal.progress());
        let dy = reveal.offset_rows();

        self.section_title(buf, shifted(rect, dy), "About", style);
        for (i, row) in content::ABOUT.iter().enumerate() {
            let y = rect.y + TITLE_H + i as u16 + dy;
            if y < rect.bottom() + dy {
                self.line(buf, rect.x + 2, y, &Line::styled(*row, style), rect.width);
            }
        }
    }

    fn render_skills(&self, rect: PageRect, buf: &mut Buffer) {
        let Some(reveal) = self.reveal_of(Section::Skills) else {
            return;
        };
        if reveal.is_hidden() {
            return;
        }
        let style = styles::revealing(self.palette, reveal.progress());
        self.section_title(buf, rect, "Skills", style);

        // Hit-testable rows: no reveal offset here, dim only
        for (i, skill) in content::SKILLS.iter().enumerate() {
            let Some(&item) = self.state.layout.skill_rects.get(i) else {
                continue;
            };
            let tilt = self.state.tilt_of(TiltTarget::Skill(i));
            let active = !tilt.is_neutral();
            let inner = draw_card(buf, item, self.palette, active, None);
            let (dx, _) = tilt_shift(tilt);
            let label_style = if active {
                styles::accent_bold(self.palette)
            } else {
                style
            };
            self.line(
                buf,
                offset_coord(inner.x + 1, dx),
                inner.y,
                &Line::styled(*skill, label_style),
                inner.width,
            );
        }
    }

    fn render_projects(&self, rect: PageRect, buf: &mut Buffer) {
        let Some(reveal) = self.reveal_of(Section::Projects) else {
            return;
        };
        if reveal.is_hidden() {
            return;
        }
        let style = styles::revealing(self.palette, reveal.progress());
        let dy = reveal.offset_rows();
        self.section_title(buf, shifted(rect, dy), "Projects", style);

        for (i, (name, blurb)) in content::PROJECTS.iter().enumerate() {
            let card = PageRect {
                x: rect.x,
                y: rect.y + TITLE_H + i as u16 * 4 + dy,
                width: rect.width,
                height: 4,
            };
            let inner = draw_card(buf, card, self.palette, false, None);
            self.line(
                buf,
                inner.x + 1,
                inner.y,
                &Line::styled(*name, styles::accent_bold(self.palette)),
                inner.width,
            );
            self.line(buf, inner.x + 1, inner.y + 1, &Line::styled(*blurb, style), inner.width);
        }
    }

    fn render_faq(&self, rect: PageRect, buf: &mut Buffer) {
        let Some(reveal) = self.reveal_of(Section::Faq) else {
            return;
        };
        if reveal.is_hidden() {
            return;
        }
        let style = styles::revealing(self.palette, reveal.progress());
        self.section_title(buf, rect, "FAQ", style);

        // Row math mirrors the click handler: header per panel, shifted
        // by the expanded body above it
        let accordion = &self.state.accordion;
        let expanded = accordion.expanded();
        let expanded_body = expanded
            .map(|i| accordion.panels()[i].body_height())
            .unwrap_or(0);

        for (index, panel) in accordion.panels().iter().enumerate() {
            let shift = match expanded {
                Some(e) if e < index => expanded_body,
                _ => 0,
            };
            let row = rect.y + TITLE_H + index as u16 + shift;
            let is_open = expanded == Some(index);
            let chevron = if is_open {
                self.icons.chevron_down()
            } else {
                self.icons.chevron_right()
            };
            let header_style = if index == accordion.selected() {
                styles::accent_bold(self.palette)
            } else {
                style
            };
            let header = Line::from(vec![
                Span::styled(format!("{chevron} "), styles::accent(self.palette)),
                Span::styled(panel.header, header_style),
            ]);
            self.line(buf, rect.x + 2, row, &header, rect.width);

            if is_open {
                for (j, body_row) in panel.body.iter().enumerate() {
                    self.line(
                        buf,
                        rect.x + 4,
                        row + 1 + j as u16,
                        &Line::styled(*body_row, styles::text_secondary(self.palette)),
                        rect.width,
                    );
                }
            }
        }
    }

    fn render_testimonials(&self, rect: PageRect, buf: &mut Buffer) {
        self.section_title(buf, rect, "Testimonials", styles::title(self.palette));

        for (i, (author, quote)) in content::TESTIMONIALS.iter().enumerate() {
            let Some(reveal) = self.state.testimonial_reveals.get(i) else {
                continue;
            };
            if reveal.is_hidden() {
                continue;
            }
            let Some(&card) = self.state.layout.testimonial_rects.get(i) else {
                continue;
            };
            let tilt = self.state.tilt_of(TiltTarget::Testimonial(i));
            let active = !tilt.is_neutral();
            let inner = draw_card(buf, card, self.palette, active, None);
            let style = styles::revealing(self.palette, reveal.progress());
            let (dx, _) = tilt_shift(tilt);
            self.line(
                buf,
                offset_coord(inner.x + 1, dx),
                inner.y,
                &Line::styled(format!("\u{201c}{quote}\u{201d}"), style),
                inner.width,
            );
            self.line(
                buf,
                offset_coord(inner.x + 1, dx),
                inner.y + 2,
                &Line::styled(format!("\u{2014} {author}"), styles::accent(self.palette)),
                inner.width,
            );
        }
    }

    fn render_contact(&self, rect: PageRect, buf: &mut Buffer) {
        let Some(reveal) = self.reveal_of(Section::Contact) else {
            return;
        };
        if reveal.is_hidden() {
            return;
        }
        let style = styles::revealing(self.palette, reveal.progress());
        let dy = reveal.offset_rows();
        self.section_title(buf, shifted(rect, dy), "Contact", style);

        for (i, row) in content::CONTACT.iter().enumerate() {
            self.line(
                buf,
                rect.x + 2,
                rect.y + TITLE_H + i as u16 + dy,
                &Line::styled(*row, style),
                rect.width,
            );
        }

        let year = chrono::Local::now().year();
        let footer = format!("\u{a9} {year} Ada Reyes");
        self.line(
            buf,
            rect.x + 2,
            rect.y + TITLE_H + content::CONTACT.len() as u16 + dy,
            &Line::styled(footer, styles::text_muted(self.palette)),
            rect.width,
        );
    }
}

/// Render a card block over a page rect, returning the inner area.
fn draw_card(
    buf: &mut Buffer,
    rect: PageRect,
    palette: &Palette,
    active: bool,
    title: Option<&str>,
) -> Rect {
    let area = Rect::new(rect.x, rect.y, rect.width, rect.height)
        .intersection(buf.area);
    let mut block = styles::card_block(palette, active);
    if let Some(title) = title {
        block = block.title(title.to_string());
    }
    let inner = block.inner(area);
    block.render(area, buf);
    inner
}

/// One-cell nudge derived from a tilt transform, toward the pointer.
fn tilt_shift(tilt: TiltTransform) -> (i32, i32) {
    let step = |v: f32| -> i32 {
        if v > 0.2 {
            1
        } else if v < -0.2 {
            -1
        } else {
            0
        }
    };
    (step(tilt.rotate_y), step(-tilt.rotate_x))
}

fn offset_coord(base: u16, delta: i32) -> u16 {
    (base as i32 + delta).max(0) as u16
}

fn shifted(rect: PageRect, dy: u16) -> PageRect {
    PageRect {
        y: rect.y + dy,
        ..rect
    }
}
