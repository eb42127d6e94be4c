//! Page layout in page coordinates.
//!
//! The portfolio is one long vertical page; the viewport is a window into
//! it controlled by the scroll offset. Layout is recomputed whenever the
//! terminal resizes or the accordion changes height. All rects here are in
//! page coordinates (row 0 = top of the page, not top of the screen).

use folio_core::content;

/// Rows reserved for the fixed header bar at the top of the screen.
pub const HEADER_ROWS: u16 = 3;

/// A rectangle in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl PageRect {
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }

    pub fn bottom(&self) -> u16 {
        self.y + self.height
    }
}

/// The page's content blocks, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    Showcase,
    BootLog,
    LiveCode,
    About,
    Skills,
    Projects,
    Faq,
    Testimonials,
    Contact,
}

/// Sections that are registered as scroll-reveal targets (the rest are
/// always visible or have their own animation).
pub const REVEAL_SECTIONS: &[Section] = &[
    Section::About,
    Section::Skills,
    Section::Projects,
    Section::Faq,
    Section::Contact,
];

/// Fixed block heights, in rows. The accordion is the one dynamic block.
const HERO_H: u16 = 8;
const SHOWCASE_H: u16 = 9;
const BOOT_LOG_H: u16 = 7;
const LIVE_CODE_H: u16 = 15;
const ABOUT_H: u16 = 6;
const SKILL_ITEM_H: u16 = 3;
const PROJECT_CARD_H: u16 = 4;
const TESTIMONIAL_CARD_H: u16 = 5;
const CONTACT_H: u16 = 5;
/// Rows used by a section title above its content.
pub const TITLE_H: u16 = 2;

/// Computed page layout.
#[derive(Debug, Clone)]
pub struct PageLayout {
    blocks: Vec<(Section, PageRect)>,
    pub showcase_rect: PageRect,
    pub skill_rects: Vec<PageRect>,
    pub testimonial_rects: Vec<PageRect>,
    pub total_height: u16,
}

impl PageLayout {
    /// Lay the page out for the given width. `faq_body_height` is the
    /// natural height of the currently expanded accordion body (0 when all
    /// panels are collapsed).
    pub fn compute(width: u16, faq_body_height: u16) -> Self {
        let mut y = 0u16;
        let mut blocks = Vec::new();
        let mut push = |section: Section, height: u16, y: &mut u16| -> PageRect {
            let rect = PageRect {
                x: 0,
                y: *y,
                width,
                height,
            };
            blocks.push((section, rect));
            *y += height;
            rect
        };

        push(Section::Hero, HERO_H, &mut y);
        let showcase_rect = push(Section::Showcase, SHOWCASE_H, &mut y);
        push(Section::BootLog, BOOT_LOG_H, &mut y);
        push(Section::LiveCode, LIVE_CODE_H, &mut y);
        push(Section::About, ABOUT_H, &mut y);

        let skill_count = content::SKILLS.len() as u16;
        let skill_rows = skill_count.div_ceil(2);
        let skills_rect = push(
            Section::Skills,
            TITLE_H + skill_rows * SKILL_ITEM_H,
            &mut y,
        );

        let project_count = content::PROJECTS.len() as u16;
        push(
            Section::Projects,
            TITLE_H + project_count * PROJECT_CARD_H,
            &mut y,
        );

        let faq_headers = content::accordion_panels().len() as u16;
        push(Section::Faq, TITLE_H + faq_headers + faq_body_height, &mut y);

        let testimonial_count = content::TESTIMONIALS.len() as u16;
        let testimonials_rect = push(
            Section::Testimonials,
            TITLE_H + testimonial_count * TESTIMONIAL_CARD_H,
            &mut y,
        );

        push(Section::Contact, CONTACT_H, &mut y);

        // Skill items flow two per row inside the skills block
        let half = width / 2;
        let skill_rects = (0..skill_count)
            .map(|i| PageRect {
                x: (i % 2) * half,
                y: skills_rect.y + TITLE_H + (i / 2) * SKILL_ITEM_H,
                width: half.max(1),
                height: SKILL_ITEM_H,
            })
            .collect();

        let testimonial_rects = (0..testimonial_count)
            .map(|i| PageRect {
                x: 0,
                y: testimonials_rect.y + TITLE_H + i * TESTIMONIAL_CARD_H,
                width,
                height: TESTIMONIAL_CARD_H,
            })
            .collect();

        Self {
            blocks,
            showcase_rect,
            skill_rects,
            testimonial_rects,
            total_height: y,
        }
    }

    pub fn blocks(&self) -> &[(Section, PageRect)] {
        &self.blocks
    }

    pub fn rect_of(&self, section: Section) -> Option<PageRect> {
        self.blocks
            .iter()
            .find(|(s, _)| *s == section)
            .map(|(_, r)| *r)
    }

    /// Page row a nav link scrolls to.
    pub fn scroll_target(&self, link: &str) -> Option<u16> {
        let section = match link {
            "About" => Section::About,
            "Skills" => Section::Skills,
            "Projects" => Section::Projects,
            "FAQ" => Section::Faq,
            "Testimonials" => Section::Testimonials,
            "Contact" => Section::Contact,
            _ => return None,
        };
        self.rect_of(section).map(|r| r.y)
    }

    /// Fraction of a section visible in a viewport of `view_rows` rows
    /// starting at page row `offset`.
    pub fn visible_fraction(&self, section: Section, offset: u16, view_rows: u16) -> f32 {
        let Some(rect) = self.rect_of(section) else {
            return 0.0;
        };
        if rect.height == 0 {
            return 0.0;
        }
        let view_top = offset as i32;
        let view_bottom = offset as i32 + view_rows as i32;
        let top = rect.y as i32;
        let bottom = rect.bottom() as i32;
        let overlap = (bottom.min(view_bottom) - top.max(view_top)).max(0);
        overlap as f32 / rect.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_are_contiguous_top_to_bottom() {
        let layout = PageLayout::compute(80, 0);
        let mut expected_y = 0;
        for (_, rect) in layout.blocks() {
            assert_eq!(rect.y, expected_y);
            expected_y = rect.bottom();
        }
        assert_eq!(layout.total_height, expected_y);
    }

    #[test]
    fn test_faq_height_tracks_expanded_body() {
        let collapsed = PageLayout::compute(80, 0);
        let expanded = PageLayout::compute(80, 2);
        let c = collapsed.rect_of(Section::Faq).unwrap();
        let e = expanded.rect_of(Section::Faq).unwrap();
        assert_eq!(e.height, c.height + 2);
        assert_eq!(expanded.total_height, collapsed.total_height + 2);
    }

    #[test]
    fn test_every_nav_link_has_a_target() {
        let layout = PageLayout::compute(80, 0);
        for link in folio_core::content::SECTIONS {
            assert!(
                layout.scroll_target(link).is_some(),
                "no scroll target for {link}"
            );
        }
        assert_eq!(layout.scroll_target("Nowhere"), None);
    }

    #[test]
    fn test_visible_fraction_bounds() {
        let layout = PageLayout::compute(80, 0);
        let about = layout.rect_of(Section::About).unwrap();
        // Fully inside the viewport
        assert_eq!(
            layout.visible_fraction(Section::About, about.y, about.height),
            1.0
        );
        // Entirely above the viewport
        assert_eq!(
            layout.visible_fraction(Section::About, about.bottom() + 10, 20),
            0.0
        );
        // Half inside
        let half = layout.visible_fraction(Section::About, about.y, about.height / 2);
        assert!(half > 0.0 && half < 1.0);
    }

    #[test]
    fn test_skill_items_flow_two_per_row() {
        let layout = PageLayout::compute(80, 0);
        let rects = &layout.skill_rects;
        assert_eq!(rects.len(), folio_core::content::SKILLS.len());
        assert_eq!(rects[0].x, 0);
        assert_eq!(rects[1].x, 40);
        assert_eq!(rects[0].y, rects[1].y);
        assert!(rects[2].y > rects[0].y);
    }

    #[test]
    fn test_page_rect_contains() {
        let rect = PageRect {
            x: 10,
            y: 5,
            width: 20,
            height: 4,
        };
        assert!(rect.contains(10, 5));
        assert!(rect.contains(29, 8));
        assert!(!rect.contains(30, 8));
        assert!(!rect.contains(10, 9));
    }
}
