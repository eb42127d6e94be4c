//! Application state (Model in TEA pattern)
//!
//! Each page feature owns its state independently; nothing here shares
//! internals with anything else. The update loop advances them all from
//! the same tick, but a missing or empty feature never affects the rest.

use std::collections::HashMap;

use rand::rngs::StdRng;
use rand::SeedableRng;

use folio_core::content;
use folio_core::{
    AccordionState, CodeTypewriter, IntroTypewriter, LogTypewriter, NavState, RainField,
    RevealState, ThemeMode, TiltProfile, TiltState,
};

use crate::config::Settings;
use crate::layout::{PageLayout, Section, HEADER_ROWS, REVEAL_SECTIONS};
use crate::scroll::PageScroll;

/// Milliseconds represented by one tick of the event loop.
pub const TICK_MS: u64 = 50;

/// A tiltable element on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TiltTarget {
    Showcase,
    Skill(usize),
    Testimonial(usize),
}

/// Complete application state.
#[derive(Debug)]
pub struct AppState {
    // Viewport
    pub width: u16,
    pub height: u16,

    // Theme Manager
    pub theme: ThemeMode,

    // Navigation Controller
    pub nav: NavState,

    // Page scroll + layout
    pub scroll: PageScroll,
    pub layout: PageLayout,

    // Scroll Reveal
    pub section_reveals: HashMap<Section, RevealState>,
    pub testimonial_reveals: Vec<RevealState>,

    // Tilt Effect
    pub tilts: HashMap<TiltTarget, TiltState>,

    // Ambient Animation
    pub rain: RainField,
    rng: StdRng,

    // Typewriter Engine
    pub boot_log: LogTypewriter,
    pub intro: IntroTypewriter,
    pub live_code: CodeTypewriter,

    // Accordion
    pub accordion: AccordionState,

    pub should_quit: bool,
}

impl AppState {
    pub fn new(width: u16, height: u16, theme: ThemeMode) -> Self {
        let layout = PageLayout::compute(width, 0);

        let mut tilts = HashMap::new();
        tilts.insert(TiltTarget::Showcase, TiltState::new(TiltProfile::Showcase));
        for i in 0..content::SKILLS.len() {
            tilts.insert(TiltTarget::Skill(i), TiltState::new(TiltProfile::SkillItem));
        }
        for i in 0..content::TESTIMONIALS.len() {
            tilts.insert(
                TiltTarget::Testimonial(i),
                TiltState::new(TiltProfile::TestimonialCard),
            );
        }

        let mut state = Self {
            width,
            height,
            theme,
            nav: NavState::new(content::SECTIONS.to_vec()),
            scroll: PageScroll::default(),
            layout,
            section_reveals: REVEAL_SECTIONS
                .iter()
                .map(|&s| (s, RevealState::section()))
                .collect(),
            testimonial_reveals: (0..content::TESTIMONIALS.len())
                .map(RevealState::card)
                .collect(),
            tilts,
            rain: RainField::new(width, height),
            rng: StdRng::from_entropy(),
            boot_log: LogTypewriter::new(content::BOOT_LOG_LINES),
            intro: IntroTypewriter::new(content::INTRO_STEPS),
            live_code: CodeTypewriter::new(content::LIVE_CODE),
            accordion: AccordionState::new(content::accordion_panels()),
            should_quit: false,
        };
        state.relayout();
        state
    }

    /// Deterministic state for tests.
    #[doc(hidden)]
    pub fn with_seed(width: u16, height: u16, theme: ThemeMode, seed: u64) -> Self {
        let mut state = Self::new(width, height, theme);
        state.rng = StdRng::seed_from_u64(seed);
        state
    }

    /// Rows of the page visible below the header.
    pub fn view_rows(&self) -> u16 {
        self.height.saturating_sub(HEADER_ROWS)
    }

    /// Recompute layout and scroll bounds; called after resize and after
    /// any accordion change (the one block with dynamic height).
    pub fn relayout(&mut self) {
        let faq_body = self
            .accordion
            .expanded()
            .map(|i| self.accordion.panels()[i].body_height())
            .unwrap_or(0);
        self.layout = PageLayout::compute(self.width, faq_body);
        self.scroll.set_bounds(self.layout.total_height, self.view_rows());
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.rain.resize(width, height);
        self.relayout();
    }

    /// Toggle the theme: the next mode is derived from the mode currently
    /// applied, and the caller persists the returned value.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.opposite();
        self.theme
    }

    /// Advance every animation by one tick.
    pub fn tick(&mut self) {
        self.rain.tick(&mut self.rng);
        self.boot_log.advance(TICK_MS);
        self.intro.advance(TICK_MS);
        self.live_code.advance(TICK_MS);
        self.scroll.tick();
        self.observe_reveals();
        for reveal in self.section_reveals.values_mut() {
            reveal.advance(TICK_MS);
        }
        for reveal in &mut self.testimonial_reveals {
            reveal.advance(TICK_MS);
        }
    }

    /// Feed current visibility fractions to every reveal target.
    fn observe_reveals(&mut self) {
        let offset = self.scroll.offset();
        let view_rows = self.view_rows();
        for (&section, reveal) in &mut self.section_reveals {
            reveal.observe(self.layout.visible_fraction(section, offset, view_rows));
        }

        let view_top = offset as i32;
        let view_bottom = view_top + view_rows as i32;
        let rects = self.layout.testimonial_rects.clone();
        for (rect, reveal) in rects.iter().zip(&mut self.testimonial_reveals) {
            let top = rect.y as i32;
            let bottom = rect.bottom() as i32;
            let overlap = (bottom.min(view_bottom) - top.max(view_top)).max(0);
            let fraction = if rect.height == 0 {
                0.0
            } else {
                overlap as f32 / rect.height as f32
            };
            reveal.observe(fraction);
        }
    }

    /// Tilt transform for a target (neutral if unknown).
    pub fn tilt_of(&self, target: TiltTarget) -> folio_core::TiltTransform {
        self.tilts
            .get(&target)
            .map(|t| t.transform())
            .unwrap_or(folio_core::TiltTransform::NEUTRAL)
    }
}

/// Build the initial state from loaded settings and the environment hint.
pub fn initial_state(width: u16, height: u16, settings: &Settings) -> AppState {
    let env_dark = folio_core::env_prefers_dark(std::env::var("COLORFGBG").ok().as_deref());
    let theme = folio_core::initial_mode(settings.theme, env_dark);
    AppState::new(width, height, theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::CodePhase;

    fn state() -> AppState {
        AppState::with_seed(80, 24, ThemeMode::Dark, 7)
    }

    #[test]
    fn test_new_state_wires_every_feature() {
        let s = state();
        assert!(s.nav.is_enabled());
        assert_eq!(s.rain.lane_count(), 40);
        assert_eq!(s.section_reveals.len(), REVEAL_SECTIONS.len());
        assert_eq!(s.testimonial_reveals.len(), content::TESTIMONIALS.len());
        assert_eq!(
            s.tilts.len(),
            1 + content::SKILLS.len() + content::TESTIMONIALS.len()
        );
        assert!(!s.should_quit);
    }

    #[test]
    fn test_toggle_theme_twice_restores_original() {
        let mut s = state();
        let original = s.theme;
        let first = s.toggle_theme();
        assert_eq!(first, original.opposite());
        let second = s.toggle_theme();
        assert_eq!(second, original);
        assert_eq!(s.theme, original);
    }

    #[test]
    fn test_tick_advances_independent_animations() {
        let mut s = state();
        for _ in 0..10 {
            s.tick();
        }
        // 10 ticks = 500ms: boot log has typed ~5 chars, code ~20
        assert!(!s.boot_log.display().is_empty());
        assert!(!s.live_code.display().is_empty());
        assert!(!s.intro.display(0).is_empty());
        assert_eq!(s.live_code.phase(), CodePhase::Typing);
    }

    #[test]
    fn test_sections_in_initial_viewport_reveal_once() {
        let mut s = state();
        // Scroll to the bottom so everything becomes visible at some point
        for _ in 0..200 {
            s.scroll.scroll_by(2);
            s.tick();
        }
        for reveal in s.section_reveals.values() {
            assert!(reveal.is_visible());
        }
        // Scrolling back up never re-hides
        s.scroll.to_top();
        for _ in 0..50 {
            s.tick();
        }
        for reveal in s.section_reveals.values() {
            assert!(reveal.is_visible());
        }
    }

    #[test]
    fn test_offscreen_sections_stay_hidden() {
        let mut s = state();
        s.tick();
        // Contact is far below a 24-row viewport at offset 0
        assert!(s.section_reveals[&Section::Contact].is_hidden());
    }

    #[test]
    fn test_resize_rebuilds_rain_and_layout() {
        let mut s = state();
        s.resize(120, 40);
        assert_eq!(s.rain.lane_count(), 60);
        assert_eq!(s.layout.blocks().first().unwrap().1.width, 120);
    }

    #[test]
    fn test_accordion_expansion_grows_page() {
        let mut s = state();
        let before = s.layout.total_height;
        s.accordion.toggle(0);
        s.relayout();
        assert!(s.layout.total_height > before);
        s.accordion.toggle(0);
        s.relayout();
        assert_eq!(s.layout.total_height, before);
    }
}
