//! Page scroll state with smooth easing toward in-page targets.

/// Scroll offset over the page, plus an optional easing target set by nav
/// link activation. Manual scrolling cancels any easing in flight.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageScroll {
    offset: u16,
    target: Option<u16>,
    max_offset: u16,
}

impl PageScroll {
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Recompute the scroll range after layout or viewport changes.
    pub fn set_bounds(&mut self, total_height: u16, view_rows: u16) {
        self.max_offset = total_height.saturating_sub(view_rows);
        self.offset = self.offset.min(self.max_offset);
        if let Some(t) = self.target {
            self.target = Some(t.min(self.max_offset));
        }
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.target = None;
        let next = self.offset as i32 + delta;
        self.offset = next.clamp(0, self.max_offset as i32) as u16;
    }

    pub fn to_top(&mut self) {
        self.target = None;
        self.offset = 0;
    }

    pub fn to_bottom(&mut self) {
        self.target = None;
        self.offset = self.max_offset;
    }

    /// Begin easing toward a page row (smooth in-page link scrolling).
    pub fn ease_to(&mut self, row: u16) {
        self.target = Some(row.min(self.max_offset));
    }

    pub fn is_easing(&self) -> bool {
        self.target.is_some()
    }

    /// One animation step: move a quarter of the remaining distance,
    /// at least one row, so the approach decelerates like CSS smooth
    /// scrolling.
    pub fn tick(&mut self) {
        let Some(target) = self.target else { return };
        let delta = target as i32 - self.offset as i32;
        if delta == 0 {
            self.target = None;
            return;
        }
        let step = (delta.abs() / 4).max(1) * delta.signum();
        self.offset = (self.offset as i32 + step).clamp(0, self.max_offset as i32) as u16;
        if self.offset == target {
            self.target = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll_with_bounds(total: u16, view: u16) -> PageScroll {
        let mut s = PageScroll::default();
        s.set_bounds(total, view);
        s
    }

    #[test]
    fn test_scroll_clamps_to_bounds() {
        let mut s = scroll_with_bounds(100, 30);
        s.scroll_by(-5);
        assert_eq!(s.offset(), 0);
        s.scroll_by(500);
        assert_eq!(s.offset(), 70);
    }

    #[test]
    fn test_easing_converges_and_stops() {
        let mut s = scroll_with_bounds(100, 30);
        s.ease_to(50);
        assert!(s.is_easing());
        let mut last = s.offset();
        for _ in 0..200 {
            s.tick();
            assert!(s.offset() >= last);
            last = s.offset();
            if !s.is_easing() {
                break;
            }
        }
        assert_eq!(s.offset(), 50);
        assert!(!s.is_easing());
    }

    #[test]
    fn test_easing_decelerates() {
        let mut s = scroll_with_bounds(200, 20);
        s.ease_to(100);
        s.tick();
        let first_step = s.offset();
        assert_eq!(first_step, 25);
        s.tick();
        assert!(s.offset() - first_step < first_step);
    }

    #[test]
    fn test_manual_scroll_cancels_easing() {
        let mut s = scroll_with_bounds(100, 30);
        s.ease_to(60);
        s.scroll_by(1);
        assert!(!s.is_easing());
    }

    #[test]
    fn test_short_page_never_scrolls() {
        let mut s = scroll_with_bounds(10, 30);
        s.scroll_by(10);
        assert_eq!(s.offset(), 0);
        s.to_bottom();
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_bounds_shrink_clamps_offset() {
        let mut s = scroll_with_bounds(100, 30);
        s.to_bottom();
        assert_eq!(s.offset(), 70);
        s.set_bounds(100, 80);
        assert_eq!(s.offset(), 20);
    }
}
