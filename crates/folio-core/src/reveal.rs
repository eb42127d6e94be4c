//! One-shot scroll-triggered reveal state machine.
//!
//! A reveal target starts hidden (zero opacity, pushed down a couple of
//! rows). Once its visible fraction crosses the configured threshold it
//! animates to fully visible over a fixed duration and is then permanently
//! done — scrolling it back out never re-hides it.

/// How long a reveal animation runs, in milliseconds.
pub const REVEAL_DURATION_MS: u64 = 600;

/// Vertical offset (rows) applied while fully hidden.
pub const HIDDEN_OFFSET_ROWS: u16 = 2;

/// Observation threshold for regular content sections (10% visible).
pub const SECTION_THRESHOLD: f32 = 0.1;

/// Observation threshold for testimonial cards (30% visible).
pub const CARD_THRESHOLD: f32 = 0.3;

/// Per-card stagger step for the testimonial set, in milliseconds.
pub const CARD_STAGGER_MS: u64 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Hidden,
    /// Triggered but waiting out a stagger delay.
    Pending { remaining_ms: u64 },
    Revealing { elapsed_ms: u64 },
    Visible,
}

/// State for one reveal target.
#[derive(Debug, Clone, Copy)]
pub struct RevealState {
    phase: Phase,
    threshold: f32,
    delay_ms: u64,
}

impl RevealState {
    /// A plain section target (10% threshold, no stagger).
    pub fn section() -> Self {
        Self {
            phase: Phase::Hidden,
            threshold: SECTION_THRESHOLD,
            delay_ms: 0,
        }
    }

    /// A testimonial card target: 30% threshold, staggered by its index
    /// within the card set so the set cascades instead of popping at once.
    pub fn card(index: usize) -> Self {
        Self {
            phase: Phase::Hidden,
            threshold: CARD_THRESHOLD,
            delay_ms: index as u64 * CARD_STAGGER_MS,
        }
    }

    /// Report the target's current visible fraction (0.0..=1.0).
    ///
    /// Crossing the threshold arms the reveal exactly once; further
    /// observations are ignored (the target is effectively unobserved).
    pub fn observe(&mut self, visible_fraction: f32) {
        if self.phase == Phase::Hidden && visible_fraction >= self.threshold {
            self.phase = if self.delay_ms > 0 {
                Phase::Pending {
                    remaining_ms: self.delay_ms,
                }
            } else {
                Phase::Revealing { elapsed_ms: 0 }
            };
        }
    }

    /// Advance animation time.
    pub fn advance(&mut self, dt_ms: u64) {
        match self.phase {
            Phase::Pending { remaining_ms } => {
                if dt_ms >= remaining_ms {
                    self.phase = Phase::Revealing {
                        elapsed_ms: dt_ms - remaining_ms,
                    };
                } else {
                    self.phase = Phase::Pending {
                        remaining_ms: remaining_ms - dt_ms,
                    };
                }
            }
            Phase::Revealing { elapsed_ms } => {
                let elapsed = elapsed_ms + dt_ms;
                self.phase = if elapsed >= REVEAL_DURATION_MS {
                    Phase::Visible
                } else {
                    Phase::Revealing { elapsed_ms: elapsed }
                };
            }
            Phase::Hidden | Phase::Visible => {}
        }
    }

    /// Animation progress in 0.0..=1.0 (0 = hidden, 1 = fully visible).
    pub fn progress(&self) -> f32 {
        match self.phase {
            Phase::Hidden | Phase::Pending { .. } => 0.0,
            Phase::Revealing { elapsed_ms } => {
                (elapsed_ms as f32 / REVEAL_DURATION_MS as f32).min(1.0)
            }
            Phase::Visible => 1.0,
        }
    }

    /// Vertical offset in rows at the current progress.
    pub fn offset_rows(&self) -> u16 {
        let remaining = 1.0 - self.progress();
        (remaining * HIDDEN_OFFSET_ROWS as f32).round() as u16
    }

    pub fn is_visible(&self) -> bool {
        self.phase == Phase::Visible
    }

    pub fn is_hidden(&self) -> bool {
        self.phase == Phase::Hidden
    }
}
