//! Pointer-driven tilt transforms for hover-reactive elements.
//!
//! Each registered element computes a rotation pair from the pointer's
//! offset from its center. The coefficients differ per element group but
//! the shape is the same, so one parameterized profile covers all three.

/// Rotation + scale applied to a tilted element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltTransform {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub scale: f32,
}

impl TiltTransform {
    pub const NEUTRAL: TiltTransform = TiltTransform {
        rotate_x: 0.0,
        rotate_y: 0.0,
        scale: 1.0,
    };

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

/// Per-group tilt coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiltProfile {
    /// Showcase portrait: center offset / 10, scales to 1.1x.
    Showcase,
    /// Skill list items: center offset / 15, scales to 1.05x.
    SkillItem,
    /// Testimonial cards: normalized offset (ratio - 0.5) * 10, with the
    /// vertical axis sign inverted relative to the horizontal. No scale.
    TestimonialCard,
}

/// State for one tiltable element.
#[derive(Debug, Clone, Copy)]
pub struct TiltState {
    profile: TiltProfile,
    transform: TiltTransform,
}

impl TiltState {
    pub fn new(profile: TiltProfile) -> Self {
        Self {
            profile,
            transform: TiltTransform::NEUTRAL,
        }
    }

    /// Pointer moved to (x, y), relative to the element's top-left corner,
    /// inside an element of the given size.
    pub fn pointer_move(&mut self, x: f32, y: f32, width: f32, height: f32) {
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let center_x = width / 2.0;
        let center_y = height / 2.0;

        self.transform = match self.profile {
            TiltProfile::Showcase => TiltTransform {
                rotate_x: -(y - center_y) / 10.0,
                rotate_y: (x - center_x) / 10.0,
                scale: 1.1,
            },
            TiltProfile::SkillItem => TiltTransform {
                rotate_x: -(y - center_y) / 15.0,
                rotate_y: (x - center_x) / 15.0,
                scale: 1.05,
            },
            TiltProfile::TestimonialCard => TiltTransform {
                rotate_x: (y / height - 0.5) * 10.0,
                rotate_y: (x / width - 0.5) * -10.0,
                scale: 1.0,
            },
        };
    }

    /// Pointer left the element: snap back to neutral immediately.
    pub fn pointer_leave(&mut self) {
        self.transform = TiltTransform::NEUTRAL;
    }

    pub fn transform(&self) -> TiltTransform {
        self.transform
    }

    pub fn profile(&self) -> TiltProfile {
        self.profile
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_neutral() {
        let t = TiltState::new(TiltProfile::Showcase);
        assert!(t.transform().is_neutral());
    }

    #[test]
    fn test_center_gives_zero_rotation() {
        let mut t = TiltState::new(TiltProfile::Showcase);
        t.pointer_move(20.0, 10.0, 40.0, 20.0);
        let tf = t.transform();
        assert_eq!(tf.rotate_x, 0.0);
        assert_eq!(tf.rotate_y, 0.0);
        assert_eq!(tf.scale, 1.1);
    }

    #[test]
    fn test_showcase_coefficients() {
        let mut t = TiltState::new(TiltProfile::Showcase);
        // 10 right of center, 5 above center in a 40x20 element
        t.pointer_move(30.0, 5.0, 40.0, 20.0);
        let tf = t.transform();
        assert_eq!(tf.rotate_y, 1.0);
        assert_eq!(tf.rotate_x, 0.5);
    }

    #[test]
    fn test_skill_item_coefficients() {
        let mut t = TiltState::new(TiltProfile::SkillItem);
        t.pointer_move(45.0, 15.0, 30.0, 30.0);
        let tf = t.transform();
        assert_eq!(tf.rotate_y, 2.0);
        assert_eq!(tf.rotate_x, 0.0);
        assert_eq!(tf.scale, 1.05);
    }

    #[test]
    fn test_testimonial_normalized_and_inverted() {
        let mut t = TiltState::new(TiltProfile::TestimonialCard);
        // Bottom-right corner of any element
        t.pointer_move(40.0, 20.0, 40.0, 20.0);
        let tf = t.transform();
        assert_eq!(tf.rotate_x, 5.0);
        assert_eq!(tf.rotate_y, -5.0);
        assert_eq!(tf.scale, 1.0);
    }

    #[test]
    fn test_leave_resets_to_exact_neutral() {
        for profile in [
            TiltProfile::Showcase,
            TiltProfile::SkillItem,
            TiltProfile::TestimonialCard,
        ] {
            let mut t = TiltState::new(profile);
            t.pointer_move(3.0, 17.0, 40.0, 20.0);
            assert!(!t.transform().is_neutral());
            t.pointer_leave();
            assert_eq!(t.transform(), TiltTransform::NEUTRAL);
        }
    }

    #[test]
    fn test_degenerate_size_is_ignored() {
        let mut t = TiltState::new(TiltProfile::TestimonialCard);
        t.pointer_move(0.0, 0.0, 0.0, 0.0);
        assert!(t.transform().is_neutral());
    }
}
