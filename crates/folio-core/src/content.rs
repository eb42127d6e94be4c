//! Static portfolio content.
//!
//! Everything the page displays lives here, so the feature machines stay
//! data-driven: an empty list simply disables the matching feature.

use crate::accordion::AccordionPanel;
use crate::typewriter::IntroStep;

/// Lines of the looping boot log in the hero terminal card.
pub const BOOT_LOG_LINES: &[&str] = &[
    "> Hello, World_",
    "> Initializing system...",
    "> Loading modules...",
    "> System ready.",
];

/// Intro sequence: name, role, description, each with its own pace.
pub const INTRO_STEPS: &[IntroStep] = &[
    IntroStep {
        text: "Hi, I'm Ada Reyes",
        char_delay_ms: 50,
    },
    IntroStep {
        text: "Frontend Developer",
        char_delay_ms: 60,
    },
    IntroStep {
        text: "Passionate about creating interactive and user-friendly experiences.",
        char_delay_ms: 35,
    },
];

/// Snippet typed and deleted in the live-code card.
pub const LIVE_CODE: &str = "\
<!-- index.html -->
<!DOCTYPE html>
<html lang=\"en\">
  <head>
  <title>Ada | Frontend Dev</title>
  <link rel=\"stylesheet\" href=\"style.css\"/>
  </head>
  <body>
    <h1>Hello, World!</h1>
    <script src=\"app.js\"></script>
  </body>
</html>
";

/// Section titles; these double as the nav menu links.
pub const SECTIONS: &[&str] = &["About", "Skills", "Projects", "FAQ", "Testimonials", "Contact"];

/// Paragraph shown in the About section.
pub const ABOUT: &[&str] = &[
    "I build interfaces that feel alive: small animations,",
    "honest feedback, and no loading spinners where none",
    "are needed. Currently exploring terminal UIs.",
];

/// Skill list items; each is a tiltable element.
pub const SKILLS: &[&str] = &[
    "HTML & CSS",
    "JavaScript",
    "TypeScript",
    "Rust",
    "Accessibility",
    "Animation",
];

/// Project cards for the Projects section.
pub const PROJECTS: &[(&str, &str)] = &[
    ("binary-rain", "A canvas rain effect with fading trails"),
    ("typewriter-kit", "Chained text animations without a framework"),
    ("tiltable", "Pointer-driven 3D card tilt in 40 lines"),
];

/// Testimonial cards: author and quote.
pub const TESTIMONIALS: &[(&str, &str)] = &[
    ("Maya L.", "Shipped our landing page in a week. It sparkles."),
    ("Jonas K.", "The little details: everything fades, nothing jumps."),
    ("Priya S.", "Finally a portfolio site that loads instantly."),
];

/// FAQ accordion panels.
pub fn accordion_panels() -> Vec<AccordionPanel> {
    vec![
        AccordionPanel {
            header: "Are you available for freelance work?",
            body: &[
                "Yes, for short engagements.",
                "Reach out via the contact section below.",
            ],
        },
        AccordionPanel {
            header: "What do you work with day to day?",
            body: &[
                "Mostly TypeScript and Rust.",
                "Plus whatever the project genuinely needs.",
            ],
        },
        AccordionPanel {
            header: "Do you do design as well?",
            body: &["No, but I collaborate closely with designers."],
        },
    ]
}

/// Contact lines in the footer section.
pub const CONTACT: &[&str] = &["ada@example.dev", "github.com/ada-reyes"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_log_has_four_lines() {
        assert_eq!(BOOT_LOG_LINES.len(), 4);
    }

    #[test]
    fn test_intro_has_three_targets_with_expected_pace() {
        assert_eq!(INTRO_STEPS.len(), 3);
        assert_eq!(INTRO_STEPS[0].char_delay_ms, 50);
        assert_eq!(INTRO_STEPS[1].char_delay_ms, 60);
        assert_eq!(INTRO_STEPS[2].char_delay_ms, 35);
    }

    #[test]
    fn test_sections_are_nonempty() {
        assert!(!SECTIONS.is_empty());
        assert!(!SKILLS.is_empty());
        assert!(!TESTIMONIALS.is_empty());
        assert!(!accordion_panels().is_empty());
    }

    #[test]
    fn test_live_code_is_multiline() {
        assert!(LIVE_CODE.lines().count() > 5);
    }
}
