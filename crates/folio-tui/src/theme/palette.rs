//! Light and dark color palettes.
//!
//! Exactly one palette applies to the whole page at any instant; the theme
//! toggle swaps between them.

use folio_core::ThemeMode;
use ratatui::style::Color;

/// All colors one theme mode needs.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    // Background layers
    pub bg: Color,
    pub card_bg: Color,

    // Borders
    pub border_dim: Color,
    pub border_active: Color,

    // Accent
    pub accent: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub text_bright: Color,

    // Rain glyphs fade from `rain_rgb` toward `bg_rgb`
    pub rain_rgb: (u8, u8, u8),
    pub bg_rgb: (u8, u8, u8),
}

/// Dark mode (default on most terminals).
pub const DARK: Palette = Palette {
    bg: Color::Rgb(10, 12, 16),
    card_bg: Color::Rgb(18, 21, 28),
    border_dim: Color::Rgb(45, 51, 59),
    border_active: Color::Rgb(88, 166, 255),
    accent: Color::Rgb(88, 166, 255),
    text_primary: Color::Rgb(201, 209, 217),
    text_secondary: Color::Rgb(125, 133, 144),
    text_muted: Color::Rgb(72, 79, 88),
    text_bright: Color::Rgb(240, 246, 252),
    // Royal blue, as the original rain draws
    rain_rgb: (65, 105, 225),
    bg_rgb: (10, 12, 16),
};

/// Light mode.
pub const LIGHT: Palette = Palette {
    bg: Color::Rgb(246, 248, 250),
    card_bg: Color::Rgb(255, 255, 255),
    border_dim: Color::Rgb(208, 215, 222),
    border_active: Color::Rgb(9, 105, 218),
    accent: Color::Rgb(9, 105, 218),
    text_primary: Color::Rgb(31, 35, 40),
    text_secondary: Color::Rgb(87, 96, 106),
    text_muted: Color::Rgb(140, 149, 159),
    text_bright: Color::Rgb(0, 0, 0),
    rain_rgb: (65, 105, 225),
    bg_rgb: (246, 248, 250),
};

/// The palette for a theme mode.
pub fn for_mode(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Dark => &DARK,
        ThemeMode::Light => &LIGHT,
    }
}

/// Blend a rain glyph color toward the background by intensity
/// (255 = fully lit, 0 = gone).
pub fn rain_color(palette: &Palette, intensity: u8) -> Color {
    let t = intensity as u16;
    let blend = |from: u8, to: u8| -> u8 {
        ((from as u16 * (255 - t) + to as u16 * t) / 255) as u8
    };
    let (br, bg_, bb) = palette.bg_rgb;
    let (rr, rg, rb) = palette.rain_rgb;
    Color::Rgb(blend(br, rr), blend(bg_, rg), blend(bb, rb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selects_palette() {
        assert_eq!(for_mode(ThemeMode::Dark).bg, DARK.bg);
        assert_eq!(for_mode(ThemeMode::Light).bg, LIGHT.bg);
    }

    #[test]
    fn test_palettes_differ() {
        assert_ne!(DARK.bg, LIGHT.bg);
        assert_ne!(DARK.text_primary, LIGHT.text_primary);
    }

    #[test]
    fn test_rain_color_endpoints() {
        let full = rain_color(&DARK, 255);
        assert_eq!(full, Color::Rgb(65, 105, 225));
        let gone = rain_color(&DARK, 0);
        assert_eq!(gone, DARK.bg);
    }

    #[test]
    fn test_rain_color_fades_monotonically() {
        // Red channel goes from bg (10) toward rain (65) as intensity rises
        let mut last = 0u8;
        for intensity in [0u8, 64, 128, 192, 255] {
            let Color::Rgb(r, _, _) = rain_color(&DARK, intensity) else {
                panic!("rain color is always rgb");
            };
            assert!(r >= last);
            last = r;
        }
    }
}
