//! Binary rain backdrop widget.
//!
//! Paints the rain field's cells behind the page content. Intensity maps
//! to a blend between the rain color and the background, which reproduces
//! the original's fading-trail overdraw.

use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use folio_core::RainField;

use crate::theme::palette::{self, Palette};

/// Renders a [`RainField`] into its area.
pub struct RainBackdrop<'a> {
    field: &'a RainField,
    palette: &'a Palette,
}

impl<'a> RainBackdrop<'a> {
    pub fn new(field: &'a RainField, palette: &'a Palette) -> Self {
        Self { field, palette }
    }
}

impl Widget for RainBackdrop<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for col in 0..area.width {
                let Some(cell) = self.field.cell(col, row) else {
                    continue;
                };
                if cell.intensity == 0 {
                    continue;
                }
                if let Some(target) = buf.cell_mut((area.x + col, area.y + row)) {
                    target.set_char(cell.glyph);
                    target.set_style(
                        Style::default().fg(palette::rain_color(self.palette, cell.intensity)),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_backdrop_paints_fresh_glyphs() {
        let mut field = RainField::new(20, 10);
        let mut rng = StdRng::seed_from_u64(11);
        field.tick(&mut rng);

        let area = Rect::new(0, 0, 20, 10);
        let mut buf = Buffer::empty(area);
        RainBackdrop::new(&field, &palette::DARK).render(area, &mut buf);

        let drawn = area
            .positions()
            .filter(|pos| {
                let symbol = buf[(pos.x, pos.y)].symbol();
                symbol == "0" || symbol == "1"
            })
            .count();
        assert_eq!(drawn, field.lane_count());
    }

    #[test]
    fn test_backdrop_handles_area_smaller_than_field() {
        let mut field = RainField::new(40, 20);
        let mut rng = StdRng::seed_from_u64(5);
        field.tick(&mut rng);

        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        // Must not panic when the buffer is smaller than the field
        RainBackdrop::new(&field, &palette::DARK).render(area, &mut buf);
    }
}
