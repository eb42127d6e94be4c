//! Semantic style builders over the active palette.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette::Palette;

pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn title(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_bright)
        .add_modifier(Modifier::BOLD)
}

pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

/// Style for content still fading in: dimmed until the reveal completes.
pub fn revealing(p: &Palette, progress: f32) -> Style {
    if progress >= 1.0 {
        text_primary(p)
    } else {
        text_primary(p).add_modifier(Modifier::DIM)
    }
}

// --- Block builders ---

pub fn card_block(p: &Palette, active: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if active { p.border_active } else { p.border_dim }))
        .style(Style::default().bg(p.card_bg))
}

pub fn overlay_block(p: &Palette) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(p.border_active))
        .style(Style::default().bg(p.card_bg))
}
