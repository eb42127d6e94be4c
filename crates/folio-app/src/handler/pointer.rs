//! Pointer handling: hover tilt and accordion header clicks.
//!
//! Screen coordinates are mapped into page coordinates through the scroll
//! offset; each tiltable element then sees positions relative to its own
//! top-left corner, exactly like a bounding-box hit test.

use crate::layout::{Section, HEADER_ROWS, TITLE_H};
use crate::message::{PointerInput, PointerKind};
use crate::state::{AppState, TiltTarget};

use super::UpdateResult;

pub fn handle_pointer(state: &mut AppState, pointer: PointerInput) -> UpdateResult {
    match pointer.kind {
        PointerKind::Moved => handle_move(state, pointer),
        PointerKind::LeftDown => handle_click(state, pointer),
    }
    UpdateResult::none()
}

/// Page coordinates under the pointer, if it is over the page area at all.
fn page_position(state: &AppState, pointer: PointerInput) -> Option<(u16, u16)> {
    if pointer.row < HEADER_ROWS {
        return None;
    }
    let page_y = (pointer.row - HEADER_ROWS).checked_add(state.scroll.offset())?;
    Some((pointer.column, page_y))
}

fn handle_move(state: &mut AppState, pointer: PointerInput) {
    let position = page_position(state, pointer);

    let showcase = state.layout.showcase_rect;
    let skills = state.layout.skill_rects.clone();
    let testimonials = state.layout.testimonial_rects.clone();

    let mut apply = |target: TiltTarget, rect: crate::layout::PageRect| {
        let Some(tilt) = state.tilts.get_mut(&target) else {
            return;
        };
        match position {
            Some((x, y)) if rect.contains(x, y) => {
                tilt.pointer_move(
                    (x - rect.x) as f32,
                    (y - rect.y) as f32,
                    rect.width as f32,
                    rect.height as f32,
                );
            }
            _ => tilt.pointer_leave(),
        }
    };

    apply(TiltTarget::Showcase, showcase);
    for (i, rect) in skills.iter().enumerate() {
        apply(TiltTarget::Skill(i), *rect);
    }
    for (i, rect) in testimonials.iter().enumerate() {
        apply(TiltTarget::Testimonial(i), *rect);
    }
}

fn handle_click(state: &mut AppState, pointer: PointerInput) {
    let Some((_, page_y)) = page_position(state, pointer) else {
        return;
    };
    let Some(faq) = state.layout.rect_of(Section::Faq) else {
        return;
    };

    // Header rows: one per panel, shifted by the expanded body above them.
    let expanded = state.accordion.expanded();
    let expanded_body = expanded
        .map(|i| state.accordion.panels()[i].body_height())
        .unwrap_or(0);
    let panel_count = state.accordion.panels().len();

    for index in 0..panel_count {
        let shift = match expanded {
            Some(e) if e < index => expanded_body,
            _ => 0,
        };
        let header_row = faq.y + TITLE_H + index as u16 + shift;
        if page_y == header_row {
            state.accordion.toggle(index);
            state.relayout();
            return;
        }
    }
}
