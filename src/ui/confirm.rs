//! Delete confirmation dialog

use macroquad::prelude::*;

use super::{
    button, draw_rounded_rect, draw_rounded_rect_lines, draw_text_centered, ButtonStyle, Rect,
    UiContext, BACKDROP_COLOR, BG_COLOR, BORDER_COLOR, FONT_SIZE_CONTENT, PANEL_RADIUS, TEXT_COLOR,
};
use crate::planet::PlanetId;
use crate::render::text::{measure_width, wrap_words};
use crate::viewport::Viewport;

/// A pending delete waiting for the user's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmState {
    pub target: PlanetId,
    pub message: String,
}

impl ConfirmState {
    pub fn delete(target: PlanetId, name: &str) -> Self {
        Self {
            target,
            message: format!("Delete \"{}\"?", name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Confirm,
    Cancel,
}

const DIALOG_WIDTH: f32 = 320.0;
const DIALOG_HEIGHT: f32 = 140.0;

/// Dialog rectangle centered in the viewport
pub fn dialog_rect(viewport: Viewport) -> Rect {
    let w = DIALOG_WIDTH.min(viewport.width - 40.0).max(160.0);
    Rect::new(
        ((viewport.width - w) / 2.0).round(),
        ((viewport.height - DIALOG_HEIGHT) / 2.0).round(),
        w,
        DIALOG_HEIGHT,
    )
}

/// Draw the dialog. Backdrop clicks and Escape cancel.
pub fn draw_confirm(ctx: &mut UiContext, state: &ConfirmState, viewport: Viewport) -> Option<ConfirmAction> {
    let rect = dialog_rect(viewport);
    let backdrop_click = ctx.mouse.left_pressed && !ctx.mouse.inside(&rect);

    draw_rectangle(0.0, 0.0, viewport.width, viewport.height, BACKDROP_COLOR);
    draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, PANEL_RADIUS, BG_COLOR);
    draw_rounded_rect_lines(rect.x, rect.y, rect.w, rect.h, PANEL_RADIUS, 1.0, BORDER_COLOR);

    let inner = rect.pad(20.0);
    let line_h = FONT_SIZE_CONTENT * 1.3;
    for (i, line) in wrap_words(&state.message, FONT_SIZE_CONTENT, inner.w, measure_width).iter().take(3).enumerate() {
        let slot = Rect::new(inner.x, inner.y + i as f32 * line_h, inner.w, line_h);
        draw_text_centered(line, &slot, FONT_SIZE_CONTENT, TEXT_COLOR);
    }

    let row = Rect::new(inner.x, inner.bottom() - 34.0, inner.w, 34.0).columns(2, 12.0);
    let confirm = button(ctx, row[0], "Delete", ButtonStyle::Danger, FONT_SIZE_CONTENT);
    let cancel = button(ctx, row[1], "Cancel", ButtonStyle::Neutral, FONT_SIZE_CONTENT);

    ctx.consumed = true;

    if confirm || is_key_pressed(KeyCode::Enter) {
        Some(ConfirmAction::Confirm)
    } else if cancel || backdrop_click || is_key_pressed(KeyCode::Escape) {
        Some(ConfirmAction::Cancel)
    } else {
        None
    }
}
