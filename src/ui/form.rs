//! Add / edit form modal

use macroquad::prelude::*;

use super::{
    button, draw_rounded_rect, draw_rounded_rect_lines, draw_text_input, draw_text_top_left, stepper,
    ButtonStyle, Rect, TextInputState, UiContext, BACKDROP_COLOR, BG_COLOR, BORDER_COLOR,
    FONT_SIZE_CONTENT, FONT_SIZE_HEADER, FONT_SIZE_SMALL, PANEL_RADIUS, TEXT_COLOR, TEXT_DIM,
};
use crate::config::{MAX_LEVEL, MIN_LEVEL};
use crate::planet::color::{normalize_user_color, parse_hex};
use crate::planet::{Planet, PlanetDraft, PlanetId};
use crate::viewport::Viewport;

/// Everything the form holds while it is open
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    /// `None` when adding a new planet
    pub editing: Option<PlanetId>,
    pub name: TextInputState,
    pub importance: i32,
    pub urgency: i32,
    pub interval: TextInputState,
    pub color: TextInputState,
}

impl FormState {
    pub fn for_add() -> Self {
        Self {
            editing: None,
            name: TextInputState::new("").focused(),
            importance: 5,
            urgency: 5,
            interval: TextInputState::new(""),
            color: TextInputState::new(""),
        }
    }

    pub fn for_edit(planet: &Planet) -> Self {
        Self {
            editing: Some(planet.id),
            name: TextInputState::new(planet.name.clone()).focused(),
            importance: planet.importance,
            urgency: planet.urgency,
            interval: TextInputState::new(planet.interval.to_string()),
            color: TextInputState::new(planet.color.clone()),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Idea"
        } else {
            "Add New Idea"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.editing.is_some() {
            "Save Changes"
        } else {
            "Create Planet"
        }
    }

    /// Build a draft from the fields. `None` while the name is blank.
    pub fn to_draft(&self) -> Option<PlanetDraft> {
        let name = self.name.trimmed();
        if name.is_empty() {
            return None;
        }
        let mut draft = PlanetDraft::new(name, self.importance, self.urgency);
        if let Some(interval) = parse_interval(self.interval.trimmed()) {
            draft = draft.with_interval(interval);
        }
        if let Some(color) = normalize_user_color(self.color.trimmed()) {
            draft = draft.with_color(color);
        }
        Some(draft)
    }
}

/// Positive, finite seconds; anything else means "derive from urgency"
pub fn parse_interval(input: &str) -> Option<f32> {
    input
        .parse::<f32>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

/// What the user did with the form this frame
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    Submit(PlanetDraft),
    Cancel,
}

const FORM_WIDTH: f32 = 400.0;
const FORM_HEIGHT: f32 = 400.0;
const PAD: f32 = 20.0;
const FIELD_H: f32 = 34.0;
const LABEL_GAP: f32 = 18.0;
const ROW_GAP: f32 = 12.0;

/// Screen rectangles for the form's parts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormLayout {
    pub panel: Rect,
    pub name: Rect,
    pub importance: Rect,
    pub urgency: Rect,
    pub interval: Rect,
    pub color: Rect,
    pub submit: Rect,
    pub cancel: Rect,
}

impl FormLayout {
    /// Centered in the viewport, shrinking to fit narrow screens
    pub fn compute(viewport: Viewport) -> Self {
        let w = FORM_WIDTH.min(viewport.width - 40.0).max(200.0);
        let h = FORM_HEIGHT;
        let panel = Rect::new(
            ((viewport.width - w) / 2.0).round(),
            ((viewport.height - h) / 2.0).max(10.0).round(),
            w,
            h,
        );
        let inner = panel.pad(PAD);

        // Title takes the first 30px
        let mut y = inner.y + 30.0 + LABEL_GAP;
        let name = Rect::new(inner.x, y, inner.w, FIELD_H);
        y = name.bottom() + ROW_GAP + LABEL_GAP;

        let halves = Rect::new(inner.x, y, inner.w, FIELD_H).columns(2, ROW_GAP);
        let (importance, urgency) = (halves[0], halves[1]);
        y = importance.bottom() + ROW_GAP + LABEL_GAP;

        let interval = Rect::new(inner.x, y, inner.w, FIELD_H);
        y = interval.bottom() + ROW_GAP + LABEL_GAP;

        let color = Rect::new(inner.x, y, inner.w - FIELD_H - 8.0, FIELD_H);

        let buttons = Rect::new(inner.x, inner.bottom() - FIELD_H, inner.w, FIELD_H).columns(2, ROW_GAP);

        Self {
            panel,
            name,
            importance,
            urgency,
            interval,
            color,
            submit: buttons[0],
            cancel: buttons[1],
        }
    }
}

/// Draw the form modal. The modal owns all pointer input while open.
pub fn draw_form(ctx: &mut UiContext, state: &mut FormState, viewport: Viewport) -> Option<FormAction> {
    let layout = FormLayout::compute(viewport);
    let backdrop_click = ctx.mouse.left_pressed && !ctx.mouse.inside(&layout.panel);

    draw_rectangle(0.0, 0.0, viewport.width, viewport.height, BACKDROP_COLOR);
    let p = layout.panel;
    draw_rounded_rect(p.x, p.y, p.w, p.h, PANEL_RADIUS, BG_COLOR);
    draw_rounded_rect_lines(p.x, p.y, p.w, p.h, PANEL_RADIUS, 1.0, BORDER_COLOR);

    draw_text_top_left(state.title(), p.x + PAD, p.y + PAD, FONT_SIZE_HEADER, TEXT_COLOR);

    let label = |text: &str, field: &Rect| {
        draw_text_top_left(text, field.x, field.y - LABEL_GAP, FONT_SIZE_SMALL, TEXT_DIM);
    };

    label("Name", &layout.name);
    draw_text_input(ctx, layout.name, &mut state.name, "What's the idea?", FONT_SIZE_CONTENT);

    label("Importance", &layout.importance);
    if let Some(v) = stepper(ctx, layout.importance, state.importance, MIN_LEVEL, MAX_LEVEL) {
        state.importance = v;
    }
    label("Urgency", &layout.urgency);
    if let Some(v) = stepper(ctx, layout.urgency, state.urgency, MIN_LEVEL, MAX_LEVEL) {
        state.urgency = v;
    }

    label("Interval (seconds, optional)", &layout.interval);
    draw_text_input(ctx, layout.interval, &mut state.interval, "Auto", FONT_SIZE_CONTENT);

    label("Color (#RRGGBB, optional)", &layout.color);
    draw_text_input(ctx, layout.color, &mut state.color, "Auto", FONT_SIZE_CONTENT);
    let swatch = Rect::new(layout.color.right() + 8.0, layout.color.y, FIELD_H, FIELD_H);
    match parse_hex(state.color.trimmed()) {
        Some([r, g, b]) => draw_rounded_rect(swatch.x, swatch.y, swatch.w, swatch.h, 4.0, Color::from_rgba(r, g, b, 255)),
        None => draw_rounded_rect_lines(swatch.x, swatch.y, swatch.w, swatch.h, 4.0, 1.0, BORDER_COLOR),
    }

    let draft = state.to_draft();
    let submit_style = if draft.is_some() { ButtonStyle::Primary } else { ButtonStyle::Neutral };
    let submit_clicked = button(ctx, layout.submit, state.submit_label(), submit_style, FONT_SIZE_CONTENT);
    let cancel_clicked = button(ctx, layout.cancel, "Cancel", ButtonStyle::Neutral, FONT_SIZE_CONTENT);

    // Modal: nothing underneath sees this frame's press
    ctx.consumed = true;

    if cancel_clicked || backdrop_click || is_key_pressed(KeyCode::Escape) {
        return Some(FormAction::Cancel);
    }
    if submit_clicked || is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::KpEnter) {
        // Blank name: stay open
        return draft.map(FormAction::Submit);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_is_rejected() {
        let mut state = FormState::for_add();
        state.name = TextInputState::new("   ");
        assert!(state.to_draft().is_none());
    }

    #[test]
    fn test_add_draft_defaults_to_auto() {
        let mut state = FormState::for_add();
        state.name = TextInputState::new("  Write blog post ");
        state.importance = 7;
        state.urgency = 2;
        let draft = state.to_draft().unwrap();
        assert_eq!(draft.name, "Write blog post");
        assert_eq!(draft.importance, 7);
        assert_eq!(draft.urgency, 2);
        assert_eq!(draft.interval, None);
        assert_eq!(draft.color, None);
    }

    #[test]
    fn test_interval_and_color_inputs() {
        let mut state = FormState::for_add();
        state.name = TextInputState::new("Ship");
        state.interval = TextInputState::new("2.5");
        state.color = TextInputState::new("#ff6b6b");
        let draft = state.to_draft().unwrap();
        assert_eq!(draft.interval, Some(2.5));
        assert_eq!(draft.color.as_deref(), Some("#FF6B6B"));

        // Black is the "nothing picked" value
        state.color = TextInputState::new("#000000");
        assert_eq!(state.to_draft().unwrap().color, None);
    }

    #[test]
    fn test_parse_interval() {
        assert_eq!(parse_interval("3"), Some(3.0));
        assert_eq!(parse_interval(""), None);
        assert_eq!(parse_interval("abc"), None);
        assert_eq!(parse_interval("-2"), None);
        assert_eq!(parse_interval("0"), None);
        assert_eq!(parse_interval("NaN"), None);
    }

    #[test]
    fn test_edit_prefills_from_planet() {
        let planet = Planet::new(
            PlanetId(42),
            PlanetDraft::new("Refactor", 3, 9).with_interval(4.0).with_color("#4ECDC4"),
        );
        let state = FormState::for_edit(&planet);
        assert_eq!(state.editing, Some(PlanetId(42)));
        assert_eq!(state.title(), "Edit Idea");
        assert_eq!(state.submit_label(), "Save Changes");
        assert_eq!(state.interval.text, "4");
        assert_eq!(state.color.text, "#4ECDC4");

        let draft = state.to_draft().unwrap();
        assert_eq!(draft.interval, Some(4.0));
        assert_eq!(draft.color.as_deref(), Some("#4ECDC4"));
    }

    #[test]
    fn test_layout_fits_narrow_viewport() {
        let layout = FormLayout::compute(Viewport::new(320.0, 640.0));
        assert_eq!(layout.panel.w, 280.0);
        assert_eq!(layout.panel.x, 20.0);
        assert!(layout.color.bottom() < layout.submit.y);
        assert!(layout.submit.bottom() <= layout.panel.bottom());
    }
}
