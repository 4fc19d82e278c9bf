//! Side panel: planet list, size sliders, bulk adjustments, profile buttons

use macroquad::prelude::*;

use super::{
    button, draw_rounded_rect, draw_text_top_left, round_button, slider, ButtonStyle, Rect,
    UiContext, BG_COLOR, BORDER_COLOR, FONT_SIZE_CONTENT, FONT_SIZE_HEADER, FONT_SIZE_SMALL,
    NEUTRAL_HOVER, ROW_COLOR, ROW_SELECTED, TEXT_COLOR, TEXT_DIM,
};
use crate::config::SizeSettings;
use crate::planet::color::to_color;
use crate::planet::{Planet, PlanetId};
use crate::render::text::{measure_width, truncate_to_width};
use crate::store::PlanetStore;
use crate::viewport::Viewport;

/// Persistent side panel UI state
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidePanelState {
    pub open: bool,
    /// List scroll offset in pixels
    pub scroll: f32,
}

/// What the user did in the side panel this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidePanelAction {
    SetMinPercent(i32),
    SetMaxPercent(i32),
    AdjustImportance(i32),
    AdjustUrgency(i32),
    AdjustInterval(i32),
    SaveProfile,
    LoadProfile,
    Select(PlanetId),
    Delete(PlanetId),
}

pub const PANEL_WIDTH: f32 = 320.0;
pub const TOGGLE_RECT: Rect = Rect::new(15.0, 15.0, 44.0, 44.0);

const PAD: f32 = 20.0;
const ROW_HEIGHT: f32 = 64.0;
const ROW_GAP: f32 = 8.0;
const BULK_HEIGHT: f32 = 30.0;

/// `3 planets orbiting` / `1 planet orbiting`
pub fn count_label(count: usize) -> String {
    format!("{} planet{} orbiting", count, if count == 1 { "" } else { "s" })
}

/// `Imp 5  Urg 3  Int 2.0s`
pub fn stats_label(planet: &Planet) -> String {
    format!(
        "Imp {}   Urg {}   Int {:.1}s",
        planet.importance, planet.urgency, planet.interval
    )
}

/// Fixed regions of the open panel
#[derive(Debug, Clone, PartialEq)]
pub struct SidePanelLayout {
    pub panel: Rect,
    pub min_slider: Rect,
    pub max_slider: Rect,
    /// Imp+, Urg+, Int+, Imp-, Urg-, Int-
    pub bulk: Vec<Rect>,
    pub save: Rect,
    pub load: Rect,
    pub list: Rect,
}

impl SidePanelLayout {
    pub fn compute(viewport: Viewport) -> Self {
        let panel = Rect::new(0.0, 0.0, PANEL_WIDTH.min(viewport.width), viewport.height);
        let x = panel.x + PAD;
        let w = (panel.w - PAD * 2.0).max(0.0);

        let min_slider = Rect::new(x, 150.0, w, 20.0);
        let max_slider = Rect::new(x, 200.0, w, 20.0);

        let mut bulk = Rect::new(x, 236.0, w, BULK_HEIGHT).columns(3, 8.0);
        bulk.extend(Rect::new(x, 236.0 + BULK_HEIGHT + 8.0, w, BULK_HEIGHT).columns(3, 8.0));

        let profile = Rect::new(x, 320.0, w, 32.0).columns(2, 8.0);

        let list_top = 372.0;
        let list = Rect::new(x, list_top, w, (panel.bottom() - list_top - PAD).max(0.0));

        Self {
            panel,
            min_slider,
            max_slider,
            bulk,
            save: profile[0],
            load: profile[1],
            list,
        }
    }

    /// Row `index` of the planet list with the list scrolled by `scroll`
    pub fn row(&self, index: usize, scroll: f32) -> Rect {
        Rect::new(
            self.list.x,
            self.list.y + index as f32 * (ROW_HEIGHT + ROW_GAP) - scroll,
            self.list.w,
            ROW_HEIGHT,
        )
    }

    /// Largest useful scroll offset for `count` rows
    pub fn max_scroll(&self, count: usize) -> f32 {
        let content = count as f32 * (ROW_HEIGHT + ROW_GAP) - ROW_GAP;
        (content - self.list.h).max(0.0)
    }
}

/// Hamburger / close toggle in the top-left corner, returns true if clicked
pub fn draw_panel_toggle(ctx: &mut UiContext, open: bool) -> bool {
    let r = TOGGLE_RECT;
    let hovered = ctx.mouse.inside(&r);
    let clicked = ctx.mouse.clicked(&r);
    if clicked {
        ctx.consumed = true;
    }

    let fill = if hovered { NEUTRAL_HOVER } else { Color::new(1.0, 1.0, 1.0, 0.1) };
    draw_rounded_rect(r.x, r.y, r.w, r.h, 8.0, fill);

    let (cx, cy) = (r.center_x(), r.center_y());
    if open {
        draw_line(cx - 9.0, cy - 9.0, cx + 9.0, cy + 9.0, 2.5, TEXT_COLOR);
        draw_line(cx + 9.0, cy - 9.0, cx - 9.0, cy + 9.0, 2.5, TEXT_COLOR);
    } else {
        for dy in [-7.0, 0.0, 7.0] {
            draw_line(cx - 10.0, cy + dy, cx + 10.0, cy + dy, 2.5, TEXT_COLOR);
        }
    }
    clicked
}

/// Floating "+" button in the bottom-right corner, returns true if clicked
pub fn draw_add_button(ctx: &mut UiContext, viewport: Viewport) -> bool {
    let radius = 30.0;
    let (cx, cy) = (viewport.width - 30.0 - radius, viewport.height - 30.0 - radius);
    let clicked = round_button(ctx, cx, cy, radius, super::ACCENT_COLOR);
    draw_line(cx - 12.0, cy, cx + 12.0, cy, 3.0, TEXT_COLOR);
    draw_line(cx, cy - 12.0, cx, cy + 12.0, 3.0, TEXT_COLOR);
    clicked
}

/// Draw the open side panel
pub fn draw_side_panel(
    ctx: &mut UiContext,
    state: &mut SidePanelState,
    store: &PlanetStore,
    settings: &SizeSettings,
    selected: Option<PlanetId>,
    viewport: Viewport,
) -> Option<SidePanelAction> {
    let layout = SidePanelLayout::compute(viewport);
    let p = layout.panel;
    ctx.claim(&p);

    draw_rectangle(p.x, p.y, p.w, p.h, BG_COLOR);
    draw_line(p.right(), p.y, p.right(), p.bottom(), 1.0, BORDER_COLOR);

    let mut action = None;

    draw_text_top_left("Your Ideas", p.x + PAD + 56.0, 28.0, FONT_SIZE_HEADER, TEXT_COLOR);
    draw_text_top_left(&count_label(store.len()), p.x + PAD, 88.0, FONT_SIZE_CONTENT, TEXT_DIM);

    // Size sliders
    let min_label = format!("Min size: {}%", settings.min_percent());
    draw_text_top_left(&min_label, layout.min_slider.x, layout.min_slider.y - 20.0, FONT_SIZE_SMALL, TEXT_DIM);
    if let Some(v) = slider(ctx, layout.min_slider, settings.min) {
        action = Some(SidePanelAction::SetMinPercent((v * 100.0).round() as i32));
    }
    let max_label = format!("Max size: {}%", settings.max_percent());
    draw_text_top_left(&max_label, layout.max_slider.x, layout.max_slider.y - 20.0, FONT_SIZE_SMALL, TEXT_DIM);
    if let Some(v) = slider(ctx, layout.max_slider, settings.max) {
        action = Some(SidePanelAction::SetMaxPercent((v * 100.0).round() as i32));
    }

    // Bulk adjustments
    let bulk = [
        ("Imp +", SidePanelAction::AdjustImportance(1)),
        ("Urg +", SidePanelAction::AdjustUrgency(1)),
        ("Int +", SidePanelAction::AdjustInterval(1)),
        ("Imp -", SidePanelAction::AdjustImportance(-1)),
        ("Urg -", SidePanelAction::AdjustUrgency(-1)),
        ("Int -", SidePanelAction::AdjustInterval(-1)),
    ];
    for ((label, bulk_action), rect) in bulk.into_iter().zip(layout.bulk.iter().copied()) {
        if button(ctx, rect, label, ButtonStyle::Neutral, FONT_SIZE_SMALL) {
            action = Some(bulk_action);
        }
    }

    if button(ctx, layout.save, "Save Profile", ButtonStyle::Primary, FONT_SIZE_SMALL) {
        action = Some(SidePanelAction::SaveProfile);
    }
    if button(ctx, layout.load, "Load Profile", ButtonStyle::Neutral, FONT_SIZE_SMALL) {
        action = Some(SidePanelAction::LoadProfile);
    }

    // Planet list
    let max_scroll = layout.max_scroll(store.len());
    if ctx.mouse.inside(&layout.list) && ctx.mouse.scroll != 0.0 {
        state.scroll -= ctx.mouse.scroll * 30.0;
    }
    state.scroll = state.scroll.clamp(0.0, max_scroll);

    for (i, planet) in store.iter().enumerate() {
        let row = layout.row(i, state.scroll);
        // Rows partially outside the list area are skipped
        if row.y < layout.list.y || row.bottom() > layout.list.bottom() {
            continue;
        }
        if let Some(row_action) = draw_planet_row(ctx, row, planet, selected == Some(planet.id)) {
            action = Some(row_action);
        }
    }

    action
}

fn draw_planet_row(ctx: &mut UiContext, row: Rect, planet: &Planet, selected: bool) -> Option<SidePanelAction> {
    let bg = if selected { ROW_SELECTED } else { ROW_COLOR };
    draw_rounded_rect(row.x, row.y, row.w, row.h, 6.0, bg);

    let inner = row.pad(10.0);
    let delete = Rect::new(inner.right() - 56.0, inner.center_y() - 12.0, 56.0, 24.0);

    let name = truncate_to_width(&planet.name, FONT_SIZE_CONTENT, inner.w - 90.0, measure_width);
    draw_text_top_left(&name, inner.x, inner.y, FONT_SIZE_CONTENT, TEXT_COLOR);
    draw_circle(delete.x - 16.0, inner.y + 8.0, 8.0, to_color(&planet.color, 1.0));
    draw_text_top_left(&stats_label(planet), inner.x, inner.y + 26.0, FONT_SIZE_SMALL, TEXT_DIM);

    if button(ctx, delete, "Delete", ButtonStyle::Danger, FONT_SIZE_SMALL) {
        return Some(SidePanelAction::Delete(planet.id));
    }
    if ctx.mouse.clicked(&row) {
        return Some(SidePanelAction::Select(planet.id));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planet::PlanetDraft;
    use crate::ui::MouseState;

    #[test]
    fn test_count_label_pluralizes() {
        assert_eq!(count_label(0), "0 planets orbiting");
        assert_eq!(count_label(1), "1 planet orbiting");
        assert_eq!(count_label(4), "4 planets orbiting");
    }

    #[test]
    fn test_stats_label() {
        let planet = Planet::new(PlanetId(1), PlanetDraft::new("x", 5, 3).with_interval(2.0));
        assert_eq!(stats_label(&planet), "Imp 5   Urg 3   Int 2.0s");
    }

    #[test]
    fn test_layout_regions_do_not_overlap() {
        let layout = SidePanelLayout::compute(Viewport::new(1200.0, 900.0));
        assert_eq!(layout.panel.w, PANEL_WIDTH);
        assert_eq!(layout.bulk.len(), 6);
        assert!(layout.min_slider.bottom() < layout.max_slider.y);
        assert!(layout.max_slider.bottom() < layout.bulk[0].y);
        assert!(layout.bulk[5].bottom() < layout.save.y);
        assert!(layout.save.bottom() < layout.list.y);
        assert!(layout.list.bottom() <= layout.panel.bottom());
    }

    #[test]
    fn test_rows_and_scroll() {
        let layout = SidePanelLayout::compute(Viewport::new(1200.0, 900.0));
        let first = layout.row(0, 0.0);
        let second = layout.row(1, 0.0);
        assert_eq!(first.y, layout.list.y);
        assert_eq!(second.y - first.y, ROW_HEIGHT + ROW_GAP);
        assert_eq!(layout.row(1, 72.0).y, layout.list.y);

        assert_eq!(layout.max_scroll(0), 0.0);
        assert_eq!(layout.max_scroll(2), 0.0);
        // 20 rows overflow a 508px list
        let expected = 20.0 * 72.0 - 8.0 - layout.list.h;
        assert!((layout.max_scroll(20) - expected).abs() < 1e-3);
    }

    #[test]
    fn test_controls_ignore_press_while_modal_open() {
        let layout = SidePanelLayout::compute(Viewport::new(1200.0, 900.0));
        let target = layout.bulk[0];
        let mut ctx = UiContext::new();
        ctx.begin_frame(MouseState {
            x: target.center_x(),
            y: target.center_y(),
            left_down: true,
            left_pressed: true,
            ..Default::default()
        });
        assert!(ctx.mouse.clicked(&target));

        let live = ctx.suspend_input();
        for rect in layout.bulk.iter().chain([&layout.min_slider, &layout.save, &layout.load, &TOGGLE_RECT]) {
            assert!(!ctx.mouse.clicked(rect));
            assert!(!ctx.mouse.inside(rect));
        }
        ctx.claim(&layout.panel);
        assert!(!ctx.consumed);
        assert!(!ctx.over_ui());

        // The modal drawn afterwards sees the real press
        ctx.resume_input(live);
        assert!(ctx.mouse.clicked(&target));
    }

    #[test]
    fn test_panel_narrower_than_small_screen() {
        let layout = SidePanelLayout::compute(Viewport::new(280.0, 600.0));
        assert_eq!(layout.panel.w, 280.0);
        assert!(layout.list.right() <= 280.0);
    }
}
