//! Scene renderer
//!
//! Draws one frame: space, stars, the background pass with its shadows,
//! the foreground pass (smallest first so big planets sit on top), hover
//! glow, labels and the detail panel for the active planet.

use macroquad::prelude::*;

use super::gradient::{draw_radial_gradient, ColorStop};
use super::panel::PanelLayout;
use super::starfield::Starfield;
use super::text::{measure_width, truncate_to_width, wrap_words};
use crate::config::{SizeSettings, GLOW_RADIUS_PCT, SHADOW_DISTANCE, SHADOW_MARGIN, SHADOW_SPREAD};
use crate::planet::color::{label_color, to_color};
use crate::planet::{resolve, Planet, PlanetId, PlanetPosition};
use crate::store::PlanetStore;
use crate::ui::{
    draw_rounded_rect, draw_rounded_rect_lines, draw_text_centered, draw_text_top_left, Rect,
    BORDER_COLOR, BUTTON_RADIUS, DANGER_COLOR, FONT_SIZE_SMALL, FONT_SIZE_TITLE, GLOW_ALPHAS,
    MIN_LABEL_FONT, NEUTRAL_COLOR, PANEL_BG, PANEL_RADIUS, SHADOW_ALPHAS, SPACE_COLOR, TEXT_COLOR,
    TEXT_DIM, ACCENT_COLOR,
};
use crate::viewport::Viewport;

/// A planet paired with where it is drawn this frame
#[derive(Debug, Clone, Copy)]
pub struct Placed<'a> {
    pub planet: &'a Planet,
    pub pos: PlanetPosition,
}

/// Split the store into draw passes: background in store order, foreground
/// sorted by ascending size.
pub fn layers<'a>(
    store: &'a PlanetStore,
    viewport: Viewport,
    settings: &SizeSettings,
) -> (Vec<Placed<'a>>, Vec<Placed<'a>>) {
    let (mut foreground, background): (Vec<_>, Vec<_>) = store
        .iter()
        .map(|planet| Placed { planet, pos: resolve(planet, viewport, settings) })
        .partition(|placed| placed.planet.is_foreground());
    foreground.sort_by(|a, b| a.pos.size.total_cmp(&b.pos.size));
    (background, foreground)
}

/// Soft shadow cast onto a background planet by a nearby foreground one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shadow {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// Shadow for `bg` when `fg` is close enough, pushed away from `fg`
pub fn shadow_for(bg: &PlanetPosition, fg: &PlanetPosition) -> Option<Shadow> {
    let distance = fg.distance_to(bg.x, bg.y);
    if distance >= fg.radius() + bg.radius() + SHADOW_MARGIN {
        return None;
    }
    let angle = (bg.y - fg.y).atan2(bg.x - fg.x);
    Some(Shadow {
        x: bg.x + angle.cos() * SHADOW_DISTANCE,
        y: bg.y + angle.sin() * SHADOW_DISTANCE,
        radius: bg.radius() + SHADOW_SPREAD,
    })
}

/// Word-wrapped planet label
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub lines: Vec<String>,
    pub font_size: f32,
    pub line_height: f32,
}

impl Label {
    pub fn layout(name: &str, size: f32, measure: impl Fn(&str, f32) -> f32) -> Self {
        let font_size = (size / 8.0).max(MIN_LABEL_FONT);
        Self {
            lines: wrap_words(name, font_size, size * 0.8, measure),
            font_size,
            line_height: font_size * 1.2,
        }
    }

    /// Vertical center of each line, block centered on `cy`
    pub fn line_centers(&self, cy: f32) -> impl Iterator<Item = f32> + '_ {
        let start = cy - (self.lines.len() as f32 - 1.0) * self.line_height / 2.0;
        (0..self.lines.len()).map(move |i| start + i as f32 * self.line_height)
    }
}

/// `Interval: 2.0s`
pub fn interval_text(interval: f32) -> String {
    format!("Interval: {:.1}s", interval)
}

fn stops(base: Color, alphas: &[(f32, f32); 3], opacity: f32) -> [ColorStop; 3] {
    alphas.map(|(t, a)| ColorStop::new(t, Color::new(base.r, base.g, base.b, a * opacity)))
}

/// Draw the whole scene. Returns the detail panel geometry when one was
/// drawn so the next hit test can use it.
pub fn draw_scene(
    store: &PlanetStore,
    starfield: &Starfield,
    viewport: Viewport,
    settings: &SizeSettings,
    active: Option<PlanetId>,
) -> Option<PanelLayout> {
    clear_background(SPACE_COLOR);
    draw_rectangle(0.0, 0.0, viewport.width, viewport.height, SPACE_COLOR);
    starfield.draw();

    let (background, foreground) = layers(store, viewport, settings);

    for bg in &background {
        for fg in &foreground {
            if let Some(shadow) = shadow_for(&bg.pos, &fg.pos) {
                let ring = stops(BLACK, &SHADOW_ALPHAS, bg.pos.opacity);
                draw_radial_gradient(shadow.x, shadow.y, 0.0, shadow.radius, &ring);
            }
        }
        draw_planet(bg, viewport);
    }

    for fg in &foreground {
        draw_planet(fg, viewport);
    }

    let placed = active.and_then(|id| foreground.iter().chain(&background).find(|p| p.planet.id == id))?;
    let layout = PanelLayout::place(&placed.pos, viewport);
    draw_detail_panel(placed.planet, &layout);
    Some(layout)
}

fn draw_planet(placed: &Placed, viewport: Viewport) {
    let Placed { planet, pos } = *placed;

    if planet.hovering && planet.is_foreground() {
        let glow = viewport.min_dim() * GLOW_RADIUS_PCT;
        let ring = stops(to_color(&planet.color, 1.0), &GLOW_ALPHAS, pos.opacity);
        draw_radial_gradient(pos.x, pos.y, pos.radius(), pos.radius() + glow, &ring);
    }

    draw_circle(pos.x, pos.y, pos.radius(), to_color(&planet.color, pos.opacity));

    let label = Label::layout(&planet.name, pos.size, measure_width);
    let color = label_color(&planet.color, pos.opacity);
    for (line, cy) in label.lines.iter().zip(label.line_centers(pos.y)) {
        draw_text_centered(line, &Rect::new(pos.x, cy, 0.0, 0.0), label.font_size, color);
    }
}

fn draw_detail_panel(planet: &Planet, layout: &PanelLayout) {
    let b = layout.bounds;
    draw_rounded_rect(b.x, b.y, b.w, b.h, PANEL_RADIUS, PANEL_BG);
    draw_rounded_rect_lines(b.x, b.y, b.w, b.h, PANEL_RADIUS, 1.0, BORDER_COLOR);

    let name = truncate_to_width(&planet.name, FONT_SIZE_TITLE, b.w - 30.0, measure_width);
    draw_text_top_left(&name, b.x + 15.0, b.y + 15.0, FONT_SIZE_TITLE, TEXT_COLOR);

    let stat = FONT_SIZE_SMALL;
    draw_text_top_left(&format!("Importance: {}", planet.importance), b.x + 15.0, b.y + 45.0, stat, TEXT_DIM);
    draw_text_top_left(&format!("Urgency: {}", planet.urgency), b.x + 15.0, b.y + 65.0, stat, TEXT_DIM);
    draw_text_top_left(&interval_text(planet.interval), b.x + 125.0, b.y + 65.0, stat, TEXT_DIM);

    for (rect, label, fill) in [
        (layout.edit, "Edit", ACCENT_COLOR),
        (layout.delete, "Del", DANGER_COLOR),
        (layout.cancel, "X", NEUTRAL_COLOR),
    ] {
        draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, BUTTON_RADIUS, fill);
        draw_text_centered(label, &rect, stat, TEXT_COLOR);
    }
}
