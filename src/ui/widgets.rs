//! Basic UI widgets

use std::f32::consts::FRAC_PI_2;

use macroquad::prelude::*;

use super::{
    Rect, UiContext, ACCENT_COLOR, BUTTON_RADIUS, DANGER_COLOR, NEUTRAL_COLOR, NEUTRAL_HOVER,
    TEXT_COLOR,
};

/// Visual flavor of a text button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Primary,
    Danger,
    Neutral,
}

impl ButtonStyle {
    fn fill(self, hovered: bool) -> Color {
        let base = match self {
            ButtonStyle::Primary => ACCENT_COLOR,
            ButtonStyle::Danger => DANGER_COLOR,
            ButtonStyle::Neutral => return if hovered { NEUTRAL_HOVER } else { NEUTRAL_COLOR },
        };
        if hovered {
            Color::new(
                (base.r + 0.08).min(1.0),
                (base.g + 0.08).min(1.0),
                (base.b + 0.08).min(1.0),
                base.a,
            )
        } else {
            base
        }
    }
}

/// Draw a text button, returns true if clicked
pub fn button(ctx: &mut UiContext, rect: Rect, label: &str, style: ButtonStyle, font_size: f32) -> bool {
    let id = ctx.next_id();
    let hovered = ctx.mouse.inside(&rect);
    let clicked = ctx.mouse.clicked(&rect);

    if hovered {
        ctx.set_hot(id);
    }
    if clicked {
        ctx.consumed = true;
    }

    draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, BUTTON_RADIUS, style.fill(hovered));
    draw_text_centered(label, &rect, font_size, TEXT_COLOR);

    clicked
}

/// Round button (caller paints the glyph), returns true if clicked
pub fn round_button(ctx: &mut UiContext, cx: f32, cy: f32, radius: f32, fill: Color) -> bool {
    let id = ctx.next_id();
    let dist = ((ctx.mouse.x - cx).powi(2) + (ctx.mouse.y - cy).powi(2)).sqrt();
    let hovered = dist <= radius;
    let clicked = hovered && ctx.mouse.left_pressed;

    if hovered {
        ctx.set_hot(id);
    }
    if clicked {
        ctx.consumed = true;
    }

    draw_circle(cx + 2.0, cy + 3.0, radius, Color::new(0.0, 0.0, 0.0, 0.3));
    let fill = if hovered {
        Color::new((fill.r + 0.08).min(1.0), (fill.g + 0.08).min(1.0), (fill.b + 0.08).min(1.0), fill.a)
    } else {
        fill
    };
    draw_circle(cx, cy, radius, fill);

    clicked
}

/// Horizontal slider over 0.0..=1.0, returns the new value while dragged
pub fn slider(ctx: &mut UiContext, rect: Rect, value: f32) -> Option<f32> {
    let id = ctx.next_id();
    let hovered = ctx.mouse.inside(&rect);

    if hovered {
        ctx.set_hot(id);
        if ctx.mouse.left_pressed && ctx.dragging.is_none() {
            ctx.start_drag(id);
        }
    }

    let track_y = rect.center_y();
    let value = value.clamp(0.0, 1.0);
    let knob_x = rect.x + rect.w * value;

    draw_rounded_rect(rect.x, track_y - 2.0, rect.w, 4.0, 2.0, NEUTRAL_HOVER);
    draw_rounded_rect(rect.x, track_y - 2.0, (knob_x - rect.x).max(4.0), 4.0, 2.0, ACCENT_COLOR);
    let knob_color = if ctx.is_dragging(id) || hovered { WHITE } else { Color::new(0.85, 0.85, 0.9, 1.0) };
    draw_circle(knob_x, track_y, 7.0, knob_color);

    if ctx.is_dragging(id) {
        let new_value = slider_value_at(&rect, ctx.mouse.x);
        if (new_value - value).abs() > f32::EPSILON {
            return Some(new_value);
        }
    }
    None
}

/// Map a pointer x onto a slider track
pub fn slider_value_at(rect: &Rect, x: f32) -> f32 {
    if rect.w <= 0.0 {
        return 0.0;
    }
    ((x - rect.x) / rect.w).clamp(0.0, 1.0)
}

/// `[-] value [+]` stepper, returns the new value when a side was clicked
pub fn stepper(ctx: &mut UiContext, rect: Rect, value: i32, min: i32, max: i32) -> Option<i32> {
    let side = rect.h;
    let minus = Rect::new(rect.x, rect.y, side, rect.h);
    let plus = Rect::new(rect.right() - side, rect.y, side, rect.h);
    let middle = Rect::new(minus.right(), rect.y, rect.w - side * 2.0, rect.h);

    let mut result = None;
    if button(ctx, minus, "-", ButtonStyle::Neutral, 18.0) && value > min {
        result = Some(value - 1);
    }
    if button(ctx, plus, "+", ButtonStyle::Neutral, 18.0) && value < max {
        result = Some(value + 1);
    }
    draw_text_centered(&value.to_string(), &middle, 16.0, TEXT_COLOR);
    result
}

/// Draw text centered in a rect - rounded to integer pixels for crisp rendering
pub fn draw_text_centered(text: &str, rect: &Rect, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    let x = (rect.center_x() - dims.width / 2.0).round();
    let y = (rect.center_y() - dims.height / 2.0 + dims.offset_y).round();
    draw_text(text, x, y, font_size, color);
}

/// Draw text with its top-left at (x, y)
pub fn draw_text_top_left(text: &str, x: f32, y: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(text, x.round(), (y + dims.offset_y).round(), font_size, color);
}

/// Draw a rounded rectangle.
///
/// Built from non-overlapping pieces so translucent fills blend evenly.
pub fn draw_rounded_rect(x: f32, y: f32, w: f32, h: f32, r: f32, color: Color) {
    let r = r.min(w / 2.0).min(h / 2.0).max(0.0);
    // Middle column, then the two side strips between the corners
    draw_rectangle(x + r, y, w - r * 2.0, h, color);
    draw_rectangle(x, y + r, r, h - r * 2.0, color);
    draw_rectangle(x + w - r, y + r, r, h - r * 2.0, color);
    if r <= 0.0 {
        return;
    }
    draw_corner(x + r, y + r, r, 2.0 * FRAC_PI_2, color);
    draw_corner(x + w - r, y + r, r, 3.0 * FRAC_PI_2, color);
    draw_corner(x + w - r, y + h - r, r, 0.0, color);
    draw_corner(x + r, y + h - r, r, FRAC_PI_2, color);
}

/// Outline for a rounded rectangle
pub fn draw_rounded_rect_lines(x: f32, y: f32, w: f32, h: f32, r: f32, thickness: f32, color: Color) {
    let r = r.min(w / 2.0).min(h / 2.0).max(0.0);
    draw_line(x + r, y, x + w - r, y, thickness, color);
    draw_line(x + r, y + h, x + w - r, y + h, thickness, color);
    draw_line(x, y + r, x, y + h - r, thickness, color);
    draw_line(x + w, y + r, x + w, y + h - r, thickness, color);
    if r <= 0.0 {
        return;
    }
    for (cx, cy, start) in [
        (x + r, y + r, 2.0 * FRAC_PI_2),
        (x + w - r, y + r, 3.0 * FRAC_PI_2),
        (x + w - r, y + h - r, 0.0),
        (x + r, y + h - r, FRAC_PI_2),
    ] {
        let pts = corner_points(cx, cy, r, start);
        for pair in pts.windows(2) {
            draw_line(pair[0].x, pair[0].y, pair[1].x, pair[1].y, thickness, color);
        }
    }
}

const CORNER_STEPS: usize = 6;

/// Quarter-circle fan starting at `start` radians (clockwise in screen space)
fn draw_corner(cx: f32, cy: f32, r: f32, start: f32, color: Color) {
    let center = vec2(cx, cy);
    let pts = corner_points(cx, cy, r, start);
    for pair in pts.windows(2) {
        draw_triangle(center, pair[0], pair[1], color);
    }
}

fn corner_points(cx: f32, cy: f32, r: f32, start: f32) -> [Vec2; CORNER_STEPS + 1] {
    let mut pts = [Vec2::ZERO; CORNER_STEPS + 1];
    for (i, pt) in pts.iter_mut().enumerate() {
        let a = start + FRAC_PI_2 * i as f32 / CORNER_STEPS as f32;
        *pt = vec2(cx + a.cos() * r, cy + a.sin() * r);
    }
    pts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slider_value_at_clamps() {
        let track = Rect::new(100.0, 0.0, 200.0, 20.0);
        assert_eq!(slider_value_at(&track, 100.0), 0.0);
        assert_eq!(slider_value_at(&track, 200.0), 0.5);
        assert_eq!(slider_value_at(&track, 50.0), 0.0);
        assert_eq!(slider_value_at(&track, 999.0), 1.0);
    }

    #[test]
    fn test_corner_points_span_quarter_circle() {
        // Bottom-right corner sweeps from +x to +y
        let pts = corner_points(0.0, 0.0, 10.0, 0.0);
        assert!((pts[0].x - 10.0).abs() < 1e-4 && pts[0].y.abs() < 1e-4);
        assert!(pts[CORNER_STEPS].x.abs() < 1e-4 && (pts[CORNER_STEPS].y - 10.0).abs() < 1e-4);
    }
}
