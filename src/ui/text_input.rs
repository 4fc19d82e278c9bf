//! Single-line text field with cursor and keyboard handling

use macroquad::prelude::*;

use super::{draw_rounded_rect, draw_rounded_rect_lines, Rect, UiContext, ACCENT_COLOR, BORDER_COLOR};

/// State for a text field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextInputState {
    pub text: String,
    /// Cursor position (byte index, always on a char boundary)
    pub cursor: usize,
    pub blink_timer: f32,
    pub focused: bool,
}

impl TextInputState {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self {
            text,
            cursor,
            blink_timer: 0.0,
            focused: false,
        }
    }

    pub fn focused(mut self) -> Self {
        self.focused = true;
        self
    }

    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .chars()
            .next()
            .map(|ch| self.cursor + ch.len_utf8())
            .unwrap_or(self.text.len())
    }

    pub fn move_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    pub fn move_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn insert_char(&mut self, ch: char) {
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = self.prev_boundary();
        self.text.drain(prev..self.cursor);
        self.cursor = prev;
    }

    /// Delete the character after the cursor
    pub fn delete(&mut self) {
        let next = self.next_boundary();
        self.text.drain(self.cursor..next);
    }

    /// Consume this frame's keyboard input. Returns true if the text changed.
    pub fn handle_input(&mut self) -> bool {
        if !self.focused {
            return false;
        }
        let before = self.text.clone();
        let before_cursor = self.cursor;
        self.blink_timer += get_frame_time();

        if is_key_pressed(KeyCode::Left) {
            self.move_left();
        }
        if is_key_pressed(KeyCode::Right) {
            self.move_right();
        }
        if is_key_pressed(KeyCode::Home) {
            self.move_home();
        }
        if is_key_pressed(KeyCode::End) {
            self.move_end();
        }
        if is_key_pressed(KeyCode::Backspace) {
            self.backspace();
        }
        if is_key_pressed(KeyCode::Delete) {
            self.delete();
        }

        while let Some(ch) = get_char_pressed() {
            if !ch.is_control() {
                self.insert_char(ch);
            }
        }

        let changed = self.text != before;
        if changed || self.cursor != before_cursor {
            self.blink_timer = 0.0;
        }
        changed
    }
}

const INPUT_BG: Color = Color::new(1.0, 1.0, 1.0, 0.06);
const INPUT_TEXT: Color = Color::new(1.0, 1.0, 1.0, 0.95);
const INPUT_PLACEHOLDER: Color = Color::new(1.0, 1.0, 1.0, 0.35);

/// Draw a text field. Clicking it grabs focus; clicking elsewhere drops it.
/// Returns true if the text changed.
pub fn draw_text_input(
    ctx: &mut UiContext,
    rect: Rect,
    state: &mut TextInputState,
    placeholder: &str,
    font_size: f32,
) -> bool {
    if ctx.mouse.left_pressed {
        state.focused = ctx.mouse.inside(&rect);
        if state.focused {
            ctx.consumed = true;
            state.move_end();
        }
    }

    draw_rounded_rect(rect.x, rect.y, rect.w, rect.h, 4.0, INPUT_BG);
    let border = if state.focused { ACCENT_COLOR } else { BORDER_COLOR };
    draw_rounded_rect_lines(rect.x, rect.y, rect.w, rect.h, 4.0, 1.0, border);

    let changed = state.handle_input();

    let padding = 8.0;
    let text_x = rect.x + padding;
    let text_y = rect.y + (rect.h + font_size * 0.7) / 2.0;

    if state.text.is_empty() && !state.focused {
        draw_text(placeholder, text_x, text_y, font_size, INPUT_PLACEHOLDER);
    } else {
        draw_text(&state.text, text_x, text_y, font_size, INPUT_TEXT);
    }

    if state.focused && (state.blink_timer % 1.0) < 0.5 {
        let offset = measure_text(&state.text[..state.cursor], None, font_size as u16, 1.0).width;
        let cursor_x = text_x + offset;
        draw_line(cursor_x, rect.y + 6.0, cursor_x, rect.bottom() - 6.0, 1.5, INPUT_TEXT);
    }

    changed
}
