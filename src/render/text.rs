//! Text layout helpers
//!
//! Wrapping and truncation take the width metric as a parameter: drawing
//! code passes `measure_width` (the loaded font), tests pass a fixed
//! per-character advance.

use macroquad::text::measure_text;

/// Rendered width of `text` in the default font
pub fn measure_width(text: &str, font_size: f32) -> f32 {
    measure_text(text, None, font_size as u16, 1.0).width
}

/// Greedy word wrap: words join a line while it still fits `max_width`.
/// A word that is too long on its own still gets a line of its own.
pub fn wrap_words(
    text: &str,
    font_size: f32,
    max_width: f32,
    measure: impl Fn(&str, f32) -> f32,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{} {}", current, word);
        if measure(&candidate, font_size) > max_width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }

    // An empty name still produces one (empty) line
    lines.push(current);
    lines
}

/// Shorten `text` to 15 characters plus an ellipsis when it is wider than `max_width`
pub fn truncate_to_width(
    text: &str,
    font_size: f32,
    max_width: f32,
    measure: impl Fn(&str, f32) -> f32,
) -> String {
    if measure(text, font_size) <= max_width {
        return text.to_string();
    }
    let head: String = text.chars().take(15).collect();
    format!("{}...", head)
}
