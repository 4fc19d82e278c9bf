//! Planet colors: palette, hex parsing and label contrast

use macroquad::prelude::Color;
use macroquad::rand::gen_range;

/// Colors handed out to planets created without an explicit color
pub const PALETTE: [&str; 15] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A", "#98D8C8",
    "#F7DC6F", "#BB8FCE", "#85C1E2", "#F8B195", "#C06C84",
    "#6C5B7B", "#355C7D", "#F67280", "#C9D787", "#3EDBF0",
];

/// Pick a random palette color
pub fn random_palette_color() -> String {
    PALETTE[gen_range(0, PALETTE.len())].to_string()
}

/// Parse `#RRGGBB` into its components
pub fn parse_hex(hex: &str) -> Option<[u8; 3]> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

/// Normalize user input to `#RRGGBB`.
///
/// The leading `#` is optional. Empty input and pure black are treated as
/// "no color chosen" and return `None`, as does anything unparseable.
pub fn normalize_user_color(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    let hex = if trimmed.starts_with('#') {
        trimmed.to_uppercase()
    } else {
        format!("#{}", trimmed.to_uppercase())
    };
    parse_hex(&hex)?;
    if hex == "#000000" {
        return None;
    }
    Some(hex)
}

/// Convert a hex color to a macroquad color with the given alpha.
/// Unparseable colors render white.
pub fn to_color(hex: &str, alpha: f32) -> Color {
    let [r, g, b] = parse_hex(hex).unwrap_or([255, 255, 255]);
    Color::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, alpha)
}

/// Perceived luminance in 0-1
pub fn luminance(rgb: [u8; 3]) -> f32 {
    let [r, g, b] = rgb;
    (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32) / 255.0
}

/// Label color that contrasts with the planet body
pub fn label_color(hex: &str, alpha: f32) -> Color {
    let rgb = parse_hex(hex).unwrap_or([255, 255, 255]);
    if luminance(rgb) > 0.5 {
        Color::new(0.0, 0.0, 0.0, alpha)
    } else {
        Color::new(1.0, 1.0, 1.0, alpha)
    }
}
