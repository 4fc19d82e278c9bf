//! UI Theme - Shared colors and styling constants
//!
//! Centralized color definitions for the canvas overlay, side panel and
//! dialogs.

use macroquad::prelude::Color;

// =============================================================================
// Base UI Colors
// =============================================================================

/// Space backdrop
pub const SPACE_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);

/// Side panel / dialog background
pub const BG_COLOR: Color = Color::new(0.08, 0.08, 0.12, 0.96);

/// Subtle outline around panels and dialogs
pub const BORDER_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.2);

/// Backdrop dimming behind modal dialogs
pub const BACKDROP_COLOR: Color = Color::new(0.0, 0.0, 0.0, 0.6);

/// Primary text color
pub const TEXT_COLOR: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Dimmed/secondary text
pub const TEXT_DIM: Color = Color::new(1.0, 1.0, 1.0, 0.7);

/// Accent (primary buttons, slider fill, selection)
pub const ACCENT_COLOR: Color = Color::new(0.4, 0.494, 0.918, 1.0); // #667eea

/// Destructive actions
pub const DANGER_COLOR: Color = Color::new(0.863, 0.149, 0.149, 0.8); // rgba(220, 38, 38, 0.8)

/// Neutral buttons
pub const NEUTRAL_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.1);

/// Neutral button hover
pub const NEUTRAL_HOVER: Color = Color::new(1.0, 1.0, 1.0, 0.18);

/// List row background
pub const ROW_COLOR: Color = Color::new(1.0, 1.0, 1.0, 0.05);

/// Selected list row
pub const ROW_SELECTED: Color = Color::new(0.4, 0.494, 0.918, 0.3);

// =============================================================================
// Detail panel
// =============================================================================

pub const PANEL_BG: Color = Color::new(0.078, 0.078, 0.118, 0.95); // rgba(20, 20, 30, 0.95)
pub const PANEL_RADIUS: f32 = 8.0;
pub const BUTTON_RADIUS: f32 = 4.0;

// =============================================================================
// Effects
// =============================================================================

/// Shadow stops for background planets: 0.4 -> 0.2 -> 0 black
pub const SHADOW_ALPHAS: [(f32, f32); 3] = [(0.0, 0.4), (0.7, 0.2), (1.0, 0.0)];

/// Hover glow stops in the planet's own color
pub const GLOW_ALPHAS: [(f32, f32); 3] = [(0.0, 0.0), (0.5, 0.25), (1.0, 0.0)];

// =============================================================================
// Font Sizes
// =============================================================================

/// Header/title text size
pub const FONT_SIZE_HEADER: f32 = 20.0;

/// Detail panel title
pub const FONT_SIZE_TITLE: f32 = 16.0;

/// Standard content text size
pub const FONT_SIZE_CONTENT: f32 = 14.0;

/// Small/detail text size
pub const FONT_SIZE_SMALL: f32 = 12.0;

/// Smallest planet label font
pub const MIN_LABEL_FONT: f32 = 12.0;
