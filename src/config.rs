//! Tuning constants and runtime-adjustable settings
//!
//! Compile-time constants live here so the geometry, renderer and hit tester
//! all agree on the same numbers. `SizeSettings` is the only piece the user
//! can change at runtime; it is persisted separately from the planets.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// =============================================================================
// Size mapping defaults
// =============================================================================

/// Smallest planet (importance 1) as a fraction of the smaller viewport side
pub const DEFAULT_MIN_SIZE_FRAC: f32 = 0.13;

/// Largest planet (importance 10) as a fraction of the smaller viewport side
pub const DEFAULT_MAX_SIZE_FRAC: f32 = 0.85;

// =============================================================================
// Motion
// =============================================================================

/// Seconds to cross the screen at urgency 1
pub const MIN_SPEED_SECS: f32 = 1.0;

/// Seconds to cross the screen at urgency 10
pub const MAX_SPEED_SECS: f32 = 60.0;

/// Logical tick length. The loop advances by this much every frame
/// regardless of the real frame time.
pub const FRAME_DT_MS: f32 = 16.67;

/// Bounds applied by the bulk interval adjustment
pub const MIN_INTERVAL_SECS: f32 = 1.0;
pub const MAX_INTERVAL_SECS: f32 = 60.0;

/// Importance / urgency range
pub const MIN_LEVEL: i32 = 1;
pub const MAX_LEVEL: i32 = 10;

// =============================================================================
// Background layer
// =============================================================================

pub const BACKGROUND_SCALE: f32 = 0.7;
pub const BACKGROUND_OPACITY: f32 = 0.6;

// =============================================================================
// Scene
// =============================================================================

/// Stars per square logical pixel
pub const STAR_COUNT_DENSITY: f32 = 0.00015;

/// Hover glow width as a fraction of the smaller viewport side
pub const GLOW_RADIUS_PCT: f32 = 0.02;

/// Extra distance (px) at which a background planet still casts a shadow
pub const SHADOW_MARGIN: f32 = 40.0;

/// Shadow offset away from the foreground planet (px)
pub const SHADOW_DISTANCE: f32 = 8.0;

/// Shadow radius beyond the planet radius (px)
pub const SHADOW_SPREAD: f32 = 10.0;

/// Portrait/landscape flips wait this long before the layout is recomputed
pub const ORIENTATION_SETTLE_SECS: f64 = 0.1;

// =============================================================================
// Storage
// =============================================================================

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "PLANET_IDEAS_DATA_DIR";

/// Application folder name inside the platform data directory
pub const APP_DIR_NAME: &str = "planet-ideas";

pub const PLANETS_FILE: &str = "planets.json";
pub const SETTINGS_FILE: &str = "settings.json";

/// Resolve the directory planets and settings are stored in.
///
/// `PLANET_IDEAS_DATA_DIR` wins, then the platform data directory, then the
/// working directory.
pub fn data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    platform_data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(not(target_arch = "wasm32"))]
fn platform_data_dir() -> Option<PathBuf> {
    dirs::data_dir()
}

#[cfg(target_arch = "wasm32")]
fn platform_data_dir() -> Option<PathBuf> {
    None
}

/// User-adjustable size mapping (both values are 0-1 fractions).
///
/// No ordering is enforced: `min > max` inverts the mapping so that more
/// important planets get smaller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeSettings {
    pub min: f32,
    pub max: f32,
}

impl Default for SizeSettings {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_SIZE_FRAC,
            max: DEFAULT_MAX_SIZE_FRAC,
        }
    }
}

impl SizeSettings {
    /// Slider value (0-100) for the minimum fraction
    pub fn min_percent(&self) -> i32 {
        (self.min * 100.0).round() as i32
    }

    /// Slider value (0-100) for the maximum fraction
    pub fn max_percent(&self) -> i32 {
        (self.max * 100.0).round() as i32
    }

    pub fn set_min_percent(&mut self, percent: i32) {
        self.min = percent.clamp(0, 100) as f32 / 100.0;
    }

    pub fn set_max_percent(&mut self, percent: i32) {
        self.max = percent.clamp(0, 100) as f32 / 100.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_round_trip() {
        let mut settings = SizeSettings::default();
        assert_eq!(settings.min_percent(), 13);
        assert_eq!(settings.max_percent(), 85);

        settings.set_min_percent(40);
        settings.set_max_percent(120);
        assert!((settings.min - 0.4).abs() < 1e-6);
        assert!((settings.max - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_order_is_accepted() {
        let mut settings = SizeSettings::default();
        settings.set_min_percent(90);
        settings.set_max_percent(10);
        assert!(settings.min > settings.max);
    }
}
