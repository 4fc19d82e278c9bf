//! Geometry Mapper
//!
//! Pure maps from the abstract 1-10 planet attributes to screen geometry and
//! timing. Nothing here is cached: callers recompute every frame so that
//! attribute edits and window resizes show up immediately.

use crate::config::{MAX_LEVEL, MAX_SPEED_SECS, MIN_LEVEL, MIN_SPEED_SECS};

/// Planet diameter in logical pixels.
///
/// Linear across the importance range, scaled by the smaller viewport side
/// so portrait and landscape layouts behave the same.
pub fn planet_size(importance: i32, screen_min_dim: f32, min_frac: f32, max_frac: f32) -> f32 {
    let min_px = screen_min_dim * min_frac;
    let max_px = screen_min_dim * max_frac;
    min_px + (importance - 1) as f32 * (max_px - min_px) / 9.0
}

/// Seconds needed to cross the screen once.
///
/// Higher urgency means a slower crossing (urgency 10 takes 60s). This is
/// the established behaviour and is kept as-is.
pub fn urgency_to_speed(urgency: i32) -> f32 {
    MIN_SPEED_SECS + (urgency - 1) as f32 * (MAX_SPEED_SECS - MIN_SPEED_SECS) / 9.0
}

/// Pause between legs when the user did not pick an interval
pub fn default_interval(urgency: i32) -> f32 {
    if urgency >= 9 {
        1.0
    } else if urgency >= 7 {
        2.0
    } else if urgency >= 5 {
        3.0
    } else if urgency >= 3 {
        4.0
    } else {
        5.0
    }
}

/// Clamp an importance or urgency value into 1..=10
pub fn clamp_level(value: i32) -> i32 {
    value.clamp(MIN_LEVEL, MAX_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_endpoints() {
        assert!((planet_size(1, 1000.0, 0.13, 0.85) - 130.0).abs() < 1e-3);
        assert!((planet_size(10, 1000.0, 0.13, 0.85) - 850.0).abs() < 1e-3);
    }

    #[test]
    fn test_size_monotonic_in_importance() {
        for dim in [320.0, 768.0, 1440.0] {
            let mut last = f32::MIN;
            for importance in 1..=10 {
                let size = planet_size(importance, dim, 0.13, 0.85);
                assert!(size >= last, "size dropped at importance {}", importance);
                last = size;
            }
        }
    }

    #[test]
    fn test_inverted_fractions_invert_mapping() {
        let small = planet_size(10, 1000.0, 0.8, 0.2);
        let big = planet_size(1, 1000.0, 0.8, 0.2);
        assert!(small < big);
    }

    #[test]
    fn test_speed_endpoints_and_monotonic() {
        assert!((urgency_to_speed(1) - 1.0).abs() < 1e-5);
        assert!((urgency_to_speed(10) - 60.0).abs() < 1e-4);

        let mut last = 0.0;
        for urgency in 1..=10 {
            let speed = urgency_to_speed(urgency);
            assert!(speed >= last);
            last = speed;
        }
    }

    #[test]
    fn test_default_interval_tiers() {
        assert_eq!(default_interval(10), 1.0);
        assert_eq!(default_interval(9), 1.0);
        assert_eq!(default_interval(8), 2.0);
        assert_eq!(default_interval(7), 2.0);
        assert_eq!(default_interval(5), 3.0);
        assert_eq!(default_interval(3), 4.0);
        assert_eq!(default_interval(2), 5.0);
        assert_eq!(default_interval(1), 5.0);
    }

    #[test]
    fn test_clamp_level() {
        assert_eq!(clamp_level(-4), 1);
        assert_eq!(clamp_level(0), 1);
        assert_eq!(clamp_level(7), 7);
        assert_eq!(clamp_level(42), 10);
    }
}
