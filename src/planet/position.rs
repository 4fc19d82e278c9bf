//! Position Resolver
//!
//! Derives where a planet is drawn this frame from its phase, progress and
//! orbit path. Pure: the renderer, the shadow pass and the hit tester all
//! call it freely without disturbing the animation state.

use std::f32::consts::PI;

use super::geometry::planet_size;
use super::model::{Direction, Phase, Planet};
use crate::config::{SizeSettings, BACKGROUND_OPACITY, BACKGROUND_SCALE};
use crate::viewport::Viewport;

/// Resolved screen placement for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetPosition {
    /// Center x in logical pixels
    pub x: f32,
    /// Center y in logical pixels
    pub y: f32,
    /// Diameter in logical pixels
    pub size: f32,
    pub opacity: f32,
}

impl PlanetPosition {
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }

    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        ((x - self.x).powi(2) + (y - self.y).powi(2)).sqrt()
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.distance_to(x, y) <= self.radius()
    }
}

/// Foreground diameter for a planet under the current settings and viewport
pub fn base_size(planet: &Planet, viewport: Viewport, settings: &SizeSettings) -> f32 {
    planet_size(planet.importance, viewport.min_dim(), settings.min, settings.max)
}

/// Resolve a planet's current position, size and opacity
pub fn resolve(planet: &Planet, viewport: Viewport, settings: &SizeSettings) -> PlanetPosition {
    let base = base_size(planet, viewport, settings);

    let (size, opacity, curve_sign) = match planet.phase {
        Phase::Foreground => (base, 1.0, planet.orbit_path.curve_direction),
        Phase::Background => (
            base * BACKGROUND_SCALE,
            BACKGROUND_OPACITY,
            -planet.orbit_path.curve_direction,
        ),
    };

    // Start and end half a diameter past the edges so the planet fully
    // enters and leaves the screen.
    let span = viewport.width + size;
    let x = match planet.direction {
        Direction::LeftToRight => -size / 2.0 + span * planet.progress,
        Direction::RightToLeft => viewport.width + size / 2.0 - span * planet.progress,
    };

    let arc = (planet.progress * PI).sin();
    let y = viewport.height * planet.orbit_path.y_center
        + arc * viewport.height * planet.orbit_path.curvature * curve_sign;

    PlanetPosition { x, y, size, opacity }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planet::model::{OrbitPath, PlanetDraft, PlanetId};

    fn planet() -> Planet {
        let mut p = Planet::new(PlanetId(7), PlanetDraft::new("p", 1, 5));
        p.orbit_path = OrbitPath { y_center: 0.5, curvature: 0.1, curve_direction: 1.0 };
        p
    }

    const VIEW: Viewport = Viewport { width: 1600.0, height: 1000.0 };

    #[test]
    fn test_starts_off_left_edge() {
        let p = planet();
        let pos = resolve(&p, VIEW, &SizeSettings::default());
        assert!((pos.size - 130.0).abs() < 1e-3);
        assert!((pos.x + 65.0).abs() < 1e-3);
        assert!((pos.y - 500.0).abs() < 1e-3);
        assert_eq!(pos.opacity, 1.0);
    }

    #[test]
    fn test_right_to_left_starts_off_right_edge() {
        let mut p = planet();
        p.direction = Direction::RightToLeft;
        let pos = resolve(&p, VIEW, &SizeSettings::default());
        assert!((pos.x - (1600.0 + 65.0)).abs() < 1e-3);
    }

    #[test]
    fn test_arc_peaks_at_midpoint() {
        let mut p = planet();
        p.progress = 0.5;
        let pos = resolve(&p, VIEW, &SizeSettings::default());
        assert!((pos.x - 800.0).abs() < 1e-3);
        assert!((pos.y - 600.0).abs() < 1e-3);
    }

    #[test]
    fn test_background_is_smaller_dimmer_and_mirrored() {
        let mut p = planet();
        p.progress = 0.5;
        p.phase = Phase::Background;
        let pos = resolve(&p, VIEW, &SizeSettings::default());
        assert!((pos.size - 130.0 * BACKGROUND_SCALE).abs() < 1e-3);
        assert_eq!(pos.opacity, BACKGROUND_OPACITY);
        assert!((pos.y - 400.0).abs() < 1e-3);
    }

    #[test]
    fn test_resolve_is_pure() {
        let mut p = planet();
        p.progress = 0.3;
        let before = p.clone();
        let a = resolve(&p, VIEW, &SizeSettings::default());
        let b = resolve(&p, VIEW, &SizeSettings::default());
        assert_eq!(a, b);
        assert_eq!(p, before);
    }

    #[test]
    fn test_size_tracks_viewport() {
        let p = planet();
        let small = resolve(&p, Viewport::new(400.0, 800.0), &SizeSettings::default());
        assert!((small.size - 52.0).abs() < 1e-3);
    }

    #[test]
    fn test_contains_center_and_edge() {
        let pos = PlanetPosition { x: 100.0, y: 100.0, size: 50.0, opacity: 1.0 };
        assert!(pos.contains(100.0, 100.0));
        assert!(pos.contains(125.0, 100.0));
        assert!(!pos.contains(126.0, 100.0));
    }
}
