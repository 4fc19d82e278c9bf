//! Hit testing
//!
//! Maps a pointer position to what it landed on. The detail panel (when one
//! was drawn last frame) wins over planets; among planets only the
//! foreground layer is interactive, largest first.

use crate::config::SizeSettings;
use crate::planet::{resolve, Planet, PlanetId};
use crate::render::PanelLayout;
use crate::store::PlanetStore;
use crate::viewport::Viewport;

/// What a pointer position resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    EditButton,
    DeleteButton,
    CancelButton,
    /// Inside the panel but not on a button
    PanelBody,
    Planet(PlanetId),
    Nothing,
}

/// Test the recorded detail panel regions
pub fn hit_panel(panel: &PanelLayout, x: f32, y: f32) -> Option<Hit> {
    if panel.edit.contains(x, y) {
        Some(Hit::EditButton)
    } else if panel.delete.contains(x, y) {
        Some(Hit::DeleteButton)
    } else if panel.cancel.contains(x, y) {
        Some(Hit::CancelButton)
    } else if panel.bounds.contains(x, y) {
        Some(Hit::PanelBody)
    } else {
        None
    }
}

/// Topmost foreground planet under the point.
///
/// Candidates are tried in descending size order; the first whose circle
/// contains the point wins.
pub fn planet_at_point<'a>(
    store: &'a PlanetStore,
    viewport: Viewport,
    settings: &SizeSettings,
    x: f32,
    y: f32,
) -> Option<&'a Planet> {
    let mut candidates: Vec<_> = store
        .iter()
        .filter(|p| p.is_foreground())
        .map(|p| (p, resolve(p, viewport, settings)))
        .collect();
    candidates.sort_by(|a, b| b.1.size.total_cmp(&a.1.size));

    candidates
        .into_iter()
        .find(|(_, pos)| pos.contains(x, y))
        .map(|(planet, _)| planet)
}

/// Full hit test: panel first, then planets
pub fn hit_test(
    store: &PlanetStore,
    panel: Option<&PanelLayout>,
    viewport: Viewport,
    settings: &SizeSettings,
    x: f32,
    y: f32,
) -> Hit {
    if let Some(hit) = panel.and_then(|panel| hit_panel(panel, x, y)) {
        return hit;
    }
    planet_at_point(store, viewport, settings, x, y)
        .map(|p| Hit::Planet(p.id))
        .unwrap_or(Hit::Nothing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planet::{OrbitPath, Phase, PlanetDraft};

    const VIEW: Viewport = Viewport { width: 1000.0, height: 1000.0 };

    fn add(store: &mut PlanetStore, importance: i32, progress: f32) -> PlanetId {
        let id = store.create(PlanetDraft::new("p", importance, 5));
        let planet = store.get_mut(id).unwrap();
        planet.orbit_path = OrbitPath { y_center: 0.5, curvature: 0.1, curve_direction: 1.0 };
        planet.progress = progress;
        id
    }

    #[test]
    fn test_center_hits_foreground_planet() {
        let mut store = PlanetStore::new();
        let id = add(&mut store, 5, 0.5);
        let settings = SizeSettings::default();
        let pos = resolve(store.get(id).unwrap(), VIEW, &settings);

        assert_eq!(hit_test(&store, None, VIEW, &settings, pos.x, pos.y), Hit::Planet(id));
    }

    #[test]
    fn test_background_planets_are_not_hit() {
        let mut store = PlanetStore::new();
        let id = add(&mut store, 5, 0.5);
        store.get_mut(id).unwrap().phase = Phase::Background;
        let settings = SizeSettings::default();
        let pos = resolve(store.get(id).unwrap(), VIEW, &settings);

        assert_eq!(hit_test(&store, None, VIEW, &settings, pos.x, pos.y), Hit::Nothing);
    }

    #[test]
    fn test_miss_everything() {
        let mut store = PlanetStore::new();
        add(&mut store, 1, 0.5);
        let settings = SizeSettings::default();
        assert_eq!(hit_test(&store, None, VIEW, &settings, 5.0, 5.0), Hit::Nothing);
    }

    #[test]
    fn test_overlap_prefers_largest() {
        let mut store = PlanetStore::new();
        let _small = add(&mut store, 1, 0.5);
        let big = add(&mut store, 10, 0.5);
        let settings = SizeSettings::default();

        // Both centered at the same spot
        assert_eq!(hit_test(&store, None, VIEW, &settings, 500.0, 600.0), Hit::Planet(big));
    }

    #[test]
    fn test_panel_short_circuits_planets() {
        let mut store = PlanetStore::new();
        let id = add(&mut store, 10, 0.5);
        let settings = SizeSettings::default();
        let pos = resolve(store.get(id).unwrap(), VIEW, &settings);
        let panel = PanelLayout::place(&pos, VIEW);

        let (bx, by) = (panel.edit.center_x(), panel.edit.center_y());
        assert_eq!(hit_test(&store, Some(&panel), VIEW, &settings, bx, by), Hit::EditButton);
        let (bx, by) = (panel.delete.center_x(), panel.delete.center_y());
        assert_eq!(hit_test(&store, Some(&panel), VIEW, &settings, bx, by), Hit::DeleteButton);
        let (bx, by) = (panel.cancel.center_x(), panel.cancel.center_y());
        assert_eq!(hit_test(&store, Some(&panel), VIEW, &settings, bx, by), Hit::CancelButton);
        let (bx, by) = (panel.bounds.x + 5.0, panel.bounds.y + 5.0);
        assert_eq!(hit_test(&store, Some(&panel), VIEW, &settings, bx, by), Hit::PanelBody);

        // Outside the panel the planet is still reachable
        assert_eq!(hit_test(&store, Some(&panel), VIEW, &settings, pos.x, pos.y), Hit::Planet(id));
    }
}
