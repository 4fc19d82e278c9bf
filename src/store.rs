//! Planet store
//!
//! Ordered collection of planets keyed by id. Order carries no meaning
//! (draw order is computed each frame); every mutation replaces or removes
//! whole planets, so a failed edit never leaves a half-updated entry.

use std::collections::HashSet;

use crate::config::{MAX_INTERVAL_SECS, MIN_INTERVAL_SECS};
use crate::planet::geometry::clamp_level;
use crate::planet::{Planet, PlanetDraft, PlanetId};

#[derive(Debug, Default, Clone)]
pub struct PlanetStore {
    planets: Vec<Planet>,
}

impl PlanetStore {
    pub fn new() -> Self {
        Self { planets: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Planet> {
        self.planets.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Planet> {
        self.planets.iter_mut()
    }

    pub fn contains(&self, id: PlanetId) -> bool {
        self.get(id).is_some()
    }

    pub fn get(&self, id: PlanetId) -> Option<&Planet> {
        self.planets.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: PlanetId) -> Option<&mut Planet> {
        self.planets.iter_mut().find(|p| p.id == id)
    }

    /// Id not used by any planet in the store
    fn fresh_id(&self) -> PlanetId {
        loop {
            let id = PlanetId::generate();
            if !self.contains(id) {
                return id;
            }
        }
    }

    /// Add a planet built from `draft`, returning its id
    pub fn create(&mut self, draft: PlanetDraft) -> PlanetId {
        let id = self.fresh_id();
        let planet = Planet::new(id, draft);
        log::info!("created planet {} \"{}\"", id, planet.name);
        self.planets.push(planet);
        id
    }

    /// Apply `draft` to an existing planet. Returns false if it is gone.
    pub fn update(&mut self, id: PlanetId, draft: PlanetDraft) -> bool {
        match self.get_mut(id) {
            Some(planet) => {
                planet.apply_draft(draft);
                log::info!("updated planet {}", id);
                true
            }
            None => false,
        }
    }

    /// Remove a planet. Returns false if it was not present.
    pub fn delete(&mut self, id: PlanetId) -> bool {
        let before = self.planets.len();
        self.planets.retain(|p| p.id != id);
        let removed = self.planets.len() != before;
        if removed {
            log::info!("deleted planet {}", id);
        }
        removed
    }

    /// Replace the whole store (load / import).
    ///
    /// Duplicate ids get fresh ones so lookups stay unambiguous.
    pub fn replace_all(&mut self, planets: Vec<Planet>) {
        self.planets.clear();
        let mut seen = HashSet::new();
        for mut planet in planets {
            if !seen.insert(planet.id) {
                let id = self.fresh_id_excluding(&seen);
                log::warn!("duplicate planet id {}, reassigned to {}", planet.id, id);
                planet.id = id;
                seen.insert(id);
            }
            self.planets.push(planet);
        }
    }

    fn fresh_id_excluding(&self, taken: &HashSet<PlanetId>) -> PlanetId {
        loop {
            let id = PlanetId::generate();
            if !taken.contains(&id) {
                return id;
            }
        }
    }

    /// Shift every planet's importance, clamped to 1..=10
    pub fn adjust_importance(&mut self, delta: i32) {
        for planet in &mut self.planets {
            planet.importance = clamp_level(planet.importance.saturating_add(delta));
        }
    }

    /// Shift every planet's urgency, clamped to 1..=10.
    /// Speed follows automatically since it is derived from urgency.
    pub fn adjust_urgency(&mut self, delta: i32) {
        for planet in &mut self.planets {
            planet.urgency = clamp_level(planet.urgency.saturating_add(delta));
        }
    }

    /// Shift every planet's interval by whole seconds, clamped to 1..=60
    pub fn adjust_interval(&mut self, delta: i32) {
        for planet in &mut self.planets {
            planet.interval = (planet.interval + delta as f32).clamp(MIN_INTERVAL_SECS, MAX_INTERVAL_SECS);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(drafts: &[(&str, i32, i32)]) -> (PlanetStore, Vec<PlanetId>) {
        let mut store = PlanetStore::new();
        let ids = drafts
            .iter()
            .map(|(name, imp, urg)| store.create(PlanetDraft::new(*name, *imp, *urg)))
            .collect();
        (store, ids)
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let (store, ids) = store_with(&[("a", 1, 1), ("b", 2, 2), ("c", 3, 3)]);
        assert_eq!(store.len(), 3);
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), 3);
    }

    #[test]
    fn test_update_and_missing_update() {
        let (mut store, ids) = store_with(&[("a", 5, 5)]);
        assert!(store.update(ids[0], PlanetDraft::new("renamed", 9, 9)));
        let planet = store.get(ids[0]).unwrap();
        assert_eq!(planet.name, "renamed");
        assert_eq!(planet.interval, 1.0);

        assert!(!store.update(PlanetId(0), PlanetDraft::new("ghost", 1, 1)));
    }

    #[test]
    fn test_delete() {
        let (mut store, ids) = store_with(&[("a", 5, 5), ("b", 5, 5)]);
        assert!(store.delete(ids[0]));
        assert!(!store.delete(ids[0]));
        assert_eq!(store.len(), 1);
        assert!(store.contains(ids[1]));
    }

    #[test]
    fn test_bulk_adjust_clamps_levels() {
        let (mut store, _) = store_with(&[("low", 1, 1), ("high", 10, 10), ("mid", 5, 6)]);

        store.adjust_importance(-3);
        store.adjust_urgency(25);
        for planet in store.iter() {
            assert!((1..=10).contains(&planet.importance));
            assert_eq!(planet.urgency, 10);
        }

        store.adjust_importance(i32::MAX);
        assert!(store.iter().all(|p| p.importance == 10));
        store.adjust_urgency(i32::MIN);
        assert!(store.iter().all(|p| p.urgency == 1));
    }

    #[test]
    fn test_bulk_adjust_interval_clamps() {
        let (mut store, ids) = store_with(&[("a", 5, 9), ("b", 5, 1)]);
        store.adjust_interval(-5);
        assert_eq!(store.get(ids[0]).unwrap().interval, 1.0);

        for _ in 0..100 {
            store.adjust_interval(1);
        }
        assert!(store.iter().all(|p| p.interval == 60.0));
    }

    #[test]
    fn test_urgency_adjust_updates_speed() {
        let (mut store, ids) = store_with(&[("a", 5, 1)]);
        store.adjust_urgency(9);
        assert!((store.get(ids[0]).unwrap().speed() - 60.0).abs() < 1e-4);
    }

    #[test]
    fn test_replace_all_dedupes_ids() {
        let mut store = PlanetStore::new();
        let a = Planet::new(PlanetId(5), PlanetDraft::new("a", 1, 1));
        let b = Planet::new(PlanetId(5), PlanetDraft::new("b", 1, 1));
        store.replace_all(vec![a, b]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(PlanetId(5)).unwrap().name, "a");
        let ids: HashSet<_> = store.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 2);
    }
}
