//! Persisted formats
//!
//! `planets.json` and `settings.json` hold the working state between runs;
//! a profile is the same data bundled with an export timestamp so it can be
//! moved between machines. Only canonical attributes are written. Loading
//! always starts planets on a fresh foreground leg.

use chrono::{DateTime, SecondsFormat};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{SizeSettings, PLANETS_FILE, SETTINGS_FILE};
use crate::planet::geometry::{clamp_level, default_interval};
use crate::planet::{OrbitPath, Planet, PlanetDraft, PlanetId};
use crate::storage::{LocalStorage, StorageError};
use crate::store::PlanetStore;

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("timestamp out of range: {0}")]
    Timestamp(i64),
}

/// One planet as written to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetRecord {
    pub id: PlanetId,
    pub name: String,
    pub importance: i32,
    pub urgency: i32,
    /// Absent in very old saves; derived from urgency on load
    #[serde(default)]
    pub interval: Option<f32>,
    pub color: String,
    #[serde(default)]
    pub orbit_path: Option<OrbitPath>,
}

impl From<&Planet> for PlanetRecord {
    fn from(planet: &Planet) -> Self {
        Self {
            id: planet.id,
            name: planet.name.clone(),
            importance: planet.importance,
            urgency: planet.urgency,
            interval: Some(planet.interval),
            color: planet.color.clone(),
            orbit_path: Some(planet.orbit_path),
        }
    }
}

impl PlanetRecord {
    /// Rebuild a live planet with fresh transient state
    pub fn into_planet(self) -> Planet {
        let urgency = clamp_level(self.urgency);
        let interval = self
            .interval
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or_else(|| default_interval(urgency));

        let draft = PlanetDraft::new(self.name, self.importance, urgency)
            .with_interval(interval)
            .with_color(self.color);
        let mut planet = Planet::new(self.id, draft);
        if let Some(path) = self.orbit_path {
            planet.orbit_path = path;
        }
        planet.reset_transient();
        planet
    }
}

/// `planets.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SavedPlanets {
    pub planets: Vec<PlanetRecord>,
}

/// Settings as read back from disk; either value may be missing
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsRecord {
    #[serde(default)]
    pub min: Option<f32>,
    #[serde(default)]
    pub max: Option<f32>,
}

impl From<&SizeSettings> for SettingsRecord {
    fn from(settings: &SizeSettings) -> Self {
        Self {
            min: Some(settings.min),
            max: Some(settings.max),
        }
    }
}

/// Exported profile document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDocument {
    #[serde(default)]
    pub settings: Option<SettingsRecord>,
    pub planets: Vec<PlanetRecord>,
    #[serde(default)]
    pub export_date: Option<String>,
}

/// A parsed profile ready to replace the current state
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedProfile {
    pub settings: Option<SettingsRecord>,
    pub planets: Vec<Planet>,
}

// =============================================================================
// planets.json / settings.json
// =============================================================================

fn records(store: &PlanetStore) -> Vec<PlanetRecord> {
    store.iter().map(PlanetRecord::from).collect()
}

pub fn planets_to_json(store: &PlanetStore) -> Result<String, ProfileError> {
    Ok(serde_json::to_string(&SavedPlanets { planets: records(store) })?)
}

pub fn planets_from_json(json: &str) -> Result<Vec<Planet>, ProfileError> {
    let saved: SavedPlanets = serde_json::from_str(json)?;
    Ok(saved.planets.into_iter().map(PlanetRecord::into_planet).collect())
}

pub fn save_planets(storage: &LocalStorage, store: &PlanetStore) -> Result<(), ProfileError> {
    storage.write_string(PLANETS_FILE, &planets_to_json(store)?)?;
    log::debug!("Saved {} planets", store.len());
    Ok(())
}

/// Load saved planets. Missing or malformed data yields an empty list.
pub fn load_planets(storage: &LocalStorage) -> Vec<Planet> {
    let json = match storage.read_string(PLANETS_FILE) {
        Ok(json) => json,
        Err(e) if e.is_not_found() => return Vec::new(),
        Err(e) => {
            log::error!("Failed to read {}: {}", PLANETS_FILE, e);
            return Vec::new();
        }
    };
    match planets_from_json(&json) {
        Ok(planets) => {
            log::info!("Loaded {} planets", planets.len());
            planets
        }
        Err(e) => {
            log::error!("Failed to parse {}: {}", PLANETS_FILE, e);
            Vec::new()
        }
    }
}

/// Apply stored settings; zero or missing values keep the current value
pub fn merge_settings(current: SizeSettings, stored: SettingsRecord) -> SizeSettings {
    let pick = |value: Option<f32>, fallback: f32| match value {
        Some(v) if v != 0.0 && v.is_finite() => v,
        _ => fallback,
    };
    SizeSettings {
        min: pick(stored.min, current.min),
        max: pick(stored.max, current.max),
    }
}

pub fn save_settings(storage: &LocalStorage, settings: &SizeSettings) -> Result<(), ProfileError> {
    storage.write_string(SETTINGS_FILE, &serde_json::to_string(settings)?)?;
    Ok(())
}

/// Load saved settings on top of the defaults
pub fn load_settings(storage: &LocalStorage) -> SizeSettings {
    let defaults = SizeSettings::default();
    let json = match storage.read_string(SETTINGS_FILE) {
        Ok(json) => json,
        Err(e) if e.is_not_found() => return defaults,
        Err(e) => {
            log::error!("Failed to read {}: {}", SETTINGS_FILE, e);
            return defaults;
        }
    };
    match serde_json::from_str::<SettingsRecord>(&json) {
        Ok(stored) => merge_settings(defaults, stored),
        Err(e) => {
            log::error!("Failed to parse {}: {}", SETTINGS_FILE, e);
            defaults
        }
    }
}

// =============================================================================
// Profile export / import
// =============================================================================

/// ISO-8601 UTC timestamp with millisecond precision
pub fn iso_timestamp(now_ms: i64) -> Result<String, ProfileError> {
    DateTime::from_timestamp_millis(now_ms)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
        .ok_or(ProfileError::Timestamp(now_ms))
}

/// `planet-ideas-<millis>.json`
pub fn export_file_name(now_ms: i64) -> String {
    format!("planet-ideas-{}.json", now_ms)
}

/// Pretty-printed profile document
pub fn export_profile(store: &PlanetStore, settings: &SizeSettings, now_ms: i64) -> Result<String, ProfileError> {
    let doc = ProfileDocument {
        settings: Some(SettingsRecord::from(settings)),
        planets: records(store),
        export_date: Some(iso_timestamp(now_ms)?),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

pub fn parse_profile(json: &str) -> Result<ImportedProfile, ProfileError> {
    let doc: ProfileDocument = serde_json::from_str(json)?;
    Ok(ImportedProfile {
        settings: doc.settings,
        planets: doc.planets.into_iter().map(PlanetRecord::into_planet).collect(),
    })
}
