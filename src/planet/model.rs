//! Planet data model
//!
//! A planet carries canonical attributes (name, importance, urgency,
//! interval, color, orbit path) plus transient animation state. Size and
//! speed are never stored; see `geometry`.

use macroquad::miniquad;
use macroquad::rand::gen_range;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use super::color::random_palette_color;
use super::geometry::{clamp_level, default_interval, urgency_to_speed};

/// Opaque planet identity, stable for the planet's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PlanetId(pub u64);

impl PlanetId {
    /// Fresh id from the wall clock plus a random suffix.
    /// The store rerolls on the (unlikely) collision.
    pub fn generate() -> Self {
        let millis = (miniquad::date::now() * 1000.0) as u64;
        PlanetId(millis * 1000 + gen_range(0u32, 1000) as u64)
    }
}

impl<'de> Deserialize<'de> for PlanetId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Older exports store ids as fractional millisecond timestamps
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Int(u64),
            Float(f64),
        }

        match RawId::deserialize(deserializer)? {
            RawId::Int(v) => Ok(PlanetId(v)),
            RawId::Float(v) if v.is_finite() && v >= 0.0 => Ok(PlanetId((v * 1000.0).round() as u64)),
            RawId::Float(v) => Err(de::Error::custom(format!("invalid planet id {}", v))),
        }
    }
}

impl std::fmt::Display for PlanetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed vertical arc a planet follows. Chosen once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitPath {
    /// Vertical center as a fraction of viewport height (0.2-0.8)
    pub y_center: f32,
    /// Arc height as a fraction of viewport height (0.05-0.2)
    pub curvature: f32,
    /// +1 bows downward in the foreground, -1 upward
    pub curve_direction: f32,
}

impl OrbitPath {
    pub fn random() -> Self {
        Self {
            y_center: gen_range(0.2f32, 0.8),
            curvature: gen_range(0.05f32, 0.2),
            curve_direction: if gen_range(0.0f32, 1.0) > 0.5 { 1.0 } else { -1.0 },
        }
    }
}

/// Which layer the planet is currently crossing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Near pass: full size, full opacity
    Foreground,
    /// Far pass: scaled down, dimmed, arc mirrored
    Background,
}

impl Phase {
    pub fn flipped(self) -> Self {
        match self {
            Phase::Foreground => Phase::Background,
            Phase::Background => Phase::Foreground,
        }
    }
}

/// Horizontal travel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    LeftToRight,
    RightToLeft,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::LeftToRight => Direction::RightToLeft,
            Direction::RightToLeft => Direction::LeftToRight,
        }
    }
}

/// User-supplied attributes for creating or editing a planet
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetDraft {
    pub name: String,
    pub importance: i32,
    pub urgency: i32,
    /// Explicit pause in seconds; `None` derives it from urgency
    pub interval: Option<f32>,
    /// `#RRGGBB`; `None` picks a palette color (create) or keeps the old one (edit)
    pub color: Option<String>,
}

impl PlanetDraft {
    pub fn new(name: impl Into<String>, importance: i32, urgency: i32) -> Self {
        Self {
            name: name.into(),
            importance,
            urgency,
            interval: None,
            color: None,
        }
    }

    pub fn with_interval(mut self, interval: f32) -> Self {
        self.interval = Some(interval);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Interval to store for this draft's urgency
    fn resolved_interval(&self) -> f32 {
        match self.interval {
            Some(secs) if secs.is_finite() && secs > 0.0 => secs,
            _ => default_interval(clamp_level(self.urgency)),
        }
    }
}

/// A user idea drawn as a planet
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub id: PlanetId,
    pub name: String,
    pub importance: i32,
    pub urgency: i32,
    /// Seconds paused between legs
    pub interval: f32,
    pub color: String,
    pub orbit_path: OrbitPath,

    pub phase: Phase,
    pub direction: Direction,
    /// Fraction of the current leg, always in [0, 1)
    pub progress: f32,
    /// Remaining pause; > 0 means the planet is waiting
    pub wait_time_ms: f32,
    pub hovering: bool,
}

impl Planet {
    /// Build a new planet at the start of a foreground leg
    pub fn new(id: PlanetId, draft: PlanetDraft) -> Self {
        let interval = draft.resolved_interval();
        let color = draft.color.unwrap_or_else(random_palette_color);
        Self {
            id,
            name: draft.name,
            importance: clamp_level(draft.importance),
            urgency: clamp_level(draft.urgency),
            interval,
            color,
            orbit_path: OrbitPath::random(),
            phase: Phase::Foreground,
            direction: Direction::LeftToRight,
            progress: 0.0,
            wait_time_ms: 0.0,
            hovering: false,
        }
    }

    /// Replace the editable attributes. Orbit path and animation state stay.
    pub fn apply_draft(&mut self, draft: PlanetDraft) {
        self.interval = draft.resolved_interval();
        self.name = draft.name;
        self.importance = clamp_level(draft.importance);
        self.urgency = clamp_level(draft.urgency);
        if let Some(color) = draft.color {
            self.color = color;
        }
    }

    /// Seconds per crossing, derived from urgency
    pub fn speed(&self) -> f32 {
        urgency_to_speed(self.urgency)
    }

    pub fn is_waiting(&self) -> bool {
        self.wait_time_ms > 0.0
    }

    pub fn is_foreground(&self) -> bool {
        self.phase == Phase::Foreground
    }

    /// Reset transient state the way a freshly loaded planet starts:
    /// foreground, left to right, random progress so loaded planets
    /// don't move in lockstep.
    pub fn reset_transient(&mut self) {
        self.phase = Phase::Foreground;
        self.direction = Direction::LeftToRight;
        self.progress = random_progress();
        self.wait_time_ms = 0.0;
        self.hovering = false;
    }
}

/// Uniform value in [0, 1)
pub fn random_progress() -> f32 {
    let p = gen_range(0.0f32, 1.0);
    if p >= 1.0 { 0.0 } else { p }
}
