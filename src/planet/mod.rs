//! Planets: the data model and the per-frame motion pipeline
//!
//! - `geometry`: attribute → size / speed / interval maps
//! - `orbit`: phase state machine, one tick at a time
//! - `position`: phase + progress → screen placement
//! - `color`: palette and label contrast

pub mod color;
pub mod geometry;
pub mod model;
pub mod orbit;
pub mod position;

pub use model::{Direction, OrbitPath, Phase, Planet, PlanetDraft, PlanetId};
pub use position::{resolve, PlanetPosition};
