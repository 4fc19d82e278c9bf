//! Orbit-phase state machine
//!
//! Each planet alternates: cross the screen, pause, cross back on the other
//! layer, pause, and so on. One call to `advance` is one animation tick.
//!
//! ```text
//!   Foreground --leg done--> wait(interval) --> Background
//!       ^                                           |
//!       +------ wait(interval) <----leg done--------+
//! ```

use super::model::Planet;

/// Advance a planet by `dt_ms` of animation time.
///
/// While waiting the planet is frozen and only the wait timer runs down.
/// Otherwise progress grows by `dt / speed`; finishing a leg flips the
/// phase and direction, resets progress and starts the next wait.
pub fn advance(planet: &mut Planet, dt_ms: f32) {
    if planet.wait_time_ms > 0.0 {
        planet.wait_time_ms = (planet.wait_time_ms - dt_ms).max(0.0);
        return;
    }

    planet.progress += dt_ms / 1000.0 / planet.speed();

    if planet.progress >= 1.0 {
        planet.phase = planet.phase.flipped();
        planet.direction = planet.direction.flipped();
        planet.wait_time_ms = planet.interval * 1000.0;
        planet.progress = 0.0;
    }
}

/// Advance every planet by one tick
pub fn advance_all<'a>(planets: impl IntoIterator<Item = &'a mut Planet>, dt_ms: f32) {
    for planet in planets {
        advance(planet, dt_ms);
    }
}
