//! Twinkling starfield backdrop
//!
//! Stars are scattered once per viewport (regenerated on resize) and each
//! keeps its own twinkle phase, independent of the planets.

use std::f32::consts::TAU;

use macroquad::prelude::*;
use macroquad::rand::gen_range;

use crate::config::STAR_COUNT_DENSITY;
use crate::viewport::Viewport;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    /// Radius in pixels (0.5-2.0)
    pub size: f32,
    /// Phase accumulator driving brightness
    pub twinkle: f32,
    /// Phase added per tick
    pub twinkle_speed: f32,
}

impl Star {
    /// Brightness in 0.5-1.0
    pub fn brightness(&self) -> f32 {
        (self.twinkle.sin() + 1.0) / 2.0 * 0.5 + 0.5
    }
}

#[derive(Debug, Clone, Default)]
pub struct Starfield {
    pub stars: Vec<Star>,
}

impl Starfield {
    /// Scatter stars over the viewport at a fixed density
    pub fn generate(viewport: Viewport) -> Self {
        let count = star_count(viewport);
        let stars = (0..count)
            .map(|_| Star {
                x: gen_range(0.0, viewport.width.max(1.0)),
                y: gen_range(0.0, viewport.height.max(1.0)),
                size: gen_range(0.5, 2.0),
                twinkle: gen_range(0.0, TAU),
                twinkle_speed: gen_range(0.01, 0.03),
            })
            .collect();
        Self { stars }
    }

    /// Advance every star's twinkle by one tick
    pub fn tick(&mut self) {
        for star in &mut self.stars {
            star.twinkle += star.twinkle_speed;
        }
    }

    pub fn draw(&self) {
        for star in &self.stars {
            draw_circle(star.x, star.y, star.size, Color::new(1.0, 1.0, 1.0, star.brightness()));
        }
    }
}

/// Number of stars for a viewport
pub fn star_count(viewport: Viewport) -> usize {
    (viewport.area() * STAR_COUNT_DENSITY).floor().max(0.0) as usize
}
