//! Radial gradients
//!
//! macroquad has no gradient fill, so gradients are drawn as a ring mesh
//! with per-vertex colors and the GPU interpolates between stops.

use std::f32::consts::TAU;

use macroquad::models::{draw_mesh, Mesh, Vertex};
use macroquad::prelude::Color;

const SEGMENTS: usize = 48;

/// A color at a normalized position (0 = inner radius, 1 = outer radius)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Build the ring mesh for a radial gradient centered on (`cx`, `cy`)
pub fn radial_gradient_mesh(cx: f32, cy: f32, inner: f32, outer: f32, stops: &[ColorStop]) -> Mesh {
    let mut vertices = Vec::with_capacity(stops.len() * SEGMENTS);
    let mut indices = Vec::with_capacity(stops.len().saturating_sub(1) * SEGMENTS * 6);

    for stop in stops {
        let r = inner + (outer - inner) * stop.t;
        for i in 0..SEGMENTS {
            let angle = i as f32 / SEGMENTS as f32 * TAU;
            vertices.push(Vertex::new(
                cx + angle.cos() * r,
                cy + angle.sin() * r,
                0.0,
                0.0,
                0.0,
                stop.color,
            ));
        }
    }

    for ring in 0..stops.len().saturating_sub(1) {
        let a = ring * SEGMENTS;
        let b = a + SEGMENTS;
        for i in 0..SEGMENTS {
            let next = (i + 1) % SEGMENTS;
            indices.extend_from_slice(&[
                (a + i) as u16,
                (b + i) as u16,
                (b + next) as u16,
                (a + i) as u16,
                (b + next) as u16,
                (a + next) as u16,
            ]);
        }
    }

    Mesh {
        vertices,
        indices,
        texture: None,
    }
}

/// Draw a radial gradient between two radii
pub fn draw_radial_gradient(cx: f32, cy: f32, inner: f32, outer: f32, stops: &[ColorStop]) {
    if stops.len() < 2 || outer <= 0.0 {
        return;
    }
    draw_mesh(&radial_gradient_mesh(cx, cy, inner, outer, stops));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_shape() {
        let stops = [
            ColorStop::new(0.0, Color::new(0.0, 0.0, 0.0, 0.4)),
            ColorStop::new(0.7, Color::new(0.0, 0.0, 0.0, 0.2)),
            ColorStop::new(1.0, Color::new(0.0, 0.0, 0.0, 0.0)),
        ];
        let mesh = radial_gradient_mesh(10.0, 10.0, 0.0, 50.0, &stops);
        assert_eq!(mesh.vertices.len(), 3 * SEGMENTS);
        assert_eq!(mesh.indices.len(), 2 * SEGMENTS * 6);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertices.len()));
    }

    #[test]
    fn test_outer_ring_radius() {
        let stops = [
            ColorStop::new(0.0, Color::new(1.0, 1.0, 1.0, 0.0)),
            ColorStop::new(1.0, Color::new(1.0, 1.0, 1.0, 0.0)),
        ];
        let mesh = radial_gradient_mesh(0.0, 0.0, 20.0, 30.0, &stops);
        let outer = mesh.vertices[SEGMENTS].position;
        assert!((outer.x - 30.0).abs() < 1e-4);
        assert!(outer.y.abs() < 1e-4);
    }
}
