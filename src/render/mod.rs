//! Scene rendering
//!
//! Layout helpers here are pure (no GPU calls) so they can be unit tested;
//! the `draw_*` functions issue macroquad draw calls.

pub mod draw;
pub mod gradient;
pub mod panel;
pub mod starfield;
pub mod text;

pub use draw::draw_scene;
pub use panel::PanelLayout;
pub use starfield::Starfield;
