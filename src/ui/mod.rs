//! Immediate-mode UI for the chrome around the planet canvas
//!
//! - Side panel with the planet list, size sliders and bulk adjustments
//! - Add/edit form modal and the delete confirmation dialog
//! - Floating add button and the panel toggle
//!
//! Design principles:
//! - Immediate mode (rebuilt each frame, only small state structs persist)
//! - Simple rectangle-based layout
//! - Widgets return actions; the caller turns them into intents

mod confirm;
mod form;
mod input;
mod rect;
mod side_panel;
mod text_input;
mod theme;
mod widgets;

pub use confirm::*;
pub use form::*;
pub use input::*;
pub use rect::*;
pub use side_panel::*;
pub use text_input::*;
pub use theme::*;
pub use widgets::*;
