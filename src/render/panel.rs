//! Detail panel layout
//!
//! The panel sits beside the active planet and follows it as it moves. Its
//! rectangles are recomputed every frame and kept in the app state so the
//! next hit test runs against what was actually drawn.

use crate::planet::PlanetPosition;
use crate::ui::Rect;
use crate::viewport::Viewport;

pub const PANEL_WIDTH: f32 = 220.0;
pub const PANEL_WIDTH_SMALL: f32 = 200.0;
pub const PANEL_HEIGHT: f32 = 150.0;

/// Viewports narrower than this get the small panel
const SMALL_SCREEN_WIDTH: f32 = 500.0;
/// Gap between planet edge and panel
const PANEL_GAP: f32 = 20.0;
/// Minimum distance kept from the screen edges
const SCREEN_MARGIN: f32 = 10.0;

const PADDING: f32 = 15.0;
const BUTTON_HEIGHT: f32 = 28.0;
const BUTTON_GAP: f32 = 8.0;
/// Distance from panel bottom to the button row top
const BUTTON_ROW_OFFSET: f32 = 40.0;

/// Recorded geometry of the detail panel for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub bounds: Rect,
    pub edit: Rect,
    pub delete: Rect,
    pub cancel: Rect,
}

impl PanelLayout {
    /// Place the panel beside `pos`, flipping left when it would overflow
    /// the right edge and clamping it on screen.
    pub fn place(pos: &PlanetPosition, viewport: Viewport) -> Self {
        let width = if viewport.width < SMALL_SCREEN_WIDTH {
            PANEL_WIDTH_SMALL
        } else {
            PANEL_WIDTH
        };
        let height = PANEL_HEIGHT;

        let mut x = pos.x + pos.radius() + PANEL_GAP;
        let mut y = pos.y - height / 2.0;

        if x + width > viewport.width {
            x = pos.x - pos.radius() - width - PANEL_GAP;
        }
        if y < SCREEN_MARGIN {
            y = SCREEN_MARGIN;
        }
        if y + height > viewport.height - SCREEN_MARGIN {
            y = viewport.height - height - SCREEN_MARGIN;
        }
        if x < SCREEN_MARGIN {
            x = SCREEN_MARGIN;
        }

        let bounds = Rect::new(x, y, width, height);
        let row = Rect::new(
            x + PADDING,
            y + height - BUTTON_ROW_OFFSET,
            width - PADDING * 2.0,
            BUTTON_HEIGHT,
        );
        let cells = row.columns(3, BUTTON_GAP);

        Self {
            bounds,
            edit: cells[0],
            delete: cells[1],
            cancel: cells[2],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: f32, y: f32, size: f32) -> PlanetPosition {
        PlanetPosition { x, y, size, opacity: 1.0 }
    }

    const VIEW: Viewport = Viewport { width: 1200.0, height: 800.0 };

    #[test]
    fn test_panel_right_of_planet() {
        let layout = PanelLayout::place(&pos(300.0, 400.0, 100.0), VIEW);
        assert_eq!(layout.bounds, Rect::new(370.0, 325.0, 220.0, 150.0));
    }

    #[test]
    fn test_panel_flips_left_near_right_edge() {
        let layout = PanelLayout::place(&pos(1100.0, 400.0, 100.0), VIEW);
        assert!((layout.bounds.x - (1100.0 - 50.0 - 220.0 - 20.0)).abs() < 1e-3);
    }

    #[test]
    fn test_panel_clamped_vertically_and_left() {
        let top = PanelLayout::place(&pos(300.0, 5.0, 40.0), VIEW);
        assert_eq!(top.bounds.y, 10.0);

        let bottom = PanelLayout::place(&pos(300.0, 795.0, 40.0), VIEW);
        assert_eq!(bottom.bounds.y, 800.0 - 150.0 - 10.0);

        // Huge planet on a narrow screen: both sides overflow, clamp to the left margin
        let narrow = Viewport::new(400.0, 800.0);
        let layout = PanelLayout::place(&pos(200.0, 400.0, 380.0), narrow);
        assert_eq!(layout.bounds.x, 10.0);
        assert_eq!(layout.bounds.w, PANEL_WIDTH_SMALL);
    }

    #[test]
    fn test_button_row() {
        let layout = PanelLayout::place(&pos(300.0, 400.0, 100.0), VIEW);
        let btn_w = (220.0 - 30.0 - 16.0) / 3.0;
        assert!((layout.edit.x - 385.0).abs() < 1e-3);
        assert!((layout.edit.w - btn_w).abs() < 1e-3);
        assert!((layout.delete.x - (385.0 + btn_w + 8.0)).abs() < 1e-3);
        assert!((layout.cancel.x - (385.0 + (btn_w + 8.0) * 2.0)).abs() < 1e-3);
        assert_eq!(layout.edit.y, 325.0 + 150.0 - 40.0);
        assert_eq!(layout.edit.h, 28.0);
    }
}
