//! Logical viewport and resize handling
//!
//! Window size changes are not applied the instant they are observed. A
//! plain resize lands on the next frame; a portrait/landscape flip waits a
//! short settling delay first, since mobile browsers report intermediate
//! sizes while rotating.

use crate::config::ORIENTATION_SETTLE_SECS;

/// Logical drawing area in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Smaller of width and height; planet sizes scale with this
    pub fn min_dim(&self) -> f32 {
        self.width.min(self.height)
    }

    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

/// A viewport change waiting to be applied
#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingResize {
    viewport: Viewport,
    apply_at: f64,
}

/// Debounces window size observations into applied viewport changes
#[derive(Debug, Clone)]
pub struct ViewportTracker {
    current: Viewport,
    pending: Option<PendingResize>,
}

impl ViewportTracker {
    pub fn new(initial: Viewport) -> Self {
        Self {
            current: initial,
            pending: None,
        }
    }

    pub fn current(&self) -> Viewport {
        self.current
    }

    /// Feed the window size seen this frame at time `now` (seconds).
    ///
    /// Returns the new viewport on the frame it gets applied.
    pub fn observe(&mut self, observed: Viewport, now: f64) -> Option<Viewport> {
        let target = self.pending.map(|p| p.viewport).unwrap_or(self.current);

        if observed != target {
            let delay = if observed.is_portrait() != self.current.is_portrait() {
                ORIENTATION_SETTLE_SECS
            } else {
                0.0
            };
            // Scheduled for a later frame even with no delay
            self.pending = Some(PendingResize {
                viewport: observed,
                apply_at: now + delay,
            });
            return None;
        }

        match self.pending {
            Some(pending) if now >= pending.apply_at => {
                self.pending = None;
                if pending.viewport == self.current {
                    return None;
                }
                self.current = pending.viewport;
                log::debug!(
                    "viewport resized to {}x{}",
                    self.current.width,
                    self.current.height
                );
                Some(self.current)
            }
            _ => None,
        }
    }
}
