//! The drag session tracked between pointer-down and pointer-up on the resize handle.

#[cfg(test)]
#[path = "drag_test.rs"]
mod drag_test;

use crate::config::Edge;
use crate::geometry::drag_delta;

/// Gesture context for one resize drag.
///
/// Lives only between `begin_resize` and `end_resize`/`cancel_resize`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Pointer coordinate along the resize axis at pointer-down.
    pub anchor_pointer: f64,
    /// Committed width at pointer-down.
    pub anchor_width: f64,
    /// Most recent pointer coordinate observed for this session.
    pub last_pointer: f64,
    /// Whether the gesture started on a touch-capable surface.
    pub touch: bool,
}

impl DragSession {
    #[must_use]
    pub fn begin(pointer: f64, width: f64, touch: bool) -> Self {
        Self { anchor_pointer: pointer, anchor_width: width, last_pointer: pointer, touch }
    }

    /// Record the latest pointer position without recomputing anything.
    pub fn track(&mut self, pointer: f64) {
        self.last_pointer = pointer;
    }

    /// Width implied by `pointer`, before any clamping.
    #[must_use]
    pub fn proposed_width(&self, edge: Edge, pointer: f64) -> f64 {
        self.anchor_width + drag_delta(edge, self.anchor_pointer, pointer)
    }
}
