//! Per-frame coalescing of pointer-move events.
//!
//! Pointer moves can arrive many times between two animation frames. Only
//! the latest position matters for layout, so intermediate values are
//! overwritten and a single frame request is outstanding at a time.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

/// Holds the latest pointer position waiting for the next animation frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameCoalescer {
    pending: Option<f64>,
    frame_requested: bool,
}

impl FrameCoalescer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `pointer` as the latest position.
    ///
    /// Returns `true` when the caller must request an animation frame,
    /// i.e. when no request is already outstanding.
    pub fn push(&mut self, pointer: f64) -> bool {
        self.pending = Some(pointer);
        self.request()
    }

    /// Ask for a frame without a new position (e.g. to advance a tween).
    ///
    /// Returns `true` when no request was outstanding.
    pub fn request(&mut self) -> bool {
        if self.frame_requested {
            false
        } else {
            self.frame_requested = true;
            true
        }
    }

    /// Drain the latest position at frame time and re-arm for the next frame.
    pub fn take(&mut self) -> Option<f64> {
        self.frame_requested = false;
        self.pending.take()
    }

    /// The requested frame will never arrive; allow a new request.
    ///
    /// The pending position is kept for whoever applies it next.
    pub fn abandon(&mut self) {
        self.frame_requested = false;
    }

    /// Discard any pending position (session ended).
    pub fn clear(&mut self) {
        self.pending = None;
    }
}
