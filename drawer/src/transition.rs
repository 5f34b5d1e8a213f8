//! Easing curves and time-boxed tweens for open/close and width changes.
//!
//! The controller never touches a timer. Hosts pass the frame timestamp into
//! `on_frame`, and tweens are evaluated against it, so any compositor or
//! timer loop can drive them.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use crate::consts::WIDTH_TRANSITION_MS;

/// Timing function applied to tween progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    /// `cubic-bezier(0.4, 0, 0.2, 1)`.
    #[default]
    Standard,
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::Standard => cubic_bezier(0.4, 0.0, 0.2, 1.0, t),
        }
    }

    /// CSS spelling of the timing function.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Standard => "cubic-bezier(0.4, 0, 0.2, 1)",
        }
    }
}

/// Evaluate a CSS cubic-bezier timing function at input `x`.
fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, x: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;
    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    let sample_x = |t: f64| ((ax * t + bx) * t + cx) * t;
    let sample_y = |t: f64| ((ay * t + by) * t + cy) * t;
    let slope_x = |t: f64| (3.0 * ax * t + 2.0 * bx) * t + cx;

    // Newton first; fall back to bisection when the slope flattens out.
    let mut t = x;
    for _ in 0..8 {
        let err = sample_x(t) - x;
        if err.abs() < 1e-7 {
            return sample_y(t);
        }
        let d = slope_x(t);
        if d.abs() < 1e-6 {
            break;
        }
        t -= err / d;
    }

    let (mut lo, mut hi) = (0.0_f64, 1.0_f64);
    t = x;
    for _ in 0..64 {
        let value = sample_x(t);
        if (value - x).abs() < 1e-7 {
            break;
        }
        if value < x {
            lo = t;
        } else {
            hi = t;
        }
        t = (lo + hi) / 2.0;
    }
    sample_y(t)
}

/// Interpolation of one value over a fixed time window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Tween {
    #[must_use]
    pub fn new(from: f64, to: f64, start_ms: f64, duration_ms: f64, easing: Easing) -> Self {
        Self { from, to, start_ms, duration_ms, easing }
    }

    /// Linear progress in `[0, 1]` at `now_ms`.
    #[must_use]
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Eased value at `now_ms`.
    #[must_use]
    pub fn value_at(&self, now_ms: f64) -> f64 {
        let eased = self.easing.apply(self.progress(now_ms));
        self.from + (self.to - self.from) * eased
    }

    #[must_use]
    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }
}

/// Direction of a slide animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideKind {
    Opening,
    Closing,
}

/// Slide of the panel along its anchoring edge.
///
/// The tweened value is the panel's offset as a fraction of its own width:
/// `0.0` fully shown, `1.0` fully off-screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideTransition {
    pub kind: SlideKind,
    pub tween: Tween,
}

impl SlideTransition {
    /// Slide in from `from_offset` to fully shown.
    #[must_use]
    pub fn opening(from_offset: f64, now_ms: f64, duration_ms: f64) -> Self {
        let remaining = duration_ms * from_offset.clamp(0.0, 1.0);
        Self { kind: SlideKind::Opening, tween: Tween::new(from_offset, 0.0, now_ms, remaining, Easing::Standard) }
    }

    /// Slide out from `from_offset` to fully hidden.
    #[must_use]
    pub fn closing(from_offset: f64, now_ms: f64, duration_ms: f64) -> Self {
        let remaining = duration_ms * (1.0 - from_offset.clamp(0.0, 1.0));
        Self { kind: SlideKind::Closing, tween: Tween::new(from_offset, 1.0, now_ms, remaining, Easing::Standard) }
    }

    #[must_use]
    pub fn offset_at(&self, now_ms: f64) -> f64 {
        self.tween.value_at(now_ms)
    }

    #[must_use]
    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.tween.is_finished(now_ms)
    }
}

/// How width changes are presented.
///
/// While the user drags, the panel must track the pointer 1:1, so easing is
/// suppressed; every other width change is eased.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidthTransition {
    Immediate,
    Eased { duration_ms: f64, easing: Easing },
}

impl WidthTransition {
    #[must_use]
    pub fn for_resizing(is_resizing: bool) -> Self {
        if is_resizing {
            Self::Immediate
        } else {
            Self::Eased { duration_ms: WIDTH_TRANSITION_MS, easing: Easing::Standard }
        }
    }

    /// CSS `transition` value for the panel's `width` property.
    #[must_use]
    pub fn css(&self) -> String {
        match self {
            Self::Immediate => "none".to_owned(),
            Self::Eased { duration_ms, easing } => format!("width {duration_ms:.0}ms {}", easing.css()),
        }
    }
}
