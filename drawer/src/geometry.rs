//! Width arithmetic: drag deltas and the clamp against configured and viewport bounds.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::config::Edge;
use crate::consts::VIEWPORT_MAX_FRACTION;

/// Signed width change for a pointer that moved from `anchor_x` to `pointer_x`.
///
/// A right-anchored panel grows as the pointer moves left, a left-anchored
/// one as it moves right.
#[must_use]
pub fn drag_delta(edge: Edge, anchor_x: f64, pointer_x: f64) -> f64 {
    match edge {
        Edge::Right => anchor_x - pointer_x,
        Edge::Left => pointer_x - anchor_x,
    }
}

/// Effective upper bound: the configured maximum, capped by the viewport.
///
/// A non-finite or non-positive viewport means "not measured yet" and
/// leaves the configured maximum in place.
#[must_use]
pub fn width_ceiling(max_width: f64, viewport_width: f64) -> f64 {
    if viewport_width.is_finite() && viewport_width > 0.0 {
        max_width.min(viewport_width * VIEWPORT_MAX_FRACTION)
    } else {
        max_width
    }
}

/// Clamp a proposed width into `[floor, ceiling]`.
///
/// Both bounds are applied in one expression. When the viewport is so narrow
/// that the ceiling falls below the floor, the floor wins.
#[must_use]
pub fn clamp_width(proposed: f64, floor: f64, max_width: f64, viewport_width: f64) -> f64 {
    let ceiling = width_ceiling(max_width, viewport_width);
    let proposed = if proposed.is_nan() { floor } else { proposed };
    proposed.min(ceiling).max(floor)
}
