#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// drag_delta
// =============================================================

#[test]
fn right_edge_grows_when_pointer_moves_left() {
    assert_eq!(drag_delta(Edge::Right, 800.0, 760.0), 40.0);
    assert_eq!(drag_delta(Edge::Right, 800.0, 900.0), -100.0);
}

#[test]
fn left_edge_grows_when_pointer_moves_right() {
    assert_eq!(drag_delta(Edge::Left, 300.0, 360.0), 60.0);
    assert_eq!(drag_delta(Edge::Left, 300.0, 250.0), -50.0);
}

#[test]
fn zero_movement_is_zero_delta() {
    assert_eq!(drag_delta(Edge::Right, 512.5, 512.5), 0.0);
    assert_eq!(drag_delta(Edge::Left, 512.5, 512.5), 0.0);
}

// =============================================================
// width_ceiling
// =============================================================

#[test]
fn ceiling_is_max_width_on_wide_viewport() {
    assert_eq!(width_ceiling(1200.0, 1920.0), 1200.0);
}

#[test]
fn ceiling_tracks_eighty_percent_of_narrow_viewport() {
    assert_eq!(width_ceiling(1200.0, 1000.0), 800.0);
}

#[test]
fn ceiling_ignores_unmeasured_viewport() {
    assert_eq!(width_ceiling(1200.0, 0.0), 1200.0);
    assert_eq!(width_ceiling(1200.0, f64::NAN), 1200.0);
    assert_eq!(width_ceiling(1200.0, f64::INFINITY), 1200.0);
}

// =============================================================
// clamp_width
// =============================================================

#[test]
fn clamp_passes_through_in_range_values() {
    assert_eq!(clamp_width(640.0, 400.0, 1200.0, 1920.0), 640.0);
}

#[test]
fn clamp_raises_to_floor() {
    assert_eq!(clamp_width(120.0, 400.0, 1200.0, 1920.0), 400.0);
    assert_eq!(clamp_width(-500.0, 400.0, 1200.0, 1920.0), 400.0);
}

#[test]
fn clamp_lowers_to_viewport_ceiling() {
    assert_eq!(clamp_width(1100.0, 400.0, 1200.0, 1000.0), 800.0);
}

#[test]
fn clamp_lowers_to_max_width() {
    assert_eq!(clamp_width(5000.0, 400.0, 1200.0, 4000.0), 1200.0);
}

#[test]
fn floor_wins_when_viewport_is_narrower_than_floor() {
    // 0.8 * 400 = 320 < 400
    assert_eq!(clamp_width(900.0, 400.0, 1200.0, 400.0), 400.0);
    assert_eq!(clamp_width(100.0, 400.0, 1200.0, 400.0), 400.0);
}

#[test]
fn clamp_maps_nan_to_floor() {
    assert_eq!(clamp_width(f64::NAN, 400.0, 1200.0, 1920.0), 400.0);
}

#[test]
fn clamp_result_always_within_bounds_for_sweep() {
    let viewport = 1280.0;
    let ceiling = width_ceiling(1200.0, viewport);
    let mut proposed = -2000.0;
    while proposed < 4000.0 {
        let w = clamp_width(proposed, 400.0, 1200.0, viewport);
        assert!((400.0..=ceiling).contains(&w), "proposed {proposed} gave {w}");
        proposed += 37.5;
    }
}
