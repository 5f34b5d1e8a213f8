//! Resizable side panel controller.
//!
//! This crate owns the interaction model of a panel anchored to one edge of
//! the viewport: open/closed state, the committed width, and the drag gesture
//! that resizes (or, on touch surfaces, dismisses) it. It has no browser
//! dependency. The host layer wires platform events into the controller and
//! applies the [`controller::Effect`]s it returns: attaching and detaching
//! listeners, scheduling animation frames, and forwarding width/closed
//! notifications to whoever owns the panel.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | The [`controller::PanelController`] state machine and its effects |
//! | [`config`] | Width bounds, anchoring edge, and width ownership |
//! | [`geometry`] | Drag delta and width clamping arithmetic |
//! | [`drag`] | The per-gesture drag session |
//! | [`frame`] | Per-frame coalescing of pointer moves |
//! | [`transition`] | Easing curves and open/close tweens |
//! | [`listener`] | Global listener bookkeeping |
//! | [`consts`] | Shared numeric constants (default widths, durations, etc.) |

pub mod config;
pub mod consts;
pub mod controller;
pub mod drag;
pub mod frame;
pub mod geometry;
pub mod listener;
pub mod transition;
