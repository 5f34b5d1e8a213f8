//! Shared numeric constants for the drawer crate.

// ── Width bounds ────────────────────────────────────────────────

/// Narrowest width a panel settles at after a pointer drag, in CSS pixels.
pub const DEFAULT_MIN_WIDTH: f64 = 400.0;

/// Widest configured width, before the viewport ceiling applies.
pub const DEFAULT_MAX_WIDTH: f64 = 1200.0;

/// Width of a freshly created panel.
pub const DEFAULT_WIDTH: f64 = 600.0;

/// A touch drag that ends at or below this width dismisses the panel.
pub const DEFAULT_CLOSE_THRESHOLD: f64 = 50.0;

/// The panel never grows past this share of the viewport width.
pub const VIEWPORT_MAX_FRACTION: f64 = 0.8;

// ── Transitions ─────────────────────────────────────────────────

/// Duration of eased width changes (programmatic, not drag-driven).
pub const WIDTH_TRANSITION_MS: f64 = 300.0;

/// Slide-in duration when the panel opens.
pub const OPEN_TRANSITION_MS: f64 = 300.0;

/// Slide-out duration for explicit closes (button, escape, overlay).
pub const CLOSE_TRANSITION_MS: f64 = 300.0;

/// Slide-out duration after a touch drag-to-dismiss.
pub const DISMISS_TRANSITION_MS: f64 = 500.0;

// ── Platform ────────────────────────────────────────────────────

/// Key name reported by the browser for the escape key.
pub const ESCAPE_KEY: &str = "Escape";

/// Body cursor applied for the duration of a drag.
pub const RESIZE_CURSOR: &str = "ew-resize";
