//! The panel controller: open/closed state, committed width, and drag handling.
//!
//! ARCHITECTURE
//! ============
//! `PanelController` is a single-writer state machine. Every mutating call
//! returns a list of [`Effect`]s for the host to apply: listener
//! attach/detach, animation-frame requests, cursor changes, and the outbound
//! width-changed/closed notifications. The host reads state through the
//! query methods and never mutates it directly.
//!
//! ```text
//!            open()                 begin_resize()
//!   Closed ─────────▶ Open ────────────────────────▶ Resizing
//!     ▲                │  ◀──────────────────────────    │
//!     │   close()/     │     end_resize() / cancel       │
//!     │   escape       │                                 │
//!     └────────────────┘◀────────────────────────────────┘
//!                         end_resize() on touch, width ≤ close threshold
//! ```
//!
//! TRADE-OFFS
//! ==========
//! Pointer moves are coalesced to one width recompute per animation frame.
//! The host must therefore call [`PanelController::on_frame`] whenever it
//! receives [`Effect::RequestFrame`]; the same frame callback also advances
//! the open/close slide and fires [`Effect::Closed`] when the exit finishes.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use serde::Serialize;

use crate::config::{ConfigError, PanelConfig, WidthOwnership};
use crate::consts::{CLOSE_TRANSITION_MS, DISMISS_TRANSITION_MS, ESCAPE_KEY, OPEN_TRANSITION_MS, RESIZE_CURSOR};
use crate::drag::DragSession;
use crate::frame::FrameCoalescer;
use crate::geometry::clamp_width;
use crate::listener::{Listener, ListenerSet};
use crate::transition::{SlideKind, SlideTransition, WidthTransition};

/// Side effects returned from controller calls for the host to apply.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Subscribe the given global listener.
    Attach(Listener),
    /// Unsubscribe the given global listener.
    Detach(Listener),
    /// Call `on_frame` on the next animation frame.
    RequestFrame,
    /// The committed width settled at a new value.
    WidthChanged(f64),
    /// The exit transition finished and the content was released.
    Closed,
    /// Set (or with `None`, reset) the document-wide cursor.
    SetCursor(Option<&'static str>),
}

/// Coarse interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Phase {
    #[default]
    Closed,
    Open,
    Resizing,
}

/// Snapshot of the panel for rendering.
///
/// `width` is the width to draw right now: the live drag width while
/// resizing, the committed width otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelState {
    pub width: f64,
    pub is_open: bool,
    pub is_resizing: bool,
}

/// Controller for one resizable side panel holding host content `C`.
#[derive(Debug, Clone)]
pub struct PanelController<C> {
    config: PanelConfig,
    phase: Phase,
    width: f64,
    live_width: f64,
    viewport_width: f64,
    touch_capable: bool,
    drag: Option<DragSession>,
    frames: FrameCoalescer,
    slide: Option<SlideTransition>,
    content: Option<C>,
    listeners: ListenerSet,
}

impl<C> Default for PanelController<C> {
    fn default() -> Self {
        Self::from_valid(PanelConfig::default())
    }
}

impl<C> PanelController<C> {
    /// Build a closed controller at the configured default width.
    ///
    /// # Errors
    ///
    /// Returns the validation error if `config` is inconsistent.
    pub fn new(config: PanelConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: PanelConfig) -> Self {
        Self {
            config,
            phase: Phase::Closed,
            width: config.default_width,
            live_width: config.default_width,
            viewport_width: 0.0,
            touch_capable: false,
            drag: None,
            frames: FrameCoalescer::new(),
            slide: None,
            content: None,
            listeners: ListenerSet::new(),
        }
    }

    /// Start from a width the host kept (e.g. restored from storage).
    ///
    /// Non-finite values are ignored; others are clamped to the configured bounds.
    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        if width.is_finite() {
            self.width = self.settle(width);
            self.live_width = self.width;
        }
        self
    }

    // --- Lifecycle ---

    /// Host view mounted: start tracking the viewport.
    pub fn mount(&mut self, viewport_width: f64) -> Vec<Effect> {
        self.viewport_width = viewport_width;
        self.width = self.settle(self.width);
        self.live_width = self.width;
        self.listeners.attach(Listener::WindowResize).into_iter().collect()
    }

    /// Host view unmounting: drop every listener and any in-flight gesture or animation.
    pub fn unmount(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.drag.take().is_some() {
            effects.push(Effect::SetCursor(None));
        }
        self.frames.clear();
        self.slide = None;
        self.content = None;
        self.phase = Phase::Closed;
        self.live_width = self.width;
        effects.extend(self.listeners.detach_all());
        effects
    }

    /// Whether the platform reports touch input; enables drag-to-dismiss.
    pub fn set_touch_capable(&mut self, touch_capable: bool) {
        self.touch_capable = touch_capable;
    }

    // --- Open / close ---

    /// Open the panel with `content`.
    ///
    /// When already open, only the content is replaced.
    pub fn open(&mut self, content: C, now_ms: f64) -> Vec<Effect> {
        self.content = Some(content);
        if self.phase != Phase::Closed {
            return Vec::new();
        }

        if self.config.width_ownership == WidthOwnership::ResetOnOpen {
            self.width = self.config.default_width;
        }
        self.width = self.settle(self.width);
        self.live_width = self.width;
        self.phase = Phase::Open;

        let from_offset = self.slide.map_or(1.0, |slide| slide.offset_at(now_ms));
        self.slide = Some(SlideTransition::opening(from_offset, now_ms, OPEN_TRANSITION_MS));
        log::debug!("drawer opened at width {:.0}", self.width);

        let mut effects = Vec::new();
        effects.extend(self.listeners.attach(Listener::KeyDown));
        effects.extend(self.request_frame());
        effects.push(Effect::WidthChanged(self.width));
        effects
    }

    /// Close the panel with the standard exit transition.
    ///
    /// No-op when already closed or while a drag is in progress.
    pub fn close(&mut self, now_ms: f64) -> Vec<Effect> {
        if self.phase != Phase::Open {
            return Vec::new();
        }
        self.begin_exit(now_ms, CLOSE_TRANSITION_MS)
    }

    /// Escape pressed: close unless a drag is in progress.
    pub fn on_escape(&mut self, now_ms: f64) -> Vec<Effect> {
        if self.is_resizing() {
            return Vec::new();
        }
        self.close(now_ms)
    }

    /// Key-down from the global listener; only escape is meaningful.
    pub fn on_key_down(&mut self, key: &str, now_ms: f64) -> Vec<Effect> {
        if key == ESCAPE_KEY { self.on_escape(now_ms) } else { Vec::new() }
    }

    fn begin_exit(&mut self, now_ms: f64, duration_ms: f64) -> Vec<Effect> {
        self.phase = Phase::Closed;
        let from_offset = self.slide.map_or(0.0, |slide| slide.offset_at(now_ms));
        self.slide = Some(SlideTransition::closing(from_offset, now_ms, duration_ms));

        let mut effects = Vec::new();
        effects.extend(self.listeners.detach(Listener::KeyDown));
        effects.extend(self.request_frame());
        effects
    }

    // --- Resize gesture ---

    /// Pointer-down on the resize handle.
    ///
    /// No-op unless the panel is open and idle.
    pub fn begin_resize(&mut self, pointer: f64) -> Vec<Effect> {
        if self.phase != Phase::Open {
            return Vec::new();
        }
        self.drag = Some(DragSession::begin(pointer, self.width, self.touch_capable));
        self.live_width = self.width;
        self.frames.clear();
        self.phase = Phase::Resizing;
        log::debug!("drawer drag started at {pointer:.0} (width {:.0})", self.width);

        let mut effects: Vec<Effect> = Listener::DRAG
            .into_iter()
            .filter_map(|listener| self.listeners.attach(listener))
            .collect();
        effects.push(Effect::SetCursor(Some(RESIZE_CURSOR)));
        effects
    }

    /// Pointer-move during a drag. The width is recomputed on the next frame.
    pub fn update_resize(&mut self, pointer: f64) -> Vec<Effect> {
        let Some(drag) = self.drag.as_mut() else {
            return Vec::new();
        };
        drag.track(pointer);
        if self.frames.push(pointer) { vec![Effect::RequestFrame] } else { Vec::new() }
    }

    /// Pointer-up: commit the width, or dismiss on a short touch drag.
    pub fn end_resize(&mut self, pointer: f64, now_ms: f64) -> Vec<Effect> {
        let Some(drag) = self.drag.take() else {
            return Vec::new();
        };
        self.frames.clear();
        self.phase = Phase::Open;

        let mut effects: Vec<Effect> =
            Listener::DRAG.into_iter().filter_map(|listener| self.listeners.detach(listener)).collect();
        effects.push(Effect::SetCursor(None));

        let proposed = drag.proposed_width(self.config.edge, pointer);
        if drag.touch && proposed <= self.config.close_threshold {
            log::debug!("drawer dismissed by drag at width {proposed:.0}");
            self.live_width = self.width;
            effects.extend(self.begin_exit(now_ms, DISMISS_TRANSITION_MS));
            return effects;
        }

        self.width = self.settle(proposed);
        self.live_width = self.width;
        log::debug!("drawer drag ended at width {:.0}", self.width);
        if (self.width - drag.anchor_width).abs() > f64::EPSILON {
            effects.push(Effect::WidthChanged(self.width));
        }
        effects
    }

    /// Pointer left the tracked surface without a pointer-up.
    ///
    /// Handled exactly like a pointer-up at the last observed position.
    pub fn cancel_resize(&mut self, now_ms: f64) -> Vec<Effect> {
        match self.drag {
            Some(drag) => self.end_resize(drag.last_pointer, now_ms),
            None => Vec::new(),
        }
    }

    // --- Frame / viewport ---

    /// Animation frame: apply the latest coalesced pointer and advance the slide.
    pub fn on_frame(&mut self, now_ms: f64) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let Some(pointer) = self.frames.take() {
            self.apply_pointer(pointer);
        }

        if let Some(slide) = self.slide {
            if slide.is_finished(now_ms) {
                effects.extend(self.finish_slide());
            } else {
                effects.extend(self.request_frame());
            }
        }
        effects
    }

    /// The host could not schedule a requested frame.
    ///
    /// Re-arms frame requests and settles what that frame would have done:
    /// the latest drag position is applied and a running slide jumps to its end.
    pub fn frame_dropped(&mut self) -> Vec<Effect> {
        self.frames.abandon();
        if let Some(pointer) = self.frames.take() {
            self.apply_pointer(pointer);
        }
        log::debug!("drawer frame dropped");
        self.finish_slide().into_iter().collect()
    }

    fn apply_pointer(&mut self, pointer: f64) {
        let Some(drag) = self.drag else {
            return;
        };
        let floor = if drag.touch { self.config.close_threshold } else { self.config.min_width };
        let proposed = drag.proposed_width(self.config.edge, pointer);
        self.live_width = clamp_width(proposed, floor, self.config.max_width, self.viewport_width);
    }

    fn finish_slide(&mut self) -> Option<Effect> {
        let slide = self.slide.take()?;
        if slide.kind != SlideKind::Closing {
            return None;
        }
        self.content = None;
        log::debug!("drawer close transition complete");
        Some(Effect::Closed)
    }

    /// Window resized. Shrinks the committed width when it no longer fits.
    pub fn set_viewport_width(&mut self, viewport_width: f64) -> Vec<Effect> {
        self.viewport_width = viewport_width;
        let next = self.settle(self.width);
        // Fits, or already pinned at the floor of a too-narrow viewport.
        if (next - self.width).abs() <= f64::EPSILON {
            return Vec::new();
        }

        self.width = next;
        match self.phase {
            Phase::Open => {
                self.live_width = self.width;
                vec![Effect::WidthChanged(self.width)]
            }
            Phase::Closed => {
                self.live_width = self.width;
                Vec::new()
            }
            // The drag recomputes against the new viewport on its next frame.
            Phase::Resizing => Vec::new(),
        }
    }

    fn settle(&self, proposed: f64) -> f64 {
        clamp_width(proposed, self.config.min_width, self.config.max_width, self.viewport_width)
    }

    fn request_frame(&mut self) -> Option<Effect> {
        self.frames.request().then_some(Effect::RequestFrame)
    }

    // --- Queries ---

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn state(&self) -> PanelState {
        PanelState { width: self.live_width, is_open: self.is_open(), is_resizing: self.is_resizing() }
    }

    /// Last committed width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Width to draw now (tracks the pointer while resizing).
    #[must_use]
    pub fn live_width(&self) -> f64 {
        self.live_width
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase != Phase::Closed
    }

    #[must_use]
    pub fn is_resizing(&self) -> bool {
        self.phase == Phase::Resizing
    }

    /// Whether anything should be drawn: open, or still sliding out.
    #[must_use]
    pub fn is_visible(&self, now_ms: f64) -> bool {
        self.is_open() || self.slide.is_some_and(|slide| !slide.is_finished(now_ms))
    }

    /// Host content; kept through the exit transition and released after it.
    #[must_use]
    pub fn content(&self) -> Option<&C> {
        self.content.as_ref()
    }

    /// Slide offset as a fraction of the panel width (0 shown, 1 hidden).
    #[must_use]
    pub fn slide_offset(&self, now_ms: f64) -> f64 {
        match self.slide {
            Some(slide) => slide.offset_at(now_ms),
            None if self.is_open() => 0.0,
            None => 1.0,
        }
    }

    /// Backdrop opacity, fading with the slide.
    #[must_use]
    pub fn overlay_opacity(&self, now_ms: f64) -> f64 {
        1.0 - self.slide_offset(now_ms)
    }

    #[must_use]
    pub fn width_transition(&self) -> WidthTransition {
        WidthTransition::for_resizing(self.is_resizing())
    }

    #[must_use]
    pub fn active_listeners(&self) -> &ListenerSet {
        &self.listeners
    }

    #[must_use]
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    #[must_use]
    pub fn is_touch_capable(&self) -> bool {
        self.touch_capable
    }
}
