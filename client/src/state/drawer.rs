//! Rendered snapshot of the side drawer.
//!
//! DESIGN
//! ======
//! The controller itself never lives in a signal. After every batch of
//! effects the host takes a `DrawerView` snapshot and publishes it, so
//! components re-render from plain data and only when something changed.

#[cfg(test)]
#[path = "drawer_test.rs"]
mod drawer_test;

use drawer::config::Edge;
use drawer::consts::DEFAULT_WIDTH;
use drawer::controller::PanelController;
use drawer::transition::WidthTransition;

use crate::state::roster::StudentId;

/// What the drawer components need to draw one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawerView {
    pub edge: Edge,
    /// Width to draw now (live while dragging).
    pub width: f64,
    pub is_open: bool,
    pub is_resizing: bool,
    /// Open, or still sliding out.
    pub visible: bool,
    /// 0 fully shown, 1 fully hidden.
    pub slide_offset: f64,
    pub overlay_opacity: f64,
    pub width_transition: WidthTransition,
    /// Student shown in the drawer; kept through the exit slide.
    pub content: Option<StudentId>,
}

impl Default for DrawerView {
    fn default() -> Self {
        Self {
            edge: Edge::Right,
            width: DEFAULT_WIDTH,
            is_open: false,
            is_resizing: false,
            visible: false,
            slide_offset: 1.0,
            overlay_opacity: 0.0,
            width_transition: WidthTransition::for_resizing(false),
            content: None,
        }
    }
}

impl DrawerView {
    #[must_use]
    pub fn snapshot(panel: &PanelController<StudentId>, now_ms: f64) -> Self {
        let state = panel.state();
        Self {
            edge: panel.config().edge,
            width: state.width,
            is_open: state.is_open,
            is_resizing: state.is_resizing,
            visible: panel.is_visible(now_ms),
            slide_offset: panel.slide_offset(now_ms),
            overlay_opacity: panel.overlay_opacity(now_ms),
            width_transition: panel.width_transition(),
            content: panel.content().copied(),
        }
    }

    /// Inline style for the panel element.
    #[must_use]
    pub fn panel_style(&self) -> String {
        let percent = self.slide_offset * 100.0;
        let sign = if self.edge == Edge::Left && percent > 0.0 { "-" } else { "" };
        format!(
            "width: {}px; transform: translateX({sign}{percent:.3}%); transition: {};",
            self.width,
            self.width_transition.css()
        )
    }

    /// Inline style for the backdrop.
    #[must_use]
    pub fn overlay_style(&self) -> String {
        let pointer_events = if self.is_open { "auto" } else { "none" };
        format!("opacity: {:.3}; pointer-events: {pointer_events};", self.overlay_opacity)
    }

    /// Edge modifier class for the panel element.
    #[must_use]
    pub fn edge_class(&self) -> &'static str {
        match self.edge {
            Edge::Right => "drawer drawer--right",
            Edge::Left => "drawer drawer--left",
        }
    }
}
