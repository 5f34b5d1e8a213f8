//! Bookkeeping for global listeners the host attaches on the controller's behalf.
//!
//! The controller never touches the platform's event API. It asks the host to
//! attach or detach a [`Listener`] through effects, and this set guarantees
//! each request is emitted once: attaching twice or detaching something that
//! is not attached produces no effect.
//!
//! Scopes:
//! - `PointerMove`, `PointerUp`, `PointerCancel`, `PointerLeave`: exactly while a drag is active.
//! - `KeyDown`: exactly while the panel is open.
//! - `WindowResize`: from `mount` to `unmount`.

#[cfg(test)]
#[path = "listener_test.rs"]
mod listener_test;

use crate::controller::Effect;

/// A global event subscription owned by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Listener {
    PointerMove,
    PointerUp,
    PointerCancel,
    PointerLeave,
    KeyDown,
    WindowResize,
}

impl Listener {
    /// The listeners that make up one drag session.
    pub const DRAG: [Listener; 4] =
        [Listener::PointerMove, Listener::PointerUp, Listener::PointerCancel, Listener::PointerLeave];

    /// DOM event name, for hosts that subscribe by string.
    #[must_use]
    pub fn event_name(self) -> &'static str {
        match self {
            Self::PointerMove => "pointermove",
            Self::PointerUp => "pointerup",
            Self::PointerCancel => "pointercancel",
            Self::PointerLeave => "pointerleave",
            Self::KeyDown => "keydown",
            Self::WindowResize => "resize",
        }
    }
}

/// The listeners currently attached, in attach order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListenerSet {
    attached: Vec<Listener>,
}

impl ListenerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `listener` attached; emits `Effect::Attach` only if it was not.
    pub fn attach(&mut self, listener: Listener) -> Option<Effect> {
        if self.contains(listener) {
            return None;
        }
        self.attached.push(listener);
        Some(Effect::Attach(listener))
    }

    /// Mark `listener` detached; emits `Effect::Detach` only if it was attached.
    pub fn detach(&mut self, listener: Listener) -> Option<Effect> {
        let index = self.attached.iter().position(|l| *l == listener)?;
        self.attached.remove(index);
        Some(Effect::Detach(listener))
    }

    /// Detach everything, most recent first.
    pub fn detach_all(&mut self) -> Vec<Effect> {
        self.attached.drain(..).rev().map(Effect::Detach).collect()
    }

    #[must_use]
    pub fn contains(&self, listener: Listener) -> bool {
        self.attached.contains(&listener)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.attached.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attached.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Listener> + '_ {
        self.attached.iter().copied()
    }
}
