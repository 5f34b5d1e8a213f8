//! Global DOM listeners driven by drawer `Attach`/`Detach` effects.
//!
//! DESIGN
//! ======
//! The registry never decides on its own what to listen to. It only mirrors
//! the controller's `ListenerSet`: one live closure per attached `Listener`.
//!
//! A detach can arrive from inside the very handler being detached (a
//! pointer-up ends the drag and detaches pointer-up). Dropping a
//! `Closure` while it runs is unsound, so detached closures are parked in
//! `retired` and freed by `sweep` on the next animation frame.

#[cfg(test)]
#[path = "listeners_test.rs"]
mod listeners_test;

use drawer::listener::Listener;

/// DOM object a listener is registered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListenerTarget {
    Document,
    /// `document.documentElement`; leaving it means leaving the viewport.
    Root,
    Window,
}

#[must_use]
pub fn target_of(listener: Listener) -> ListenerTarget {
    match listener {
        Listener::PointerMove | Listener::PointerUp | Listener::PointerCancel | Listener::KeyDown => {
            ListenerTarget::Document
        }
        Listener::PointerLeave => ListenerTarget::Root,
        Listener::WindowResize => ListenerTarget::Window,
    }
}

#[cfg(feature = "hydrate")]
pub use registry::ListenerRegistry;

#[cfg(feature = "hydrate")]
mod registry {
    use super::{ListenerTarget, target_of};
    use drawer::listener::Listener;
    use wasm_bindgen::{JsCast, closure::Closure};

    type Handler = Closure<dyn FnMut(web_sys::Event)>;

    #[derive(Default)]
    pub struct ListenerRegistry {
        live: Vec<(Listener, Handler)>,
        retired: Vec<Handler>,
    }

    impl ListenerRegistry {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Register `handler` for `listener`. A second attach is ignored.
        pub fn attach(&mut self, listener: Listener, handler: Box<dyn FnMut(web_sys::Event)>) {
            if self.is_attached(listener) {
                return;
            }
            let Some(target) = event_target(target_of(listener)) else {
                log::warn!("no target for {} listener", listener.event_name());
                return;
            };
            let closure = Closure::wrap(handler);
            if target
                .add_event_listener_with_callback(listener.event_name(), closure.as_ref().unchecked_ref())
                .is_err()
            {
                log::warn!("failed to attach {} listener", listener.event_name());
                return;
            }
            self.live.push((listener, closure));
        }

        pub fn detach(&mut self, listener: Listener) {
            let Some(index) = self.live.iter().position(|(l, _)| *l == listener) else {
                return;
            };
            let (_, closure) = self.live.remove(index);
            if let Some(target) = event_target(target_of(listener)) {
                if target
                    .remove_event_listener_with_callback(listener.event_name(), closure.as_ref().unchecked_ref())
                    .is_err()
                {
                    log::warn!("failed to detach {} listener", listener.event_name());
                }
            }
            self.retired.push(closure);
        }

        /// Detach everything, most recent first.
        pub fn detach_all(&mut self) {
            while let Some((listener, _)) = self.live.last() {
                let listener = *listener;
                self.detach(listener);
            }
        }

        /// Free closures detached earlier. Call outside any listener callback.
        pub fn sweep(&mut self) {
            self.retired.clear();
        }

        #[must_use]
        pub fn is_attached(&self, listener: Listener) -> bool {
            self.live.iter().any(|(l, _)| *l == listener)
        }

        #[must_use]
        pub fn len(&self) -> usize {
            self.live.len()
        }

        #[must_use]
        pub fn is_empty(&self) -> bool {
            self.live.is_empty()
        }
    }

    impl Drop for ListenerRegistry {
        fn drop(&mut self) {
            self.detach_all();
        }
    }

    fn event_target(target: ListenerTarget) -> Option<web_sys::EventTarget> {
        let window = web_sys::window()?;
        match target {
            ListenerTarget::Window => Some(window.into()),
            ListenerTarget::Document => window.document().map(Into::into),
            ListenerTarget::Root => window.document().and_then(|d| d.document_element()).map(Into::into),
        }
    }
}
