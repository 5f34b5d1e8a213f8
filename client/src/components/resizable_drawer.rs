//! Resizable side drawer: binds `drawer::PanelController` to the DOM.
//!
//! ARCHITECTURE
//! ============
//! `DrawerHost` is the copyable handle the page shares through context. On
//! hydration it owns a `DrawerRuntime` holding the controller, the live
//! listener closures, and one reusable animation-frame callback. Every
//! controller call goes through `DrawerRuntime::run`, which applies the
//! returned effects and publishes a fresh `DrawerView` snapshot.
//!
//! ```text
//!  DOM event ──▶ DrawerRuntime::run ──▶ PanelController ──▶ Vec<Effect>
//!                                                            │
//!      ┌──────────────┬───────────────┬───────────────┬──────┴───────┐
//!   Attach/Detach  RequestFrame   WidthChanged      Closed       SetCursor
//!   (registry)     (rAF)          (localStorage)    (on_closed)  (body style)
//! ```
//!
//! On the server the handle is inert and the drawer renders closed.

use leptos::prelude::*;

use drawer::config::PanelConfig;

use crate::components::resize_handle::ResizeHandle;
use crate::state::drawer::DrawerView;
use crate::state::roster::StudentId;

#[cfg(feature = "hydrate")]
use std::cell::RefCell;
#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use drawer::controller::{Effect as PanelEffect, PanelController};
#[cfg(feature = "hydrate")]
use drawer::listener::Listener;
#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
use crate::util::listeners::ListenerRegistry;
#[cfg(feature = "hydrate")]
use crate::util::{platform, ui_persistence};

/// Copyable handle for opening, closing, and resizing the drawer.
#[derive(Clone, Copy)]
pub struct DrawerHost {
    view: RwSignal<DrawerView>,
    config: PanelConfig,
    on_closed: Option<Callback<()>>,
    #[cfg(feature = "hydrate")]
    runtime: StoredValue<Option<Rc<DrawerRuntime>>, LocalStorage>,
}

impl DrawerHost {
    pub fn new(view: RwSignal<DrawerView>, config: PanelConfig, on_closed: Option<Callback<()>>) -> Self {
        Self {
            view,
            config,
            on_closed,
            #[cfg(feature = "hydrate")]
            runtime: StoredValue::new_local(None),
        }
    }

    #[must_use]
    pub fn view(self) -> RwSignal<DrawerView> {
        self.view
    }

    /// Show `id` in the drawer, opening it if needed.
    pub fn open(self, id: StudentId) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(runtime) = self.runtime() {
                runtime.run(|panel, now| panel.open(id, now));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }

    pub fn close(self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(runtime) = self.runtime() {
                runtime.run(|panel, now| panel.close(now));
            }
        }
    }

    /// Pointer-down on the resize handle at viewport x `pointer_x`.
    pub fn begin_resize(self, pointer_x: f64) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(runtime) = self.runtime() {
                runtime.run(|panel, _| panel.begin_resize(pointer_x));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = pointer_x;
        }
    }

    fn mount(self) {
        #[cfg(feature = "hydrate")]
        {
            if self.runtime.with_value(Option::is_some) {
                return;
            }
            let runtime = DrawerRuntime::install(self.config, self.view, self.on_closed);
            self.runtime.set_value(Some(runtime));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (self.config, self.on_closed);
        }
    }

    fn unmount(self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(runtime) = self.runtime.try_update_value(Option::take).flatten() {
                runtime.unmount();
            }
        }
    }

    #[cfg(feature = "hydrate")]
    fn runtime(self) -> Option<Rc<DrawerRuntime>> {
        self.runtime.try_get_value().flatten()
    }
}

#[cfg(feature = "hydrate")]
struct DrawerRuntime {
    panel: RefCell<PanelController<StudentId>>,
    listeners: RefCell<ListenerRegistry>,
    frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    view: RwSignal<DrawerView>,
    on_closed: Option<Callback<()>>,
}

#[cfg(feature = "hydrate")]
impl DrawerRuntime {
    fn install(config: PanelConfig, view: RwSignal<DrawerView>, on_closed: Option<Callback<()>>) -> Rc<Self> {
        let panel = PanelController::new(config).unwrap_or_else(|err| {
            log::warn!("invalid drawer config, using defaults: {err}");
            PanelController::default()
        });
        let width = ui_persistence::load_drawer_width().unwrap_or(panel.config().default_width);
        let mut panel = panel.with_width(width);
        panel.set_touch_capable(platform::is_touch_device());

        let runtime = Rc::new(Self {
            panel: RefCell::new(panel),
            listeners: RefCell::new(ListenerRegistry::new()),
            frame: RefCell::new(None),
            view,
            on_closed,
        });

        let weak = Rc::downgrade(&runtime);
        let frame = Closure::wrap(Box::new(move |_ts: f64| {
            if let Some(runtime) = weak.upgrade() {
                runtime.listeners.borrow_mut().sweep();
                runtime.run(PanelController::on_frame);
            }
        }) as Box<dyn FnMut(f64)>);
        *runtime.frame.borrow_mut() = Some(frame);

        let viewport = platform::viewport_width();
        runtime.run(|panel, _| panel.mount(viewport));
        log::debug!("drawer mounted (viewport {viewport:.0})");
        runtime
    }

    /// Call into the controller, then apply its effects and publish the view.
    fn run(self: &Rc<Self>, call: impl FnOnce(&mut PanelController<StudentId>, f64) -> Vec<PanelEffect>) {
        let now = platform::now_ms();
        let effects = call(&mut self.panel.borrow_mut(), now);
        self.apply(effects);
        self.publish(now);
    }

    fn apply(self: &Rc<Self>, effects: Vec<PanelEffect>) {
        for effect in effects {
            match effect {
                PanelEffect::Attach(listener) => {
                    let handler = self.handler(listener);
                    self.listeners.borrow_mut().attach(listener, handler);
                }
                PanelEffect::Detach(listener) => self.listeners.borrow_mut().detach(listener),
                PanelEffect::RequestFrame => self.request_frame(),
                PanelEffect::WidthChanged(width) => ui_persistence::save_drawer_width(width),
                PanelEffect::Closed => {
                    if let Some(on_closed) = self.on_closed {
                        on_closed.run(());
                    }
                }
                PanelEffect::SetCursor(cursor) => platform::set_body_cursor(cursor),
            }
        }
    }

    fn publish(&self, now: f64) {
        let next = DrawerView::snapshot(&self.panel.borrow(), now);
        if self.view.try_get_untracked().is_some_and(|current| current != next) {
            self.view.set(next);
        }
    }

    fn request_frame(self: &Rc<Self>) {
        let scheduled = {
            let frame = self.frame.borrow();
            match (web_sys::window(), frame.as_ref()) {
                (Some(window), Some(callback)) => {
                    window.request_animation_frame(callback.as_ref().unchecked_ref()).is_ok()
                }
                _ => false,
            }
        };
        if !scheduled {
            log::warn!("requestAnimationFrame unavailable; drawer frame dropped");
            self.run(|panel, _| panel.frame_dropped());
        }
    }

    fn handler(self: &Rc<Self>, listener: Listener) -> Box<dyn FnMut(web_sys::Event)> {
        let weak = Rc::downgrade(self);
        Box::new(move |event: web_sys::Event| {
            if let Some(runtime) = weak.upgrade() {
                runtime.dispatch(listener, &event);
            }
        })
    }

    fn dispatch(self: &Rc<Self>, listener: Listener, event: &web_sys::Event) {
        match listener {
            Listener::PointerMove => {
                if let Some(x) = pointer_x(event) {
                    event.prevent_default();
                    self.run(|panel, _| panel.update_resize(x));
                }
            }
            Listener::PointerUp => match pointer_x(event) {
                Some(x) => self.run(|panel, now| panel.end_resize(x, now)),
                None => self.run(PanelController::cancel_resize),
            },
            Listener::PointerCancel | Listener::PointerLeave => self.run(PanelController::cancel_resize),
            Listener::KeyDown => {
                if let Some(key) = event.dyn_ref::<web_sys::KeyboardEvent>().map(web_sys::KeyboardEvent::key) {
                    self.run(|panel, now| panel.on_key_down(&key, now));
                }
            }
            Listener::WindowResize => {
                let viewport = platform::viewport_width();
                self.run(|panel, _| panel.set_viewport_width(viewport));
            }
        }
    }

    fn unmount(&self) {
        let effects = self.panel.borrow_mut().unmount();
        for effect in effects {
            match effect {
                PanelEffect::SetCursor(cursor) => platform::set_body_cursor(cursor),
                PanelEffect::Detach(listener) => self.listeners.borrow_mut().detach(listener),
                _ => {}
            }
        }
        self.listeners.borrow_mut().sweep();
        log::debug!("drawer unmounted");
    }
}

#[cfg(feature = "hydrate")]
fn pointer_x(event: &web_sys::Event) -> Option<f64> {
    event.dyn_ref::<web_sys::MouseEvent>().map(|e| f64::from(e.client_x()))
}

/// Overlay + sliding panel + resize handle around `children`.
///
/// Expects a `DrawerHost` in context.
#[component]
pub fn ResizableDrawer(children: ChildrenFn) -> impl IntoView {
    let host = expect_context::<DrawerHost>();
    let drawer_view = host.view();

    Effect::new(move || host.mount());
    on_cleanup(move || host.unmount());

    let visible = move || drawer_view.with(|v| v.visible);
    let panel_class = move || drawer_view.with(DrawerView::edge_class);
    let panel_style = move || drawer_view.with(DrawerView::panel_style);
    let overlay_style = move || drawer_view.with(DrawerView::overlay_style);
    let resizing = Signal::derive(move || drawer_view.with(|v| v.is_resizing));
    let on_start = Callback::new(move |x: f64| host.begin_resize(x));

    view! {
        <Show when=visible>
            <div class="drawer-overlay" style=overlay_style on:click=move |_| host.close()></div>
            <aside class=panel_class style=panel_style role="dialog" aria-modal="true">
                <ResizeHandle active=resizing on_start=on_start/>
                <div class="drawer__content">{children()}</div>
            </aside>
        </Show>
    }
}
