//! Drag grip on the inner edge of the drawer.

use leptos::prelude::*;

/// Vertical grip. Reports the pointer-down x coordinate through `on_start`.
#[component]
pub fn ResizeHandle(#[prop(into)] active: Signal<bool>, on_start: Callback<f64>) -> impl IntoView {
    view! {
        <div
            class="resize-handle"
            class:resize-handle--active=move || active.get()
            role="separator"
            aria-orientation="vertical"
            aria-label="Redimensionează panoul"
            on:pointerdown=move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                ev.stop_propagation();
                on_start.run(f64::from(ev.client_x()));
            }
        >
            <div class="resize-handle__dots">
                {(0..5).map(|_| view! { <span class="resize-handle__dot"></span> }).collect_view()}
            </div>
            <Show when=move || active.get()>
                <div class="resize-handle__line"></div>
            </Show>
        </div>
    }
}
