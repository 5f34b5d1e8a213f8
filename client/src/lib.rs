//! # client
//!
//! Leptos + WASM frontend for the student roster.
//!
//! The page lists students on the left and shows the selected student's
//! details in a resizable side drawer. All drawer behavior lives in the
//! `drawer` crate; this crate binds its effects to the DOM (listeners,
//! animation frames, body cursor, width persistence) and renders the result.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install browser logging and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
