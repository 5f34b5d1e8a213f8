//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and component
//! logic. Everything that touches `web_sys` is gated on `hydrate` and degrades
//! to a no-op on the server.

pub mod formatters;
pub mod listeners;
pub mod platform;
pub mod ui_persistence;
