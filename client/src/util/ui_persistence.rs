//! Browser localStorage helpers for UI preferences that outlive a page load.
//!
//! SYSTEM CONTEXT
//! ==============
//! The drawer controller keeps its committed width in memory only. The host
//! lifts it out here on every `WidthChanged` effect and seeds the next
//! controller with it, so the chosen width survives reloads.

#[cfg(test)]
#[path = "ui_persistence_test.rs"]
mod ui_persistence_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage key for the drawer's committed width.
pub const DRAWER_WIDTH_KEY: &str = "roster_drawer_width";

/// Load a JSON value from `localStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `localStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        if storage.set_item(key, &raw).is_err() {
            log::warn!("localStorage write failed for {key}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Last persisted drawer width, if any and finite.
pub fn load_drawer_width() -> Option<f64> {
    load_json::<f64>(DRAWER_WIDTH_KEY).filter(|w| w.is_finite())
}

pub fn save_drawer_width(width: f64) {
    if width.is_finite() {
        save_json(DRAWER_WIDTH_KEY, &width);
    }
}
