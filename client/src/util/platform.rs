//! Browser environment probes: touch support, viewport size, clock, body cursor.

#[cfg(test)]
#[path = "platform_test.rs"]
mod platform_test;

/// Whether the primary input is touch (enables drag-to-dismiss).
pub fn is_touch_device() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        if window.navigator().max_touch_points() > 0 {
            return true;
        }
        window
            .match_media("(pointer: coarse)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Current `window.innerWidth`, or 0 when it cannot be measured.
pub fn viewport_width() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Wall clock in milliseconds; drives the drawer's slide tweens.
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Set the document-wide cursor and suppress text selection while set.
///
/// `None` restores both.
pub fn set_body_cursor(cursor: Option<&str>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        let (cursor, select) = match cursor {
            Some(cursor) => (cursor, "none"),
            None => ("", ""),
        };
        if style.set_property("cursor", cursor).is_err() || style.set_property("user-select", select).is_err() {
            log::warn!("failed to update body cursor");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = cursor;
    }
}
