//! Dark mode preference and `<html data-theme>` application.
//!
//! Reads the stored preference through a `KeyValueStore` and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back through
//! the same store and updates that attribute.
//!
//! TRADE-OFFS
//! ==========
//! The app is styled dark-first, so dark wins whenever neither a stored value
//! nor a light system preference says otherwise. SSR paths no-op on the DOM to
//! keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use super::storage::KeyValueStore;

pub const STORAGE_KEY: &str = "cyber_net_theme";

/// Read the dark mode preference.
///
/// A stored `"true"`/`"false"` wins; otherwise the system color scheme is
/// consulted, defaulting to dark.
pub fn read_preference(store: &dyn KeyValueStore) -> bool {
    if let Some(val) = store.get(STORAGE_KEY) {
        return val == "true";
    }
    !system_prefers_light()
}

fn system_prefers_light() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: light)").ok().flatten())
            .is_some_and(|mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let _ = el.set_attribute("data-theme", if enabled { "dark" } else { "light" });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(store: &dyn KeyValueStore, current: bool) -> bool {
    let next = !current;
    apply(next);
    if let Err(e) = store.set(STORAGE_KEY, if next { "true" } else { "false" }) {
        log::warn!("theme preference not saved: {e}");
    }
    next
}
