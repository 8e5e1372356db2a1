//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.
//! Every function degrades to a no-op (or `None`) when the API is missing.

use web_sys::{Storage, Window};

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Read a localStorage entry.
pub fn storage_get(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok()?
}

/// Write a localStorage entry. Returns `false` if storage is unavailable.
pub fn storage_set(key: &str, value: &str) -> bool {
    local_storage().is_some_and(|s| s.set_item(key, value).is_ok())
}

/// Check a CSS media query, e.g. `(prefers-color-scheme: dark)`.
pub fn media_matches(query: &str) -> bool {
    window()
        .and_then(|w| w.match_media(query).ok().flatten())
        .is_some_and(|m| m.matches())
}

/// Add or remove a class on the `<html>` element.
pub fn set_root_class(class: &str, on: bool) {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(root) = document.document_element()
    {
        let _ = root.class_list().toggle_with_force(class, on);
    }
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Get the current URL pathname (e.g. `/gallery/datagrid`).
pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Push a new pathname onto the history stack (no page load).
pub fn push_path(path: &str) {
    if let Some(window) = window()
        && let Ok(history) = window.history()
    {
        let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(path));
    }
}

/// Scroll the page back to the top.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_storage_round_trip() {
        assert!(storage_set("gallery-test", "dark"));
        assert_eq!(storage_get("gallery-test").as_deref(), Some("dark"));
    }

    #[wasm_bindgen_test]
    fn test_root_class_toggle() {
        let has_class = || {
            window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
                .is_some_and(|root| root.class_list().contains("gallery-test"))
        };
        set_root_class("gallery-test", true);
        assert!(has_class());
        set_root_class("gallery-test", false);
        assert!(!has_class());
    }

    #[wasm_bindgen_test]
    fn test_push_path() {
        push_path("/gallery/alerts");
        assert_eq!(current_path(), "/gallery/alerts");
    }
}
