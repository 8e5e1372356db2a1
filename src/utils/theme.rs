//! Applying the colour scheme to the document.

use gallery_core::theme::{ColorScheme, ThemeConfig};

use super::{console, dom};
use crate::config::{COLOR_SCHEME_KEY, DARK_CLASS, PREFERS_DARK_QUERY};

/// Read the persisted preference. Called once at startup.
pub fn load() -> ThemeConfig {
    let stored = dom::storage_get(COLOR_SCHEME_KEY);
    if let Some(raw) = stored.as_deref()
        && let Err(e) = raw.parse::<ColorScheme>()
    {
        console::warn(&format!("ignoring stored preference: {}", e));
    }
    ThemeConfig::from_stored(stored.as_deref())
}

/// Whether the OS asks for a dark theme.
pub fn system_prefers_dark() -> bool {
    dom::media_matches(PREFERS_DARK_QUERY)
}

/// Add or remove the `dark` class on `<html>`.
pub fn apply(config: ThemeConfig, system_dark: bool) {
    let dark = config.is_dark(system_dark);
    dom::set_root_class(DARK_CLASS, dark);
    console::log(&format!(
        "color scheme: {} (dark: {})",
        config.preference, dark
    ));
}

/// Persist an explicit preference.
pub fn persist(config: ThemeConfig) {
    if !dom::storage_set(COLOR_SCHEME_KEY, config.preference.as_str()) {
        console::warn("localStorage not available; theme preference not saved");
    }
}
