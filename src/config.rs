//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Site name shown in the header.
pub const APP_NAME: &str = "Leptos Component Gallery";

/// Application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Element the app is mounted into.
pub const MOUNT_ELEMENT_ID: &str = "app";

// =============================================================================
// Metadata Client
// =============================================================================

/// Base URL reported by the demo metadata.
pub const DEMO_BASE_URL: &str = "https://blazor-gallery.servicestack.net";

/// Role required to delete bookings.
pub const MANAGER_ROLE: &str = "Manager";

// =============================================================================
// Theme
// =============================================================================

/// localStorage key holding the colour scheme preference.
pub const COLOR_SCHEME_KEY: &str = "color-scheme";

/// Class added to `<html>` in dark mode.
pub const DARK_CLASS: &str = "dark";

/// Media query for the OS dark preference.
pub const PREFERS_DARK_QUERY: &str = "(prefers-color-scheme: dark)";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

/// Booking loaded into the form inputs demo.
pub const DEMO_BOOKING_ID: u32 = 1;

/// Maximum number of suggestions shown by the autocomplete demo.
pub const MAX_SUGGESTIONS: usize = 8;
