//! Browser utilities.
//!
//! Provides:
//! - [`dom`] - window, storage, history and class helpers
//! - [`console`] - browser console logging
//! - [`markdown_to_html`] - Markdown rendering with XSS sanitization
//! - [`theme`] - dark mode initialisation and persistence

pub mod console;
pub mod dom;
mod markdown;
pub mod theme;

pub use markdown::markdown_to_html;
