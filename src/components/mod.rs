//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point) and [`Link`]
//! - [`layout`] - Page chrome: header, sidebar navigation, title
//! - [`boundary`] - Local error boundary around demo regions
//! - [`code`] - Code snippets and example panels
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`widgets`] - The interactive components the gallery showcases

pub mod boundary;
pub mod code;
pub mod icons;
pub mod layout;
pub mod router;
pub mod widgets;

pub use boundary::Boundary;
pub use code::{CodeBlock, CodeExample};
pub use layout::Layout;
pub use router::{AppRouter, Link};
