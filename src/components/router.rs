//! Application router component.
//!
//! Handles path-based routing with the History API.
//! Uses native popstate events instead of leptos_router.
//!
//! # Architecture
//!
//! - **`AppContext::path` is the source of truth**: the [`Route`] is derived
//!   from it and every page re-renders when it changes
//! - **Exact matching only**: `/gallery/datagrid/` is not `/gallery/datagrid`
//! - **popstate events**: browser back/forward buttons update the path
//! - **[`Link`]** intercepts plain left clicks and navigates without a reload

use gallery_core::Route;
use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::pages::page_for;

// ============================================================================
// Main Router
// ============================================================================

/// Main application router.
///
/// - `/`, `/gallery` → index
/// - `/gallery/<topic>` → topic page
/// - anything else → not found, rendered inside the layout
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Set up popstate event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            ctx.path.set(crate::utils::dom::current_path());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route = Memo::new(move |_| ctx.path.with(|p| Route::from_path(p)));

    view! { {move || page_for(route.get())} }
}

// ============================================================================
// Link
// ============================================================================

/// In-app anchor.
///
/// Renders a real `href` so middle clicks and "open in new tab" still work;
/// plain left clicks are turned into client-side navigation.
#[component]
pub fn Link(
    #[prop(into)] href: String,
    #[prop(optional)] class: &'static str,
    /// Marks the link as the current page for assistive technology.
    #[prop(optional)]
    current: bool,
    children: Children,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let target = href.clone();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() {
            return;
        }
        ev.prevent_default();
        ctx.navigate(&target);
    };

    view! {
        <a
            href=href
            class=class
            aria-current=current.then_some("page")
            on:click=on_click
        >
            {children()}
        </a>
    }
}
