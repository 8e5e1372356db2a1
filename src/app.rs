//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use std::sync::Arc;

use gallery_core::MetadataClient;
use gallery_core::theme::ThemeConfig;
use leptos::prelude::*;
use leptos_use::use_media_query;

use crate::components::AppRouter;
use crate::config::PREFERS_DARK_QUERY;
use crate::utils::{dom, theme};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// with `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current URL pathname; the source of truth for routing and highlighting.
    pub path: RwSignal<String>,
    /// Active colour scheme preference.
    pub theme: RwSignal<ThemeConfig>,
    /// Whether the OS currently prefers dark.
    pub system_dark: RwSignal<bool>,
}

impl AppContext {
    pub fn new(path: impl Into<String>, theme: ThemeConfig, system_dark: bool) -> Self {
        Self {
            path: RwSignal::new(path.into()),
            theme: RwSignal::new(theme),
            system_dark: RwSignal::new(system_dark),
        }
    }

    /// Client-side navigation: push history, update the path, scroll up.
    ///
    /// Navigating to the current path is a no-op.
    pub fn navigate(&self, href: &str) {
        if self.path.with_untracked(|p| p == href) {
            return;
        }
        dom::push_path(href);
        self.path.set(href.to_string());
        dom::scroll_to_top();
    }

    /// Whether dark mode is currently in effect.
    pub fn is_dark(&self) -> bool {
        self.theme.get().is_dark(self.system_dark.get())
    }

    /// Flip between dark and light, persisting the explicit choice.
    pub fn toggle_theme(&self) {
        let next = self
            .theme
            .get_untracked()
            .toggled(self.system_dark.get_untracked());
        theme::persist(next);
        self.theme.set(next);
    }
}

/// The metadata client, shared by every page that needs schema or session
/// information.
#[derive(Clone)]
pub struct MetadataContext(pub Arc<dyn MetadataClient + Send + Sync>);

impl MetadataContext {
    pub fn client(&self) -> &(dyn MetadataClient + Send + Sync) {
        self.0.as_ref()
    }
}

/// Root application component with error boundary.
///
/// This component:
/// - Provides the AppContext and MetadataContext
/// - Keeps the `dark` class in sync with the preference and the OS setting
/// - Wraps the router in an ErrorBoundary for errors escaping any page
#[component]
pub fn App(
    theme_config: ThemeConfig,
    metadata: Arc<dyn MetadataClient + Send + Sync>,
) -> impl IntoView {
    let ctx = AppContext::new(dom::current_path(), theme_config, theme::system_prefers_dark());
    provide_context(ctx);
    provide_context(MetadataContext(metadata));

    // Follow OS changes while the preference is "system"
    let prefers_dark = use_media_query(PREFERS_DARK_QUERY);
    Effect::new(move |_| ctx.system_dark.set(prefers_dark.get()));

    Effect::new(move |_| theme::apply(ctx.theme.get(), ctx.system_dark.get()));

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class="app-error">
                    <h1>"Something went wrong"</h1>
                    <p>"An unexpected error occurred. Please try reloading the page."</p>
                    <details>
                        <summary>"Error details"</summary>
                        <ul>
                            {move || errors.get()
                                .into_iter()
                                .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                .collect::<Vec<_>>()
                            }
                        </ul>
                    </details>
                    <button on:click=move |_| {
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().reload();
                        }
                    }>
                        "Reload Page"
                    </button>
                </div>
            }
        >
            <AppRouter />
        </ErrorBoundary>
    }
}

// ============================================================================
// Test support
// ============================================================================

/// Render a view to HTML with both contexts provided, without a browser.
#[cfg(test)]
pub(crate) fn render_at<F, V>(path: &str, view: F) -> String
where
    F: FnOnce() -> V,
    V: leptos::tachys::view::RenderHtml,
{
    render_with_metadata(
        path,
        gallery_core::StaticMetadata::demo(crate::config::DEMO_BASE_URL),
        view,
    )
}

/// Like [`render_at`], with a specific metadata client.
#[cfg(test)]
pub(crate) fn render_with_metadata<F, V>(
    path: &str,
    metadata: gallery_core::StaticMetadata,
    view: F,
) -> String
where
    F: FnOnce() -> V,
    V: leptos::tachys::view::RenderHtml,
{
    let owner = Owner::new();
    owner.with(|| {
        provide_context(AppContext::new(path, ThemeConfig::default(), false));
        provide_context(MetadataContext(Arc::new(metadata)));
        view().to_html()
    })
}
