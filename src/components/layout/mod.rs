//! Page layout: header, sidebar navigation and the titled main area.
//!
//! The sidebar is resolved against the current path on every render, so
//! exactly one link is highlighted on a known page and none elsewhere.

use gallery_core::navigation::{self, SidebarSection};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::Link;
use crate::components::icons as ic;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

/// Gallery page chrome.
///
/// With `title` the main area starts with a single `<h1>`; without it, or
/// with an empty one, no heading is rendered.
#[component]
pub fn Layout(#[prop(optional, into)] title: Option<String>, children: Children) -> impl IntoView {
    view! {
        <div class=css::shell>
            <Header />
            <div class=css::body>
                <Sidebar />
                <main class=css::main>
                    {title
                        .filter(|t| !t.is_empty())
                        .map(|t| view! { <h1 class=css::title>{t}</h1> })}
                    {children()}
                </main>
            </div>
        </div>
    }
}

// ============================================================================
// Header
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class=css::header>
            <Link href="/" class=css::brand>
                <span class=css::brandMark>"L"</span>
                <span>{APP_NAME}</span>
            </Link>
            <div class=css::headerActions>
                <DarkModeToggle />
            </div>
        </header>
    }
}

/// Switches between light and dark, remembering the explicit choice.
#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let label = move || {
        if ctx.is_dark() {
            "Switch to light mode"
        } else {
            "Switch to dark mode"
        }
    };

    view! {
        <button
            class=css::themeToggle
            title=label
            aria-label=label
            on:click=move |_| ctx.toggle_theme()
        >
            {move || {
                if ctx.is_dark() {
                    view! { <Icon icon=ic::SUN /> }.into_any()
                } else {
                    view! { <Icon icon=ic::MOON /> }.into_any()
                }
            }}
        </button>
    }
}

// ============================================================================
// Sidebar
// ============================================================================

#[component]
fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <nav class=css::sidebar aria-label="Gallery">
            {move || {
                ctx.path
                    .with(|p| navigation::sidebar(p))
                    .into_iter()
                    .map(section_view)
                    .collect_view()
            }}
        </nav>
    }
}

fn section_view(section: SidebarSection) -> impl IntoView {
    view! {
        <div class=css::section>
            <h3 class=css::sectionTitle>{section.title}</h3>
            <ul class=css::links>
                {section
                    .links
                    .into_iter()
                    .map(|link| {
                        let class = if link.active { css::linkActive } else { css::link };
                        view! {
                            <li>
                                <Link href=link.href class=class current=link.active>
                                    {link.label}
                                </Link>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::render_at;

    fn anchor<'a>(html: &'a str, href: &str) -> &'a str {
        let needle = format!("href=\"{}\"", href);
        let at = html.find(&needle).expect("link rendered");
        let start = html[..at].rfind("<a").expect("anchor start");
        let end = at + html[at..].find('>').expect("anchor end");
        &html[start..=end]
    }

    #[test]
    fn test_title_renders_single_heading() {
        let html = render_at("/gallery/datagrid", || {
            view! { <Layout title="Test Title"><p>"body"</p></Layout> }
        });
        assert_eq!(html.matches("<h1").count(), 1);
        assert!(html.contains("Test Title"));
        assert!(html.contains("body"));
    }

    #[test]
    fn test_no_title_no_heading() {
        let html = render_at("/gallery/datagrid", || {
            view! { <Layout><p>"body"</p></Layout> }
        });
        assert!(!html.contains("<h1"));
    }

    #[test]
    fn test_empty_title_no_heading() {
        let html = render_at("/gallery/datagrid", || {
            view! { <Layout title=""><p>"body"</p></Layout> }
        });
        assert!(!html.contains("<h1"));
        assert!(html.contains("body"));
    }

    #[test]
    fn test_active_link_highlighted() {
        let html = render_at("/gallery/autoquerygrid", || {
            view! { <Layout title="AutoQueryGrid"><p /></Layout> }
        });
        let active = anchor(&html, "/gallery/autoquerygrid");
        assert!(active.contains(css::linkActive));
        assert!(active.contains("aria-current=\"page\""));

        let idle = anchor(&html, "/gallery/datagrid");
        assert!(!idle.contains(css::linkActive));
        assert!(!idle.contains("aria-current"));
    }

    #[test]
    fn test_unknown_path_highlights_nothing() {
        let html = render_at("/gallery/nope", || view! { <Layout><p /></Layout> });
        assert!(!html.contains(css::linkActive));
        assert_eq!(
            html.matches("href=\"/gallery/").count(),
            navigation::all_entries().count()
        );
    }

    #[test]
    fn test_sections_rendered_in_order() {
        let html = render_at("/", || view! { <Layout><p /></Layout> });
        let started = html.find("Getting Started</h3>").expect("first section");
        let gallery = html.find("Component Gallery</h3>").expect("second section");
        let library = html.find("Library</h3>").expect("third section");
        assert!(started < gallery && gallery < library);
    }
}
