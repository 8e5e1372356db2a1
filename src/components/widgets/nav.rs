//! In-page navigation: tab bars and breadcrumbs.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::components::Link;
use crate::components::icons as ic;

/// Tab strip; `selected` is the index of the active tab.
#[component]
pub fn Tabs(labels: Vec<&'static str>, selected: RwSignal<usize>) -> impl IntoView {
    view! {
        <div class=css::tabs role="tablist">
            {labels
                .into_iter()
                .enumerate()
                .map(|(i, label)| {
                    let active = move || selected.get() == i;
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class=move || if active() { css::tabActive } else { css::tab }
                            aria-selected=move || active().to_string()
                            on:click=move |_| selected.set(i)
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// A breadcrumb: label plus link target; the last crumb is the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Crumb {
    pub label: &'static str,
    pub href: &'static str,
}

#[component]
pub fn Breadcrumbs(crumbs: Vec<Crumb>) -> impl IntoView {
    let last = crumbs.len().saturating_sub(1);

    view! {
        <nav class=css::breadcrumbs aria-label="Breadcrumb">
            <ol>
                {crumbs
                    .into_iter()
                    .enumerate()
                    .map(|(i, crumb)| {
                        let separator = (i > 0)
                            .then(|| view! { <span class=css::crumbSep><Icon icon=ic::CHEVRON_RIGHT /></span> });
                        if i == last {
                            view! {
                                <li>{separator}<span aria-current="page">{crumb.label}</span></li>
                            }
                            .into_any()
                        } else {
                            view! {
                                <li>{separator}<Link href=crumb.href class=css::crumbLink>{crumb.label}</Link></li>
                            }
                            .into_any()
                        }
                    })
                    .collect_view()}
            </ol>
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::render_at;

    #[test]
    fn test_selected_tab() {
        let html = render_at("/", || {
            let selected = RwSignal::new(1);
            view! { <Tabs labels=vec!["Bookings", "Coupons", "Rooms"] selected=selected /> }
        });
        assert_eq!(html.matches("aria-selected=\"true\"").count(), 1);
        let coupons = html.find("Coupons").unwrap();
        let active = html.find("aria-selected=\"true\"").unwrap();
        let bookings = html.find("Bookings").unwrap();
        assert!(bookings < active && active < coupons);
    }

    #[test]
    fn test_last_crumb_is_current() {
        let html = render_at("/", || {
            let crumbs = vec![
                Crumb { label: "Home", href: "/" },
                Crumb { label: "Gallery", href: "/gallery" },
                Crumb { label: "Navigation", href: "/gallery/navigation" },
            ];
            view! { <Breadcrumbs crumbs=crumbs /> }
        });
        assert!(html.contains("href=\"/gallery\""));
        assert!(!html.contains("href=\"/gallery/navigation\""));
        assert!(html.contains("aria-current=\"page\">Navigation"));
    }
}
