//! Gallery index and the not-found page.

use gallery_core::navigation::NAV_SECTIONS;
use leptos::prelude::*;

use super::css;
use crate::components::{Layout, Link};
use crate::config::{APP_NAME, APP_VERSION};

#[component]
pub fn IndexPage() -> impl IntoView {
    view! {
        <Layout title=APP_NAME>
            <p class=css::intro>
                "Interactive examples of the gallery's Leptos components. Every page
                shows a live demo next to the code that produces it."
            </p>
            {NAV_SECTIONS
                .iter()
                .map(|section| {
                    view! {
                        <section class=css::cardSection>
                            <h2 class=css::sectionHeading>{section.title}</h2>
                            <div class=css::cards>
                                {section
                                    .entries
                                    .iter()
                                    .map(|entry| {
                                        view! {
                                            <Link href=entry.href class=css::card>
                                                <span class=css::cardTitle>{entry.label}</span>
                                                <span class=css::cardPath>{entry.href}</span>
                                            </Link>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                })
                .collect_view()}
            <p class=css::footnote>{format!("v{}", APP_VERSION)}</p>
        </Layout>
    }
}

/// Shown for any path that is not a gallery route.
#[component]
pub fn NotFoundPage(path: String) -> impl IntoView {
    view! {
        <Layout title="Page not found">
            <p class=css::intro>
                "Nothing lives at " <code>{path}</code> "."
            </p>
            <Link href="/gallery" class=css::backLink>"Back to the gallery"</Link>
        </Layout>
    }
}
