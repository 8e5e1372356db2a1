//! Gallery pages, one per route.
//!
//! Every page renders inside [`Layout`](crate::components::Layout) with the
//! sidebar label of its topic as the title.

mod forms;
mod getting_started;
mod grids;
mod home;
mod inputs;
mod library;
mod overlays;

use gallery_core::{Route, Topic};
use leptos::prelude::*;

stylance::import_crate_style!(css, "src/pages/pages.module.css");

/// The page for a route.
pub fn page_for(route: Route) -> AnyView {
    let topic = match route {
        Route::Index => return view! { <home::IndexPage /> }.into_any(),
        Route::NotFound(path) => return view! { <home::NotFoundPage path=path /> }.into_any(),
        Route::Topic(topic) => topic,
    };

    match topic {
        Topic::Install => view! { <getting_started::InstallPage /> }.into_any(),
        Topic::Setup => view! { <getting_started::SetupPage /> }.into_any(),
        Topic::AutoQueryGrid => view! { <grids::AutoQueryGridPage /> }.into_any(),
        Topic::DataGrid => view! { <grids::DataGridPage /> }.into_any(),
        Topic::AutoForm => view! { <forms::AutoFormPage /> }.into_any(),
        Topic::CustomAutoForms => view! { <forms::CustomAutoFormsPage /> }.into_any(),
        Topic::FormInputs => view! { <forms::FormInputsPage /> }.into_any(),
        Topic::FileInput => view! { <inputs::FileInputPage /> }.into_any(),
        Topic::TagInput => view! { <inputs::TagInputPage /> }.into_any(),
        Topic::Combobox => view! { <inputs::ComboboxPage /> }.into_any(),
        Topic::Autocomplete => view! { <inputs::AutocompletePage /> }.into_any(),
        Topic::Markdown => view! { <inputs::MarkdownPage /> }.into_any(),
        Topic::CustomInputs => view! { <inputs::CustomInputsPage /> }.into_any(),
        Topic::Modals => view! { <overlays::ModalsPage /> }.into_any(),
        Topic::Navigation => view! { <overlays::NavigationPage /> }.into_any(),
        Topic::Alerts => view! { <overlays::AlertsPage /> }.into_any(),
        Topic::Formats => view! { <overlays::FormatsPage /> }.into_any(),
        Topic::UseMetadata => view! { <library::UseMetadataPage /> }.into_any(),
        Topic::UseClient => view! { <library::UseClientPage /> }.into_any(),
        Topic::UseAuth => view! { <library::UseAuthPage /> }.into_any(),
        Topic::UseFormatters => view! { <library::UseFormattersPage /> }.into_any(),
        Topic::UseFiles => view! { <library::UseFilesPage /> }.into_any(),
        Topic::UseUtils => view! { <library::UseUtilsPage /> }.into_any(),
        Topic::UseConfig => view! { <library::UseConfigPage /> }.into_any(),
    }
}

/// Page title: the topic's sidebar label.
fn title(topic: Topic) -> &'static str {
    gallery_core::navigation::label_for(topic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::render_at;

    /// Number of anchors marked as the current page.
    fn current_links(html: &str) -> usize {
        html.split("<a ")
            .skip(1)
            .filter(|tag| tag[..tag.find('>').unwrap_or(tag.len())].contains("aria-current=\"page\""))
            .count()
    }

    #[test]
    fn test_every_topic_has_titled_page() {
        for topic in Topic::ALL {
            let html = render_at(&topic.path(), || page_for(Route::Topic(topic)));
            assert_eq!(html.matches("<h1").count(), 1, "{topic}");
            assert!(html.contains(&format!("{}</h1>", title(topic))), "{topic}");
            assert_eq!(current_links(&html), 1, "{topic}");
        }
    }

    #[test]
    fn test_index_page() {
        let html = render_at("/gallery", || page_for(Route::Index));
        assert_eq!(html.matches("<h1").count(), 1);
        assert_eq!(current_links(&html), 0);
        for topic in Topic::ALL {
            assert!(html.contains(&format!("href=\"{}\"", topic.path())));
        }
    }

    #[test]
    fn test_not_found_page() {
        let html = render_at("/gallery/missing", || {
            page_for(Route::from_path("/gallery/missing"))
        });
        assert!(html.contains("Page not found</h1>"));
        assert!(html.contains("/gallery/missing"));
        assert_eq!(current_links(&html), 0);
    }
}
