//! Local error boundary for demo regions.
//!
//! Wraps [`FallibleRegion`] in a component: the render function returns
//! `Result<AnyView, RenderError>`; the first failure is logged, the region
//! switches to an error panel and stays there until "Try again" is clicked.
//! Siblings outside the boundary keep rendering normally.

use gallery_core::{CapturedError, FallibleRegion, RenderError};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::utils::console;

stylance::import_crate_style!(css, "src/components/boundary/boundary.module.css");

type RenderFn = Box<dyn FnMut() -> Result<AnyView, RenderError>>;
type FallbackFn = Box<dyn Fn(&CapturedError) -> AnyView>;
type Region = FallibleRegion<RenderFn, FallbackFn>;

/// Render `render` with a local fallback.
///
/// `render` runs inside a reactive closure, so signals it reads re-run it
/// while the region is healthy. Once failed, it is not called again until
/// the user retries.
#[component]
pub fn Boundary<F>(render: F) -> impl IntoView
where
    F: FnMut() -> Result<AnyView, RenderError> + 'static,
{
    let epoch = RwSignal::new(0u32);
    let region: StoredValue<Option<Region>, LocalStorage> = StoredValue::new_local(None);

    let retry = Callback::new(move |_: ()| {
        region.update_value(|r| {
            if let Some(r) = r.as_mut() {
                r.reset();
            }
        });
        epoch.update(|n| *n += 1);
    });

    let fallback: FallbackFn =
        Box::new(move |err| view! { <ErrorPanel error=err.clone() on_retry=retry /> }.into_any());

    region.set_value(Some(
        FallibleRegion::new(Box::new(render) as RenderFn, fallback)
            .on_error(|err| console::error(&format!("demo failed to render: {}", err.details()))),
    ));

    view! {
        <div class=css::region>
            {move || {
                epoch.track();
                region
                    .try_update_value(|r| r.as_mut().map(|r| r.render()))
                    .flatten()
            }}
        </div>
    }
}

/// Fallback panel: message, expandable details and a retry button.
#[component]
fn ErrorPanel(error: CapturedError, on_retry: Callback<()>) -> impl IntoView {
    let details = error.details();

    view! {
        <div class=css::panel role="alert">
            <div class=css::panelHeader>
                <span class=css::panelIcon><Icon icon=ic::ERROR /></span>
                <h2 class=css::panelTitle>"Something went wrong"</h2>
            </div>
            <p class=css::message>{error.message}</p>
            <details class=css::details>
                <summary>"Error details"</summary>
                <pre>{details}</pre>
            </details>
            <button class=css::retry on:click=move |_| on_retry.run(())>
                <Icon icon=ic::RETRY />
                <span>"Try again"</span>
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::render_at;
    use gallery_core::MetadataError;

    #[test]
    fn test_healthy_region_renders_content() {
        let html = render_at("/", || {
            view! { <Boundary render=|| Ok(view! { <p>"all good"</p> }.into_any()) /> }
        });
        assert!(html.contains("all good"));
        assert!(!html.contains("Something went wrong"));
    }

    #[test]
    fn test_failure_shows_fallback() {
        let html = render_at("/", || {
            view! {
                <Boundary render=|| Err(RenderError::from(MetadataError::UnknownEnum("RoomType".into()))) />
            }
        });
        assert!(html.contains("Something went wrong"));
        assert!(html.contains("error loading form metadata"));
        assert!(html.contains("unknown enum &#39;RoomType&#39;") || html.contains("unknown enum 'RoomType'"));
        assert!(html.contains("Try again"));
    }

    #[test]
    fn test_sibling_unaffected() {
        let html = render_at("/", || {
            view! {
                <section>
                    <Boundary render=|| Err(RenderError::Demo("boom".into())) />
                    <p>"sibling"</p>
                </section>
            }
        });
        assert!(html.contains("boom"));
        assert!(html.contains("sibling"));
    }
}
