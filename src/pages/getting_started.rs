//! Installation and setup guides.

use gallery_core::Topic;
use leptos::prelude::*;

use super::{css, title};
use crate::components::{CodeBlock, Layout};

const CARGO_DEPS: &str = r#"[dependencies]
gallery-core = { path = "crates/gallery-core" }
leptos = { version = "0.8", features = ["csr"] }
leptos_icons = "0.7"
icondata = { version = "0.7", default-features = false, features = ["bootstrap-icons"] }
stylance = "0.7""#;

const TRUNK_INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <link data-trunk rel="rust" data-wasm-opt="z" />
    <link data-trunk rel="css" href="assets/bundle.css" />
  </head>
  <body>
    <div id="app"></div>
  </body>
</html>"#;

const BUILD_COMMANDS: &str = "cargo install trunk stylance-cli
stylance --watch . &
trunk serve";

const MOUNT_SNIPPET: &str = r#"fn main() {
    console_error_panic_hook::set_once();

    let theme_config = utils::theme::load();
    utils::theme::apply(theme_config, utils::theme::system_prefers_dark());

    let metadata = Arc::new(StaticMetadata::demo(config::DEMO_BASE_URL));
    mount_to(root, move || view! { <App theme_config=theme_config metadata=metadata /> })
        .forget();
}"#;

const CONTEXT_SNIPPET: &str = r#"#[component]
fn RoomTypes() -> impl IntoView {
    let metadata = use_context::<MetadataContext>().expect("MetadataContext must be provided");
    match metadata.client().enum_options("RoomType") {
        Ok(options) => view! { <Combobox options=options value=selected /> }.into_any(),
        Err(e) => view! { <p>{e.to_string()}</p> }.into_any(),
    }
}"#;

#[component]
pub fn InstallPage() -> impl IntoView {
    view! {
        <Layout title=title(Topic::Install)>
            <p class=css::intro>
                "The gallery is a client-side rendered Leptos app built with Trunk.
                Components live in the root crate; their state logic lives in
                gallery-core so it can be tested without a browser."
            </p>
            <h2 class=css::sectionHeading>"Dependencies"</h2>
            <CodeBlock code=CARGO_DEPS language="toml" />
            <h2 class=css::sectionHeading>"Host page"</h2>
            <CodeBlock code=TRUNK_INDEX language="html" />
            <h2 class=css::sectionHeading>"Build"</h2>
            <CodeBlock code=BUILD_COMMANDS language="sh" />
        </Layout>
    }
}

#[component]
pub fn SetupPage() -> impl IntoView {
    view! {
        <Layout title=title(Topic::Setup)>
            <p class=css::intro>
                "Startup resolves the colour scheme before the first render, then
                mounts the app with the metadata client every page reads from."
            </p>
            <h2 class=css::sectionHeading>"Mounting"</h2>
            <CodeBlock code=MOUNT_SNIPPET />
            <h2 class=css::sectionHeading>"Reading metadata"</h2>
            <p class=css::prose>
                "Components reach the client through context. Lookups return a
                Result, so a missing enum becomes an inline message rather than a
                broken page."
            </p>
            <CodeBlock code=CONTEXT_SNIPPET />
        </Layout>
    }
}
