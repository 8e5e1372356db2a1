mod app;
mod components;
mod config;
mod pages;
mod utils;

use std::sync::Arc;

use app::App;
use gallery_core::StaticMetadata;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    console_error_panic_hook::set_once();

    // Colour scheme is resolved once, before the first render
    let theme_config = utils::theme::load();
    utils::theme::apply(theme_config, utils::theme::system_prefers_dark());

    let metadata = Arc::new(StaticMetadata::demo(config::DEMO_BASE_URL));

    let root = document()
        .get_element_by_id(config::MOUNT_ELEMENT_ID)
        .expect("Failed to find #app element")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, move || view! { <App theme_config=theme_config metadata=metadata /> })
        .forget();
}
