//! Markdown editor with a live, sanitized preview.

use leptos::prelude::*;

use super::css;
use crate::utils::markdown_to_html;

#[component]
pub fn MarkdownEditor(
    source: RwSignal<String>,
    #[prop(optional)] id: &'static str,
) -> impl IntoView {
    let html = Memo::new(move |_| source.with(|s| markdown_to_html(s)));

    view! {
        <div class=css::editor>
            <textarea
                id=id
                class=css::editorInput
                rows="14"
                spellcheck="false"
                prop:value=move || source.get()
                on:input=move |ev| source.set(event_target_value(&ev))
            >
                {source.get_untracked()}
            </textarea>
            <div class=css::editorPreview inner_html=move || html.get()></div>
        </div>
    }
}
