//! File picker with a list of attached files.

use gallery_core::data::FileMeta;
use gallery_core::files::{self, FileKind};
use gallery_core::format::format_bytes;
use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::components::icons as ic;
use crate::utils::console;

/// Icon for a file's content type.
pub fn file_icon(content_type: &str) -> IconData {
    match FileKind::from_content_type(content_type) {
        FileKind::Image => ic::FILE_IMAGE,
        FileKind::Document => ic::FILE_TEXT,
        FileKind::Archive | FileKind::Other => ic::FILE,
    }
}

/// File input: picked files are appended to `files`, each row can be removed.
#[component]
pub fn FileInput(
    files: RwSignal<Vec<FileMeta>>,
    #[prop(optional)] id: &'static str,
    #[prop(optional)] accept: &'static str,
    #[prop(optional)] multiple: bool,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let Some(list) = input.files() else {
            return;
        };
        let picked: Vec<FileMeta> = (0..list.length())
            .filter_map(|i| list.get(i))
            .map(|f| files::local_file(&f.name(), f.size() as u64))
            .collect();
        console::log(&format!("{} file(s) selected", picked.len()));
        files.update(|all| {
            if !multiple {
                all.clear();
            }
            all.extend(picked);
        });
    };

    let rows = move || {
        files
            .get()
            .into_iter()
            .map(|file| {
                let path = file.file_path.clone();
                let label = format!("Remove {}", file.file_name);
                view! {
                    <li class=css::fileRow>
                        <span class=css::fileIcon><Icon icon=file_icon(file.content_type) /></span>
                        <span class=css::fileName title=file.file_path.clone()>{files::describe(&file)}</span>
                        <button
                            type="button"
                            class=css::iconButton
                            aria-label=label
                            on:click=move |_| files.update(|all| all.retain(|f| f.file_path != path))
                        >
                            <Icon icon=ic::TRASH />
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    let total = move || files.with(|f| format!("{} file(s), {}", f.len(), format_bytes(files::total_size(f))));

    view! {
        <div class=css::fileInput>
            <input
                id=id
                class=css::fileField
                type="file"
                accept=accept
                multiple=multiple
                on:change=on_change
            />
            <ul class=css::fileList>{rows}</ul>
            <p class=css::hint>{total}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::render_at;
    use gallery_core::data::fresh_files;

    #[test]
    fn test_lists_sample_files() {
        let html = render_at("/", || {
            let files = RwSignal::new(fresh_files());
            view! { <FileInput files=files multiple=true /> }
        });
        assert!(html.contains("avatar.jpg · JPG · 412.7 KB"));
        assert!(html.contains("sunset.jpg"));
        assert!(html.contains("4 file(s), 2.4 MB"));
        assert_eq!(html.matches("aria-label=\"Remove ").count(), 4);
    }
}
