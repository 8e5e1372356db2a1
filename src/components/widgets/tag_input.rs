//! Free-form tag entry.

use gallery_core::inputs::{TagKey, TagList};
use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::components::icons as ic;

/// Tag input bound to a [`TagList`].
///
/// Enter, Tab or `,` commit the pending text; Backspace on an empty input
/// removes the last tag; pasting `a, b, c` adds all three.
#[component]
pub fn TagInput(
    tags: RwSignal<TagList>,
    #[prop(optional)] id: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let pending = RwSignal::new(String::new());

    let commit = move || {
        let text = pending.get_untracked();
        tags.update(|t| {
            t.add_all(&text);
        });
        pending.set(String::new());
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let empty = pending.with_untracked(|p| p.trim().is_empty());
        match TagKey::from_key(&ev.key(), empty) {
            TagKey::Commit => {
                ev.prevent_default();
                commit();
            }
            TagKey::RemoveLast => tags.update(|t| {
                t.pop();
            }),
            TagKey::Ignore => {}
        }
    };

    let on_input = move |ev| {
        let value = event_target_value(&ev);
        match value.rsplit_once(',') {
            Some((done, rest)) => {
                tags.update(|t| {
                    t.add_all(done);
                });
                pending.set(rest.to_string());
            }
            None => pending.set(value),
        }
    };

    let chips = move || {
        tags.with(|t| t.tags().to_vec())
            .into_iter()
            .map(|tag| {
                let label = format!("Remove {}", tag);
                let target = tag.clone();
                view! {
                    <span class=css::tag>
                        <span>{tag}</span>
                        <button
                            type="button"
                            class=css::tagRemove
                            aria-label=label
                            on:click=move |_| tags.update(|t| {
                                t.remove(&target);
                            })
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </span>
                }
            })
            .collect_view()
    };

    view! {
        <div class=css::tagInput>
            {chips}
            <input
                id=id
                class=css::tagField
                type="text"
                placeholder=placeholder
                prop:value=move || pending.get()
                on:input=on_input
                on:keydown=on_keydown
                on:blur=move |_| commit()
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::render_at;

    #[test]
    fn test_renders_existing_tags() {
        let html = render_at("/", || {
            let tags = RwSignal::new(TagList::new(["react", "c#", "React"]));
            view! { <TagInput tags=tags id="skills" /> }
        });
        assert!(html.contains("react"));
        assert!(html.contains("c#"));
        assert_eq!(html.matches("aria-label=\"Remove ").count(), 2);
    }
}
