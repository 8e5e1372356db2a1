//! Filterable selects: [`Combobox`] picks one of a fixed option list,
//! [`Autocomplete`] completes free text against candidates.

use gallery_core::inputs::{Completion, complete, filter_by};
use leptos::prelude::*;

use super::css;
use crate::config::MAX_SUGGESTIONS;

/// Select with a filter box. `value` holds the chosen option's value.
#[component]
pub fn Combobox(
    /// `(value, label)` pairs.
    options: Vec<(String, String)>,
    value: RwSignal<Option<String>>,
    #[prop(optional)] id: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let options = StoredValue::new(options);
    let query = RwSignal::new(
        value
            .get_untracked()
            .and_then(|v| options.with_value(|o| label_of(o, &v)))
            .unwrap_or_default(),
    );
    let open = RwSignal::new(false);

    let choose = move |picked: String, label: String| {
        value.set(Some(picked));
        query.set(label);
        open.set(false);
    };

    let list = move || {
        let q = query.get();
        options.with_value(|o| {
            filter_by(o, &q, |(_, label)| label.as_str())
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class=css::combobox>
            <input
                id=id
                class=css::input
                type="text"
                role="combobox"
                aria-expanded=move || open.get().to_string()
                placeholder=placeholder
                prop:value=move || query.get()
                on:focus=move |_| open.set(true)
                on:input=move |ev| {
                    query.set(event_target_value(&ev));
                    open.set(true);
                }
            />
            <Show when=move || open.get()>
                <ul class=css::options role="listbox">
                    {move || {
                        let items = list();
                        if items.is_empty() {
                            return view! { <li class=css::optionEmpty>"No matches"</li> }.into_any();
                        }
                        items
                            .into_iter()
                            .map(|(v, label)| {
                                let selected = value.with(|cur| cur.as_deref() == Some(v.as_str()));
                                let class = if selected { css::optionSelected } else { css::option };
                                let text = label.clone();
                                view! {
                                    <li
                                        class=class
                                        role="option"
                                        aria-selected=selected.to_string()
                                        on:mousedown=move |ev| {
                                            ev.prevent_default();
                                            choose(v.clone(), label.clone());
                                        }
                                    >
                                        {text}
                                    </li>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                </ul>
            </Show>
        </div>
    }
}

fn label_of(options: &[(String, String)], value: &str) -> Option<String> {
    options
        .iter()
        .find(|(v, _)| v == value)
        .map(|(_, l)| l.clone())
}

/// Text input that completes against `candidates`.
///
/// Tab completes the unique match, or extends to the common prefix of
/// several matches. Suggestions are capped at [`MAX_SUGGESTIONS`].
#[component]
pub fn Autocomplete(
    candidates: Vec<String>,
    value: RwSignal<String>,
    #[prop(optional)] id: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let candidates = StoredValue::new(candidates);

    let completion = Memo::new(move |_| {
        let q = value.get();
        if q.trim().is_empty() {
            return Completion::None;
        }
        candidates.with_value(|c| complete(&q, c.iter().map(String::as_str)))
    });

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() != "Tab" {
            return;
        }
        match completion.get_untracked() {
            Completion::Single(full) => {
                ev.prevent_default();
                value.set(full);
            }
            Completion::Multiple(prefix, _)
                if prefix.chars().count() > value.with_untracked(|v| v.chars().count()) =>
            {
                ev.prevent_default();
                value.set(prefix);
            }
            _ => {}
        }
    };

    let status = move || match completion.get() {
        Completion::Single(_) => "1 match".to_string(),
        Completion::Multiple(_, all) => format!("{} matches", all.len()),
        Completion::None if value.with(|v| v.trim().is_empty()) => String::new(),
        Completion::None => "No matches".to_string(),
    };

    let suggestions = move || {
        let matches = match completion.get() {
            Completion::Single(one) => vec![one],
            Completion::Multiple(_, all) => all,
            Completion::None => Vec::new(),
        };
        matches
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|m| {
                let text = m.clone();
                view! {
                    <li
                        class=css::option
                        role="option"
                        on:mousedown=move |ev| {
                            ev.prevent_default();
                            value.set(m.clone());
                        }
                    >
                        {text}
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <div class=css::combobox>
            <input
                id=id
                class=css::input
                type="text"
                autocomplete="off"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <p class=css::hint aria-live="polite">{status}</p>
            <ul class=css::suggestions role="listbox">{suggestions}</ul>
        </div>
    }
}
