//! Modal dialogs and slide-over panels.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::components::icons as ic;

/// Dialog shown while `open` is true.
///
/// Closes on the close button, a backdrop click or Escape. With
/// `slide_over` it is docked to the right edge instead of centred.
#[component]
pub fn Modal(
    open: RwSignal<bool>,
    #[prop(into)] title: String,
    #[prop(optional)] slide_over: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let title = StoredValue::new(title);
    let panel = if slide_over { css::slideOver } else { css::dialog };

    view! {
        <Show when=move || open.get()>
            <div class=css::backdrop on:click=move |_| open.set(false)>
                <div
                    class=panel
                    role="dialog"
                    aria-modal="true"
                    aria-label=title.get_value()
                    tabindex="-1"
                    on:click=|ev| ev.stop_propagation()
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Escape" {
                            open.set(false);
                        }
                    }
                >
                    <div class=css::dialogHeader>
                        <h2 class=css::dialogTitle>{title.get_value()}</h2>
                        <button
                            type="button"
                            class=css::iconButton
                            aria-label="Close"
                            on:click=move |_| open.set(false)
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    </div>
                    <div class=css::dialogBody>{children()}</div>
                </div>
            </div>
        </Show>
    }
}
