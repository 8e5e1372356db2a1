//! Bounded numeric input with − / + buttons.

use gallery_core::inputs::Stepper;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::components::icons as ic;

#[component]
pub fn NumberStepper(
    state: RwSignal<Stepper>,
    #[prop(optional)] id: &'static str,
) -> impl IntoView {
    view! {
        <div class=css::stepper>
            <button
                type="button"
                class=css::stepButton
                aria-label="Decrease"
                disabled=move || state.with(Stepper::at_min)
                on:click=move |_| state.update(Stepper::decrement)
            >
                <Icon icon=ic::MINUS />
            </button>
            <input
                id=id
                class=css::stepValue
                type="text"
                inputmode="numeric"
                value=state.get_untracked().value.to_string()
                prop:value=move || state.get().value.to_string()
                // Unparsable text is discarded; the update re-renders the last valid value
                on:change=move |ev| state.update(|s| {
                    s.set_text(&event_target_value(&ev));
                })
            />
            <button
                type="button"
                class=css::stepButton
                aria-label="Increase"
                disabled=move || state.with(Stepper::at_max)
                on:click=move |_| state.update(Stepper::increment)
            >
                <Icon icon=ic::PLUS />
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::render_at;

    #[test]
    fn test_bounds_disable_buttons() {
        let html = render_at("/", || {
            let state = RwSignal::new(Stepper::new(0, 0, 10, 1));
            view! { <NumberStepper state=state /> }
        });
        assert!(html.contains("value=\"0\""));
        let buttons: Vec<&str> = html.split("<button").skip(1).collect();
        assert_eq!(buttons.len(), 2);
        assert!(buttons[0].contains("Decrease") && buttons[0].contains("disabled"));
        assert!(buttons[1].contains("Increase") && !buttons[1].contains("disabled"));
    }
}
