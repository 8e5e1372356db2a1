//! Inline alerts.

use icondata::Icon as IconData;
use leptos::prelude::*;
use leptos_icons::Icon;

use super::css;
use crate::components::icons as ic;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AlertKind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl AlertKind {
    pub const ALL: [AlertKind; 4] = [Self::Info, Self::Success, Self::Warning, Self::Error];

    fn class(self) -> &'static str {
        match self {
            Self::Info => css::alertInfo,
            Self::Success => css::alertSuccess,
            Self::Warning => css::alertWarning,
            Self::Error => css::alertError,
        }
    }

    fn icon(self) -> IconData {
        match self {
            Self::Info => ic::INFO,
            Self::Success => ic::SUCCESS,
            Self::Warning => ic::WARNING,
            Self::Error => ic::ERROR,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// Coloured message box. `dismissible` adds a close button.
#[component]
pub fn Alert(
    #[prop(optional)] kind: AlertKind,
    #[prop(optional)] dismissible: bool,
    children: Children,
) -> impl IntoView {
    let visible = RwSignal::new(true);
    let role = if kind == AlertKind::Error { "alert" } else { "status" };

    view! {
        <div
            class=format!("{} {}", css::alert, kind.class())
            role=role
            hidden=move || !visible.get()
        >
            <span class=css::alertIcon><Icon icon=kind.icon() /></span>
            <div class=css::alertBody>{children()}</div>
            {dismissible
                .then(|| {
                    view! {
                        <button
                            type="button"
                            class=css::iconButton
                            aria-label="Dismiss"
                            on:click=move |_| visible.set(false)
                        >
                            <Icon icon=ic::CLOSE />
                        </button>
                    }
                })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::render_at;

    #[test]
    fn test_kinds_have_distinct_classes() {
        let html = render_at("/", || {
            AlertKind::ALL
                .into_iter()
                .map(|kind| view! { <Alert kind=kind>{kind.as_str()}</Alert> })
                .collect::<Vec<_>>()
        });
        for kind in AlertKind::ALL {
            assert!(html.contains(kind.class()));
        }
        assert_eq!(html.matches("role=\"alert\"").count(), 1);
        assert_eq!(html.matches("role=\"status\"").count(), 3);
    }

    #[test]
    fn test_dismiss_button_optional() {
        let plain = render_at("/", || view! { <Alert>"saved"</Alert> });
        assert!(!plain.contains("Dismiss"));

        let closable = render_at("/", || view! { <Alert dismissible=true>"saved"</Alert> });
        assert!(closable.contains("aria-label=\"Dismiss\""));
    }
}
