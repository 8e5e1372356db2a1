//! Modals, navigation, alerts and formatter demos.

use gallery_core::Topic;
use gallery_core::data::{BOOKINGS, CONTACTS, FILES, FORECASTS};
use gallery_core::format::{
    format_bytes, format_celsius, format_currency, format_date, format_date_iso, format_percent,
    mailto,
};
use leptos::prelude::*;

use super::{css, title};
use crate::components::widgets::{Alert, AlertKind, Breadcrumbs, Crumb, Modal, Tabs};
use crate::components::{CodeExample, Layout};

fn booking_details() -> impl IntoView {
    BOOKINGS.first().cloned().map(|b| {
        view! {
            <dl class=css::details>
                <dt>"Name"</dt><dd>{b.name}</dd>
                <dt>"Room"</dt><dd>{format!("{} #{}", b.room_type, b.room_number)}</dd>
                <dt>"Cost"</dt><dd>{format_currency(b.cost)}</dd>
                <dt>"Starts"</dt><dd>{format_date(b.booking_start_date)}</dd>
            </dl>
        }
    })
}

#[component]
pub fn ModalsPage() -> impl IntoView {
    let dialog_open = RwSignal::new(false);
    let panel_open = RwSignal::new(false);

    view! {
        <Layout title=title(Topic::Modals)>
            <p class=css::intro>
                "Dialogs render above the page and close on the close button, a
                backdrop click or Escape."
            </p>
            <CodeExample
                title="Dialog"
                code=r#"<Modal open=open title="Booking">...</Modal>"#
            >
                <button class=css::primaryButton on:click=move |_| dialog_open.set(true)>
                    "Show booking"
                </button>
                <Modal open=dialog_open title="Booking">{booking_details()}</Modal>
            </CodeExample>
            <CodeExample
                title="Slide-over"
                code=r#"<Modal open=open title="Booking" slide_over=true>...</Modal>"#
            >
                <button class=css::primaryButton on:click=move |_| panel_open.set(true)>
                    "Open panel"
                </button>
                <Modal open=panel_open title="Booking" slide_over=true>{booking_details()}</Modal>
            </CodeExample>
        </Layout>
    }
}

#[component]
pub fn NavigationPage() -> impl IntoView {
    let selected = RwSignal::new(0usize);
    let panel = move || match selected.get() {
        0 => format!("{} bookings", BOOKINGS.len()),
        1 => format!("{} contacts", CONTACTS.len()),
        _ => format!("{} files", FILES.len()),
    };

    view! {
        <Layout title=title(Topic::Navigation)>
            <p class=css::intro>"Tabs switch content in place; breadcrumbs show where a page sits."</p>
            <CodeExample
                title="Tabs"
                code=r#"<Tabs labels=vec!["Bookings", "Contacts", "Files"] selected=selected />"#
            >
                <Tabs labels=vec!["Bookings", "Contacts", "Files"] selected=selected />
                <p class=css::tabPanel role="tabpanel">{panel}</p>
            </CodeExample>
            <CodeExample
                title="Breadcrumbs"
                code=r#"<Breadcrumbs crumbs=vec![
    Crumb { label: "Home", href: "/" },
    Crumb { label: "Gallery", href: "/gallery" },
    Crumb { label: "Navigation", href: "/gallery/navigation" },
] />"#
            >
                <Breadcrumbs crumbs=vec![
                    Crumb { label: "Home", href: "/" },
                    Crumb { label: "Gallery", href: "/gallery" },
                    Crumb { label: "Navigation", href: "/gallery/navigation" },
                ] />
            </CodeExample>
        </Layout>
    }
}

#[component]
pub fn AlertsPage() -> impl IntoView {
    view! {
        <Layout title=title(Topic::Alerts)>
            <p class=css::intro>"Alerts come in four kinds and can be made dismissible."</p>
            <CodeExample
                title="Kinds"
                code=r#"<Alert kind=AlertKind::Warning>"Your trial ends soon."</Alert>"#
            >
                <Alert>"Bookings open 30 days in advance."</Alert>
                <Alert kind=AlertKind::Success>"Booking saved."</Alert>
                <Alert kind=AlertKind::Warning>"Only two Suites left for these dates."</Alert>
                <Alert kind=AlertKind::Error>"Payment could not be processed."</Alert>
            </CodeExample>
            <CodeExample
                title="Dismissible"
                code=r#"<Alert kind=AlertKind::Success dismissible=true>"Saved."</Alert>"#
            >
                <Alert kind=AlertKind::Success dismissible=true>"Coupon BOOK25 applied."</Alert>
            </CodeExample>
        </Layout>
    }
}

#[component]
pub fn FormatsPage() -> impl IntoView {
    let booking = BOOKINGS.first().cloned();
    let forecast = FORECASTS.last().cloned();
    let file = FILES.first().cloned();
    let contact = CONTACTS.first().cloned();

    let rows: Vec<(&'static str, String, String)> = [
        booking.as_ref().map(|b| ("Currency", format!("{}", b.cost), format_currency(b.cost))),
        booking.as_ref().map(|b| {
            (
                "Date",
                format_date_iso(b.booking_start_date),
                format_date(b.booking_start_date),
            )
        }),
        booking
            .as_ref()
            .and_then(|b| b.discount.as_ref())
            .map(|c| ("Percent", c.discount.to_string(), format_percent(c.discount))),
        forecast
            .as_ref()
            .map(|f| ("Temperature", f.temperature_c.to_string(), format_celsius(f.temperature_c))),
        file.as_ref()
            .map(|f| ("Bytes", f.content_length.to_string(), format_bytes(f.content_length))),
        contact
            .as_ref()
            .map(|c| ("Link", c.email.clone(), mailto(&c.email))),
    ]
    .into_iter()
    .flatten()
    .collect();

    view! {
        <Layout title=title(Topic::Formats)>
            <p class=css::intro>"Display formatters applied to values from the sample data."</p>
            <CodeExample title="Formatters" code=r#"format_currency(100.0) // "$100.00""#>
                <table class=css::table>
                    <thead>
                        <tr><th>"Format"</th><th>"Value"</th><th>"Output"</th></tr>
                    </thead>
                    <tbody>
                        {rows
                            .into_iter()
                            .map(|(name, raw, out)| view! { <tr><td>{name}</td><td><code>{raw}</code></td><td>{out}</td></tr> })
                            .collect_view()}
                    </tbody>
                </table>
            </CodeExample>
        </Layout>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::render_at;

    #[test]
    fn test_formats_table() {
        let html = render_at(&Topic::Formats.path(), || view! { <FormatsPage /> });
        assert!(html.contains("$100.00"));
        assert!(html.contains("Oct 1, 2024"));
        assert!(html.contains("10%"));
        assert!(html.contains("412.7 KB"));
        assert!(html.contains("mailto:"));
    }

    #[test]
    fn test_navigation_tab_panel() {
        let html = render_at(&Topic::Navigation.path(), || view! { <NavigationPage /> });
        assert!(html.contains("3 bookings"));
    }
}
