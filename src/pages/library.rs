//! Library helper pages: metadata, client, auth and the utility functions.

use gallery_core::Topic;
use gallery_core::data::{BOOKINGS, FILES};
use gallery_core::files::{FileKind, can_preview, describe, extension, total_size};
use gallery_core::format::{
    format_bytes, format_currency, format_date, format_date_iso, format_percent, group_thousands,
};
use gallery_core::inputs::{Completion, common_prefix, complete};
use gallery_core::metadata::ADMIN_ROLE;
use gallery_core::text::{humanize, to_camel_case, to_kebab_case, to_pascal_case, truncate};
use leptos::prelude::*;

use super::{css, title};
use crate::app::{AppContext, MetadataContext};
use crate::components::{CodeBlock, CodeExample, Layout};
use crate::config::{
    APP_NAME, APP_VERSION, COLOR_SCHEME_KEY, DEMO_BASE_URL, ICON_THEME, MANAGER_ROLE,
};

/// Two-column table of an expression and what it produced.
fn results_table(rows: Vec<(String, String)>) -> impl IntoView {
    view! {
        <table class=css::table>
            <thead>
                <tr><th>"Call"</th><th>"Result"</th></tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|(call, result)| view! { <tr><td><code>{call}</code></td><td>{result}</td></tr> })
                    .collect_view()}
            </tbody>
        </table>
    }
}

// ============================================================================
// Metadata, client and auth
// ============================================================================

#[component]
pub fn UseMetadataPage() -> impl IntoView {
    let metadata = use_context::<MetadataContext>().expect("MetadataContext must be provided");
    let client = metadata.client();

    let content = match client.load_metadata() {
        Ok(app) => {
            let enums: Vec<(String, String)> = app
                .enums
                .iter()
                .map(|e| {
                    let labels: Vec<&str> = e.values.iter().map(|(_, label)| *label).collect();
                    (e.name.to_string(), labels.join(", "))
                })
                .collect();
            let types: Vec<(String, String)> = app
                .types
                .iter()
                .map(|t| {
                    let names: Vec<&str> = t.properties.iter().map(|p| p.name).collect();
                    (t.name.to_string(), names.join(", "))
                })
                .collect();
            view! {
                <h2 class=css::sectionHeading>"Enums"</h2>
                {results_table(enums)}
                <h2 class=css::sectionHeading>"Types"</h2>
                {results_table(types)}
            }
            .into_any()
        }
        Err(e) => view! { <p class=css::fieldError role="alert">{e.to_string()}</p> }.into_any(),
    };

    let missing = client
        .enum_options("Color")
        .map(|options| format!("{} option(s)", options.len()))
        .unwrap_or_else(|e| e.to_string());

    view! {
        <Layout title=title(Topic::UseMetadata)>
            <p class=css::intro>
                "Metadata describes the enums and request types the app knows about.
                Lookups return a Result so callers decide how to show a miss."
            </p>
            {content}
            <CodeExample
                title="Unknown enum"
                code=r#"client.enum_options("Color") // Err(UnknownEnum("Color"))"#
            >
                <p class=css::caption>{missing}</p>
            </CodeExample>
        </Layout>
    }
}

#[component]
pub fn UseClientPage() -> impl IntoView {
    let metadata = use_context::<MetadataContext>().expect("MetadataContext must be provided");
    let base_url = metadata
        .client()
        .load_metadata()
        .map(|m| m.base_url.to_string())
        .unwrap_or_else(|e| e.to_string());
    let json = BOOKINGS
        .first()
        .and_then(|b| serde_json::to_string_pretty(b).ok())
        .unwrap_or_default();

    view! {
        <Layout title=title(Topic::UseClient)>
            <p class=css::intro>
                "The client is read from context. Records serialize to the same
                camelCase JSON the API exchanges."
            </p>
            <CodeExample
                title="Base URL"
                code=r#"use_context::<MetadataContext>().expect("MetadataContext must be provided")"#
            >
                <p class=css::caption><code>{base_url}</code></p>
            </CodeExample>
            <CodeExample title="Booking as JSON" code="serde_json::to_string_pretty(&booking)">
                <CodeBlock code=json language="json" />
            </CodeExample>
        </Layout>
    }
}

#[component]
pub fn UseAuthPage() -> impl IntoView {
    let metadata = use_context::<MetadataContext>().expect("MetadataContext must be provided");
    let client = metadata.client();

    let session = match client.session() {
        Some(s) => format!("{} <{}>: {}", s.display_name, s.user_name, s.roles.join(", ")),
        None => "Not signed in".to_string(),
    };
    let checks: Vec<(String, String)> = ["Employee", MANAGER_ROLE, ADMIN_ROLE]
        .into_iter()
        .map(|role| {
            (
                format!("has_role(\"{}\")", role),
                client.has_role(role).to_string(),
            )
        })
        .collect();

    view! {
        <Layout title=title(Topic::UseAuth)>
            <p class=css::intro>
                "The session carries the signed-in user and their roles. Admins pass
                every role check; anonymous users pass none."
            </p>
            <CodeExample title="Session" code="client.session()">
                <p class=css::caption>{session}</p>
            </CodeExample>
            <CodeExample title="Role checks" code=r#"client.has_role("Manager")"#>
                {results_table(checks)}
            </CodeExample>
        </Layout>
    }
}

// ============================================================================
// Helpers
// ============================================================================

#[component]
pub fn UseFormattersPage() -> impl IntoView {
    let date = BOOKINGS.first().map(|b| b.booking_start_date);
    let mut rows = vec![
        ("format_currency(1234.5)".to_string(), format_currency(1234.5)),
        ("format_currency(-0.25)".to_string(), format_currency(-0.25)),
        ("group_thousands(9876543)".to_string(), group_thousands(9_876_543)),
        ("format_bytes(999)".to_string(), format_bytes(999)),
        ("format_bytes(1536000)".to_string(), format_bytes(1_536_000)),
        ("format_percent(25)".to_string(), format_percent(25)),
    ];
    if let Some(date) = date {
        rows.push(("format_date(start)".to_string(), format_date(date)));
        rows.push(("format_date_iso(start)".to_string(), format_date_iso(date)));
    }

    view! {
        <Layout title=title(Topic::UseFormatters)>
            <p class=css::intro>"Formatters turn raw values into display text."</p>
            <CodeExample title="Examples" code="format_currency(1234.5) // \"$1,234.50\"">
                {results_table(rows)}
            </CodeExample>
        </Layout>
    }
}

#[component]
pub fn UseFilesPage() -> impl IntoView {
    let rows: Vec<(String, String)> = FILES
        .iter()
        .map(|f| {
            let kind = FileKind::from_content_type(f.content_type);
            let ext = extension(&f.file_path).unwrap_or_default();
            let preview = if can_preview(f.content_type) { "preview" } else { "no preview" };
            (describe(f), format!("{:?}, .{}, {}", kind, ext, preview))
        })
        .collect();
    let total = format!("{} file(s), {}", FILES.len(), format_bytes(total_size(&FILES)));

    view! {
        <Layout title=title(Topic::UseFiles)>
            <p class=css::intro>"Helpers for file names, types and sizes."</p>
            <CodeExample title="Sample uploads" code="describe(&file)">
                {results_table(rows)}
                <p class=css::caption>{total}</p>
            </CodeExample>
        </Layout>
    }
}

#[component]
pub fn UseUtilsPage() -> impl IntoView {
    let names = vec![
        "Alice".to_string(),
        "Alexander".to_string(),
        "Bob".to_string(),
    ];
    let completion = match complete("al", names.iter().map(String::as_str)) {
        Completion::Single(name) => name,
        Completion::Multiple(prefix, all) => format!("{} ({} matches)", prefix, all.len()),
        Completion::None => "no match".to_string(),
    };

    let rows = vec![
        ("humanize(\"bookingStartDate\")".to_string(), humanize("bookingStartDate")),
        ("to_kebab_case(\"Booking Start Date\")".to_string(), to_kebab_case("Booking Start Date")),
        ("to_pascal_case(\"booking-start-date\")".to_string(), to_pascal_case("booking-start-date")),
        ("to_camel_case(\"booking-start-date\")".to_string(), to_camel_case("booking-start-date")),
        ("truncate(\"First Booking!\", 8)".to_string(), truncate("First Booking!", 8)),
        ("common_prefix([Alice, Alexander])".to_string(), common_prefix(&names[..2])),
        ("complete(\"al\", names)".to_string(), completion),
    ];

    view! {
        <Layout title=title(Topic::UseUtils)>
            <p class=css::intro>"Text helpers used for labels and completion."</p>
            <CodeExample title="Examples" code="humanize(\"bookingStartDate\") // \"Booking Start Date\"">
                {results_table(rows)}
            </CodeExample>
        </Layout>
    }
}

#[component]
pub fn UseConfigPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let preference = move || ctx.theme.get().preference.to_string();

    let rows = vec![
        ("APP_NAME".to_string(), APP_NAME.to_string()),
        ("APP_VERSION".to_string(), APP_VERSION.to_string()),
        ("DEMO_BASE_URL".to_string(), DEMO_BASE_URL.to_string()),
        ("COLOR_SCHEME_KEY".to_string(), COLOR_SCHEME_KEY.to_string()),
        ("ICON_THEME".to_string(), format!("{:?}", ICON_THEME)),
    ];

    view! {
        <Layout title=title(Topic::UseConfig)>
            <p class=css::intro>
                "Configuration is a set of constants; the colour scheme is the one
                setting that is read at startup and persisted."
            </p>
            <CodeExample title="Constants" code="crate::config::APP_NAME">
                {results_table(rows)}
            </CodeExample>
            <CodeExample title="Colour scheme" code="ctx.theme.get().preference">
                <p class=css::caption>"Preference: " {preference}</p>
            </CodeExample>
        </Layout>
    }
}
