//! Form demos: auto forms, custom auto forms and the hand-built booking form.

use gallery_core::Topic;
use gallery_core::booking_form::{BookingField, BookingFormInput, ValidationErrors};
use gallery_core::data;
use gallery_core::metadata::EnumOptions;
use gallery_core::text::humanize;
use gallery_core::{MetadataError, RenderError};
use leptos::prelude::*;

use super::{css, title};
use crate::app::MetadataContext;
use crate::components::widgets::{Alert, AlertKind, AutoForm};
use crate::components::{Boundary, CodeBlock, CodeExample, Layout};
use crate::config::{DEMO_BOOKING_ID, MANAGER_ROLE};
use crate::utils::console;

// ============================================================================
// Auto forms
// ============================================================================

#[component]
pub fn AutoFormPage() -> impl IntoView {
    view! {
        <Layout title=title(Topic::AutoForm)>
            <p class=css::intro>
                "Auto forms are generated from the metadata of a request type: each
                property picks its input from the declared type, and enum properties
                become drop-downs filled from the enum's values."
            </p>
            <CodeExample
                title="Create Booking"
                description="Every input below comes from the CreateBooking metadata."
                code=r#"<AutoForm type_name="CreateBooking" />"#
            >
                <AutoForm type_name="CreateBooking" />
            </CodeExample>
            <CodeExample
                title="Create Contact"
                code=r#"<AutoForm type_name="CreateContact" submit_label="Add contact" />"#
            >
                <AutoForm type_name="CreateContact" submit_label="Add contact" />
            </CodeExample>
        </Layout>
    }
}

#[component]
pub fn CustomAutoFormsPage() -> impl IntoView {
    let fail = RwSignal::new(true);

    view! {
        <Layout title=title(Topic::CustomAutoForms)>
            <p class=css::intro>
                "Custom auto forms reuse the generated inputs for other request types.
                When the metadata cannot describe a type, the form's local error
                boundary shows a fallback while the rest of the page keeps working."
            </p>
            <CodeExample
                title="Create Coupon"
                code=r#"<AutoForm type_name="CreateCoupon" submit_label="Save coupon" />"#
            >
                <AutoForm type_name="CreateCoupon" submit_label="Save coupon" />
            </CodeExample>
            <CodeExample
                title="Unknown type"
                description="CreateInvoice is not in the metadata, so the boundary renders its fallback."
                code=r#"<AutoForm type_name="CreateInvoice" />"#
            >
                <AutoForm type_name="CreateInvoice" />
            </CodeExample>
            <CodeExample
                title="Recovering"
                description="Fix the failure, then use Try again to render the region once more."
                code=r#"<Boundary render=move || {
    if fail.get_untracked() {
        return Err(RenderError::Demo("region failed on purpose".into()));
    }
    Ok(view! { <p>"Rendered normally."</p> }.into_any())
} />"#
            >
                <label class=css::inline>
                    <input
                        type="checkbox"
                        prop:checked=move || fail.get()
                        on:change=move |ev| fail.set(event_target_checked(&ev))
                    />
                    " Fail on render"
                </label>
                <Boundary render=move || {
                    if fail.get_untracked() {
                        return Err(RenderError::Demo("region failed on purpose".into()));
                    }
                    Ok(view! { <p>"Rendered normally."</p> }.into_any())
                } />
            </CodeExample>
        </Layout>
    }
}

// ============================================================================
// Form inputs
// ============================================================================

/// Fields with their own inline error message.
const INLINE_FIELDS: [&str; 6] = [
    BookingField::Name.id(),
    BookingField::RoomType.id(),
    BookingField::RoomNumber.id(),
    BookingField::Cost.id(),
    BookingField::BookingStartDate.id(),
    BookingField::BookingEndDate.id(),
];

#[component]
pub fn FormInputsPage() -> impl IntoView {
    view! {
        <Layout title=title(Topic::FormInputs)>
            <p class=css::intro>
                "Form inputs bound to a typed booking. Values stay as typed until
                submit, where they are validated into an UpdateBooking request and
                every problem is reported at once."
            </p>
            <CodeExample
                title="Edit booking"
                description="Room types come from the metadata; Delete needs the Manager role."
                code=r#"match form.get_untracked().validate() {
    Ok(request) => save(request),
    Err(errors) => errors_signal.set(errors),
}"#
            >
                <BookingForm />
            </CodeExample>
        </Layout>
    }
}

#[component]
fn BookingForm() -> impl IntoView {
    let metadata = use_context::<MetadataContext>().expect("MetadataContext must be provided");
    let client = metadata.client();

    let initial = data::fresh_booking(DEMO_BOOKING_ID)
        .map(|b| BookingFormInput::from_booking(&b))
        .unwrap_or_else(|| BookingFormInput::new(DEMO_BOOKING_ID));
    let form = RwSignal::new(initial);
    let errors = RwSignal::new(ValidationErrors::default());
    let saved = RwSignal::new(None::<String>);
    let deleted = RwSignal::new(false);

    let room_types = client.enum_options("RoomType");
    if let Err(e) = &room_types {
        console::warn(&format!("room types unavailable: {}", e));
    }
    let can_delete = client.has_role(MANAGER_ROLE);
    let signed_in = client
        .session()
        .map(|s| format!("Signed in as {}", s.display_name))
        .unwrap_or_else(|| "Not signed in".to_string());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(BookingFormInput::validate) {
            Ok(request) => {
                let json = serde_json::to_string_pretty(&request).unwrap_or_default();
                console::log(&format!("UpdateBooking {}", json));
                errors.set(ValidationErrors::default());
                saved.set(Some(json));
            }
            Err(errs) => {
                console::warn(&format!("UpdateBooking: {} invalid field(s)", errs.len()));
                errors.set(errs);
                saved.set(None);
            }
        }
    };

    let on_delete = move |_: leptos::ev::MouseEvent| {
        let id = form.with_untracked(|f| f.id);
        console::log(&format!("DeleteBooking {{ id: {} }}", id));
        deleted.set(true);
    };

    let summary = move || {
        errors.with(|e| {
            e.summary(&INLINE_FIELDS)
                .map(|err| err.to_string())
                .collect::<Vec<_>>()
        })
    };

    view! {
        <form class=css::bookingForm on:submit=on_submit novalidate=true>
            <p class=css::caption>{signed_in}</p>
            {text_input(form, errors, BookingField::Name, "text")}
            {room_type_input(form, errors, room_types)}
            <div class=css::row>
                {text_input(form, errors, BookingField::RoomNumber, "number")}
                {text_input(form, errors, BookingField::Cost, "number")}
            </div>
            <div class=css::row>
                {text_input(form, errors, BookingField::BookingStartDate, "date")}
                {text_input(form, errors, BookingField::BookingEndDate, "date")}
            </div>
            {notes_input(form)}
            {move || {
                let lines = summary();
                (!lines.is_empty()).then(|| {
                    view! {
                        <Alert kind=AlertKind::Error>
                            <ul>{lines.into_iter().map(|l| view! { <li>{l}</li> }).collect_view()}</ul>
                        </Alert>
                    }
                })
            }}
            <div class=css::actions>
                {can_delete
                    .then(|| {
                        view! {
                            <button type="button" class=css::dangerButton on:click=on_delete>
                                "Delete"
                            </button>
                        }
                    })}
                <button type="submit" class=css::primaryButton>"Save"</button>
            </div>
            {move || {
                deleted.get().then(|| view! { <Alert kind=AlertKind::Warning>"Booking deleted."</Alert> })
            }}
            {move || saved.get().map(|json| view! { <CodeBlock code=json language="json" /> })}
        </form>
    }
}

fn field_error(errors: RwSignal<ValidationErrors>, field: BookingField) -> impl IntoView {
    move || {
        errors.with(|e| {
            e.field(field.id())
                .map(|err| view! { <p class=css::fieldError>{err.to_string()}</p> })
        })
    }
}

fn text_input(
    form: RwSignal<BookingFormInput>,
    errors: RwSignal<ValidationErrors>,
    field: BookingField,
    input_type: &'static str,
) -> impl IntoView {
    let id = field.id();
    view! {
        <div class=css::field>
            <label for=id class=css::label>{humanize(id)}</label>
            <input
                id=id
                class=css::input
                type=input_type
                value=form.with_untracked(|f| f.get(field).to_string())
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
            {field_error(errors, field)}
        </div>
    }
}

fn room_type_input(
    form: RwSignal<BookingFormInput>,
    errors: RwSignal<ValidationErrors>,
    options: Result<EnumOptions, MetadataError>,
) -> impl IntoView {
    let field = BookingField::RoomType;
    let id = field.id();

    let control = match options {
        Ok(options) => view! {
            <select
                id=id
                class=css::input
                on:change=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            >
                <option value="">"Select..."</option>
                {options
                    .into_iter()
                    .map(|(value, label)| {
                        let selected = form.with_untracked(|f| f.get(field) == value);
                        view! { <option value=value selected=selected>{label}</option> }
                    })
                    .collect_view()}
            </select>
        }
        .into_any(),
        Err(e) => {
            let message = format!("{}: {}", RenderError::from(e.clone()), e);
            view! { <p class=css::fieldError role="alert">{message}</p> }.into_any()
        }
    };

    view! {
        <div class=css::field>
            <label for=id class=css::label>{humanize(id)}</label>
            {control}
            {field_error(errors, field)}
        </div>
    }
}

fn notes_input(form: RwSignal<BookingFormInput>) -> impl IntoView {
    let field = BookingField::Notes;
    let id = field.id();
    view! {
        <div class=css::field>
            <label for=id class=css::label>{humanize(id)}</label>
            <textarea
                id=id
                class=css::input
                rows="3"
                prop:value=move || form.with(|f| f.get(field).to_string())
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            ></textarea>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{render_at, render_with_metadata};
    use gallery_core::StaticMetadata;
    use gallery_core::metadata::AuthSession;

    fn render_with(metadata: StaticMetadata) -> String {
        render_with_metadata(&Topic::FormInputs.path(), metadata, || view! { <BookingForm /> })
    }

    #[test]
    fn test_prefilled_from_booking() {
        let html = render_at(&Topic::FormInputs.path(), || view! { <BookingForm /> });
        assert!(html.contains("value=\"First Booking!\""));
        assert!(html.contains("value=\"2024-10-01\""));
        assert!(html.contains("<option value=\"Queen\" selected"));
        assert!(html.contains("Signed in as Manager"));
    }

    #[test]
    fn test_delete_requires_manager() {
        let manager = render_with(StaticMetadata::demo("https://example.org"));
        assert!(manager.contains("Delete"));

        let employee = StaticMetadata::demo("https://example.org").with_session(Some(
            AuthSession::new("employee@email.com", "Employee", &["Employee"]),
        ));
        assert!(!render_with(employee).contains("Delete"));

        let anonymous = StaticMetadata::demo("https://example.org").with_session(None);
        let html = render_with(anonymous);
        assert!(!html.contains("Delete"));
        assert!(html.contains("Not signed in"));
    }

    #[test]
    fn test_missing_metadata_is_inline() {
        let html = render_with(StaticMetadata::unloaded());
        assert!(html.contains("error loading form metadata"));
        assert!(!html.contains("<select"));
        assert!(html.contains("Save"));
    }

    #[test]
    fn test_inline_fields_cover_visible_inputs() {
        for field in BookingField::ALL {
            let inline = INLINE_FIELDS.contains(&field.id());
            assert_eq!(inline, field != BookingField::Notes, "{:?}", field);
        }
    }
}
