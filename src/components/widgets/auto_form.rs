//! Forms generated from type metadata.
//!
//! The metadata client describes each property's input type; select inputs
//! pull their options from the named enum. Lookups that fail surface as a
//! [`RenderError`] and are caught by the surrounding [`Boundary`].

use gallery_core::error::FieldError;
use gallery_core::metadata::{EnumOptions, InputType, PropertyMeta};
use gallery_core::text::humanize;
use gallery_core::{MetadataClient, MetadataError, RenderError};
use leptos::prelude::*;
use serde_json::{Map, Number, Value};

use super::css;
use crate::app::MetadataContext;
use crate::components::{Boundary, CodeBlock};
use crate::utils::console;

/// One generated input and its raw value.
#[derive(Clone)]
struct FormField {
    meta: PropertyMeta,
    options: EnumOptions,
    value: RwSignal<String>,
}

/// Auto form for the request type `type_name`.
#[component]
pub fn AutoForm(
    type_name: &'static str,
    #[prop(optional)] submit_label: Option<&'static str>,
) -> impl IntoView {
    let metadata = use_context::<MetadataContext>().expect("MetadataContext must be provided");
    let submitted = RwSignal::new(None::<String>);
    let submit_label = submit_label.unwrap_or("Submit");

    view! {
        <Boundary render=move || form_view(metadata.client(), type_name, submit_label, submitted) />
        {move || {
            submitted.get().map(|json| view! { <CodeBlock code=json language="json" /> })
        }}
    }
}

fn form_view(
    client: &dyn MetadataClient,
    type_name: &'static str,
    submit_label: &'static str,
    submitted: RwSignal<Option<String>>,
) -> Result<AnyView, RenderError> {
    let meta = client.type_meta(type_name)?;
    let description = meta.description;
    let fields = meta
        .properties
        .iter()
        .map(|p| {
            let options = match p.input {
                InputType::Select(enum_name) => client.enum_options(enum_name)?,
                _ => EnumOptions::new(),
            };
            Ok(FormField {
                meta: p.clone(),
                options,
                value: RwSignal::new(String::new()),
            })
        })
        .collect::<Result<Vec<_>, MetadataError>>()?;

    let errors = RwSignal::new(Vec::<FieldError>::new());
    let inputs = fields.iter().cloned().map(field_view).collect_view();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let raw: Vec<(PropertyMeta, String)> = fields
            .iter()
            .map(|f| (f.meta.clone(), f.value.get_untracked()))
            .collect();
        match to_json(&raw) {
            Ok(value) => {
                console::log(&format!("{} {}", type_name, value));
                errors.set(Vec::new());
                submitted.set(serde_json::to_string_pretty(&value).ok());
            }
            Err(errs) => {
                console::warn(&format!("{}: {} invalid field(s)", type_name, errs.len()));
                errors.set(errs);
                submitted.set(None);
            }
        }
    };

    Ok(view! {
        <form class=css::form on:submit=on_submit novalidate=true>
            <p class=css::formDescription>{description}</p>
            {inputs}
            <ErrorSummary errors=errors />
            <div class=css::formActions>
                <button type="submit" class=css::primaryButton>{submit_label}</button>
            </div>
        </form>
    }
    .into_any())
}

fn field_view(field: FormField) -> impl IntoView {
    let FormField { meta, options, value } = field;
    let id = meta.name;
    let label = humanize(meta.name);
    let placeholder = meta.placeholder.unwrap_or_default();

    let input = match meta.input {
        InputType::Textarea => view! {
            <textarea
                id=id
                class=css::input
                rows="3"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        InputType::Checkbox => view! {
            <input
                id=id
                type="checkbox"
                prop:checked=move || value.get() == "true"
                on:change=move |ev| value.set(event_target_checked(&ev).to_string())
            />
        }
        .into_any(),
        InputType::Select(_) => view! {
            <select
                id=id
                class=css::input
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="">"Select..."</option>
                {options
                    .into_iter()
                    .map(|(v, l)| view! { <option value=v>{l}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        other => view! {
            <input
                id=id
                class=css::input
                type=other.html_type()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <div class=css::field>
            <label for=id class=css::label>
                {label}
                {meta.required.then_some(view! { <span class=css::required>" *"</span> })}
            </label>
            {input}
        </div>
    }
}

/// Errors not tied to a visible input, shown above the submit button.
#[component]
pub fn ErrorSummary(errors: RwSignal<Vec<FieldError>>) -> impl IntoView {
    move || {
        let errs = errors.get();
        (!errs.is_empty()).then(|| {
            view! {
                <div class=css::errorSummary role="alert">
                    <ul>
                        {errs
                            .into_iter()
                            .map(|e| view! { <li>{e.to_string()}</li> })
                            .collect_view()}
                    </ul>
                </div>
            }
        })
    }
}

/// Turn raw form values into a JSON request body.
///
/// Empty optional fields are omitted; numbers and checkboxes are typed.
fn to_json(fields: &[(PropertyMeta, String)]) -> Result<Value, Vec<FieldError>> {
    let mut body = Map::new();
    let mut errors = Vec::new();

    for (meta, raw) in fields {
        let raw = raw.trim();
        if meta.input == InputType::Checkbox {
            body.insert(meta.name.to_string(), Value::Bool(raw == "true"));
            continue;
        }
        if raw.is_empty() {
            if meta.required {
                errors.push(FieldError::Required(meta.name));
            }
            continue;
        }
        let value = match meta.input {
            InputType::Number => match raw.parse::<f64>().ok().and_then(Number::from_f64) {
                Some(n) => Value::Number(n),
                None => {
                    errors.push(FieldError::NotANumber(meta.name));
                    continue;
                }
            },
            _ => Value::String(raw.to_string()),
        };
        body.insert(meta.name.to_string(), value);
    }

    if errors.is_empty() {
        Ok(Value::Object(body))
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::render_at;
    use gallery_core::StaticMetadata;
    use gallery_core::metadata::TypeMeta;

    fn coupon_meta() -> TypeMeta {
        StaticMetadata::demo("https://example.org")
            .type_meta("CreateCoupon")
            .cloned()
            .unwrap()
    }

    fn raw(meta: &TypeMeta, values: &[&str]) -> Vec<(PropertyMeta, String)> {
        meta.properties
            .iter()
            .cloned()
            .zip(values.iter().map(|v| v.to_string()))
            .collect()
    }

    #[test]
    fn test_to_json_typed_values() {
        let meta = coupon_meta();
        let body = to_json(&raw(&meta, &["BOOK10", "10% off", "10", "2030-01-01"])).unwrap();
        assert_eq!(body["id"], "BOOK10");
        assert_eq!(body["discount"], 10.0);
        assert_eq!(body["expiryDate"], "2030-01-01");
    }

    #[test]
    fn test_to_json_reports_all_errors() {
        let meta = coupon_meta();
        let errs = to_json(&raw(&meta, &["", "desc", "ten", ""])).unwrap_err();
        assert_eq!(
            errs,
            vec![
                FieldError::Required("id"),
                FieldError::NotANumber("discount"),
                FieldError::Required("expiryDate"),
            ]
        );
    }

    #[test]
    fn test_renders_fields_from_metadata() {
        let html = render_at("/", || view! { <AutoForm type_name="CreateBooking" /> });
        assert!(html.contains("Room Type"));
        assert!(html.contains("Booking Start Date"));
        assert!(html.contains("<option value=\"Suite\">"));
        assert!(html.contains("<textarea"));
    }

    #[test]
    fn test_unknown_type_falls_back() {
        let html = render_at("/", || view! { <AutoForm type_name="CreateInvoice" /> });
        assert!(html.contains("Something went wrong"));
        assert!(html.contains("CreateInvoice"));
        assert!(!html.contains("<form"));
    }
}
