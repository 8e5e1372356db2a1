//! Input component demos.

use gallery_core::Topic;
use gallery_core::data::{self, CONTACTS, Contact};
use gallery_core::inputs::{Stepper, TagList};
use leptos::prelude::*;

use super::{css, title};
use crate::app::MetadataContext;
use crate::components::widgets::{Autocomplete, Combobox, FileInput, MarkdownEditor, NumberStepper, TagInput};
use crate::components::{CodeExample, Layout};

const MARKDOWN_SAMPLE: &str = "## Release notes

Markdown is rendered with **comrak** and sanitized before display.

- [x] Tables
- [x] Task lists
- [ ] Raw HTML (stripped)

| Room  | Nightly |
|-------|---------|
| Queen | $100    |
| Suite | $130    |

Footnotes work too.[^1]

[^1]: Like this one.
";

#[component]
pub fn FileInputPage() -> impl IntoView {
    let single = RwSignal::new(Vec::new());
    let gallery = RwSignal::new(data::fresh_files());

    view! {
        <Layout title=title(Topic::FileInput)>
            <p class=css::intro>
                "FileInput keeps a list of attached files with their type, size and
                a remove action. Picked files are described before they are uploaded."
            </p>
            <CodeExample
                title="Single file"
                code=r#"<FileInput files=files accept="image/*" />"#
            >
                <FileInput files=single accept="image/*" id="avatar" />
            </CodeExample>
            <CodeExample
                title="Existing uploads"
                description="Multiple files, pre-populated from the sample uploads."
                code=r#"let files = RwSignal::new(data::fresh_files());
view! { <FileInput files=files multiple=true /> }"#
            >
                <FileInput files=gallery multiple=true id="gallery" />
            </CodeExample>
        </Layout>
    }
}

#[component]
pub fn TagInputPage() -> impl IntoView {
    let empty = RwSignal::new(TagList::default());
    let skills = RwSignal::new(TagList::new(
        CONTACTS.first().map(|c| c.skills.clone()).unwrap_or_default(),
    ));
    let current = move || skills.with(|t| t.tags().join(", "));

    view! {
        <Layout title=title(Topic::TagInput)>
            <p class=css::intro>
                "Type a tag and press Enter or comma. Tags are trimmed and
                de-duplicated; Backspace in an empty input removes the last one."
            </p>
            <CodeExample title="Empty" code=r#"<TagInput tags=tags placeholder="Add a skill" />"#>
                <TagInput tags=empty id="new-skills" placeholder="Add a skill" />
            </CodeExample>
            <CodeExample
                title="Pre-populated"
                description="Skills of the first sample contact."
                code=r#"let tags = RwSignal::new(TagList::new(contact.skills.clone()));"#
            >
                <TagInput tags=skills id="skills" />
                <p class=css::caption>{current}</p>
            </CodeExample>
        </Layout>
    }
}

#[component]
pub fn ComboboxPage() -> impl IntoView {
    let metadata = use_context::<MetadataContext>().expect("MetadataContext must be provided");
    let room_types = metadata.client().enum_options("RoomType").unwrap_or_default();
    let room = RwSignal::new(None::<String>);

    let contacts: Vec<(String, String)> = CONTACTS
        .iter()
        .map(|c| (c.email.clone(), c.display_name.clone()))
        .collect();
    let contact = RwSignal::new(None::<String>);

    let chosen = move || {
        format!(
            "Room: {} / Contact: {}",
            room.get().unwrap_or_else(|| "-".into()),
            contact.get().unwrap_or_else(|| "-".into())
        )
    };

    view! {
        <Layout title=title(Topic::Combobox)>
            <p class=css::intro>
                "A select with a filter box. Typing narrows the options by a
                case-insensitive match on their label."
            </p>
            <CodeExample
                title="Room type"
                description="Options come from the RoomType enum metadata."
                code=r#"let options = client.enum_options("RoomType")?;
view! { <Combobox options=options value=room /> }"#
            >
                <Combobox options=room_types value=room id="room-type" placeholder="Pick a room" />
            </CodeExample>
            <CodeExample title="Contacts" code=r#"<Combobox options=contacts value=contact />"#>
                <Combobox options=contacts value=contact id="contact" placeholder="Search contacts" />
            </CodeExample>
            <p class=css::caption>{chosen}</p>
        </Layout>
    }
}

#[component]
pub fn AutocompletePage() -> impl IntoView {
    let names: Vec<String> = CONTACTS.iter().map(|c| c.display_name.clone()).collect();
    let name = RwSignal::new(String::new());

    let selected_contact = move || {
        name.with(|n| CONTACTS.iter().find(|c| &c.display_name == n).cloned())
            .map(|c: Contact| view! { <ContactCard contact=c /> })
    };

    view! {
        <Layout title=title(Topic::Autocomplete)>
            <p class=css::intro>
                "Autocomplete suggests contacts whose name starts with what you typed.
                Tab completes a unique match or extends to the shared prefix."
            </p>
            <CodeExample
                title="Contacts"
                code=r#"<Autocomplete candidates=names value=name placeholder="Start typing a name" />"#
            >
                <Autocomplete candidates=names value=name id="contact-name" placeholder="Start typing a name" />
                {selected_contact}
            </CodeExample>
        </Layout>
    }
}

#[component]
fn ContactCard(contact: Contact) -> impl IntoView {
    view! {
        <div class=css::contactCard>
            <img src=contact.profile_url alt="" width="40" height="40" />
            <div>
                <div class=css::contactName>{contact.display_name}</div>
                <a href=gallery_core::format::mailto(&contact.email)>{contact.email.clone()}</a>
                <div class=css::caption>{contact.skills.join(", ")}</div>
            </div>
        </div>
    }
}

#[component]
pub fn MarkdownPage() -> impl IntoView {
    let source = RwSignal::new(MARKDOWN_SAMPLE.to_string());

    view! {
        <Layout title=title(Topic::Markdown)>
            <p class=css::intro>
                "A plain textarea with a live preview. Raw HTML in the source is
                dropped and the rendered output is sanitized."
            </p>
            <CodeExample
                title="Editor"
                code=r#"let source = RwSignal::new(String::new());
view! { <MarkdownEditor source=source /> }"#
            >
                <MarkdownEditor source=source id="notes" />
            </CodeExample>
        </Layout>
    }
}

#[component]
pub fn CustomInputsPage() -> impl IntoView {
    let guests = RwSignal::new(Stepper::new(2, 1, 8, 1));
    let nights = RwSignal::new(Stepper::new(7, 1, 28, 7));
    let summary = move || {
        format!(
            "{} guest(s) for {} night(s)",
            guests.get().value,
            nights.get().value
        )
    };

    view! {
        <Layout title=title(Topic::CustomInputs)>
            <p class=css::intro>
                "Custom inputs wrap their own state. The stepper clamps to its range
                and ignores text that is not a number."
            </p>
            <CodeExample
                title="Steppers"
                code=r#"let guests = RwSignal::new(Stepper::new(2, 1, 8, 1));
view! { <NumberStepper state=guests /> }"#
            >
                <div class=css::row>
                    <label class=css::inline>"Guests " <NumberStepper state=guests id="guests" /></label>
                    <label class=css::inline>"Nights " <NumberStepper state=nights id="nights" /></label>
                </div>
                <p class=css::caption>{summary}</p>
            </CodeExample>
        </Layout>
    }
}
