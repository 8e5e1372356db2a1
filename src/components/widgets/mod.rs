//! The interactive components showcased by the gallery.
//!
//! - [`DataGrid`] - typed columns, optional header sorting
//! - [`AutoForm`] - forms generated from type metadata
//! - [`TagInput`], [`Combobox`], [`Autocomplete`] - text entry helpers
//! - [`FileInput`] - file picker and attachment list
//! - [`MarkdownEditor`] - editor with sanitized preview
//! - [`NumberStepper`] - bounded numeric input
//! - [`Modal`], [`Alert`], [`Tabs`], [`Breadcrumbs`] - overlays and navigation

mod alert;
mod auto_form;
mod combobox;
mod data_grid;
mod file_input;
mod markdown_editor;
mod modal;
mod nav;
mod stepper;
mod tag_input;

pub use alert::{Alert, AlertKind};
pub use auto_form::{AutoForm, ErrorSummary};
pub use combobox::{Autocomplete, Combobox};
pub use data_grid::{Column, Compare, DataGrid};
pub use file_input::FileInput;
pub use markdown_editor::MarkdownEditor;
pub use modal::Modal;
pub use nav::{Breadcrumbs, Crumb, Tabs};
pub use stepper::NumberStepper;
pub use tag_input::TagInput;

stylance::import_crate_style!(pub css, "src/components/widgets/widgets.module.css");
