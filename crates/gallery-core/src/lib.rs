//! Browser-independent core of the component gallery.
//!
//! - [`route`] - URL path ↔ [`Route`] mapping
//! - [`navigation`] - sidebar tree and active-link resolution
//! - [`data`] - sample records for the demos
//! - [`boundary`] - fallible render regions
//! - [`metadata`] - the [`MetadataClient`] seam and its static implementation
//! - [`booking_form`] - typed, validated booking form
//! - [`format`], [`text`], [`files`] - display helpers
//! - [`inputs`] - tag input, completion, stepper and grid sorting state
//! - [`theme`] - colour scheme preference

pub mod booking_form;
pub mod boundary;
pub mod data;
pub mod error;
pub mod files;
pub mod format;
pub mod inputs;
pub mod metadata;
pub mod navigation;
pub mod route;
pub mod text;
pub mod theme;

pub use boundary::{BoundaryState, CapturedError, FallibleRegion};
pub use error::{FieldError, MetadataError, RenderError};
pub use metadata::{MetadataClient, StaticMetadata};
pub use route::{Route, Topic};
