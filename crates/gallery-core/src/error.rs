//! Error types shared by the gallery.
//!
//! - [`MetadataError`] - schema/enum lookups against the metadata client
//! - [`FieldError`] - a single invalid form field
//! - [`RenderError`] - a demo region that could not be rendered

use thiserror::Error;

/// Metadata lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MetadataError {
    /// Metadata has not been loaded yet.
    #[error("metadata not loaded")]
    NotLoaded,
    /// No enum with this name is described by the metadata.
    #[error("unknown enum '{0}'")]
    UnknownEnum(String),
    /// No type with this name is described by the metadata.
    #[error("unknown type '{0}'")]
    UnknownType(String),
}

/// Why a single form field was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("'{0}' is required")]
    Required(&'static str),
    #[error("'{0}' must be a number")]
    NotANumber(&'static str),
    #[error("'{0}' must not be negative")]
    Negative(&'static str),
    #[error("'{0}' must be a date (YYYY-MM-DD)")]
    InvalidDate(&'static str),
    #[error("'{field}' must be one of: {allowed}")]
    NotAnOption {
        field: &'static str,
        allowed: String,
    },
    #[error("'{0}' must not be before the start date")]
    EndBeforeStart(&'static str),
}

impl FieldError {
    /// Name of the field this error belongs to.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Required(f)
            | Self::NotANumber(f)
            | Self::Negative(f)
            | Self::InvalidDate(f)
            | Self::EndBeforeStart(f) => f,
            Self::NotAnOption { field, .. } => field,
        }
    }
}

/// A demo region failed to produce its view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("error loading form metadata")]
    Metadata(#[from] MetadataError),
    #[error("{0}")]
    Demo(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_messages() {
        assert_eq!(
            MetadataError::UnknownEnum("Color".into()).to_string(),
            "unknown enum 'Color'"
        );
        assert_eq!(FieldError::Required("name").to_string(), "'name' is required");
    }

    #[test]
    fn test_render_error_source() {
        let err = RenderError::from(MetadataError::UnknownEnum("RoomType".into()));
        assert_eq!(err.to_string(), "error loading form metadata");
        assert_eq!(
            err.source().map(|s| s.to_string()),
            Some("unknown enum 'RoomType'".to_string())
        );
    }

    #[test]
    fn test_field_name() {
        let err = FieldError::NotAnOption {
            field: "roomType",
            allowed: "Single, Double".into(),
        };
        assert_eq!(err.field(), "roomType");
    }
}
