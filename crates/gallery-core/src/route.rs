//! Path-based routing table for the gallery.
//!
//! URL format: `/gallery/<topic>` (e.g. `/gallery/datagrid`). Matching is by
//! exact string equality; there is no prefix or fuzzy matching.

use std::fmt;

/// Base path all topic pages live under.
pub const GALLERY_PREFIX: &str = "/gallery";

/// A gallery topic, one per demo page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topic {
    Install,
    Setup,
    AutoQueryGrid,
    DataGrid,
    AutoForm,
    CustomAutoForms,
    FormInputs,
    FileInput,
    TagInput,
    Combobox,
    Autocomplete,
    Markdown,
    CustomInputs,
    Modals,
    Navigation,
    Alerts,
    Formats,
    UseMetadata,
    UseClient,
    UseAuth,
    UseFormatters,
    UseFiles,
    UseUtils,
    UseConfig,
}

impl Topic {
    /// Every registered topic, in sidebar order.
    pub const ALL: [Topic; 24] = [
        Topic::Install,
        Topic::Setup,
        Topic::AutoQueryGrid,
        Topic::DataGrid,
        Topic::AutoForm,
        Topic::CustomAutoForms,
        Topic::FormInputs,
        Topic::FileInput,
        Topic::TagInput,
        Topic::Combobox,
        Topic::Autocomplete,
        Topic::Markdown,
        Topic::CustomInputs,
        Topic::Modals,
        Topic::Navigation,
        Topic::Alerts,
        Topic::Formats,
        Topic::UseMetadata,
        Topic::UseClient,
        Topic::UseAuth,
        Topic::UseFormatters,
        Topic::UseFiles,
        Topic::UseUtils,
        Topic::UseConfig,
    ];

    /// URL slug under `/gallery/`.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Install => "install",
            Self::Setup => "setup",
            Self::AutoQueryGrid => "autoquerygrid",
            Self::DataGrid => "datagrid",
            Self::AutoForm => "autoform",
            Self::CustomAutoForms => "custom-autoforms",
            Self::FormInputs => "form-inputs",
            Self::FileInput => "fileinput",
            Self::TagInput => "taginput",
            Self::Combobox => "combobox",
            Self::Autocomplete => "autocomplete",
            Self::Markdown => "markdown",
            Self::CustomInputs => "custom-inputs",
            Self::Modals => "modals",
            Self::Navigation => "navigation",
            Self::Alerts => "alerts",
            Self::Formats => "formats",
            Self::UseMetadata => "use-metadata",
            Self::UseClient => "use-client",
            Self::UseAuth => "use-auth",
            Self::UseFormatters => "use-formatters",
            Self::UseFiles => "use-files",
            Self::UseUtils => "use-utils",
            Self::UseConfig => "use-config",
        }
    }

    /// Look up a topic by its slug.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.slug() == slug)
    }

    /// Absolute path of this topic's page.
    pub fn path(self) -> String {
        format!("{}/{}", GALLERY_PREFIX, self.slug())
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Application routes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Gallery index: `/` or `/gallery`
    Index,
    /// A topic page: `/gallery/<topic>`
    Topic(Topic),
    /// Anything else; carries the requested path.
    NotFound(String),
}

impl Route {
    /// Parse a browser pathname into a route.
    ///
    /// Only the exact registered paths match. A trailing slash, query
    /// string, or unknown slug yields [`Route::NotFound`].
    pub fn from_path(path: &str) -> Self {
        if path.is_empty() || path == "/" || path == GALLERY_PREFIX {
            return Self::Index;
        }

        path.strip_prefix(GALLERY_PREFIX)
            .and_then(|rest| rest.strip_prefix('/'))
            .and_then(Topic::from_slug)
            .map(Self::Topic)
            .unwrap_or_else(|| Self::NotFound(path.to_string()))
    }

    /// Canonical path for this route.
    pub fn to_path(&self) -> String {
        match self {
            Self::Index => "/".to_string(),
            Self::Topic(topic) => topic.path(),
            Self::NotFound(path) => path.clone(),
        }
    }

    /// The topic this route points at, if any.
    pub fn topic(&self) -> Option<Topic> {
        match self {
            Self::Topic(topic) => Some(*topic),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_parsing() {
        assert_eq!(Route::from_path(""), Route::Index);
        assert_eq!(Route::from_path("/"), Route::Index);
        assert_eq!(Route::from_path("/gallery"), Route::Index);
        assert_eq!(
            Route::from_path("/gallery/autoquerygrid"),
            Route::Topic(Topic::AutoQueryGrid)
        );
        assert_eq!(
            Route::from_path("/gallery/use-metadata"),
            Route::Topic(Topic::UseMetadata)
        );
    }

    #[test]
    fn test_exact_match_only() {
        assert_eq!(
            Route::from_path("/gallery/datagrid/"),
            Route::NotFound("/gallery/datagrid/".to_string())
        );
        assert_eq!(
            Route::from_path("/gallery/data"),
            Route::NotFound("/gallery/data".to_string())
        );
        assert_eq!(
            Route::from_path("/gallerydatagrid"),
            Route::NotFound("/gallerydatagrid".to_string())
        );
        assert_eq!(
            Route::from_path("/GALLERY/datagrid"),
            Route::NotFound("/GALLERY/datagrid".to_string())
        );
    }

    #[test]
    fn test_route_to_path() {
        assert_eq!(Route::Index.to_path(), "/");
        assert_eq!(
            Route::Topic(Topic::CustomAutoForms).to_path(),
            "/gallery/custom-autoforms"
        );
        for topic in Topic::ALL {
            assert_eq!(Route::from_path(&topic.path()), Route::Topic(topic));
        }
    }

    #[test]
    fn test_slugs_unique() {
        let mut slugs: Vec<_> = Topic::ALL.iter().map(|t| t.slug()).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), Topic::ALL.len());
    }
}
