//! Sidebar navigation tree and active-link resolution.
//!
//! The tree is static. Highlighting is derived on every render by comparing
//! the current path with each entry's `href`; nothing is stored.

use crate::route::Topic;

/// A single sidebar link.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub href: &'static str,
    pub label: &'static str,
}

/// A named group of sidebar links.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavSection {
    pub title: &'static str,
    pub entries: &'static [NavEntry],
}

const fn entry(href: &'static str, label: &'static str) -> NavEntry {
    NavEntry { href, label }
}

/// The gallery sidebar, in display order.
pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection {
        title: "Getting Started",
        entries: &[
            entry("/gallery/install", "Installation"),
            entry("/gallery/setup", "Setup"),
        ],
    },
    NavSection {
        title: "Component Gallery",
        entries: &[
            entry("/gallery/autoquerygrid", "AutoQueryGrid"),
            entry("/gallery/datagrid", "DataGrid"),
            entry("/gallery/autoform", "Auto Forms"),
            entry("/gallery/custom-autoforms", "Custom Auto Forms"),
            entry("/gallery/form-inputs", "Form Inputs"),
            entry("/gallery/fileinput", "FileInput"),
            entry("/gallery/taginput", "TagInput"),
            entry("/gallery/combobox", "Combobox"),
            entry("/gallery/autocomplete", "Autocomplete"),
            entry("/gallery/markdown", "Markdown Editor"),
            entry("/gallery/custom-inputs", "Custom Inputs"),
            entry("/gallery/modals", "Modals"),
            entry("/gallery/navigation", "Navigation"),
            entry("/gallery/alerts", "Alerts"),
            entry("/gallery/formats", "Formats"),
        ],
    },
    NavSection {
        title: "Library",
        entries: &[
            entry("/gallery/use-metadata", "useMetadata"),
            entry("/gallery/use-client", "useClient"),
            entry("/gallery/use-auth", "useAuth"),
            entry("/gallery/use-formatters", "useFormatters"),
            entry("/gallery/use-files", "useFiles"),
            entry("/gallery/use-utils", "useUtils"),
            entry("/gallery/use-config", "useConfig"),
        ],
    },
];

/// Iterate over every entry of every section.
pub fn all_entries() -> impl Iterator<Item = &'static NavEntry> {
    NAV_SECTIONS.iter().flat_map(|s| s.entries.iter())
}

/// Sidebar label for a topic.
pub fn label_for(topic: Topic) -> &'static str {
    let href = topic.path();
    all_entries()
        .find(|e| e.href == href)
        .map(|e| e.label)
        .unwrap_or_else(|| topic.slug())
}

/// Returns `true` when `href` is the link for `current_path`.
#[inline]
pub fn is_active(current_path: &str, href: &str) -> bool {
    current_path == href
}

/// The entry matching `current_path`, if any.
pub fn active_entry(current_path: &str) -> Option<&'static NavEntry> {
    all_entries().find(|e| is_active(current_path, e.href))
}

// ============================================================================
// Render model
// ============================================================================

/// A link as it should be rendered for a particular path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SidebarLink {
    pub href: &'static str,
    pub label: &'static str,
    pub active: bool,
}

/// A section as it should be rendered for a particular path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarSection {
    pub title: &'static str,
    pub links: Vec<SidebarLink>,
}

/// Resolve the whole navigation tree against `current_path`.
///
/// At most one link is flagged active. An unknown path flags none.
pub fn sidebar(current_path: &str) -> Vec<SidebarSection> {
    NAV_SECTIONS
        .iter()
        .map(|section| SidebarSection {
            title: section.title,
            links: section
                .entries
                .iter()
                .map(|e| SidebarLink {
                    href: e.href,
                    label: e.label,
                    active: is_active(current_path, e.href),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_hrefs(path: &str) -> Vec<&'static str> {
        sidebar(path)
            .into_iter()
            .flat_map(|s| s.links)
            .filter(|l| l.active)
            .map(|l| l.href)
            .collect()
    }

    #[test]
    fn test_autoquerygrid_active() {
        let sections = sidebar("/gallery/autoquerygrid");
        let links: Vec<_> = sections.iter().flat_map(|s| &s.links).collect();

        let aqg = links.iter().find(|l| l.href == "/gallery/autoquerygrid").unwrap();
        let grid = links.iter().find(|l| l.href == "/gallery/datagrid").unwrap();
        assert!(aqg.active);
        assert!(!grid.active);
    }

    #[test]
    fn test_no_prefix_matching() {
        assert!(active_hrefs("/gallery").is_empty());
        assert!(active_hrefs("/gallery/").is_empty());
        assert!(active_hrefs("/gallery/autoquery").is_empty());
        assert!(active_hrefs("/gallery/autoquerygrid/extra").is_empty());
        assert!(active_hrefs("/").is_empty());
    }

    #[test]
    fn test_section_order() {
        let titles: Vec<_> = NAV_SECTIONS.iter().map(|s| s.title).collect();
        assert_eq!(titles, ["Getting Started", "Component Gallery", "Library"]);
    }

    #[test]
    fn test_label_for() {
        assert_eq!(label_for(Topic::Markdown), "Markdown Editor");
        assert_eq!(label_for(Topic::UseAuth), "useAuth");
        assert_eq!(label_for(Topic::Install), "Installation");
    }

    #[test]
    fn test_active_entry() {
        assert_eq!(active_entry("/gallery/alerts").map(|e| e.label), Some("Alerts"));
        assert_eq!(active_entry("/nowhere"), None);
    }
}
