//! Navigation tree ↔ routing table consistency.

use std::collections::HashSet;

use gallery_core::navigation::{self, NAV_SECTIONS, all_entries, sidebar};
use gallery_core::{Route, Topic};

fn active_links(path: &str) -> Vec<&'static str> {
    sidebar(path)
        .into_iter()
        .flat_map(|s| s.links)
        .filter(|l| l.active)
        .map(|l| l.href)
        .collect()
}

#[test]
fn hrefs_are_unique() {
    let hrefs: Vec<_> = all_entries().map(|e| e.href).collect();
    let unique: HashSet<_> = hrefs.iter().collect();
    assert_eq!(unique.len(), hrefs.len());
}

#[test]
fn every_entry_resolves_to_a_page() {
    for entry in all_entries() {
        assert!(
            matches!(Route::from_path(entry.href), Route::Topic(_)),
            "{} does not resolve to a topic page",
            entry.href
        );
    }
}

#[test]
fn every_page_has_exactly_one_entry() {
    for topic in Topic::ALL {
        let path = topic.path();
        let count = all_entries().filter(|e| e.href == path).count();
        assert_eq!(count, 1, "{} has {} sidebar entries", path, count);
    }
    assert_eq!(all_entries().count(), Topic::ALL.len());
}

#[test]
fn exactly_one_link_active_on_every_known_path() {
    for entry in all_entries() {
        assert_eq!(active_links(entry.href), [entry.href]);
    }
}

#[test]
fn no_link_active_on_index_or_unknown_paths() {
    for path in ["/", "/gallery", "/gallery/", "/gallery/unknown", "/about", ""] {
        assert!(active_links(path).is_empty(), "{} activated a link", path);
    }
}

#[test]
fn autoquerygrid_scenario() {
    let links: Vec<_> = sidebar("/gallery/autoquerygrid")
        .into_iter()
        .flat_map(|s| s.links)
        .collect();
    let find = |href: &str| links.iter().find(|l| l.href == href).copied();

    assert!(find("/gallery/autoquerygrid").is_some_and(|l| l.active));
    assert!(find("/gallery/datagrid").is_some_and(|l| !l.active));
}

#[test]
fn sidebar_preserves_structure() {
    let rendered = sidebar("/gallery/alerts");
    assert_eq!(rendered.len(), NAV_SECTIONS.len());
    for (section, original) in rendered.iter().zip(NAV_SECTIONS) {
        assert_eq!(section.title, original.title);
        let hrefs: Vec<_> = section.links.iter().map(|l| l.href).collect();
        let expected: Vec<_> = original.entries.iter().map(|e| e.href).collect();
        assert_eq!(hrefs, expected);
    }
}

#[test]
fn labels_cover_every_topic() {
    for topic in Topic::ALL {
        assert_ne!(navigation::label_for(topic), topic.slug(), "{} has no label", topic);
    }
}
