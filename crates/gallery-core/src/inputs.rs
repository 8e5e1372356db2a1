//! State logic behind the interactive input demos.
//!
//! - [`TagList`] - tag input (comma/Enter separated, de-duplicated)
//! - [`complete`] - prefix completion with common-prefix extension
//! - [`filter_by`] - case-insensitive substring filtering for combobox lists
//! - [`Stepper`] - bounded numeric input
//! - [`SortState`] - header-click sort toggling for grids

use std::cmp::Ordering;

// ============================================================================
// Tags
// ============================================================================

/// What a key press in a tag input should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagKey {
    /// Turn the pending text into tags.
    Commit,
    /// Remove the last tag.
    RemoveLast,
    /// Let the key through.
    Ignore,
}

impl TagKey {
    pub fn from_key(key: &str, pending_is_empty: bool) -> Self {
        match key {
            "Enter" | "," | "Tab" if !pending_is_empty => Self::Commit,
            "Backspace" if pending_is_empty => Self::RemoveLast,
            _ => Self::Ignore,
        }
    }
}

/// Ordered, case-insensitively unique tags.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagList {
    tags: Vec<String>,
}

impl TagList {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut list = Self::default();
        for tag in tags {
            list.add(tag.as_ref());
        }
        list
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn contains(&self, tag: &str) -> bool {
        let needle = tag.trim().to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == needle)
    }

    /// Add one tag. Returns `false` for blanks and duplicates.
    pub fn add(&mut self, raw: &str) -> bool {
        let tag = raw.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Add every comma separated tag in `input`; returns how many were new.
    pub fn add_all(&mut self, input: &str) -> usize {
        input.split(',').filter(|t| self.add(t)).count()
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn pop(&mut self) -> Option<String> {
        self.tags.pop()
    }
}

// ============================================================================
// Completion
// ============================================================================

/// Result of a completion attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Completion {
    /// Exactly one candidate matches.
    Single(String),
    /// Several match: (common_prefix, all_matches).
    Multiple(String, Vec<String>),
    /// Nothing matches.
    None,
}

/// Complete `query` against `candidates` by case-insensitive prefix.
pub fn complete<'a, I>(query: &str, candidates: I) -> Completion
where
    I: IntoIterator<Item = &'a str>,
{
    let needle = query.to_lowercase();
    let matches: Vec<String> = candidates
        .into_iter()
        .filter(|c| c.to_lowercase().starts_with(&needle))
        .map(String::from)
        .collect();

    match matches.len() {
        0 => Completion::None,
        1 => Completion::Single(matches[0].clone()),
        _ => Completion::Multiple(common_prefix(&matches), matches),
    }
}

/// Longest case-insensitive common prefix, in the first string's casing.
pub fn common_prefix(strings: &[String]) -> String {
    let Some(first) = strings.first() else {
        return String::new();
    };

    let mut prefix_chars = first.chars().count();
    for s in &strings[1..] {
        prefix_chars = first
            .chars()
            .zip(s.chars())
            .take(prefix_chars)
            .take_while(|(a, b)| a.to_lowercase().eq(b.to_lowercase()))
            .count();
    }

    first.chars().take(prefix_chars).collect()
}

/// Items whose key contains `query`, case-insensitively. Blank query keeps all.
pub fn filter_by<'a, T, F>(items: &'a [T], query: &str, key: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    let needle = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| needle.is_empty() || key(item).to_lowercase().contains(&needle))
        .collect()
}

// ============================================================================
// Stepper
// ============================================================================

/// An integer clamped to `[min, max]` that moves in `step` increments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stepper {
    pub value: i32,
    pub min: i32,
    pub max: i32,
    pub step: i32,
}

impl Stepper {
    /// Bounds given in either order are normalised to `min <= max`.
    pub fn new(value: i32, min: i32, max: i32, step: i32) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            value: value.clamp(min, max),
            min,
            max,
            step: step.max(1),
        }
    }

    pub fn increment(&mut self) {
        self.value = self.value.saturating_add(self.step).min(self.max);
    }

    pub fn decrement(&mut self) {
        self.value = self.value.saturating_sub(self.step).max(self.min);
    }

    /// Set from user text; unparsable input leaves the value alone.
    pub fn set_text(&mut self, raw: &str) -> bool {
        match raw.trim().parse::<i32>() {
            Ok(v) => {
                self.value = v.clamp(self.min, self.max);
                true
            }
            Err(_) => false,
        }
    }

    pub fn at_min(&self) -> bool {
        self.value <= self.min
    }

    pub fn at_max(&self) -> bool {
        self.value >= self.max
    }
}

// ============================================================================
// Sorting
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Which column a grid is sorted by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortState {
    pub column: Option<&'static str>,
    pub direction: Option<SortDirection>,
}

impl SortState {
    /// Header click: unsorted → ascending → descending → unsorted.
    /// Clicking another column starts it ascending.
    pub fn toggle(self, column: &'static str) -> Self {
        if self.column != Some(column) {
            return Self {
                column: Some(column),
                direction: Some(SortDirection::Ascending),
            };
        }
        match self.direction {
            Some(SortDirection::Ascending) => Self {
                column: Some(column),
                direction: Some(SortDirection::Descending),
            },
            _ => Self::default(),
        }
    }

    pub fn direction_of(&self, column: &str) -> Option<SortDirection> {
        if self.column == Some(column) {
            self.direction
        } else {
            None
        }
    }

    /// Stable sort of `rows` using `compare` for the active column.
    pub fn apply<T, F>(&self, rows: &mut [T], compare: F)
    where
        F: Fn(&'static str, &T, &T) -> Ordering,
    {
        let (Some(column), Some(direction)) = (self.column, self.direction) else {
            return;
        };
        rows.sort_by(|a, b| {
            let ord = compare(column, a, b);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });
    }
}
