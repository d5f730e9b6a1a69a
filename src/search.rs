//! View filters.
//!
//! Every view (folders, notes, shortcuts, keyboard) shows the subsequence of
//! a collection that belongs to the active software, sits in the active
//! folder when one is set, and matches the search query. Matching is a
//! case-insensitive substring test; an empty query matches everything.
//! Order is always the insertion order of the underlying collection.

use crate::models::{Folder, Note, Shortcut};
use crate::store::AppState;
use std::collections::HashMap;

/// Name of the synthetic bucket holding every filtered shortcut.
pub const ALL_CATEGORY: &str = "All";

/// The cursor a view filters by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewScope<'a> {
    pub software_id: &'a str,
    pub folder_id: Option<&'a str>,
    needle: String,
}

impl<'a> ViewScope<'a> {
    pub fn new(software_id: &'a str, folder_id: Option<&'a str>, query: &str) -> Self {
        Self {
            software_id,
            folder_id,
            needle: query.to_lowercase(),
        }
    }

    pub fn from_state(state: &'a AppState) -> Self {
        Self::new(
            &state.active_software.id,
            state.active_folder_id(),
            &state.search_query,
        )
    }

    /// Same scope with the search query dropped
    pub fn without_query(&self) -> Self {
        Self::new(self.software_id, self.folder_id, "")
    }

    fn admits(&self, software_id: &str, folder_id: Option<&str>) -> bool {
        software_id == self.software_id
            && match self.folder_id {
                Some(active) => folder_id == Some(active),
                None => true,
            }
    }

    fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.needle)
    }

    fn has_query(&self) -> bool {
        !self.needle.is_empty()
    }
}

pub fn note_matches(note: &Note, scope: &ViewScope<'_>) -> bool {
    scope.admits(&note.software_id, note.folder_id.as_deref())
        && (!scope.has_query()
            || scope.matches(&note.title)
            || scope.matches(&note.content)
            || note.tags.iter().any(|tag| scope.matches(tag)))
}

pub fn shortcut_matches(shortcut: &Shortcut, scope: &ViewScope<'_>) -> bool {
    scope.admits(&shortcut.software_id, shortcut.folder_id.as_deref())
        && (!scope.has_query()
            || scope.matches(&shortcut.action)
            || scope.matches(&shortcut.description)
            || shortcut.keys.iter().any(|key| scope.matches(key))
            || shortcut
                .category
                .as_deref()
                .is_some_and(|category| scope.matches(category)))
}

/// Folders carry no folder of their own, so only software and name count.
pub fn folder_matches(folder: &Folder, scope: &ViewScope<'_>) -> bool {
    folder.software_id == scope.software_id && (!scope.has_query() || scope.matches(&folder.name))
}

pub fn filter_notes<'a, I>(notes: I, scope: &ViewScope<'_>) -> Vec<&'a Note>
where
    I: IntoIterator<Item = &'a Note>,
{
    notes
        .into_iter()
        .filter(|note| note_matches(note, scope))
        .collect()
}

pub fn filter_shortcuts<'a, I>(shortcuts: I, scope: &ViewScope<'_>) -> Vec<&'a Shortcut>
where
    I: IntoIterator<Item = &'a Shortcut>,
{
    shortcuts
        .into_iter()
        .filter(|shortcut| shortcut_matches(shortcut, scope))
        .collect()
}

pub fn filter_folders<'a, I>(folders: I, scope: &ViewScope<'_>) -> Vec<&'a Folder>
where
    I: IntoIterator<Item = &'a Folder>,
{
    folders
        .into_iter()
        .filter(|folder| folder_matches(folder, scope))
        .collect()
}

pub fn visible_notes(state: &AppState) -> Vec<&Note> {
    filter_notes(&state.notes, &ViewScope::from_state(state))
}

pub fn visible_shortcuts(state: &AppState) -> Vec<&Shortcut> {
    filter_shortcuts(&state.shortcuts, &ViewScope::from_state(state))
}

pub fn visible_folders(state: &AppState) -> Vec<&Folder> {
    filter_folders(&state.folders, &ViewScope::from_state(state))
}

/// Number of notes and shortcuts filed in a folder, ignoring the search query
pub fn folder_item_counts(state: &AppState, folder_id: &str) -> (usize, usize) {
    let in_folder = |id: Option<&str>| id == Some(folder_id);
    (
        state
            .notes
            .iter()
            .filter(|n| in_folder(n.folder_id.as_deref()))
            .count(),
        state
            .shortcuts
            .iter()
            .filter(|s| in_folder(s.folder_id.as_deref()))
            .count(),
    )
}

/// One tab of the shortcuts view.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBucket<'a> {
    pub name: String,
    pub shortcuts: Vec<&'a Shortcut>,
}

impl CategoryBucket<'_> {
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.shortcuts.len())
    }
}

/// Groups already-filtered shortcuts by category.
///
/// The first bucket is always `All` with the whole input; the rest follow
/// in order of first appearance, with category-less shortcuts under
/// `Uncategorized`.
pub fn category_buckets<'a>(filtered: &[&'a Shortcut]) -> Vec<CategoryBucket<'a>> {
    let mut buckets = vec![CategoryBucket {
        name: ALL_CATEGORY.to_string(),
        shortcuts: filtered.to_vec(),
    }];

    for shortcut in filtered {
        let name = shortcut.category_name();
        match buckets.iter().skip(1).position(|b| b.name == name) {
            Some(index) => buckets[index + 1].shortcuts.push(*shortcut),
            None => buckets.push(CategoryBucket {
                name: name.to_string(),
                shortcuts: vec![*shortcut],
            }),
        }
    }

    buckets
}

/// Physical key label (uppercased) to the shortcuts that press it.
#[derive(Debug, Clone, Default)]
pub struct KeyboardMap<'a> {
    keys: HashMap<String, Vec<&'a Shortcut>>,
}

impl<'a> KeyboardMap<'a> {
    pub fn build(filtered: &[&'a Shortcut]) -> Self {
        let mut keys: HashMap<String, Vec<&'a Shortcut>> = HashMap::new();
        for shortcut in filtered {
            for key in &shortcut.keys {
                keys.entry(key.to_uppercase()).or_default().push(*shortcut);
            }
        }
        Self { keys }
    }

    pub fn shortcuts_for(&self, label: &str) -> &[&'a Shortcut] {
        self.keys
            .get(&label.to_uppercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn is_active(&self, label: &str) -> bool {
        !self.shortcuts_for(label).is_empty()
    }

    /// Actions bound to a key, comma separated
    pub fn tooltip(&self, label: &str) -> String {
        self.shortcuts_for(label)
            .iter()
            .map(|s| s.action.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn active_key_count(&self) -> usize {
        self.keys.len()
    }
}
