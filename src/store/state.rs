use crate::models::{Folder, Note, Shortcut, Software, catalog};
use serde::{Deserialize, Serialize};

/// Top-level display mode. Exactly one is shown at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabView {
    Folders,
    #[default]
    Notes,
    Shortcuts,
    Keyboard,
}

impl TabView {
    pub const ALL: [TabView; 4] = [
        TabView::Folders,
        TabView::Notes,
        TabView::Shortcuts,
        TabView::Keyboard,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TabView::Folders => "Folders",
            TabView::Notes => "Notes",
            TabView::Shortcuts => "Shortcuts",
            TabView::Keyboard => "Keyboard",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TabView::Folders => "󰉋",
            TabView::Notes => "󰈙",
            TabView::Shortcuts => "󰌌",
            TabView::Keyboard => "",
        }
    }

    pub fn next(&self) -> Self {
        let index = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> Self {
        let index = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Everything the organizer knows: the entity collections plus the cursor
/// (active tab, software, folder and search query) that views read from.
///
/// Collections keep insertion order; views never sort.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub active_tab: TabView,
    pub active_software: Software,
    pub active_folder: Option<Folder>,
    pub software: Vec<Software>,
    pub folders: Vec<Folder>,
    pub notes: Vec<Note>,
    pub shortcuts: Vec<Shortcut>,
    pub search_query: String,
}

impl AppState {
    /// A state holding only the software catalog, with the first package active
    pub fn with_catalog(software: Vec<Software>) -> Self {
        let active_software = software.first().cloned().unwrap_or_default();
        Self {
            active_software,
            software,
            ..Self::default()
        }
    }

    /// The catalog plus the sample folders, notes and shortcuts
    pub fn sample() -> Self {
        Self {
            folders: catalog::folders(),
            notes: catalog::notes(),
            shortcuts: catalog::shortcuts(),
            ..Self::with_catalog(catalog::software())
        }
    }

    pub fn find_software(&self, id: &str) -> Option<&Software> {
        self.software.iter().find(|s| s.id == id)
    }

    pub fn find_folder(&self, id: &str) -> Option<&Folder> {
        self.folders.iter().find(|f| f.id == id)
    }

    pub fn find_note(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn find_shortcut(&self, id: &str) -> Option<&Shortcut> {
        self.shortcuts.iter().find(|s| s.id == id)
    }

    pub fn active_folder_id(&self) -> Option<&str> {
        self.active_folder.as_ref().map(|f| f.id.as_str())
    }
}
