use super::TabView;
use crate::models::{Folder, Note, Shortcut, Software};

/// Fields of a folder the user supplies; id and timestamp come from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFolder {
    pub name: String,
    pub software_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNote {
    pub title: String,
    pub content: String,
    pub software_id: String,
    pub folder_id: Option<String>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortcut {
    pub action: String,
    pub keys: Vec<String>,
    pub description: String,
    pub software_id: String,
    pub folder_id: Option<String>,
    pub category: Option<String>,
}

/// Every state transition the store accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetActiveTab(TabView),
    SetActiveSoftware(Software),
    SetActiveFolder(Option<Folder>),
    AddFolder(NewFolder),
    UpdateFolder(Folder),
    DeleteFolder(String),
    AddNote(NewNote),
    UpdateNote(Note),
    DeleteNote(String),
    AddShortcut(NewShortcut),
    UpdateShortcut(Shortcut),
    DeleteShortcut(String),
    SetSearchQuery(String),
}

impl Action {
    /// Stable name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetActiveTab(_) => "set_active_tab",
            Action::SetActiveSoftware(_) => "set_active_software",
            Action::SetActiveFolder(_) => "set_active_folder",
            Action::AddFolder(_) => "add_folder",
            Action::UpdateFolder(_) => "update_folder",
            Action::DeleteFolder(_) => "delete_folder",
            Action::AddNote(_) => "add_note",
            Action::UpdateNote(_) => "update_note",
            Action::DeleteNote(_) => "delete_note",
            Action::AddShortcut(_) => "add_shortcut",
            Action::UpdateShortcut(_) => "update_shortcut",
            Action::DeleteShortcut(_) => "delete_shortcut",
            Action::SetSearchQuery(_) => "set_search_query",
        }
    }

    /// Software id an action points at, for actions that create or
    /// re-home an entity
    pub fn software_ref(&self) -> Option<&str> {
        match self {
            Action::AddFolder(f) => Some(&f.software_id),
            Action::UpdateFolder(f) => Some(&f.software_id),
            Action::AddNote(n) => Some(&n.software_id),
            Action::UpdateNote(n) => Some(&n.software_id),
            Action::AddShortcut(s) => Some(&s.software_id),
            Action::UpdateShortcut(s) => Some(&s.software_id),
            _ => None,
        }
    }

    /// Folder id an action files an entity under
    pub fn folder_ref(&self) -> Option<&str> {
        match self {
            Action::AddNote(n) => n.folder_id.as_deref(),
            Action::UpdateNote(n) => n.folder_id.as_deref(),
            Action::AddShortcut(s) => s.folder_id.as_deref(),
            Action::UpdateShortcut(s) => s.folder_id.as_deref(),
            _ => None,
        }
    }
}
