use super::{Action, AppState};
use crate::models::{Folder, Note, Shortcut};
use chrono::{DateTime, Utc};
use tracing::{debug, info};

/// Applies one action to the state and returns the next state.
///
/// Total over [`Action`]: it never panics, and updates or deletes that name
/// an unknown id hand the state back unchanged. Timestamps come from the
/// wall clock.
pub fn reduce(state: AppState, action: Action) -> AppState {
    reduce_at(state, action, Utc::now())
}

/// [`reduce`] with an explicit clock reading.
pub fn reduce_at(mut state: AppState, action: Action, now: DateTime<Utc>) -> AppState {
    debug!(action = action.name(), "applying action");

    match action {
        Action::SetActiveTab(tab) => {
            state.active_tab = tab;
        }
        Action::SetActiveSoftware(software) => {
            state.active_software = software;
            state.active_folder = None;
        }
        Action::SetActiveFolder(folder) => {
            state.active_folder = folder;
        }
        Action::AddFolder(new) => {
            let folder = Folder::new(new.name, new.software_id, now);
            debug!(id = %folder.id, "folder added");
            state.folders.push(folder);
        }
        Action::UpdateFolder(folder) => {
            if let Some(slot) = state.folders.iter_mut().find(|f| f.id == folder.id) {
                *slot = folder.clone();
                if state.active_folder_id() == Some(folder.id.as_str()) {
                    state.active_folder = Some(folder);
                }
            }
        }
        Action::DeleteFolder(id) => {
            state.folders.retain(|f| f.id != id);

            let notes_before = state.notes.len();
            let shortcuts_before = state.shortcuts.len();
            state.notes.retain(|n| n.folder_id.as_deref() != Some(id.as_str()));
            state
                .shortcuts
                .retain(|s| s.folder_id.as_deref() != Some(id.as_str()));

            if state.active_folder_id() == Some(id.as_str()) {
                state.active_folder = None;
            }

            info!(
                folder = %id,
                notes = notes_before - state.notes.len(),
                shortcuts = shortcuts_before - state.shortcuts.len(),
                "folder deleted with its contents"
            );
        }
        Action::AddNote(new) => {
            let mut note = Note::new(new.title, new.content, new.software_id, now);
            note.folder_id = new.folder_id;
            note.tags = new.tags;
            state.notes.push(note);
        }
        Action::UpdateNote(mut note) => {
            if let Some(slot) = state.notes.iter_mut().find(|n| n.id == note.id) {
                note.created_at = slot.created_at;
                note.updated_at = now.max(slot.updated_at);
                *slot = note;
            }
        }
        Action::DeleteNote(id) => {
            state.notes.retain(|n| n.id != id);
        }
        Action::AddShortcut(new) => {
            let mut shortcut = Shortcut::new(new.action, new.keys, new.software_id);
            shortcut.description = new.description;
            shortcut.folder_id = new.folder_id;
            shortcut.category = new.category;
            state.shortcuts.push(shortcut);
        }
        Action::UpdateShortcut(shortcut) => {
            if let Some(slot) = state.shortcuts.iter_mut().find(|s| s.id == shortcut.id) {
                *slot = shortcut;
            }
        }
        Action::DeleteShortcut(id) => {
            state.shortcuts.retain(|s| s.id != id);
        }
        Action::SetSearchQuery(query) => {
            state.search_query = query;
        }
    }

    state
}
