use super::*;
use crate::models::catalog;
use crate::search::{self, ViewScope};
use chrono::{Duration, TimeZone, Utc};

fn blender_note(title: &str, content: &str) -> NewNote {
    NewNote {
        title: title.to_string(),
        content: content.to_string(),
        software_id: "blender".to_string(),
        folder_id: None,
        tags: Vec::new(),
    }
}

fn add_folder(store: &mut Store, name: &str) -> String {
    store.dispatch(Action::AddFolder(NewFolder {
        name: name.to_string(),
        software_id: "blender".to_string(),
    }));
    store
        .state()
        .folders
        .last()
        .map(|f| f.id.clone())
        .expect("folder was appended")
}

#[test]
fn set_active_tab_changes_only_the_tab() {
    let mut store = Store::new(AppState::sample());
    let folder = store.state().folders[0].clone();
    store.dispatch(Action::SetActiveFolder(Some(folder.clone())));
    let before = store.state().clone();

    store.dispatch(Action::SetActiveTab(TabView::Keyboard));

    let after = store.state();
    assert_eq!(after.active_tab, TabView::Keyboard);
    assert_eq!(after.active_folder, Some(folder));
    assert_eq!(after.notes, before.notes);
    assert_eq!(after.search_query, before.search_query);
}

#[test]
fn switching_software_always_clears_active_folder() {
    let mut store = Store::new(AppState::sample());
    let maya = store.state().software[1].clone();

    let folder = store.state().folders[0].clone();
    store.dispatch(Action::SetActiveFolder(Some(folder)));
    store.dispatch(Action::SetActiveSoftware(maya.clone()));
    assert_eq!(store.state().active_software, maya);
    assert_eq!(store.state().active_folder, None);

    // Already unset stays unset.
    store.dispatch(Action::SetActiveSoftware(maya));
    assert_eq!(store.state().active_folder, None);
}

#[test]
fn add_then_delete_folder_restores_count() {
    let mut store = Store::new(AppState::sample());
    let original = store.state().folders.len();
    let notes = store.state().notes.len();
    let shortcuts = store.state().shortcuts.len();

    let id = add_folder(&mut store, "Rigging");

    let rigging: Vec<_> = store
        .state()
        .folders
        .iter()
        .filter(|f| f.name == "Rigging")
        .collect();
    assert_eq!(rigging.len(), 1);
    assert!(!id.is_empty());
    assert_eq!(store.state().folders.len(), original + 1);

    store.dispatch(Action::DeleteFolder(id));
    assert_eq!(store.state().folders.len(), original);
    assert_eq!(store.state().notes.len(), notes);
    assert_eq!(store.state().shortcuts.len(), shortcuts);
}

#[test]
fn delete_folder_cascades_to_notes_and_shortcuts() {
    let mut store = Store::new(AppState::sample());
    let id = add_folder(&mut store, "Rigging");
    let folder = store.state().find_folder(&id).cloned();
    store.dispatch(Action::SetActiveFolder(folder));

    let mut note = blender_note("Bones", "Parent with Ctrl+P");
    note.folder_id = Some(id.clone());
    store.dispatch(Action::AddNote(note));
    store.dispatch(Action::AddShortcut(NewShortcut {
        action: "Parent".into(),
        keys: vec!["Ctrl".into(), "P".into()],
        description: "Parent selection to active".into(),
        software_id: "blender".into(),
        folder_id: Some(id.clone()),
        category: Some("Other".into()),
    }));
    assert_eq!(store.state().notes.len(), 3);
    assert_eq!(store.state().shortcuts.len(), 6);

    store.dispatch(Action::DeleteFolder(id.clone()));

    let state = store.state();
    assert!(state.find_folder(&id).is_none());
    assert!(state.notes.iter().all(|n| n.folder_id.as_deref() != Some(id.as_str())));
    assert!(
        state
            .shortcuts
            .iter()
            .all(|s| s.folder_id.as_deref() != Some(id.as_str()))
    );
    assert_eq!(state.notes.len(), 2);
    assert_eq!(state.shortcuts.len(), 5);
    assert_eq!(state.active_folder, None);
}

#[test]
fn delete_inactive_folder_keeps_active_folder() {
    let mut store = Store::new(AppState::sample());
    let active = store.state().folders[0].clone();
    let other = store.state().folders[1].id.clone();
    store.dispatch(Action::SetActiveFolder(Some(active.clone())));

    store.dispatch(Action::DeleteFolder(other));

    assert_eq!(store.state().active_folder, Some(active));
}

#[test]
fn update_folder_refreshes_active_folder() {
    let mut store = Store::new(AppState::sample());
    let mut folder = store.state().folders[0].clone();
    store.dispatch(Action::SetActiveFolder(Some(folder.clone())));

    folder.name = "Hard Surface".into();
    store.dispatch(Action::UpdateFolder(folder.clone()));

    assert_eq!(store.state().folders[0].name, "Hard Surface");
    assert_eq!(store.state().active_folder, Some(folder));
}

#[test]
fn update_inactive_folder_leaves_cursor_alone() {
    let mut store = Store::new(AppState::sample());
    let active = store.state().folders[0].clone();
    let mut other = store.state().folders[1].clone();
    store.dispatch(Action::SetActiveFolder(Some(active.clone())));

    other.name = "Renamed".into();
    store.dispatch(Action::UpdateFolder(other));

    assert_eq!(store.state().folders[1].name, "Renamed");
    assert_eq!(store.state().active_folder, Some(active));
}

#[test]
fn add_note_stamps_both_timestamps() {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let state = reduce_at(
        AppState::sample(),
        Action::AddNote(blender_note("T", "C")),
        now,
    );

    let note = state.notes.last().expect("note appended");
    assert_eq!(note.title, "T");
    assert_eq!(note.created_at, now);
    assert_eq!(note.updated_at, now);
    assert_ne!(note.id, "1");
    assert_ne!(note.id, "2");
}

#[test]
fn update_note_keeps_created_at_and_advances_updated_at() {
    let t0 = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let t1 = t0 + Duration::seconds(30);

    let state = reduce_at(
        AppState::default(),
        Action::AddNote(blender_note("T", "C")),
        t0,
    );
    let mut edited = state.notes[0].clone();
    edited.title = "T2".into();
    edited.created_at = t1 + Duration::days(1);

    let state = reduce_at(state, Action::UpdateNote(edited.clone()), t1);
    let note = &state.notes[0];
    assert_eq!(note.title, "T2");
    assert_eq!(note.id, edited.id);
    assert_eq!(note.created_at, t0);
    assert_eq!(note.updated_at, t1);
}

#[test]
fn update_note_refreshes_timestamp_even_without_changes() {
    let t0 = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let t1 = t0 + Duration::minutes(5);

    let state = reduce_at(
        AppState::default(),
        Action::AddNote(blender_note("T", "C")),
        t0,
    );
    let unchanged = state.notes[0].clone();
    let state = reduce_at(state, Action::UpdateNote(unchanged), t1);

    assert_eq!(state.notes[0].updated_at, t1);
}

#[test]
fn updated_at_never_moves_backwards() {
    let t0 = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
    let earlier = t0 - Duration::hours(1);

    let state = reduce_at(
        AppState::default(),
        Action::AddNote(blender_note("T", "C")),
        t0,
    );
    let note = state.notes[0].clone();
    let state = reduce_at(state, Action::UpdateNote(note), earlier);

    assert_eq!(state.notes[0].updated_at, t0);
}

#[test]
fn update_with_unknown_id_is_a_no_op() {
    let state = AppState::sample();
    let mut ghost = state.notes[0].clone();
    ghost.id = "missing".into();
    let mut ghost_shortcut = state.shortcuts[0].clone();
    ghost_shortcut.id = "missing".into();
    let mut ghost_folder = state.folders[0].clone();
    ghost_folder.id = "missing".into();

    let next = reduce(state.clone(), Action::UpdateNote(ghost));
    let next = reduce(next, Action::UpdateShortcut(ghost_shortcut));
    let next = reduce(next, Action::UpdateFolder(ghost_folder));
    let next = reduce(next, Action::DeleteNote("missing".into()));
    let next = reduce(next, Action::DeleteShortcut("missing".into()));

    assert_eq!(next, state);
}

#[test]
fn shortcut_lifecycle() {
    let mut store = Store::new(AppState::sample());
    store.dispatch(Action::AddShortcut(NewShortcut {
        action: "Select All".into(),
        keys: vec!["Ctrl".into(), "A".into()],
        description: "Select everything".into(),
        software_id: "maya".into(),
        folder_id: None,
        category: None,
    }));
    let mut shortcut = store.state().shortcuts.last().cloned().expect("appended");
    assert_eq!(shortcut.keys, vec!["Ctrl", "A"]);

    shortcut.category = Some("Selection".into());
    store.dispatch(Action::UpdateShortcut(shortcut.clone()));
    assert_eq!(store.state().find_shortcut(&shortcut.id), Some(&shortcut));

    store.dispatch(Action::DeleteShortcut(shortcut.id.clone()));
    assert!(store.state().find_shortcut(&shortcut.id).is_none());
    assert_eq!(store.state().shortcuts.len(), 5);
}

#[test]
fn delete_note_does_not_touch_other_collections() {
    let mut store = Store::new(AppState::sample());
    store.dispatch(Action::DeleteNote("1".into()));

    assert_eq!(store.state().notes.len(), 1);
    assert!(store.state().find_note("1").is_none());
    assert_eq!(store.state().notes[0].id, "2");
    // Shortcut "1" shares the id string but lives in another collection.
    assert!(store.state().find_shortcut("1").is_some());
}

#[test]
fn search_query_is_stored_verbatim() {
    let mut store = Store::new(AppState::sample());
    store.dispatch(Action::SetSearchQuery("  Extrude ".into()));
    assert_eq!(store.state().search_query, "  Extrude ");
}

#[test]
fn orphan_references_are_accepted_but_never_visible() {
    let mut store = Store::new(AppState::sample());
    let mut note = blender_note("Ghost", "nowhere");
    note.software_id = "houdini".into();
    store.dispatch(Action::AddNote(note));

    assert_eq!(store.state().notes.len(), 3);
    let scope = ViewScope::from_state(store.state());
    let visible = search::filter_notes(&store.state().notes, &scope);
    assert!(visible.iter().all(|n| n.title != "Ghost"));
}

#[test]
fn renamed_note_is_found_by_new_title_only() {
    let mut store = Store::new(AppState::with_catalog(catalog::software()));
    store.dispatch(Action::AddNote(blender_note("T", "C")));
    let mut note = store.state().notes[0].clone();
    note.title = "T2".into();
    store.dispatch(Action::UpdateNote(note.clone()));

    store.dispatch(Action::SetSearchQuery("t2".into()));
    let scope = ViewScope::from_state(store.state());
    let hits = search::filter_notes(&store.state().notes, &scope);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, note.id);

    // Content "C" and no tags: "x" matches nothing.
    store.dispatch(Action::SetSearchQuery("x".into()));
    let scope = ViewScope::from_state(store.state());
    assert!(search::filter_notes(&store.state().notes, &scope).is_empty());
}

#[test]
fn old_title_no_longer_matches_when_content_differs() {
    let mut store = Store::new(AppState::with_catalog(catalog::software()));
    store.dispatch(Action::AddNote(blender_note("Alpha", "body")));
    let mut note = store.state().notes[0].clone();
    note.title = "Beta".into();
    store.dispatch(Action::UpdateNote(note));

    store.dispatch(Action::SetSearchQuery("alpha".into()));
    let scope = ViewScope::from_state(store.state());
    assert!(search::filter_notes(&store.state().notes, &scope).is_empty());
}
