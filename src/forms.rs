//! Form adapters.
//!
//! Forms hold the raw strings a user typed. Submitting one validates the
//! required fields and turns the strings into a create or update
//! [`Action`]; the store never sees a payload that failed validation.

use crate::error::FormError;
use crate::models::shortcut::{CATEGORIES, DEFAULT_CATEGORY};
use crate::models::{Folder, Note, Shortcut};
use crate::store::{Action, AppState, NewFolder, NewNote, NewShortcut};

/// Splits a comma-separated tag list. Segments are trimmed, empty ones
/// dropped; order and duplicates are kept.
pub fn parse_tags(input: &str) -> Vec<String> {
    split_trimmed(input, ',')
}

/// Splits a `+`-joined key chord such as `Ctrl + Shift + Z`. Case is left
/// as typed.
pub fn parse_keys(input: &str) -> Vec<String> {
    split_trimmed(input, '+')
}

fn split_trimmed(input: &str, separator: char) -> Vec<String> {
    input
        .split(separator)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

fn require(value: &str, field: &'static str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Where a newly created entity is filed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormScope {
    pub software_id: String,
    pub folder_id: Option<String>,
}

impl FormScope {
    pub fn from_state(state: &AppState) -> Self {
        Self {
            software_id: state.active_software.id.clone(),
            folder_id: state.active_folder_id().map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FolderForm {
    pub existing: Option<Folder>,
    pub name: String,
}

impl FolderForm {
    pub fn edit(folder: &Folder) -> Self {
        Self {
            existing: Some(folder.clone()),
            name: folder.name.clone(),
        }
    }

    pub fn submit(&self, scope: &FormScope) -> Result<Action, FormError> {
        require(&self.name, "Folder name")?;

        Ok(match &self.existing {
            Some(folder) => Action::UpdateFolder(Folder {
                name: self.name.clone(),
                ..folder.clone()
            }),
            None => Action::AddFolder(NewFolder {
                name: self.name.clone(),
                software_id: scope.software_id.clone(),
            }),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoteForm {
    pub existing: Option<Note>,
    pub title: String,
    pub content: String,
    pub tags: String,
}

impl NoteForm {
    pub fn edit(note: &Note) -> Self {
        Self {
            existing: Some(note.clone()),
            title: note.title.clone(),
            content: note.content.clone(),
            tags: note.tags_display(),
        }
    }

    pub fn submit(&self, scope: &FormScope) -> Result<Action, FormError> {
        require(&self.title, "Title")?;
        require(&self.content, "Content")?;
        let tags = parse_tags(&self.tags);

        Ok(match &self.existing {
            Some(note) => Action::UpdateNote(Note {
                title: self.title.clone(),
                content: self.content.clone(),
                tags,
                ..note.clone()
            }),
            None => Action::AddNote(NewNote {
                title: self.title.clone(),
                content: self.content.clone(),
                software_id: scope.software_id.clone(),
                folder_id: scope.folder_id.clone(),
                tags,
            }),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShortcutForm {
    pub existing: Option<Shortcut>,
    pub action: String,
    pub keys: String,
    pub description: String,
    pub category: String,
}

impl Default for ShortcutForm {
    fn default() -> Self {
        Self {
            existing: None,
            action: String::new(),
            keys: String::new(),
            description: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
        }
    }
}

impl ShortcutForm {
    pub fn edit(shortcut: &Shortcut) -> Self {
        Self {
            existing: Some(shortcut.clone()),
            action: shortcut.action.clone(),
            keys: shortcut.keys_display(),
            description: shortcut.description.clone(),
            category: shortcut
                .category
                .clone()
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        }
    }

    /// Steps through [`CATEGORIES`]; an unknown category restarts the cycle
    pub fn cycle_category(&mut self, forward: bool) {
        let len = CATEGORIES.len();
        let next = match CATEGORIES.iter().position(|c| *c == self.category) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        self.category = CATEGORIES[next].to_string();
    }

    pub fn submit(&self, scope: &FormScope) -> Result<Action, FormError> {
        require(&self.action, "Action")?;
        require(&self.keys, "Keys")?;
        require(&self.description, "Description")?;
        let keys = parse_keys(&self.keys);
        if keys.is_empty() {
            return Err(FormError::NoKeys);
        }

        Ok(match &self.existing {
            Some(shortcut) => Action::UpdateShortcut(Shortcut {
                action: self.action.clone(),
                keys,
                description: self.description.clone(),
                category: Some(self.category.clone()),
                ..shortcut.clone()
            }),
            None => Action::AddShortcut(NewShortcut {
                action: self.action.clone(),
                keys,
                description: self.description.clone(),
                software_id: scope.software_id.clone(),
                folder_id: scope.folder_id.clone(),
                category: Some(self.category.clone()),
            }),
        })
    }
}

/// How a form field is edited in the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Wrapped text that accepts newlines
    Multiline,
    Choice,
}

/// Read-only view of one field for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView<'a> {
    pub label: &'static str,
    pub value: &'a str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
}

fn text<'a>(label: &'static str, value: &'a str, placeholder: &'static str) -> FieldView<'a> {
    FieldView {
        label,
        value,
        placeholder,
        kind: FieldKind::Text,
    }
}

/// Any of the three forms, as held by an open dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum Form {
    Folder(FolderForm),
    Note(NoteForm),
    Shortcut(ShortcutForm),
}

impl Form {
    pub fn is_edit(&self) -> bool {
        match self {
            Form::Folder(f) => f.existing.is_some(),
            Form::Note(f) => f.existing.is_some(),
            Form::Shortcut(f) => f.existing.is_some(),
        }
    }

    pub fn title(&self) -> String {
        let verb = if self.is_edit() { "Update" } else { "Create" };
        let noun = match self {
            Form::Folder(_) => "Folder",
            Form::Note(_) => "Note",
            Form::Shortcut(_) => "Shortcut",
        };
        format!("{} {}", verb, noun)
    }

    pub fn fields(&self) -> Vec<FieldView<'_>> {
        match self {
            Form::Folder(f) => vec![text("Folder Name", &f.name, "Enter folder name")],
            Form::Note(f) => vec![
                text("Title", &f.title, "Note title"),
                FieldView {
                    kind: FieldKind::Multiline,
                    ..text("Content", &f.content, "Write your note here...")
                },
                text(
                    "Tags (comma-separated)",
                    &f.tags,
                    "beginner, interface, modeling",
                ),
            ],
            Form::Shortcut(f) => vec![
                text("Action", &f.action, "e.g., Select All"),
                text("Keys (separate with +)", &f.keys, "e.g., Ctrl + A"),
                text(
                    "Description",
                    &f.description,
                    "Describe what this shortcut does...",
                ),
                FieldView {
                    label: "Category",
                    value: f.category.as_str(),
                    placeholder: "Select a category",
                    kind: FieldKind::Choice,
                },
            ],
        }
    }

    pub fn field_count(&self) -> usize {
        match self {
            Form::Folder(_) => 1,
            Form::Note(_) => 3,
            Form::Shortcut(_) => 4,
        }
    }

    /// Editable text behind a field; `None` for choice fields
    pub fn text_mut(&mut self, index: usize) -> Option<&mut String> {
        match (self, index) {
            (Form::Folder(f), 0) => Some(&mut f.name),
            (Form::Note(f), 0) => Some(&mut f.title),
            (Form::Note(f), 1) => Some(&mut f.content),
            (Form::Note(f), 2) => Some(&mut f.tags),
            (Form::Shortcut(f), 0) => Some(&mut f.action),
            (Form::Shortcut(f), 1) => Some(&mut f.keys),
            (Form::Shortcut(f), 2) => Some(&mut f.description),
            _ => None,
        }
    }

    pub fn is_multiline(&self, index: usize) -> bool {
        matches!((self, index), (Form::Note(_), 1))
    }

    pub fn cycle_choice(&mut self, index: usize, forward: bool) {
        if let (Form::Shortcut(f), 3) = (self, index) {
            f.cycle_category(forward);
        }
    }

    pub fn submit(&self, scope: &FormScope) -> Result<Action, FormError> {
        match self {
            Form::Folder(f) => f.submit(scope),
            Form::Note(f) => f.submit(scope),
            Form::Shortcut(f) => f.submit(scope),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::catalog;

    fn blender_scope(folder: Option<&str>) -> FormScope {
        FormScope {
            software_id: "blender".into(),
            folder_id: folder.map(str::to_string),
        }
    }

    #[test]
    fn key_chord_parsing() {
        assert_eq!(parse_keys("Ctrl + A"), vec!["Ctrl", "A"]);
        assert_eq!(parse_keys("ctrl+shift+z"), vec!["ctrl", "shift", "z"]);
        assert_eq!(parse_keys(" + G + "), vec!["G"]);
        assert_eq!(parse_keys("A + A"), vec!["A", "A"]);
        assert!(parse_keys("  ").is_empty());
    }

    #[test]
    fn tag_parsing() {
        assert_eq!(
            parse_tags("beginner, interface ,modeling"),
            vec!["beginner", "interface", "modeling"]
        );
        assert_eq!(parse_tags("a,,b, ,a"), vec!["a", "b", "a"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn new_note_is_scoped_to_active_software_and_folder() {
        let form = NoteForm {
            title: "Loop cuts".into(),
            content: "Ctrl+R adds an edge loop".into(),
            tags: "modeling, edges".into(),
            ..NoteForm::default()
        };

        let action = form.submit(&blender_scope(Some("folder-1"))).unwrap();
        assert_eq!(
            action,
            Action::AddNote(NewNote {
                title: "Loop cuts".into(),
                content: "Ctrl+R adds an edge loop".into(),
                software_id: "blender".into(),
                folder_id: Some("folder-1".into()),
                tags: vec!["modeling".into(), "edges".into()],
            })
        );
    }

    #[test]
    fn editing_a_note_keeps_identity_and_home() {
        let note = catalog::notes().remove(0);
        let mut form = NoteForm::edit(&note);
        assert_eq!(form.tags, "beginner, interface");

        form.title = "Interface Tour".into();
        form.tags = "interface".into();
        let action = form.submit(&blender_scope(Some("elsewhere"))).unwrap();

        match action {
            Action::UpdateNote(updated) => {
                assert_eq!(updated.id, note.id);
                assert_eq!(updated.title, "Interface Tour");
                assert_eq!(updated.tags, vec!["interface"]);
                assert_eq!(updated.folder_id, note.folder_id);
                assert_eq!(updated.created_at, note.created_at);
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn required_fields_are_enforced() {
        let scope = blender_scope(None);

        let note = NoteForm {
            title: "   ".into(),
            content: "body".into(),
            ..NoteForm::default()
        };
        assert_eq!(note.submit(&scope), Err(FormError::MissingField("Title")));

        let folder = FolderForm::default();
        assert_eq!(
            folder.submit(&scope),
            Err(FormError::MissingField("Folder name"))
        );

        let shortcut = ShortcutForm {
            action: "Undo".into(),
            keys: "+".into(),
            description: "Step back".into(),
            ..ShortcutForm::default()
        };
        assert_eq!(shortcut.submit(&scope), Err(FormError::NoKeys));
    }

    #[test]
    fn shortcut_form_defaults_and_round_trips_keys() {
        let form = ShortcutForm {
            action: "Select All".into(),
            keys: "Ctrl + A".into(),
            description: "Select everything".into(),
            ..ShortcutForm::default()
        };

        match form.submit(&blender_scope(None)).unwrap() {
            Action::AddShortcut(new) => {
                assert_eq!(new.keys, vec!["Ctrl", "A"]);
                assert_eq!(new.category.as_deref(), Some("Other"));
                assert_eq!(new.folder_id, None);
            }
            other => panic!("unexpected action {:?}", other),
        }

        let existing = catalog::shortcuts().remove(0);
        let edit = ShortcutForm::edit(&existing);
        assert_eq!(edit.keys, "A");
        assert_eq!(edit.category, "Selection");
    }

    #[test]
    fn category_cycles_through_fixed_list() {
        let mut form = ShortcutForm::default();
        form.cycle_category(true);
        assert_eq!(form.category, "Selection");
        form.cycle_category(false);
        assert_eq!(form.category, "Other");
        form.cycle_category(false);
        assert_eq!(form.category, "Animation");

        form.category = "Custom".into();
        form.cycle_category(true);
        assert_eq!(form.category, "Selection");
    }

    #[test]
    fn form_fields_are_editable_by_index() {
        let mut form = Form::Shortcut(ShortcutForm::default());
        assert_eq!(form.field_count(), form.fields().len());
        assert_eq!(form.title(), "Create Shortcut");

        if let Some(text) = form.text_mut(1) {
            text.push_str("Ctrl + Z");
        }
        assert!(form.text_mut(3).is_none());
        form.cycle_choice(3, true);

        let fields = form.fields();
        assert_eq!(fields[1].value, "Ctrl + Z");
        assert_eq!(fields[3].value, "Selection");
        assert_eq!(fields[3].kind, FieldKind::Choice);
    }

    #[test]
    fn only_note_content_is_multiline() {
        let form = Form::Note(NoteForm::default());
        assert_eq!(form.fields()[1].kind, FieldKind::Multiline);
        assert!(form.is_multiline(1));
        assert!(!form.is_multiline(0));
        assert!(!Form::Shortcut(ShortcutForm::default()).is_multiline(1));
    }

    #[test]
    fn folder_form_update_keeps_software() {
        let folder = catalog::folders().remove(1);
        let mut form = Form::Folder(FolderForm::edit(&folder));
        assert_eq!(form.title(), "Update Folder");
        if let Some(name) = form.text_mut(0) {
            *name = "Hotkeys".into();
        }

        let action = form.submit(&blender_scope(None)).unwrap();
        assert_eq!(
            action,
            Action::UpdateFolder(Folder {
                name: "Hotkeys".into(),
                ..folder
            })
        );
    }
}
