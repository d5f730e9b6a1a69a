use crate::config::Settings;
use crate::forms::{FolderForm, Form, FormScope, NoteForm, ShortcutForm};
use crate::models::{Folder, Note, Shortcut, Software};
use crate::search::{self, CategoryBucket};
use crate::store::{Action, AppState, Store, TabView};
use crate::ui;
use ratatui::Frame;
use tracing::{debug, warn};

/// What the keyboard is currently driving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Search,
    Form,
    Help,
}

/// An entity picked out of one of the lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemRef {
    Folder(String),
    Note(String),
    Shortcut(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmationState {
    None,
    DeleteItem { target: ItemRef, message: String },
}

/// An open create/edit dialog and the field that has focus.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub form: Form,
    pub focus: usize,
}

/// Main Application State Container
///
/// Owns the store plus everything that only matters to the terminal UI:
/// list cursors, the open dialog, pending confirmations and the message line.
#[derive(Debug)]
pub struct App {
    pub store: Store,
    pub selected_item: usize,
    pub selected_category: usize,
    pub input_mode: InputMode,
    pub form: Option<FormState>,
    pub confirmation_state: ConfirmationState,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        Self::with_state(settings.initial_state())
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            store: Store::new(state),
            selected_item: 0,
            selected_category: 0,
            input_mode: InputMode::Normal,
            form: None,
            confirmation_state: ConfirmationState::None,
            error_message: None,
            success_message: None,
            needs_redraw: true,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    /// Sends an action to the store. References to software or folders the
    /// store does not know are accepted but logged.
    pub fn dispatch(&mut self, action: Action) {
        if let Some(id) = action.software_ref() {
            if self.state().find_software(id).is_none() {
                warn!(action = action.name(), software = id, "unknown software id");
            }
        }
        if let Some(id) = action.folder_ref() {
            if self.state().find_folder(id).is_none() {
                warn!(action = action.name(), folder = id, "unknown folder id");
            }
        }

        self.store.dispatch(action);
        self.clamp_selection();
    }

    fn reset_selection(&mut self) {
        self.selected_item = 0;
        self.selected_category = 0;
    }

    fn clamp_selection(&mut self) {
        let buckets = self.category_count();
        if self.selected_category >= buckets {
            self.selected_category = buckets.saturating_sub(1);
        }
        let count = self.item_count();
        if self.selected_item >= count {
            self.selected_item = count.saturating_sub(1);
        }
    }

    // Tabs and software

    pub fn select_tab(&mut self, tab: TabView) {
        if self.state().active_tab != tab {
            self.dispatch(Action::SetActiveTab(tab));
            self.reset_selection();
        }
    }

    pub fn next_tab(&mut self) {
        let tab = self.state().active_tab.next();
        self.select_tab(tab);
    }

    pub fn previous_tab(&mut self) {
        let tab = self.state().active_tab.previous();
        self.select_tab(tab);
    }

    fn software_step(&self, forward: bool) -> Option<Software> {
        let catalog = &self.state().software;
        if catalog.is_empty() {
            return None;
        }
        let current = catalog
            .iter()
            .position(|s| s.id == self.state().active_software.id)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % catalog.len()
        } else {
            (current + catalog.len() - 1) % catalog.len()
        };
        catalog.get(next).cloned()
    }

    pub fn next_software(&mut self) {
        if let Some(software) = self.software_step(true) {
            self.select_software(software);
        }
    }

    pub fn previous_software(&mut self) {
        if let Some(software) = self.software_step(false) {
            self.select_software(software);
        }
    }

    fn select_software(&mut self, software: Software) {
        debug!(software = %software.id, "switching software");
        self.dispatch(Action::SetActiveSoftware(software));
        self.reset_selection();
    }

    // Folders

    /// Makes the highlighted folder active and shows its notes
    pub fn open_selected_folder(&mut self) -> bool {
        if self.state().active_tab != TabView::Folders {
            return false;
        }
        let Some(folder) = self.selected_folder().cloned() else {
            return false;
        };
        self.dispatch(Action::SetActiveFolder(Some(folder)));
        self.dispatch(Action::SetActiveTab(TabView::Notes));
        self.reset_selection();
        true
    }

    pub fn back_to_folders(&mut self) {
        self.dispatch(Action::SetActiveFolder(None));
        self.dispatch(Action::SetActiveTab(TabView::Folders));
        self.reset_selection();
    }

    // Lists

    pub fn visible_folders(&self) -> Vec<&Folder> {
        search::visible_folders(self.state())
    }

    pub fn visible_notes(&self) -> Vec<&Note> {
        search::visible_notes(self.state())
    }

    pub fn category_buckets(&self) -> Vec<CategoryBucket<'_>> {
        let filtered = search::visible_shortcuts(self.state());
        search::category_buckets(&filtered)
    }

    fn category_count(&self) -> usize {
        self.category_buckets().len()
    }

    /// Shortcuts in the highlighted category bucket
    pub fn current_shortcuts(&self) -> Vec<&Shortcut> {
        let mut buckets = self.category_buckets();
        let index = self.selected_category.min(buckets.len().saturating_sub(1));
        if index < buckets.len() {
            buckets.swap_remove(index).shortcuts
        } else {
            Vec::new()
        }
    }

    pub fn item_count(&self) -> usize {
        match self.state().active_tab {
            TabView::Folders => self.visible_folders().len(),
            TabView::Notes => self.visible_notes().len(),
            TabView::Shortcuts => self.current_shortcuts().len(),
            TabView::Keyboard => search::visible_shortcuts(self.state()).len(),
        }
    }

    pub fn next_item(&mut self) {
        let count = self.item_count();
        if count > 0 {
            self.selected_item = (self.selected_item + 1) % count;
        }
    }

    pub fn previous_item(&mut self) {
        let count = self.item_count();
        if count > 0 {
            self.selected_item = (self.selected_item + count - 1) % count;
        }
    }

    pub fn next_category(&mut self) {
        let count = self.category_count();
        if count > 0 {
            self.selected_category = (self.selected_category + 1) % count;
            self.selected_item = 0;
        }
    }

    pub fn previous_category(&mut self) {
        let count = self.category_count();
        if count > 0 {
            self.selected_category = (self.selected_category + count - 1) % count;
            self.selected_item = 0;
        }
    }

    pub fn selected_folder(&self) -> Option<&Folder> {
        self.visible_folders().get(self.selected_item).copied()
    }

    pub fn selected_note(&self) -> Option<&Note> {
        self.visible_notes().get(self.selected_item).copied()
    }

    pub fn selected_shortcut(&self) -> Option<&Shortcut> {
        match self.state().active_tab {
            TabView::Keyboard => search::visible_shortcuts(self.state())
                .get(self.selected_item)
                .copied(),
            _ => self.current_shortcuts().get(self.selected_item).copied(),
        }
    }

    // Search

    pub fn start_search(&mut self) {
        self.clear_messages();
        self.input_mode = InputMode::Search;
    }

    fn set_search_query(&mut self, query: String) {
        self.dispatch(Action::SetSearchQuery(query));
        self.reset_selection();
    }

    pub fn push_search_char(&mut self, c: char) {
        let mut query = self.state().search_query.clone();
        query.push(c);
        self.set_search_query(query);
    }

    pub fn pop_search_char(&mut self) {
        let mut query = self.state().search_query.clone();
        if query.pop().is_some() {
            self.set_search_query(query);
        }
    }

    pub fn clear_search(&mut self) {
        if !self.state().search_query.is_empty() {
            self.set_search_query(String::new());
        }
    }

    pub fn finish_search(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    // Forms

    pub fn open_create_form(&mut self) {
        let form = match self.state().active_tab {
            TabView::Folders => Form::Folder(FolderForm::default()),
            TabView::Notes => Form::Note(NoteForm::default()),
            TabView::Shortcuts | TabView::Keyboard => Form::Shortcut(ShortcutForm::default()),
        };
        self.open_form(form);
    }

    pub fn open_edit_form(&mut self) -> bool {
        let form = match self.state().active_tab {
            TabView::Folders => self.selected_folder().map(|f| Form::Folder(FolderForm::edit(f))),
            TabView::Notes => self.selected_note().map(|n| Form::Note(NoteForm::edit(n))),
            TabView::Shortcuts | TabView::Keyboard => self
                .selected_shortcut()
                .map(|s| Form::Shortcut(ShortcutForm::edit(s))),
        };
        match form {
            Some(form) => {
                self.open_form(form);
                true
            }
            None => false,
        }
    }

    fn open_form(&mut self, form: Form) {
        self.clear_messages();
        self.form = Some(FormState { form, focus: 0 });
        self.input_mode = InputMode::Form;
    }

    pub fn form_input(&mut self, c: char) {
        if let Some(state) = self.form.as_mut() {
            if let Some(value) = state.form.text_mut(state.focus) {
                value.push(c);
            }
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(state) = self.form.as_mut() {
            if let Some(value) = state.form.text_mut(state.focus) {
                value.pop();
            }
        }
    }

    /// Inserts a line break when the focused field is multi-line
    pub fn form_newline(&mut self) -> bool {
        let Some(state) = self.form.as_mut() else {
            return false;
        };
        if !state.form.is_multiline(state.focus) {
            return false;
        }
        match state.form.text_mut(state.focus) {
            Some(value) => {
                value.push('\n');
                true
            }
            None => false,
        }
    }

    pub fn form_next_field(&mut self) {
        if let Some(state) = self.form.as_mut() {
            state.focus = (state.focus + 1) % state.form.field_count();
        }
    }

    pub fn form_previous_field(&mut self) {
        if let Some(state) = self.form.as_mut() {
            let count = state.form.field_count();
            state.focus = (state.focus + count - 1) % count;
        }
    }

    pub fn form_cycle_choice(&mut self, forward: bool) {
        if let Some(state) = self.form.as_mut() {
            state.form.cycle_choice(state.focus, forward);
        }
    }

    /// Validates the open form and dispatches its action. On a validation
    /// error the dialog stays open.
    pub fn submit_form(&mut self) -> Result<(), String> {
        let Some(state) = self.form.as_ref() else {
            return Err("No form is open".to_string());
        };

        let scope = FormScope::from_state(self.state());
        let action = state.form.submit(&scope).map_err(|e| e.to_string())?;
        let title = state.form.title();

        self.dispatch(action);
        self.cancel_form();
        self.set_success_message(format!("{} succeeded", title));
        Ok(())
    }

    pub fn cancel_form(&mut self) {
        self.form = None;
        self.input_mode = InputMode::Normal;
    }

    // Deletion

    pub fn request_delete_confirmation(&mut self) -> bool {
        let pending = match self.state().active_tab {
            TabView::Folders => self.selected_folder().map(|f| {
                (
                    ItemRef::Folder(f.id.clone()),
                    format!(
                        "This will permanently delete the folder \"{}\" and all its contents.",
                        f.name
                    ),
                )
            }),
            TabView::Notes => self.selected_note().map(|n| {
                (
                    ItemRef::Note(n.id.clone()),
                    format!("This will permanently delete the note \"{}\".", n.title),
                )
            }),
            TabView::Shortcuts | TabView::Keyboard => self.selected_shortcut().map(|s| {
                (
                    ItemRef::Shortcut(s.id.clone()),
                    format!("This will permanently delete the shortcut \"{}\".", s.action),
                )
            }),
        };

        match pending {
            Some((target, message)) => {
                self.clear_messages();
                self.confirmation_state = ConfirmationState::DeleteItem { target, message };
                true
            }
            None => false,
        }
    }

    /// Confirms the pending action and executes it
    pub fn confirm_pending_action(&mut self) -> bool {
        let current_state =
            std::mem::replace(&mut self.confirmation_state, ConfirmationState::None);

        match current_state {
            ConfirmationState::DeleteItem { target, .. } => {
                let state = self.state();
                let (action, message) = match target {
                    ItemRef::Folder(id) => {
                        let name = state.find_folder(&id).map(|f| f.name.clone());
                        (
                            Action::DeleteFolder(id),
                            format!("Folder \"{}\" deleted", name.unwrap_or_default()),
                        )
                    }
                    ItemRef::Note(id) => {
                        let name = state.find_note(&id).map(|n| n.title.clone());
                        (
                            Action::DeleteNote(id),
                            format!("Note \"{}\" deleted", name.unwrap_or_default()),
                        )
                    }
                    ItemRef::Shortcut(id) => {
                        let name = state.find_shortcut(&id).map(|s| s.action.clone());
                        (
                            Action::DeleteShortcut(id),
                            format!("Shortcut \"{}\" deleted", name.unwrap_or_default()),
                        )
                    }
                };
                self.dispatch(action);
                self.set_success_message(message);
                true
            }
            ConfirmationState::None => false,
        }
    }

    pub fn cancel_pending_action(&mut self) {
        self.confirmation_state = ConfirmationState::None;
        self.clear_messages();
    }

    pub fn has_pending_action(&self) -> bool {
        !matches!(self.confirmation_state, ConfirmationState::None)
    }

    // Labels

    /// `"<software> <tab>"` as shown in the header
    pub fn header_title(&self) -> String {
        format!(
            "{} {}",
            self.state().active_software.name,
            self.state().active_tab.label()
        )
    }

    /// Tab label, qualified by the active folder for folder-scoped views
    pub fn tab_label(&self, tab: TabView) -> String {
        match (tab, self.state().active_folder.as_ref()) {
            (TabView::Notes | TabView::Shortcuts, Some(folder)) => {
                format!("{} ({})", tab.label(), folder.name)
            }
            _ => tab.label().to_string(),
        }
    }

    /// Headline and hint for a tab with nothing to show
    pub fn empty_message(&self, tab: TabView) -> (String, String) {
        let (plural, singular) = match tab {
            TabView::Folders => ("folders", "folder"),
            TabView::Notes => ("notes", "note"),
            TabView::Shortcuts | TabView::Keyboard => ("shortcuts", "shortcut"),
        };
        let headline = format!("No {} found", plural);

        let hint = if !self.state().search_query.is_empty() {
            "Try adjusting your search query".to_string()
        } else {
            match (tab, self.state().active_folder.as_ref()) {
                (TabView::Folders, _) | (_, None) => {
                    format!("Create your first {} by pressing 'n'", singular)
                }
                (_, Some(folder)) => format!(
                    "Add {} to the \"{}\" folder by pressing 'n'",
                    plural, folder.name
                ),
            }
        };

        (headline, hint)
    }

    // Messages

    pub fn set_error_message(&mut self, message: String) {
        self.error_message = Some(message);
        self.success_message = None;
    }

    pub fn set_success_message(&mut self, message: String) {
        self.success_message = Some(message);
        self.error_message = None;
    }

    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.success_message = None;
    }

    pub fn render(&mut self, frame: &mut Frame) {
        ui::render(frame, self);
    }
}
