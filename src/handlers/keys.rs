//! Keyboard Input Handling Module
//!
//! Translates terminal key events into [`App`] calls. Each input mode has its
//! own handler; the normal-mode handler owns the global bindings.

use crate::app::{App, InputMode};
use crate::store::TabView;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Main keyboard event handler and dispatcher. Returns `true` when the
/// application should quit.
pub fn handle_key_events(key: KeyEvent, app: &mut App) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return true;
    }

    if app.has_pending_action() {
        handle_confirmation_keys(key, app);
        return false;
    }

    match app.input_mode {
        InputMode::Form => handle_form_keys(key, app),
        InputMode::Search => handle_search_keys(key, app),
        InputMode::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')
            ) {
                app.input_mode = InputMode::Normal;
            }
            false
        }
        InputMode::Normal => handle_normal_keys(key, app),
    }
}

fn handle_confirmation_keys(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            app.confirm_pending_action();
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            app.cancel_pending_action();
        }
        _ => {}
    }
}

fn handle_normal_keys(key: KeyEvent, app: &mut App) -> bool {
    // Any key dismisses the message line
    app.clear_messages();

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return true,

        KeyCode::Char('?') => app.input_mode = InputMode::Help,

        KeyCode::Char('1') => app.select_tab(TabView::Folders),
        KeyCode::Char('2') => app.select_tab(TabView::Notes),
        KeyCode::Char('3') => app.select_tab(TabView::Shortcuts),
        KeyCode::Char('4') => app.select_tab(TabView::Keyboard),
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.previous_tab(),

        KeyCode::Char(']') => app.next_software(),
        KeyCode::Char('[') => app.previous_software(),

        KeyCode::Down | KeyCode::Char('j') => app.next_item(),
        KeyCode::Up | KeyCode::Char('k') => app.previous_item(),

        KeyCode::Enter => {
            app.open_selected_folder();
        }
        KeyCode::Char('b') | KeyCode::Backspace => app.back_to_folders(),

        KeyCode::Char('c') if app.state().active_tab == TabView::Shortcuts => app.next_category(),
        KeyCode::Char('C') if app.state().active_tab == TabView::Shortcuts => {
            app.previous_category()
        }

        KeyCode::Char('n') => app.open_create_form(),
        KeyCode::Char('e') => {
            if !app.open_edit_form() {
                app.set_error_message("Nothing selected to edit".to_string());
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if !app.request_delete_confirmation() {
                app.set_error_message("Nothing selected to delete".to_string());
            }
        }

        KeyCode::Char('/') => app.start_search(),
        KeyCode::Esc => app.clear_search(),

        _ => {}
    }
    false
}

/// Ctrl and Alt chords are commands, never typed text
fn is_chord(key: &KeyEvent) -> bool {
    key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

fn submit_form(app: &mut App) {
    if let Err(e) = app.submit_form() {
        app.set_error_message(e);
    }
}

fn handle_search_keys(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Esc => {
            app.clear_search();
            app.finish_search();
        }
        KeyCode::Enter | KeyCode::Down | KeyCode::Up | KeyCode::Tab => app.finish_search(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Char(_) if is_chord(&key) => {}
        KeyCode::Char(c) => app.push_search_char(c),
        _ => {}
    }
    false
}

fn handle_form_keys(key: KeyEvent, app: &mut App) -> bool {
    match key.code {
        KeyCode::Esc => app.cancel_form(),
        // Alt+Enter, or Shift+Enter where the terminal reports it
        KeyCode::Enter
            if key
                .modifiers
                .intersects(KeyModifiers::ALT | KeyModifiers::SHIFT) =>
        {
            if !app.form_newline() {
                submit_form(app);
            }
        }
        KeyCode::Enter => submit_form(app),
        // Ctrl+J is a line feed in raw mode
        KeyCode::Char('j') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form_newline();
        }
        KeyCode::Tab | KeyCode::Down => app.form_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.form_previous_field(),
        KeyCode::Left => app.form_cycle_choice(false),
        KeyCode::Right => app.form_cycle_choice(true),
        KeyCode::Backspace => app.form_backspace(),
        KeyCode::Char(_) if is_chord(&key) => {}
        KeyCode::Char(c) => app.form_input(c),
        _ => {}
    }
    false
}
