//! User Interface Module
//!
//! Rendering only; nothing here changes state. [`render`] lays out the
//! sidebar, header, active view and bottom bar, then draws whichever
//! overlay the current input mode calls for.

pub mod colors;
pub mod components;
mod folders;
mod form;
mod keyboard;
mod notes;
mod shortcuts;
mod sidebar;

use crate::app::{App, InputMode};
use crate::store::TabView;
use colors::RosePine;
use ratatui::{
    Frame,
    layout::{Constraint, Layout},
    style::Style,
    widgets::{Block, Widget},
};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    Block::default()
        .style(Style::default().bg(RosePine::BASE))
        .render(area, frame.buffer_mut());

    let rows = Layout::vertical([Constraint::Fill(1), Constraint::Length(3)]).split(area);
    let columns = Layout::horizontal([Constraint::Length(30), Constraint::Fill(1)]).split(rows[0]);
    let main = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .split(columns[1]);

    sidebar::render(frame, columns[0], app);
    components::render_header(frame, main[0], app);

    match app.state().active_tab {
        TabView::Folders => folders::render(frame, main[1], app),
        TabView::Notes => notes::render(frame, main[1], app),
        TabView::Shortcuts => shortcuts::render(frame, main[1], app),
        TabView::Keyboard => keyboard::render(frame, main[1], app),
    }

    if app.input_mode != InputMode::Form {
        components::render_message_line(frame, main[2], app);
    }
    components::render_bottom_bar(frame, rows[1], app);

    match app.input_mode {
        InputMode::Form => form::render(frame, area, app),
        InputMode::Help => components::render_help_overlay(frame, area),
        InputMode::Normal | InputMode::Search => {}
    }
    if app.has_pending_action() {
        components::render_confirmation_dialog(frame, area, app);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AppState;
    use ratatui::{Terminal, backend::TestBackend};

    fn app() -> App {
        App::with_state(AppState::sample())
    }

    fn draw(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 45)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut screen = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                screen.push_str(buffer[(x, y)].symbol());
            }
            screen.push('\n');
        }
        screen
    }

    #[test]
    fn notes_view_lists_sample_notes() {
        let mut app = app();
        let screen = draw(&mut app);

        assert!(screen.contains("Blender Notes"));
        assert!(screen.contains("Getting Started with Blender Interface"));
        assert!(screen.contains("Modeling Workflow Tips"));
        assert!(screen.contains("Press / to search"));
    }

    #[test]
    fn search_narrows_notes_list() {
        let mut app = app();
        app.start_search();
        for c in "workflow".chars() {
            app.push_search_char(c);
        }
        let screen = draw(&mut app);

        assert!(screen.contains("Notes (1 of 2)"));
        assert!(screen.contains("workflow"));
        assert!(!screen.contains("Getting Started with Blender Interface"));
    }

    #[test]
    fn folders_view_shows_created_dates() {
        let mut app = app();
        app.select_tab(TabView::Folders);
        let screen = draw(&mut app);

        assert!(screen.contains("Modeling Basics"));
        assert!(screen.contains("Created Mar 1, 2023"));
        assert!(screen.contains("Shortcuts Practice"));
    }

    #[test]
    fn empty_folder_shows_hint() {
        let mut app = app();
        app.select_tab(TabView::Folders);
        app.open_selected_folder();
        let screen = draw(&mut app);

        assert!(screen.contains("No notes found"));
        assert!(screen.contains("Back to folders"));
    }

    #[test]
    fn shortcuts_view_has_category_tabs() {
        let mut app = app();
        app.select_tab(TabView::Shortcuts);
        let screen = draw(&mut app);

        assert!(screen.contains("All (5)"));
        assert!(screen.contains("Transform (2)"));
        assert!(screen.contains("Extrude"));
    }

    #[test]
    fn keyboard_view_counts_bound_keys() {
        let mut app = app();
        app.select_tab(TabView::Keyboard);
        let screen = draw(&mut app);

        assert!(screen.contains("5 keys bound"));
        assert!(screen.contains("Active shortcuts"));
    }

    #[test]
    fn form_and_confirmation_overlays() {
        let mut app = app();
        app.open_create_form();
        let screen = draw(&mut app);
        assert!(screen.contains("Create Note"));
        assert!(screen.contains("Write your note here..."));

        app.cancel_form();
        app.request_delete_confirmation();
        let screen = draw(&mut app);
        assert!(screen.contains("Are you sure?"));
    }

    #[test]
    fn long_note_content_keeps_its_end_visible() {
        let mut app = app();
        app.open_create_form();
        app.form_next_field();
        for c in "word ".repeat(20).chars() {
            app.form_input(c);
        }
        for c in "ENDMARK".chars() {
            app.form_input(c);
        }
        let screen = draw(&mut app);
        assert!(screen.contains("ENDMARK▏"));

        for _ in 0..8 {
            app.form_newline();
        }
        for c in "LASTLINE".chars() {
            app.form_input(c);
        }
        let screen = draw(&mut app);
        assert!(screen.contains("LASTLINE▏"));
        assert!(screen.contains("Alt+⏎ New line"));
    }

    #[test]
    fn long_title_shows_its_tail() {
        let mut app = app();
        app.open_create_form();
        for c in "x".repeat(90).chars() {
            app.form_input(c);
        }
        for c in "TITLEEND".chars() {
            app.form_input(c);
        }
        let screen = draw(&mut app);
        assert!(screen.contains("…"));
        assert!(screen.contains("TITLEEND▏"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut app = app();
        for tab in TabView::ALL {
            app.select_tab(tab);
            let mut terminal = Terminal::new(TestBackend::new(20, 6)).unwrap();
            terminal.draw(|frame| app.render(frame)).unwrap();
        }
    }
}
