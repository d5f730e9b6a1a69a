//! UI Components and Layout Module
//!
//! Reusable pieces shared by every view.
//!
//! # Components
//!
//! - **Bottom Navigation Bar**: breadcrumbs and context keyboard hints
//! - **Header**: view title and the search field
//! - **Message Line**: last error or success message
//! - **Dialogs**: delete confirmation and the help overlay

use crate::app::{App, ConfirmationState, InputMode};
use crate::store::TabView;
use crate::ui::colors::RosePine;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cuts `text` to at most `max_width` terminal columns, ending in `…` when
/// anything was dropped
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Keeps the end of `text` that fits in `max_width`, marking the cut with `…`
pub fn truncate_start(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut kept = Vec::new();
    let mut used = 0;
    for c in text.chars().rev() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        kept.push(c);
        used += w;
    }
    std::iter::once('…').chain(kept.into_iter().rev()).collect()
}

/// Hard-wraps `text` into rows of at most `width` columns. Newlines always
/// start a new row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let mut row = String::new();
        let mut used = 0;
        for c in line.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                used = 0;
            }
            row.push(c);
            used += w;
        }
        rows.push(row);
    }
    rows
}

/// A `width` x `height` rectangle centered in `area`, clipped to it
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Renders the bottom navigation bar with breadcrumbs and keyboard shortcuts
pub fn render_bottom_bar(frame: &mut Frame, area: Rect, app: &App) {
    let navbar_chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).split(area);

    let left_content = Paragraph::new(get_breadcrumbs_with_symbols(app))
        .alignment(Alignment::Left)
        .style(Style::default().fg(RosePine::SUBTLE))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        );

    let right_content = Paragraph::new(get_context_shortcuts(app))
        .alignment(Alignment::Right)
        .style(Style::default().fg(RosePine::MUTED))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        );

    left_content.render(navbar_chunks[0], frame.buffer_mut());
    right_content.render(navbar_chunks[1], frame.buffer_mut());
}

fn get_context_shortcuts(app: &App) -> String {
    if app.has_pending_action() {
        return " [y] Delete │ [n] Cancel ".to_string();
    }

    match (app.input_mode, app.state().active_tab) {
        (InputMode::Form, _) => " [⇥] Next Field │ [⏎] Save │ [Esc] Cancel ".to_string(),
        (InputMode::Search, _) => " [⏎] Done │ [Esc] Clear ".to_string(),
        (InputMode::Help, _) => " [?] Close ".to_string(),
        (InputMode::Normal, TabView::Folders) => {
            " [⏎] Open │ [n] New │ [e] Edit │ [d] Delete │ [/] Search │ [?] Help ".to_string()
        }
        (InputMode::Normal, TabView::Shortcuts) => {
            " [c] Category │ [n] New │ [e] Edit │ [d] Delete │ [/] Search │ [?] Help ".to_string()
        }
        (InputMode::Normal, _) => {
            let back_hint = if app.state().active_folder.is_some() {
                " [b] Folders │"
            } else {
                ""
            };
            format!(
                "{} [n] New │ [e] Edit │ [d] Delete │ [/] Search │ [?] Help ",
                back_hint
            )
        }
    }
}

/// Breadcrumb trail: software, tab and, when one is open, the folder
fn get_breadcrumbs_with_symbols(app: &App) -> Line<'static> {
    let state = app.state();
    let mut spans = vec![Span::styled(
        format!(" {} ", state.active_software.label()),
        Style::default().fg(RosePine::SUBTLE),
    )];

    spans.push(Span::styled(" ❯ ", Style::default().fg(RosePine::MUTED)));

    let tab = format!(" {} {} ", state.active_tab.icon(), state.active_tab.label());
    match &state.active_folder {
        Some(folder) => {
            spans.push(Span::styled(tab, Style::default().fg(RosePine::SUBTLE)));
            spans.push(Span::styled(" ❯ ", Style::default().fg(RosePine::MUTED)));
            spans.push(Span::styled(
                format!(" 󰉋 {} ", folder.name),
                Style::default().fg(RosePine::BASE).bg(RosePine::LOVE),
            ));
        }
        None => spans.push(Span::styled(
            tab,
            Style::default().fg(RosePine::BASE).bg(RosePine::IRIS),
        )),
    }

    Line::from(spans)
}

/// Title on the left, search field on the right
pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::horizontal([Constraint::Fill(1), Constraint::Percentage(40)]).split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {} ", app.state().active_software.icon),
            Style::default().fg(RosePine::GOLD),
        ),
        Span::styled(app.header_title(), Style::default().fg(RosePine::TEXT).bold()),
    ]))
    .block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
    );
    title.render(chunks[0], frame.buffer_mut());

    let searching = app.input_mode == InputMode::Search;
    let query = &app.state().search_query;
    let line = if query.is_empty() && !searching {
        Line::from(Span::styled(
            "Press / to search",
            Style::default().fg(RosePine::MUTED),
        ))
    } else {
        let mut spans = vec![Span::styled(
            query.clone(),
            Style::default().fg(RosePine::TEXT),
        )];
        if searching {
            spans.push(Span::styled("▏", Style::default().fg(RosePine::IRIS)));
        }
        Line::from(spans)
    };

    let search = Paragraph::new(line).block(
        Block::bordered()
            .title("  Search ")
            .border_type(BorderType::Rounded)
            .style(crate::ui::colors::border(searching)),
    );
    search.render(chunks[1], frame.buffer_mut());
}

pub fn render_message_line(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(message) = &app.error_message {
        Line::from(vec![
            Span::styled(" ✗ ", Style::default().fg(RosePine::LOVE).bold()),
            Span::styled(message.clone(), Style::default().fg(RosePine::TEXT)),
        ])
    } else if let Some(message) = &app.success_message {
        Line::from(vec![
            Span::styled(" ✓ ", Style::default().fg(RosePine::FOAM).bold()),
            Span::styled(message.clone(), Style::default().fg(RosePine::TEXT)),
        ])
    } else {
        Line::default()
    };
    Paragraph::new(line).render(area, frame.buffer_mut());
}

/// Centered headline and hint for an empty view
pub fn render_empty_state(frame: &mut Frame, area: Rect, app: &App, tab: TabView) {
    let (headline, hint) = app.empty_message(tab);

    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(3),
        Constraint::Fill(1),
    ])
    .split(area);

    let text = vec![
        Line::from(Span::styled(
            headline,
            Style::default().fg(RosePine::TEXT).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(RosePine::MUTED))),
    ];

    Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(chunks[1], frame.buffer_mut());
}

pub fn render_confirmation_dialog(frame: &mut Frame, area: Rect, app: &App) {
    let ConfirmationState::DeleteItem { message, .. } = &app.confirmation_state else {
        return;
    };

    let popup_area = centered_rect(60, 8, area);
    Clear.render(popup_area, frame.buffer_mut());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            message.clone(),
            Style::default().fg(RosePine::TEXT),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[y] ", Style::default().fg(RosePine::LOVE).bold()),
            Span::styled("Delete   ", Style::default().fg(RosePine::SUBTLE)),
            Span::styled("[n] ", Style::default().fg(RosePine::FOAM).bold()),
            Span::styled("Cancel", Style::default().fg(RosePine::SUBTLE)),
        ]),
    ];

    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::bordered()
                .title(" Are you sure? ")
                .title_alignment(Alignment::Center)
                .border_type(BorderType::Double)
                .style(Style::default().fg(RosePine::LOVE)),
        )
        .style(Style::default().bg(RosePine::SURFACE));

    dialog.render(popup_area, frame.buffer_mut());
}

fn help_line(key: &'static str, label: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:<7}", key), Style::default().fg(RosePine::GOLD)),
        Span::styled(label, Style::default().fg(RosePine::TEXT)),
    ])
}

fn help_heading(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        title,
        Style::default().fg(RosePine::LOVE).bold(),
    ))
}

/// Renders a help menu overlay showing all available keyboard shortcuts
pub fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(70, 22, area);
    Clear.render(popup_area, frame.buffer_mut());

    let block = Block::bordered()
        .title(" 󰘳 Keyboard Shortcuts ")
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::IRIS).bg(RosePine::SURFACE));

    let inner_area = block.inner(popup_area);
    block.render(popup_area, frame.buffer_mut());

    let columns = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner_area);

    let left_column = vec![
        help_heading("Navigation"),
        Line::from(""),
        help_line("1-4", "Folders, notes, shortcuts, keyboard"),
        help_line("⇥", "Next view"),
        help_line("[ ]", "Previous / next software"),
        help_line("↑/k", "Move up"),
        help_line("↓/j", "Move down"),
        help_line("⏎", "Open folder"),
        help_line("b", "Back to folders"),
        help_line("c / C", "Next / previous category"),
        Line::from(""),
        help_heading("General"),
        Line::from(""),
        help_line("?", "Toggle this help"),
        help_line("q", "Quit"),
    ];

    let right_column = vec![
        help_heading("Items"),
        Line::from(""),
        help_line("n", "New item in this view"),
        help_line("e", "Edit selected"),
        help_line("d", "Delete selected"),
        Line::from(""),
        help_heading("Search"),
        Line::from(""),
        help_line("/", "Start searching"),
        help_line("Esc", "Clear search"),
        Line::from(""),
        help_heading("Dialogs"),
        Line::from(""),
        help_line("⇥", "Next field"),
        help_line("← →", "Change category"),
        help_line("⏎", "Save"),
        help_line("Alt+⏎", "New line (also Ctrl+J)"),
    ];

    Paragraph::new(left_column).render(columns[0], frame.buffer_mut());
    Paragraph::new(right_column).render(columns[1], frame.buffer_mut());
}
