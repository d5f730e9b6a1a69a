use crate::app::App;
use crate::models::Note;
use crate::search::{self, ViewScope};
use crate::store::TabView;
use crate::ui::colors::RosePine;
use crate::ui::components::{render_empty_state, truncate};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, ListState, Paragraph, Widget, Wrap},
};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let notes = app.visible_notes();
    if notes.is_empty() {
        render_empty_state(frame, area, app, TabView::Notes);
        return;
    }

    let chunks = Layout::horizontal([Constraint::Percentage(45), Constraint::Fill(1)]).split(area);
    let width = chunks[0].width.saturating_sub(6) as usize;

    let items: Vec<ListItem> = notes
        .iter()
        .map(|note| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    format!(" {}", truncate(&note.title, width)),
                    Style::default().fg(RosePine::TEXT).bold(),
                )),
                Line::from(Span::styled(
                    format!(" {}", note.preview(width.saturating_sub(2))),
                    Style::default().fg(RosePine::SUBTLE),
                )),
                Line::from(vec![
                    Span::styled(
                        format!(" Updated {}", note.updated_label()),
                        Style::default().fg(RosePine::MUTED),
                    ),
                    Span::styled(
                        tag_list(&note.tags),
                        Style::default().fg(RosePine::FOAM),
                    ),
                ]),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::bordered()
                .title(format!(
                    " 󰈙 {} ({}) ",
                    app.tab_label(TabView::Notes),
                    match_count(app, notes.len())
                ))
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        )
        .highlight_style(Style::default().bg(RosePine::HIGHLIGHT_LOW))
        .highlight_symbol("▌");

    let mut state = ListState::default().with_selected(Some(app.selected_item));
    frame.render_stateful_widget(list, chunks[0], &mut state);

    if let Some(note) = app.selected_note() {
        render_preview(frame, chunks[1], note);
    }
}

/// `"3"`, or `"1 of 3"` while a query hides some notes
fn match_count(app: &App, shown: usize) -> String {
    let scope = ViewScope::from_state(app.state());
    let total = search::filter_notes(&app.state().notes, &scope.without_query()).len();
    if shown == total {
        total.to_string()
    } else {
        format!("{} of {}", shown, total)
    }
}

fn tag_list(tags: &[String]) -> String {
    tags.iter().map(|tag| format!("  #{}", tag)).collect()
}

fn render_preview(frame: &mut Frame, area: Rect, note: &Note) {
    let mut lines = vec![
        Line::from(Span::styled(
            note.title.clone(),
            Style::default().fg(RosePine::TEXT).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Created: ", Style::default().fg(RosePine::MUTED)),
            Span::styled(
                note.created_at.format("%b %-d, %Y").to_string(),
                Style::default().fg(RosePine::TEXT),
            ),
        ]),
        Line::from(vec![
            Span::styled("Updated: ", Style::default().fg(RosePine::MUTED)),
            Span::styled(note.updated_label(), Style::default().fg(RosePine::TEXT)),
        ]),
    ];

    if !note.tags.is_empty() {
        let mut spans = vec![Span::styled("Tags: ", Style::default().fg(RosePine::MUTED))];
        for tag in &note.tags {
            spans.push(Span::styled(
                format!(" #{} ", tag),
                Style::default().fg(RosePine::BASE).bg(RosePine::FOAM),
            ));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    lines.extend(note.content.lines().map(|line| {
        Line::from(Span::styled(
            line.to_string(),
            Style::default().fg(RosePine::SUBTLE),
        ))
    }));

    Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::bordered()
                .title(" Preview ")
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        )
        .render(area, frame.buffer_mut());
}
