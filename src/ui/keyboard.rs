use crate::app::App;
use crate::models::keyboard::{ROWS, key_width};
use crate::search::{self, KeyboardMap};
use crate::store::TabView;
use crate::ui::colors::RosePine;
use crate::ui::components::{render_empty_state, truncate};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, ListState, Paragraph, Widget},
};

const KEY_HEIGHT: u16 = 3;

/// Layout weight of a key; quarter-key precision is enough for every width
fn weight(label: &str) -> u16 {
    (key_width(label) * 4.0).round() as u16
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let shortcuts = search::visible_shortcuts(app.state());
    let map = KeyboardMap::build(&shortcuts);
    let selected = app.selected_shortcut();

    let chunks = Layout::vertical([
        Constraint::Length(KEY_HEIGHT * ROWS.len() as u16 + 2),
        Constraint::Fill(1),
    ])
    .split(area);

    let block = Block::bordered()
        .title(format!(
            "  Keyboard · {} keys bound ",
            map.active_key_count()
        ))
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH));
    let board = block.inner(chunks[0]);
    block.render(chunks[0], frame.buffer_mut());

    let rows = Layout::vertical(vec![Constraint::Length(KEY_HEIGHT); ROWS.len()]).split(board);
    for (row, row_area) in ROWS.iter().zip(rows.iter()) {
        let constraints: Vec<Constraint> =
            row.iter().map(|label| Constraint::Fill(weight(label))).collect();
        let keys = Layout::horizontal(constraints).split(*row_area);

        for (label, key_area) in row.iter().zip(keys.iter()) {
            let highlighted = selected.is_some_and(|s| s.uses_key(label));
            let style = if highlighted {
                Style::default().fg(RosePine::BASE).bg(RosePine::GOLD).bold()
            } else if map.is_active(label) {
                Style::default().fg(RosePine::BASE).bg(RosePine::FOAM)
            } else {
                Style::default().fg(RosePine::MUTED)
            };

            let caption = truncate(label, key_area.width.saturating_sub(2) as usize);
            Paragraph::new(caption)
                .alignment(Alignment::Center)
                .style(style)
                .block(
                    Block::bordered()
                        .border_type(BorderType::Rounded)
                        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
                )
                .render(*key_area, frame.buffer_mut());
        }
    }

    if shortcuts.is_empty() {
        render_empty_state(frame, chunks[1], app, TabView::Keyboard);
        return;
    }

    let items: Vec<ListItem> = shortcuts
        .iter()
        .map(|shortcut| {
            let tooltips: Vec<String> = shortcut
                .keys
                .iter()
                .map(|key| format!("{}: {}", key.to_uppercase(), map.tooltip(key)))
                .collect();
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {:<14}", shortcut.keys_display()),
                    Style::default().fg(RosePine::GOLD).bold(),
                ),
                Span::styled(
                    format!("{:<20}", shortcut.action),
                    Style::default().fg(RosePine::TEXT),
                ),
                Span::styled(tooltips.join("  "), Style::default().fg(RosePine::MUTED)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::bordered()
                .title(" Active shortcuts ")
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        )
        .highlight_style(Style::default().bg(RosePine::HIGHLIGHT_LOW))
        .highlight_symbol("▌");

    let mut state = ListState::default().with_selected(Some(app.selected_item));
    frame.render_stateful_widget(list, chunks[1], &mut state);
}
