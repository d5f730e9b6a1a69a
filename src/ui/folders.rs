use crate::app::App;
use crate::search;
use crate::store::TabView;
use crate::ui::colors::RosePine;
use crate::ui::components::{render_empty_state, truncate};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, ListState},
};

/// Folder cards: name, creation date and how much is filed inside
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let folders = app.visible_folders();
    if folders.is_empty() {
        render_empty_state(frame, area, app, TabView::Folders);
        return;
    }

    let width = area.width.saturating_sub(8) as usize;
    let items: Vec<ListItem> = folders
        .iter()
        .map(|folder| {
            let (notes, shortcuts) = search::folder_item_counts(app.state(), &folder.id);
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(" 󰉋 ", Style::default().fg(RosePine::GOLD)),
                    Span::styled(
                        truncate(&folder.name, width),
                        Style::default().fg(RosePine::TEXT).bold(),
                    ),
                ]),
                Line::from(Span::styled(
                    format!(
                        "    Created {} · {} notes · {} shortcuts",
                        folder.created_label(),
                        notes,
                        shortcuts
                    ),
                    Style::default().fg(RosePine::MUTED),
                )),
                Line::from(""),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::bordered()
                .title(format!(" 󰉋 Folders ({}) ", folders.len()))
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        )
        .highlight_style(Style::default().bg(RosePine::HIGHLIGHT_LOW))
        .highlight_symbol("▌");

    let mut state = ListState::default().with_selected(Some(app.selected_item));
    frame.render_stateful_widget(list, area, &mut state);
}
