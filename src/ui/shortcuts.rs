use crate::app::App;
use crate::store::TabView;
use crate::ui::colors::{self, RosePine, category_color};
use crate::ui::components::render_empty_state;
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Cell, Row, Table, TableState, Tabs, Widget},
};

/// Category tabs over a table of the shortcuts in the selected bucket
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let buckets = app.category_buckets();
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Fill(1)]).split(area);

    let titles: Vec<String> = buckets.iter().map(|b| b.label()).collect();
    Tabs::new(titles)
        .select(app.selected_category)
        .style(Style::default().fg(RosePine::SUBTLE))
        .highlight_style(colors::selected())
        .divider(Span::styled("│", Style::default().fg(RosePine::MUTED)))
        .block(
            Block::bordered()
                .title(format!(" 󰌌 {} ", app.tab_label(TabView::Shortcuts)))
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
        )
        .render(chunks[0], frame.buffer_mut());

    let shortcuts = app.current_shortcuts();
    if shortcuts.is_empty() {
        render_empty_state(frame, chunks[1], app, TabView::Shortcuts);
        return;
    }

    let rows: Vec<Row> = shortcuts
        .iter()
        .map(|shortcut| {
            let category = shortcut.category_name();
            Row::new(vec![
                Cell::from(Line::from(Span::styled(
                    shortcut.keys_display(),
                    Style::default().fg(RosePine::GOLD).bold(),
                ))),
                Cell::from(Span::styled(
                    shortcut.action.clone(),
                    Style::default().fg(RosePine::TEXT),
                )),
                Cell::from(Span::styled(
                    shortcut.description.clone(),
                    Style::default().fg(RosePine::SUBTLE),
                )),
                Cell::from(Span::styled(
                    category.to_string(),
                    Style::default().fg(category_color(category)),
                )),
            ])
        })
        .collect();

    let header = Row::new(vec!["Keys", "Action", "Description", "Category"])
        .style(Style::default().fg(RosePine::LOVE).bold())
        .bottom_margin(1);

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(20),
            Constraint::Fill(1),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH)),
    )
    .row_highlight_style(Style::default().bg(RosePine::HIGHLIGHT_LOW))
    .highlight_symbol("▌");

    let mut state = TableState::default().with_selected(Some(app.selected_item));
    frame.render_stateful_widget(table, chunks[1], &mut state);
}
