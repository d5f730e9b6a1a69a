use crate::app::App;
use crate::search;
use crate::store::TabView;
use crate::ui::colors::{self, RosePine};
use crate::ui::components::truncate;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

/// Views, the software list and, inside a folder, its summary
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.state();
    let block = Block::bordered()
        .title(" 󰧑 learn3d ")
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::HIGHLIGHT_HIGH));
    let inner = block.inner(area);
    block.render(area, frame.buffer_mut());

    let width = inner.width.saturating_sub(6) as usize;
    let mut lines = vec![
        Line::from(Span::styled(" Views", Style::default().fg(RosePine::LOVE).bold())),
        Line::from(""),
    ];

    for (index, tab) in TabView::ALL.iter().enumerate() {
        let label = truncate(&format!("{} {}", tab.icon(), app.tab_label(*tab)), width);
        let style = if *tab == state.active_tab {
            colors::selected()
        } else {
            Style::default().fg(RosePine::TEXT)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", index + 1), Style::default().fg(RosePine::MUTED)),
            Span::styled(format!(" {} ", label), style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Software",
        Style::default().fg(RosePine::LOVE).bold(),
    )));
    lines.push(Line::from(""));

    for software in &state.software {
        let style = if software.id == state.active_software.id {
            Style::default().fg(RosePine::BASE).bg(RosePine::GOLD).bold()
        } else {
            Style::default().fg(RosePine::SUBTLE)
        };
        lines.push(Line::from(vec![
            Span::raw("   "),
            Span::styled(format!(" {} ", truncate(&software.label(), width)), style),
        ]));
    }

    if let Some(folder) = &state.active_folder {
        let (notes, shortcuts) = search::folder_item_counts(state, &folder.id);
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            " Folder",
            Style::default().fg(RosePine::LOVE).bold(),
        )));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("   󰉋 {}", truncate(&folder.name, width)),
            Style::default().fg(RosePine::TEXT),
        )));
        lines.push(Line::from(Span::styled(
            format!("   {} notes · {} shortcuts", notes, shortcuts),
            Style::default().fg(RosePine::SUBTLE),
        )));
        lines.push(Line::from(Span::styled(
            "   [b] ← Back to folders",
            Style::default().fg(RosePine::FOAM),
        )));
    }

    Paragraph::new(lines).render(inner, frame.buffer_mut());
}
