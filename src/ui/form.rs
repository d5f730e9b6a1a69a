use crate::app::{App, FormState};
use crate::forms::FieldKind;
use crate::ui::colors::{self, RosePine};
use crate::ui::components::{centered_rect, truncate_start, wrap_text};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};

const FIELD_HEIGHT: u16 = 4;
const MULTILINE_ROWS: u16 = 6;

fn field_height(kind: FieldKind) -> u16 {
    match kind {
        FieldKind::Multiline => MULTILINE_ROWS + 3,
        FieldKind::Text | FieldKind::Choice => FIELD_HEIGHT,
    }
}

/// Rows of a wrapped value, scrolled so the last `rows` stay visible
fn tail_rows(value: &str, width: usize, rows: usize) -> Vec<String> {
    let wrapped = wrap_text(value, width);
    let skip = wrapped.len().saturating_sub(rows);
    wrapped.into_iter().skip(skip).collect()
}

/// Modal create/edit dialog for the open form
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(FormState { form, focus }) = app.form.as_ref() else {
        return;
    };

    let fields = form.fields();
    let height = fields.iter().map(|f| field_height(f.kind)).sum::<u16>() + 6;
    let popup_area = centered_rect(64, height, area);
    Clear.render(popup_area, frame.buffer_mut());

    let block = Block::bordered()
        .title(format!(" {} ", form.title()))
        .title_alignment(Alignment::Center)
        .border_type(BorderType::Rounded)
        .style(Style::default().fg(RosePine::IRIS).bg(RosePine::SURFACE));
    let inner = block.inner(popup_area);
    block.render(popup_area, frame.buffer_mut());

    let mut constraints: Vec<Constraint> = fields
        .iter()
        .map(|f| Constraint::Length(field_height(f.kind)))
        .collect();
    constraints.push(Constraint::Length(1));
    constraints.push(Constraint::Length(1));
    let chunks = Layout::vertical(constraints).split(inner);

    for (index, field) in fields.iter().enumerate() {
        let focused = index == *focus;
        let parts = Layout::vertical([Constraint::Length(1), Constraint::Fill(1)])
            .split(chunks[index]);
        // Inside the rounded border, minus a column for the cursor
        let text_width = parts[1].width.saturating_sub(3) as usize;
        let text_rows = parts[1].height.saturating_sub(2) as usize;
        let cursor = Span::styled("▏", Style::default().fg(RosePine::IRIS));
        let text_style = Style::default().fg(RosePine::TEXT);

        Paragraph::new(Span::styled(
            field.label,
            Style::default().fg(RosePine::SUBTLE).bold(),
        ))
        .render(parts[0], frame.buffer_mut());

        let value: Vec<Line> = match field.kind {
            FieldKind::Choice => vec![Line::from(vec![
                Span::styled("◀ ", Style::default().fg(RosePine::MUTED)),
                Span::styled(field.value.to_string(), Style::default().fg(RosePine::GOLD)),
                Span::styled(" ▶", Style::default().fg(RosePine::MUTED)),
            ])],
            FieldKind::Text | FieldKind::Multiline if field.value.is_empty() && !focused => {
                vec![Line::from(Span::styled(
                    field.placeholder,
                    Style::default().fg(RosePine::MUTED),
                ))]
            }
            FieldKind::Text => {
                let mut spans = vec![Span::styled(
                    truncate_start(field.value, text_width),
                    text_style,
                )];
                if focused {
                    spans.push(cursor);
                }
                vec![Line::from(spans)]
            }
            FieldKind::Multiline => {
                let rows = if focused {
                    tail_rows(field.value, text_width, text_rows)
                } else {
                    wrap_text(field.value, text_width)
                };
                let last = rows.len().saturating_sub(1);
                rows.into_iter()
                    .enumerate()
                    .map(|(i, row)| {
                        let mut spans = vec![Span::styled(row, text_style)];
                        if focused && i == last {
                            spans.push(cursor.clone());
                        }
                        Line::from(spans)
                    })
                    .collect()
            }
        };

        Paragraph::new(value)
            .block(
                Block::bordered()
                    .border_type(BorderType::Rounded)
                    .style(colors::border(focused)),
            )
            .render(parts[1], frame.buffer_mut());
    }

    let footer = fields.len();
    if let Some(error) = &app.error_message {
        Paragraph::new(Span::styled(
            format!("✗ {}", error),
            Style::default().fg(RosePine::LOVE),
        ))
        .render(chunks[footer], frame.buffer_mut());
    }

    let hints = if form.is_multiline(*focus) {
        "⇥ Next field • Alt+⏎ New line • ⏎ Save • ⎋ Cancel"
    } else {
        "⇥ Next field • ←→ Category • ⏎ Save • ⎋ Cancel"
    };
    Paragraph::new(hints)
        .alignment(Alignment::Right)
        .style(Style::default().fg(RosePine::MUTED))
        .render(chunks[footer + 1], frame.buffer_mut());
}
