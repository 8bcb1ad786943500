//! Field rendering utilities for forms

use crate::state::{FieldKind, FormField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows used by one field: bordered input plus the error line below it
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a form field and, when present, its validation error underneath
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    reveal: bool,
    error: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let border_color = match (is_active, error.is_some()) {
        (true, _) => Color::Cyan,
        (false, true) => Color::Red,
        (false, false) => Color::DarkGray,
    };
    let text_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = field.display_value(reveal);
    let (value, value_style) = if display_value.is_empty() && !is_active {
        (placeholder(field.kind).to_string(), Style::default().fg(Color::DarkGray))
    } else {
        (display_value, text_style)
    };

    let cursor = if is_active { "▌" } else { "" };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let content = Paragraph::new(Line::from(vec![
        Span::styled(value, value_style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]))
    .block(block);
    frame.render_widget(content, chunks[0]);

    if let Some(message) = error {
        let error_line = Paragraph::new(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::ITALIC),
        ));
        frame.render_widget(error_line, chunks[1]);
    }
}

fn placeholder(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text | FieldKind::Masked => "(empty)",
        FieldKind::File => "(path to an image, Enter to preview)",
    }
}
