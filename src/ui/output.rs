//! Output panel showing the last accepted submission

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the pretty-printed normalized data, or a hint if nothing was accepted yet
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Output ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = match app.state.form.output() {
        Some(output) => Paragraph::new(output.lines().map(Line::from).collect::<Vec<_>>())
            .style(Style::default().fg(Color::Green)),
        None => Paragraph::new("Submit the form to see the normalized data.")
            .style(Style::default().fg(Color::DarkGray)),
    };

    frame.render_widget(paragraph.wrap(Wrap { trim: false }).block(block), area);
}
