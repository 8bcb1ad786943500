//! Screen layout and status bar

use crate::app::{App, StatusLevel};
use crate::platform::{COPY_SHORTCUT, LOAD_IMAGE_SHORTCUT, REVEAL_SHORTCUT, SUBMIT_SHORTCUT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen regions
pub struct AppLayout {
    pub form: Rect,
    pub output: Rect,
    pub preview: Rect,
    pub status: Rect,
}

/// Split the screen into form (left), output and preview (right) and the
/// status bar on the bottom line
pub fn create_layout(area: Rect) -> AppLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),        // Form
            Constraint::Percentage(45), // Output + preview
        ])
        .split(rows[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(columns[1]);

    AppLayout {
        form: columns[0],
        output: right[0],
        preview: right[1],
        status: rows[1],
    }
}

/// Draw the status bar with key hints and the latest feedback message
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", get_hints(app)),
        Style::default().fg(Color::White),
    )];

    if let Some(msg) = &app.status_message {
        let color = status_color(app.status_level);
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    // Quit hint on the right (double Ctrl+C to quit)
    let quit_hint = " ^C^C:quit ";
    let width = quit_hint.len() as u16;
    if area.width > width {
        let quit_area = Rect {
            x: area.x + area.width - width,
            width,
            ..area
        };
        let quit_widget =
            Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
        frame.render_widget(quit_widget, quit_area);
    }
}

/// Keyboard hints for the focused row
fn get_hints(app: &App) -> String {
    let form = &app.state.form;
    if form.is_submit_row_active() {
        format!("Enter:submit  Tab:next  {COPY_SHORTCUT}:copy")
    } else if form.is_image_field_active() {
        format!("Enter/{LOAD_IMAGE_SHORTCUT}:preview  Tab:next  {SUBMIT_SHORTCUT}:submit")
    } else {
        format!("Tab:next  {SUBMIT_SHORTCUT}:submit  {REVEAL_SHORTCUT}:show password")
    }
}

fn status_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Success => Color::Green,
        StatusLevel::Warning => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_color_follows_message_level() {
        assert_eq!(status_color(StatusLevel::Success), Color::Green);
        assert_eq!(status_color(StatusLevel::Warning), Color::Red);
        assert_eq!(status_color(StatusLevel::Info), Color::Cyan);
    }
}
