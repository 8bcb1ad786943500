//! Image preview panel

use crate::app::App;
use crate::preview::LoadedImage;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Characters of the data URI shown before truncation
const URI_PREVIEW_LEN: usize = 240;

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Image preview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let lines = if let Some(path) = app.preview.pending() {
        vec![Line::from(Span::styled(
            format!("Reading {}...", path.display()),
            Style::default().fg(Color::Yellow),
        ))]
    } else if let Some(image) = app.preview.current() {
        image_lines(image)
    } else {
        vec![Line::from(Span::styled(
            "No image selected.",
            Style::default().fg(Color::DarkGray),
        ))]
    };

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

fn image_lines(image: &LoadedImage) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default().add_modifier(Modifier::BOLD);
    vec![
        Line::from(vec![
            Span::styled("File: ", label),
            Span::styled(image.path.display().to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Type: ", label),
            Span::styled(image.mime().to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Size: ", label),
            Span::styled(format_size(decoded_len(image.payload_len())), value),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            truncate_str(&image.data_url, URI_PREVIEW_LEN),
            Style::default().fg(Color::Gray),
        )),
    ]
}

/// Approximate byte count of a base64 payload
fn decoded_len(encoded_len: usize) -> usize {
    encoded_len / 4 * 3
}

fn format_size(bytes: usize) -> String {
    const KIB: usize = 1024;
    const MIB: usize = 1024 * KIB;
    match bytes {
        b if b >= MIB => format!("{:.1} MiB", b as f64 / MIB as f64),
        b if b >= KIB => format!("{:.1} KiB", b as f64 / KIB as f64),
        b => format!("{b} B"),
    }
}

/// Truncate a string to a maximum number of characters with ellipsis
fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
