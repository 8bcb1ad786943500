//! Sign-up form rendering

use super::field_renderer::{draw_field, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Form, SubmitPhase};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw the sign-up form: four inputs followed by the submit button
pub fn draw_signup_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;

    let border_color = match form.phase() {
        SubmitPhase::Idle => Color::DarkGray,
        SubmitPhase::Accepted => Color::Green,
        SubmitPhase::Rejected => Color::Red,
    };
    let errors = form.errors();
    let title = if errors.is_empty() {
        " Sign up ".to_string()
    } else {
        format!(" Sign up ({} to fix) ", errors.len())
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Name
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(FIELD_HEIGHT),  // Image
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .horizontal_margin(1)
        .split(inner);

    for index in 0..4 {
        let Some(field) = form.get_field(index) else {
            continue;
        };
        let error = field.key.and_then(|key| form.error_for(key));
        draw_field(
            frame,
            chunks[index],
            field,
            form.active_field() == index,
            app.state.reveal_password,
            error,
        );
    }

    render_button(
        frame,
        chunks[4],
        "Submit",
        form.is_submit_row_active(),
        Some(Color::Green),
    );
}
