//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod output;
mod preview;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = layout::create_layout(frame.area());

    forms::draw_signup_form(frame, layout.form, app);
    output::draw(frame, layout.output, app);
    preview::draw(frame, layout.preview, app);
    layout::draw_status_bar(frame, layout.status, app);

    // Errors are modal and drawn last
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crate::preview::MockFileReader;
    use crate::state::FieldName;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn test_app() -> App {
        App::with_reader(TuiConfig::default(), Arc::new(MockFileReader::new()))
    }

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_initial_screen() {
        let screen = render(&test_app());
        assert!(screen.contains("Sign up"));
        assert!(screen.contains("Submit"));
        assert!(screen.contains("No image selected."));
        assert!(screen.contains("Submit the form to see the normalized data."));
    }

    #[test]
    fn test_inline_errors_after_rejection() {
        let mut app = test_app();
        app.state.form.on_field_change(FieldName::Name, "Ana");
        app.state.form.on_field_change(FieldName::Email, "not-an-email");
        app.state.form.on_field_change(FieldName::Password, "12345");
        app.submit();

        let screen = render(&app);
        assert!(screen.contains("Invalid email format"));
        assert!(screen.contains("Password must be at least 6 characters"));
        assert!(!screen.contains("Name required"));
    }

    #[test]
    fn test_output_after_acceptance() {
        let mut app = test_app();
        app.state.form.on_field_change(FieldName::Name, "ana souza");
        app.state.form.on_field_change(FieldName::Email, "ANA@EXAMPLE.COM");
        app.state.form.on_field_change(FieldName::Password, "secret");
        app.submit();

        let screen = render(&app);
        assert!(screen.contains("\"name\": \"Ana Souza\""));
        assert!(screen.contains("\"email\": \"ana@example.com\""));
    }

    #[test]
    fn test_password_is_masked_unless_revealed() {
        let mut app = test_app();
        app.state.form.on_field_change(FieldName::Password, "hunter22");
        assert!(!render(&app).contains("hunter22"));

        app.state.reveal_password = true;
        assert!(render(&app).contains("hunter22"));
    }

    #[test]
    fn test_error_dialog_is_drawn() {
        let mut app = test_app();
        app.push_error("cat.png is not a file");
        let screen = render(&app);
        assert!(screen.contains("cat.png is not a file"));
        assert!(screen.contains("to dismiss"));
    }
}
