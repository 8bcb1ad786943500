//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::COPY_MODIFIER;
use crate::preview::{FileReader, ImagePreview, PreviewUpdate, TokioFileReader};
use crate::state::{AppState, Form, SubmitOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Window for the second Ctrl+C press that quits
const DOUBLE_CTRL_C_WINDOW: Duration = Duration::from_millis(1000);

/// How a status bar message is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusLevel {
    #[default]
    Info,
    Success,
    Warning,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Image preview for the image field
    pub preview: ImagePreview,
    /// User configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar
    pub status_message: Option<String>,
    pub status_level: StatusLevel,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App instance reading images from disk
    pub fn new(config: TuiConfig) -> Self {
        let reader = Arc::new(TokioFileReader::new(config.max_image_bytes()));
        Self::with_reader(config, reader)
    }

    /// Create an App with a custom file reader
    pub fn with_reader(config: TuiConfig, reader: Arc<dyn FileReader>) -> Self {
        Self {
            state: AppState::new(config.reveal_password()),
            preview: ImagePreview::new(reader),
            config,
            quit: false,
            status_message: None,
            status_level: StatusLevel::Info,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    fn set_status(&mut self, level: StatusLevel, message: impl Into<String>) {
        self.status_level = level;
        self.status_message = Some(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        if ctrl && key.code == KeyCode::Char('c') {
            self.handle_ctrl_c();
            return Ok(());
        }
        self.last_ctrl_c = None;

        // Clear any status messages on key press
        self.status_message = None;

        let on_submit_row = self.state.form.is_submit_row_active();

        match key.code {
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('o') if ctrl => self.load_image(),
            KeyCode::Char('r') if ctrl => self.toggle_reveal_password(),
            KeyCode::Char('u') if ctrl => self.state.form.clear_active_field(),
            KeyCode::Char('y') if key.modifiers.contains(COPY_MODIFIER) => self.copy_output(),
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            // Enter only submits from the submit button; in a field it moves on
            KeyCode::Enter if on_submit_row => self.submit(),
            KeyCode::Enter => {
                if self.state.form.is_image_field_active() {
                    self.load_image();
                }
                self.state.form.next_field();
            }
            KeyCode::Char(c) if !ctrl => self.state.form.input_char(c),
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
        Ok(())
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        match self.last_ctrl_c {
            Some(previous) if now.duration_since(previous) <= DOUBLE_CTRL_C_WINDOW => {
                self.quit = true;
            }
            _ => {
                self.last_ctrl_c = Some(now);
                self.set_status(StatusLevel::Warning, "Press Ctrl+C again to quit");
            }
        }
    }

    /// Validate the form and report the outcome in the status bar
    pub fn submit(&mut self) {
        match self.state.form.on_submit() {
            SubmitOutcome::Accepted(_) => {
                tracing::info!("Form accepted");
                self.set_status(StatusLevel::Success, "Saved!");
            }
            SubmitOutcome::Rejected(errors) => {
                let fields: Vec<_> = errors.iter().map(|(field, _)| field.as_str()).collect();
                tracing::info!("Form rejected: {}", fields.join(", "));
                let message = match errors.len() {
                    1 => "1 field needs attention".to_string(),
                    n => format!("{n} fields need attention"),
                };
                self.set_status(StatusLevel::Warning, message);
            }
        }
    }

    /// Start previewing the path typed into the image field.
    /// An empty path clears the preview.
    pub fn load_image(&mut self) {
        let raw = self.state.form.image.as_text().trim().to_string();
        if raw.is_empty() {
            self.preview.clear();
            return;
        }
        let path = self.config.resolve_image_path(&raw);
        self.preview.select(path);
        self.set_status(StatusLevel::Info, "Loading image...");
    }

    /// Apply finished image reads
    pub fn poll_preview(&mut self) {
        for update in self.preview.poll() {
            match update {
                PreviewUpdate::Loaded(path) => {
                    self.set_status(StatusLevel::Success, format!("Loaded {}", path.display()));
                }
                PreviewUpdate::Failed { path, error } => {
                    tracing::debug!("Showing preview error for {}", path.display());
                    self.push_error(error.to_string());
                }
            }
        }
    }

    /// Toggle password visibility and remember the choice
    pub fn toggle_reveal_password(&mut self) {
        self.state.reveal_password = !self.state.reveal_password;
        self.config.reveal_password = Some(self.state.reveal_password);
        if let Err(err) = self.config.save() {
            tracing::warn!("Failed to save config: {err:#}");
        }
    }

    fn copy_output(&mut self) {
        let Some(output) = self.state.form.output().map(str::to_string) else {
            self.set_status(StatusLevel::Info, "Nothing to copy yet");
            return;
        };
        match copy_to_clipboard(&output) {
            Ok(()) => self.set_status(StatusLevel::Success, "Copied output"),
            Err(err) => self.push_error(format!("Failed to copy: {err}")),
        }
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
