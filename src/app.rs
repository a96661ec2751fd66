//! Application state and key handling

use crate::config::StudioConfig;
use crate::state::{Field, FormFocus, ListingController, SubmissionEvent};
use crate::submission::{SimulatedBackend, SubmissionReceipt};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;

/// Main application struct
pub struct App {
    /// The listing being edited
    pub controller: ListingController,
    /// Focused form element
    pub focus: FormFocus,
    /// Loaded user configuration
    pub config: StudioConfig,
    /// Receipt of the last successful submission, shown until dismissed
    pub notice: Option<SubmissionReceipt>,
    /// Feedback shown in the status bar
    pub status_message: Option<String>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App for one editing session
    pub fn new(config: StudioConfig) -> Self {
        let backend = Arc::new(SimulatedBackend::new(config.submit_latency()));
        let mut controller = ListingController::new(backend, config.projector());
        if let Some(mode) = config.default_mode {
            controller.set_mode(mode);
        }
        if let Some(style) = config.default_style {
            controller.set_style(style);
        }

        Self {
            controller,
            focus: FormFocus::default(),
            config,
            notice: None,
            status_message: None,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Pick up finished submissions and surface them
    pub fn poll_submission(&mut self) {
        for event in self.controller.poll_events() {
            match event {
                SubmissionEvent::Succeeded(receipt) => {
                    self.status_message = Some("Listing submitted successfully!".to_string());
                    self.notice = Some(receipt);
                }
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.notice = None;
                self.status_message = None;
            }
            return;
        }

        let on_submit_button = self.focus == FormFocus::SubmitButton;

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.prev(),
            KeyCode::F(2) => {
                let mode = self.controller.mode().toggle();
                self.controller.set_mode(mode);
            }
            KeyCode::F(3) => {
                let style = self.controller.style().toggle();
                self.controller.set_style(style);
            }
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_listing();
            }
            KeyCode::Char('d') if key.modifiers.contains(crate::platform::SHORTCUT_MODIFIER) => {
                self.save_preferences();
            }
            KeyCode::Left | KeyCode::Right if self.focus == FormFocus::Category => {
                let current = self.controller.draft().category;
                let category = if key.code == KeyCode::Left {
                    current.prev()
                } else {
                    current.next()
                };
                self.set_field(Field::Category, category.label().to_string());
            }
            KeyCode::Enter if on_submit_button => self.submit_listing(),
            KeyCode::Enter if self.focus.is_multiline() => self.edit_focused(|value| value.push('\n')),
            KeyCode::Enter => self.focus = self.focus.next(),
            KeyCode::Char(c)
                if self.focus.accepts_text()
                    && !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.edit_focused(|value| value.push(c))
            }
            KeyCode::Backspace if self.focus.accepts_text() => self.edit_focused(|value| {
                value.pop();
            }),
            _ => {}
        }
    }

    /// Apply an edit to the focused text field
    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let mut value = self.controller.draft().get(field).to_string();
        edit(&mut value);
        self.set_field(field, value);
    }

    fn set_field(&mut self, field: Field, value: String) {
        match self.controller.set_field(field, value) {
            Ok(()) => self.status_message = None,
            Err(err) => {
                tracing::warn!("Rejected edit: {err}");
                self.status_message = Some(err.to_string());
            }
        }
    }

    /// Start a submission if the form allows it
    fn submit_listing(&mut self) {
        if self.controller.submit() {
            self.status_message = Some("Submitting listing...".to_string());
        } else if self.controller.is_submitting() {
            self.status_message = Some("A submission is already in progress".to_string());
        } else {
            self.status_message =
                Some("Fill in title, description and price, and fix any errors".to_string());
        }
    }

    /// Persist the current mode and style as startup defaults
    fn save_preferences(&mut self) {
        self.config.default_mode = Some(self.controller.mode());
        self.config.default_style = Some(self.controller.style());
        match self.config.save() {
            Ok(()) => self.status_message = Some("Preview preferences saved".to_string()),
            Err(err) => {
                tracing::warn!("Failed to save config: {err:?}");
                self.status_message = Some("Failed to save preferences".to_string());
            }
        }
    }
}
