//! Application state and core logic

use crate::config::TuiConfig;
use crate::notify::{Submission, SubmitNotifier};
use crate::state::{ContactForm, FieldName, Form, InputKind, SubmitOutcome, FOCUS_ORDER};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Contact form values, errors and focus
    pub form: ContactForm,
    /// User configuration
    pub config: TuiConfig,
    /// Receives accepted submissions
    notifier: Box<dyn SubmitNotifier>,
    /// Whether the app should quit
    quit: bool,
    /// Status bar message
    pub status_message: Option<String>,
    /// Confirmation dialog text, shown after a successful submit
    pub confirmation: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig, notifier: Box<dyn SubmitNotifier>) -> Self {
        Self {
            form: ContactForm::new(),
            config,
            notifier,
            quit: false,
            status_message: None,
            confirmation: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key press
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Confirmation dialog is modal
        if self.confirmation.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.confirmation = None;
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let command = key.modifiers.contains(crate::platform::COMMAND_MODIFIER);
        match key.code {
            KeyCode::Char('s') if ctrl || command => {
                return self.submit().await;
            }
            KeyCode::Char('r') if ctrl => {
                self.form.reset();
                self.status_message = Some("Form cleared".to_string());
                return Ok(());
            }
            KeyCode::Esc => {
                self.quit = true;
                return Ok(());
            }
            KeyCode::Tab | KeyCode::Down => {
                self.form.next_field();
                return Ok(());
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.form.prev_field();
                return Ok(());
            }
            _ => {}
        }

        match self.form.focused_field().map(FieldName::input_kind) {
            None => self.handle_submit_button_key(key).await?,
            Some(InputKind::Radio) => self.handle_radio_key(key),
            Some(InputKind::Checkbox) => self.handle_checkbox_key(key),
            Some(_) => self.handle_text_key(key),
        }

        Ok(())
    }

    async fn handle_submit_button_key(&mut self, key: KeyEvent) -> Result<()> {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.submit().await?;
        }
        Ok(())
    }

    fn handle_radio_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.form.select_prev_option(),
            KeyCode::Right | KeyCode::Char('l') => self.form.select_next_option(),
            KeyCode::Enter | KeyCode::Char(' ') => self.form.choose_highlighted_option(),
            _ => {}
        }
    }

    fn handle_checkbox_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            self.form.toggle_consent();
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.form.input_char(c)
            }
            KeyCode::Backspace => self.form.backspace(),
            KeyCode::Enter => {
                // Enter in the message field adds a newline
                if self.form.focused_field() == Some(FieldName::Message) {
                    self.form.newline();
                } else {
                    self.form.next_field();
                }
            }
            _ => {}
        }
    }

    /// Validate the form and publish the outcome.
    ///
    /// Ignored while consent is unchecked, the same as the disabled button.
    pub async fn submit(&mut self) -> Result<()> {
        if !self.form.can_submit() {
            self.status_message = Some("Check the consent box to submit".to_string());
            return Ok(());
        }

        match self.form.submit() {
            SubmitOutcome::Accepted(contact) => {
                let submission = Submission::new(contact);
                if let Err(err) = self.notifier.notify(&submission).await {
                    tracing::warn!("Submit notification failed: {err:#}");
                }
                self.confirmation = Some(self.config.confirmation_message().to_string());
                self.status_message = Some("Message sent!".to_string());
                if self.config.reset_on_success() {
                    self.form.reset();
                }
            }
            SubmitOutcome::Rejected { violations } => {
                self.status_message = Some(format!("{violations} field(s) need attention"));
                self.focus_first_error();
            }
        }
        Ok(())
    }

    /// Move focus to the first field on screen that has an error
    fn focus_first_error(&mut self) {
        if let Some(field) = FOCUS_ORDER
            .into_iter()
            .find(|field| self.form.errors.has_error(*field))
        {
            self.form.focus(field);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::MockSubmitNotifier;
    use crate::state::FormData;

    fn app_with(notifier: MockSubmitNotifier) -> App {
        App::new(TuiConfig::default(), Box::new(notifier))
    }

    fn silent_app() -> App {
        let mut notifier = MockSubmitNotifier::new();
        notifier.expect_notify().returning(|_| Ok(()));
        app_with(notifier)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    fn valid_data() -> FormData {
        FormData {
            first_name: "Bobby".to_string(),
            last_name: "Smith".to_string(),
            email: "bob@example.com".to_string(),
            message: "hi".to_string(),
            query_type: "general-enquiry".to_string(),
            consent: true,
        }
    }

    mod submit_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_valid_submit_notifies_once() {
            let mut notifier = MockSubmitNotifier::new();
            notifier
                .expect_notify()
                .withf(|s: &Submission| s.contact.email == "bob@example.com")
                .times(1)
                .returning(|_| Ok(()));
            let mut app = app_with(notifier);
            app.form.data = valid_data();

            app.submit().await.unwrap();

            assert!(app.form.errors.is_empty());
            assert!(app.confirmation.is_some());
            assert_eq!(app.form.data, valid_data());
        }

        #[tokio::test]
        async fn test_invalid_submit_does_not_notify() {
            let mut notifier = MockSubmitNotifier::new();
            notifier.expect_notify().times(0);
            let mut app = app_with(notifier);
            app.form.data = FormData {
                email: "not-an-email".to_string(),
                ..valid_data()
            };

            app.submit().await.unwrap();

            assert_eq!(app.form.errors.len(), 1);
            assert_eq!(app.form.error_for(FieldName::Email), Some("Invalid email"));
            assert!(app.confirmation.is_none());
            assert_eq!(app.form.focused_field(), Some(FieldName::Email));
        }

        #[tokio::test]
        async fn test_submit_without_consent_is_ignored() {
            let mut notifier = MockSubmitNotifier::new();
            notifier.expect_notify().times(0);
            let mut app = app_with(notifier);

            app.handle_key(ctrl('s')).await.unwrap();

            assert!(app.form.errors.is_empty());
            assert_eq!(
                app.status_message.as_deref(),
                Some("Check the consent box to submit")
            );
        }

        #[tokio::test]
        async fn test_notifier_failure_still_confirms() {
            let mut notifier = MockSubmitNotifier::new();
            notifier
                .expect_notify()
                .times(1)
                .returning(|_| Err(anyhow::anyhow!("sink closed")));
            let mut app = app_with(notifier);
            app.form.data = valid_data();

            app.submit().await.unwrap();

            assert!(app.confirmation.is_some());
        }

        #[tokio::test]
        async fn test_reset_on_success_clears_form() {
            let mut notifier = MockSubmitNotifier::new();
            notifier.expect_notify().times(1).returning(|_| Ok(()));
            let config = TuiConfig {
                reset_on_success: Some(true),
                ..Default::default()
            };
            let mut app = App::new(config, Box::new(notifier));
            app.form.data = valid_data();

            app.submit().await.unwrap();

            assert_eq!(app.form.data, FormData::default());
        }

        #[tokio::test]
        async fn test_only_consent_given_reports_five_errors() {
            let mut app = silent_app();
            app.form.data.consent = true;

            app.submit().await.unwrap();

            assert_eq!(app.form.errors.len(), 5);
            assert_eq!(app.form.focused_field(), Some(FieldName::FirstName));
            assert_eq!(
                app.status_message.as_deref(),
                Some("5 field(s) need attention")
            );
        }
    }

    mod key_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_fill_form_by_keyboard_and_submit() {
            let mut app = silent_app();

            type_text(&mut app, "Bobby").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_text(&mut app, "Smith").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_text(&mut app, "bob@example.com").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_text(&mut app, "hi").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            assert!(app.form.is_submit_focused());
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.form.data, valid_data());
            assert!(app.form.errors.is_empty());
            assert!(app.confirmation.is_some());
        }

        #[tokio::test]
        async fn test_enter_on_text_field_moves_to_next() {
            let mut app = silent_app();
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.form.focused_field(), Some(FieldName::LastName));
        }

        #[tokio::test]
        async fn test_enter_in_message_inserts_newline() {
            let mut app = silent_app();
            app.form.focus(FieldName::Message);
            type_text(&mut app, "a").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            type_text(&mut app, "b").await;
            assert_eq!(app.form.data.message, "a\nb");
        }

        #[tokio::test]
        async fn test_radio_keys() {
            let mut app = silent_app();
            app.form.focus(FieldName::QueryType);
            app.handle_key(key(KeyCode::Right)).await.unwrap();
            assert_eq!(app.form.data.query_type, "");
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert_eq!(app.form.data.query_type, "support-request");
        }

        #[tokio::test]
        async fn test_consent_toggle_keeps_errors() {
            let mut app = silent_app();
            app.form.data = FormData {
                first_name: "Bob".to_string(),
                ..valid_data()
            };
            app.submit().await.unwrap();
            let errors = app.form.errors.clone();

            app.form.focus(FieldName::Consent);
            app.handle_key(key(KeyCode::Char(' '))).await.unwrap();

            assert!(!app.form.can_submit());
            assert_eq!(app.form.errors, errors);
        }

        #[tokio::test]
        async fn test_submit_button_ignored_without_consent() {
            let mut app = silent_app();
            app.form.set_active_field(FOCUS_ORDER.len());
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app.form.errors.is_empty());
        }

        #[tokio::test]
        async fn test_ctrl_r_resets() {
            let mut app = silent_app();
            type_text(&mut app, "Bob").await;
            app.handle_key(ctrl('r')).await.unwrap();
            assert_eq!(app.form.data, FormData::default());
        }

        #[tokio::test]
        async fn test_ctrl_chars_are_not_typed() {
            let mut app = silent_app();
            app.handle_key(ctrl('x')).await.unwrap();
            assert_eq!(app.form.data.first_name, "");
        }

        #[tokio::test]
        async fn test_escape_quits() {
            let mut app = silent_app();
            assert!(!app.should_quit());
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_escape_closes_confirmation_first() {
            let mut app = silent_app();
            app.form.data = valid_data();
            app.submit().await.unwrap();

            app.handle_key(key(KeyCode::Esc)).await.unwrap();

            assert!(app.confirmation.is_none());
            assert!(!app.should_quit());
        }

        #[tokio::test]
        async fn test_confirmation_swallows_other_keys() {
            let mut app = silent_app();
            app.form.data = valid_data();
            app.submit().await.unwrap();
            let before = app.form.data.clone();

            app.handle_key(key(KeyCode::Char('x'))).await.unwrap();

            assert!(app.confirmation.is_some());
            assert_eq!(app.form.data, before);
        }
    }
}
