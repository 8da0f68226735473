//! Contact form state: field values, errors and keyboard focus

use super::error_map::ErrorMap;
use super::field::{FieldInput, FieldName, InputKind, QueryType};
use crate::validation::{self, ValidatedContact};
use serde::{Deserialize, Serialize};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Current values of every contact form field.
///
/// Fields are never absent: the empty string and `false` stand for "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "querytype")]
    pub query_type: String,
    pub consent: bool,
}

impl FormData {
    /// Text value of a field; the consent flag reads as "true"/"false"
    pub fn text(&self, field: FieldName) -> &str {
        match field {
            FieldName::FirstName => &self.first_name,
            FieldName::LastName => &self.last_name,
            FieldName::Email => &self.email,
            FieldName::Message => &self.message,
            FieldName::QueryType => &self.query_type,
            FieldName::Consent => {
                if self.consent {
                    "true"
                } else {
                    "false"
                }
            }
        }
    }

    fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::FirstName => Some(&mut self.first_name),
            FieldName::LastName => Some(&mut self.last_name),
            FieldName::Email => Some(&mut self.email),
            FieldName::Message => Some(&mut self.message),
            FieldName::QueryType => Some(&mut self.query_type),
            FieldName::Consent => None,
        }
    }
}

/// Focus order on screen. The submit button follows the last field.
pub const FOCUS_ORDER: [FieldName; 6] = [
    FieldName::FirstName,
    FieldName::LastName,
    FieldName::Email,
    FieldName::QueryType,
    FieldName::Message,
    FieldName::Consent,
];

const SUBMIT_INDEX: usize = FOCUS_ORDER.len();

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted(ValidatedContact),
    Rejected { violations: usize },
}

/// Form state holder for the contact form
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub data: FormData,
    pub errors: ErrorMap,
    pub active_field_index: usize,
    /// Radio option under the cursor, independent of the selected value
    pub highlighted_option: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update exactly one field from a change event.
    ///
    /// Checkbox events store the checked state; every other kind stores the
    /// raw text. No validation runs here.
    pub fn on_field_change(&mut self, field: FieldName, input: FieldInput, kind: InputKind) {
        if kind == InputKind::Checkbox || field == FieldName::Consent {
            let checked = input.into_checked();
            match self.data.text_mut(field) {
                Some(text) => *text = checked.to_string(),
                None => self.data.consent = checked,
            }
        } else {
            let value = input.into_text();
            match self.data.text_mut(field) {
                Some(text) => *text = value,
                None => self.data.consent = FieldInput::Text(value).into_checked(),
            }
        }
    }

    /// Validate a snapshot of the current values and rewrite the errors.
    ///
    /// The error map is cleared on success and replaced wholesale on
    /// failure, never merged.
    pub fn submit(&mut self) -> SubmitOutcome {
        let snapshot = self.data.clone();
        match validation::validate(&snapshot) {
            Ok(contact) => {
                self.errors.clear();
                SubmitOutcome::Accepted(contact)
            }
            Err(errors) => {
                let violations = errors.len();
                tracing::debug!("Validation failed: {errors}");
                for violation in errors.iter() {
                    tracing::debug!(field = %violation.field, "{}", violation.message);
                }
                self.errors.replace(errors);
                SubmitOutcome::Rejected { violations }
            }
        }
    }

    /// The submit control is only enabled once consent is given
    pub fn can_submit(&self) -> bool {
        self.data.consent
    }

    /// Restore default values and drop all errors
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn error_for(&self, field: FieldName) -> Option<&str> {
        self.errors.get(field)
    }

    /// Field under focus, `None` when the submit button is focused
    pub fn focused_field(&self) -> Option<FieldName> {
        FOCUS_ORDER.get(self.active_field_index).copied()
    }

    pub fn is_submit_focused(&self) -> bool {
        self.active_field_index == SUBMIT_INDEX
    }

    pub fn focus(&mut self, field: FieldName) {
        if let Some(index) = FOCUS_ORDER.iter().position(|f| *f == field) {
            self.set_active_field(index);
        }
    }

    /// Append a character to the focused text field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let kind = field.input_kind();
        if matches!(kind, InputKind::Radio | InputKind::Checkbox) {
            return;
        }
        let mut value = self.data.text(field).to_string();
        value.push(c);
        self.on_field_change(field, FieldInput::Text(value), kind);
    }

    /// Remove the last character of the focused text field
    pub fn backspace(&mut self) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let kind = field.input_kind();
        if matches!(kind, InputKind::Radio | InputKind::Checkbox) {
            return;
        }
        let mut value = self.data.text(field).to_string();
        if value.pop().is_some() {
            self.on_field_change(field, FieldInput::Text(value), kind);
        }
    }

    /// Insert a line break; only the message field is multi-line
    pub fn newline(&mut self) {
        if self.focused_field() == Some(FieldName::Message) {
            let mut value = self.data.message.clone();
            value.push('\n');
            self.on_field_change(FieldName::Message, FieldInput::Text(value), InputKind::TextArea);
        }
    }

    pub fn select_next_option(&mut self) {
        self.highlighted_option = (self.highlighted_option + 1) % QueryType::ALL.len();
    }

    pub fn select_prev_option(&mut self) {
        if self.highlighted_option == 0 {
            self.highlighted_option = QueryType::ALL.len() - 1;
        } else {
            self.highlighted_option -= 1;
        }
    }

    /// Pick the highlighted radio option as the query type
    pub fn choose_highlighted_option(&mut self) {
        let option = QueryType::ALL[self.highlighted_option % QueryType::ALL.len()];
        self.on_field_change(
            FieldName::QueryType,
            FieldInput::Text(option.as_str().to_string()),
            InputKind::Radio,
        );
    }

    /// Query type currently selected, if it names a known option
    pub fn selected_query_type(&self) -> Option<QueryType> {
        self.data.query_type.parse().ok()
    }

    pub fn toggle_consent(&mut self) {
        let checked = !self.data.consent;
        self.on_field_change(FieldName::Consent, FieldInput::Checked(checked), InputKind::Checkbox);
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        FOCUS_ORDER.len() + 1 // fields + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_INDEX);
    }
}
