//! Field validation errors

use crate::state::{ErrorMap, FieldName};
use thiserror::Error;

/// A single failed rule: the field it belongs to and the message to show
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
    pub field: FieldName,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every violation found in one validation run, in field declaration order.
/// Holds at most one entry per field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(Vec<FieldValidationError>);

impl ValidationErrors {
    pub(crate) fn new(errors: Vec<FieldValidationError>) -> Self {
        Self(errors)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldValidationError> {
        self.0.iter()
    }

    /// Message for a field, if it failed
    #[cfg(test)]
    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn into_error_map(self) -> ErrorMap {
        self.0.into_iter().map(|e| (e.field, e.message)).collect()
    }
}
