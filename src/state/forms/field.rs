//! Form field identifiers and raw input values

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The fields of the contact form, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FieldName {
    #[serde(rename = "firstName")]
    FirstName,
    #[serde(rename = "lastName")]
    LastName,
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "message")]
    Message,
    #[serde(rename = "querytype")]
    QueryType,
    #[serde(rename = "consent")]
    Consent,
}

impl FieldName {
    /// All fields in declaration order
    pub const ALL: [FieldName; 6] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Email,
        FieldName::Message,
        FieldName::QueryType,
        FieldName::Consent,
    ];

    /// Key used for this field in serialized form data
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::FirstName => "firstName",
            FieldName::LastName => "lastName",
            FieldName::Email => "email",
            FieldName::Message => "message",
            FieldName::QueryType => "querytype",
            FieldName::Consent => "consent",
        }
    }

    /// Label shown next to the field
    pub fn label(self) -> &'static str {
        match self {
            FieldName::FirstName => "First Name *",
            FieldName::LastName => "Last Name *",
            FieldName::Email => "Email Address *",
            FieldName::Message => "Message *",
            FieldName::QueryType => "Query Type *",
            FieldName::Consent => "I consent to being contacted by the team *",
        }
    }

    /// The kind of input control that edits this field
    pub fn input_kind(self) -> InputKind {
        match self {
            FieldName::FirstName | FieldName::LastName => InputKind::Text,
            FieldName::Email => InputKind::Email,
            FieldName::Message => InputKind::TextArea,
            FieldName::QueryType => InputKind::Radio,
            FieldName::Consent => InputKind::Checkbox,
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown form field: {0}")]
pub struct ParseFieldError(pub String);

impl FromStr for FieldName {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldName::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ParseFieldError(s.to_string()))
    }
}

/// Kind of control an input event originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    TextArea,
    Radio,
    Checkbox,
}

/// Raw value carried by a change event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldInput {
    Text(String),
    Checked(bool),
}

impl FieldInput {
    /// Text representation, used when a text field receives a flag
    pub fn into_text(self) -> String {
        match self {
            FieldInput::Text(s) => s,
            FieldInput::Checked(b) => b.to_string(),
        }
    }

    /// Checked-state representation, used when a checkbox receives text
    pub fn into_checked(self) -> bool {
        match self {
            FieldInput::Checked(b) => b,
            FieldInput::Text(s) => s == "true" || s == "on",
        }
    }
}

/// Options of the query type radio group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QueryType {
    GeneralEnquiry,
    SupportRequest,
}

impl QueryType {
    /// Options in render order
    pub const ALL: [QueryType; 2] = [QueryType::GeneralEnquiry, QueryType::SupportRequest];

    pub fn as_str(self) -> &'static str {
        match self {
            QueryType::GeneralEnquiry => "general-enquiry",
            QueryType::SupportRequest => "support-request",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QueryType::GeneralEnquiry => "General Enquiry",
            QueryType::SupportRequest => "Support Request",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown query type: {0}")]
pub struct ParseQueryTypeError(pub String);

impl FromStr for QueryType {
    type Err = ParseQueryTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QueryType::ALL
            .into_iter()
            .find(|q| q.as_str() == s)
            .ok_or_else(|| ParseQueryTypeError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip_through_from_str() {
        for field in FieldName::ALL {
            assert_eq!(field.as_str().parse::<FieldName>(), Ok(field));
        }
    }

    #[test]
    fn test_unknown_field_name_is_rejected() {
        let err = "phone".parse::<FieldName>().unwrap_err();
        assert_eq!(err.to_string(), "unknown form field: phone");
    }

    #[test]
    fn test_field_serializes_as_form_key() {
        let json = serde_json::to_string(&FieldName::QueryType).unwrap();
        assert_eq!(json, "\"querytype\"");
    }

    #[test]
    fn test_input_kinds() {
        assert_eq!(FieldName::Consent.input_kind(), InputKind::Checkbox);
        assert_eq!(FieldName::QueryType.input_kind(), InputKind::Radio);
        assert_eq!(FieldName::Message.input_kind(), InputKind::TextArea);
        assert_eq!(FieldName::Email.input_kind(), InputKind::Email);
    }

    #[test]
    fn test_query_type_parse() {
        assert_eq!(
            "support-request".parse::<QueryType>(),
            Ok(QueryType::SupportRequest)
        );
        assert!("other".parse::<QueryType>().is_err());
    }

    #[test]
    fn test_field_input_coercion() {
        assert_eq!(FieldInput::Checked(true).into_text(), "true");
        assert!(FieldInput::Text("on".to_string()).into_checked());
        assert!(!FieldInput::Text("yes please".to_string()).into_checked());
    }
}
