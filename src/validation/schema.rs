//! Declarative per-field validation schema

use super::email::is_valid_email;
use super::error::{FieldValidationError, ValidationErrors};
use crate::state::{FieldName, FormData, QueryType};
use serde::Serialize;

/// A single constraint on a field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Text must not be empty
    Required,
    /// Text must be at least this many characters long
    MinChars(usize),
    /// Text must be an email address
    Email,
    /// Text must be one of the listed values
    OneOf(&'static [&'static str]),
    /// Flag must be set
    MustBeTrue,
}

/// Field value as seen by a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleInput<'a> {
    Text(&'a str),
    Flag(bool),
}

impl Rule {
    /// Whether `input` satisfies this rule.
    ///
    /// Format rules accept the empty string; emptiness is `Required`'s job.
    pub fn check(&self, input: RuleInput<'_>) -> bool {
        match (self, input) {
            (Rule::Required, RuleInput::Text(s)) => !s.is_empty(),
            (Rule::Required, RuleInput::Flag(_)) => true,
            (Rule::MinChars(min), RuleInput::Text(s)) => s.is_empty() || s.chars().count() >= *min,
            (Rule::Email, RuleInput::Text(s)) => s.is_empty() || is_valid_email(s),
            (Rule::OneOf(allowed), RuleInput::Text(s)) => s.is_empty() || allowed.contains(&s),
            (Rule::MustBeTrue, RuleInput::Flag(b)) => b,
            (Rule::MustBeTrue, RuleInput::Text(s)) => s == "true",
            (Rule::MinChars(_) | Rule::Email | Rule::OneOf(_), RuleInput::Flag(_)) => true,
        }
    }
}

/// Ordered rules for one field, each paired with its error message
#[derive(Debug, Clone)]
pub struct FieldRules {
    pub field: FieldName,
    pub rules: Vec<(Rule, &'static str)>,
}

impl FieldRules {
    pub fn new(field: FieldName) -> Self {
        Self {
            field,
            rules: Vec::new(),
        }
    }

    pub fn rule(mut self, rule: Rule, message: &'static str) -> Self {
        self.rules.push((rule, message));
        self
    }

    /// First failing rule's message, if any
    fn first_violation(&self, input: RuleInput<'_>) -> Option<&'static str> {
        self.rules
            .iter()
            .find(|(rule, _)| !rule.check(input))
            .map(|(_, message)| *message)
    }
}

/// Accepted values of the query type radio group
pub const QUERY_TYPES: &[&str] = &["general-enquiry", "support-request"];

/// Minimum length of the first name
pub const MIN_FIRST_NAME_CHARS: usize = 4;

/// Contact form data that passed validation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub message: String,
    #[serde(rename = "querytype")]
    pub query_type: QueryType,
}

/// The full set of field rules evaluated on submit
#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldRules>,
}

impl Schema {
    pub fn new(fields: Vec<FieldRules>) -> Self {
        Self { fields }
    }

    /// Rules for the contact form
    pub fn contact() -> Self {
        Self::new(vec![
            FieldRules::new(FieldName::FirstName)
                .rule(Rule::Required, "First Name is required")
                .rule(
                    Rule::MinChars(MIN_FIRST_NAME_CHARS),
                    "First Name must be at least 4 characters",
                ),
            FieldRules::new(FieldName::LastName).rule(Rule::Required, "Last Name is required"),
            FieldRules::new(FieldName::Email)
                .rule(Rule::Required, "Email is required")
                .rule(Rule::Email, "Invalid email"),
            FieldRules::new(FieldName::Message).rule(Rule::Required, "Message is required"),
            FieldRules::new(FieldName::QueryType)
                .rule(Rule::Required, "Query type is required")
                .rule(Rule::OneOf(QUERY_TYPES), "Invalid query type"),
            FieldRules::new(FieldName::Consent).rule(Rule::MustBeTrue, "Consent is required"),
        ])
    }

    #[cfg(test)]
    pub fn fields(&self) -> &[FieldRules] {
        &self.fields
    }

    /// Evaluate every field and collect all violations.
    ///
    /// Fields never short-circuit each other; within a field the first
    /// failing rule is the only one reported.
    pub fn validate(&self, data: &FormData) -> Result<ValidatedContact, ValidationErrors> {
        let errors = ValidationErrors::new(
            self.fields
                .iter()
                .filter_map(|rules| {
                    rules
                        .first_violation(input_of(data, rules.field))
                        .map(|message| FieldValidationError::new(rules.field, message))
                })
                .collect(),
        );

        if !errors.is_empty() {
            return Err(errors);
        }

        match data.query_type.parse::<QueryType>() {
            Ok(query_type) => Ok(ValidatedContact {
                first_name: data.first_name.clone(),
                last_name: data.last_name.clone(),
                email: data.email.clone(),
                message: data.message.clone(),
                query_type,
            }),
            Err(_) => Err(ValidationErrors::new(vec![FieldValidationError::new(
                FieldName::QueryType,
                "Invalid query type",
            )])),
        }
    }
}

/// Validate form data against the contact schema
pub fn validate(data: &FormData) -> Result<ValidatedContact, ValidationErrors> {
    Schema::contact().validate(data)
}

fn input_of(data: &FormData, field: FieldName) -> RuleInput<'_> {
    match field {
        FieldName::Consent => RuleInput::Flag(data.consent),
        other => RuleInput::Text(data.text(other)),
    }
}
