//! Trait abstraction for the submit side effect to enable mocking in tests

use crate::validation::ValidatedContact;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// An accepted contact form submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    #[serde(flatten)]
    pub contact: ValidatedContact,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn new(contact: ValidatedContact) -> Self {
        Self {
            contact,
            submitted_at: Utc::now(),
        }
    }
}

/// Receives every submission that passed validation
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitNotifier: Send + Sync {
    /// Report a successful submission
    async fn notify(&self, submission: &Submission) -> Result<()>;
}
