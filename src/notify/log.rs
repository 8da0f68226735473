//! Notifier that records submissions in the log

use super::traits::{Submission, SubmitNotifier};
use anyhow::Result;
use async_trait::async_trait;

/// Logs each accepted submission at info level
#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

#[async_trait]
impl SubmitNotifier for LogNotifier {
    async fn notify(&self, submission: &Submission) -> Result<()> {
        let payload = serde_json::to_string(submission)?;
        tracing::info!("Validation successful: {payload}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::QueryType;
    use crate::validation::ValidatedContact;

    #[test]
    fn test_log_notifier_accepts_submission() {
        let submission = Submission::new(ValidatedContact {
            first_name: "Bobby".to_string(),
            last_name: "Smith".to_string(),
            email: "bob@example.com".to_string(),
            message: "hi".to_string(),
            query_type: QueryType::SupportRequest,
        });
        let result = tokio_test::block_on(LogNotifier.notify(&submission));
        assert!(result.is_ok());
    }

    #[test]
    fn test_submission_serializes_flat() {
        let submission = Submission::new(ValidatedContact {
            first_name: "Bobby".to_string(),
            last_name: "Smith".to_string(),
            email: "bob@example.com".to_string(),
            message: "hi".to_string(),
            query_type: QueryType::GeneralEnquiry,
        });
        let json = serde_json::to_value(&submission).unwrap();
        assert_eq!(json["email"], "bob@example.com");
        assert!(json.get("submitted_at").is_some());
    }
}
