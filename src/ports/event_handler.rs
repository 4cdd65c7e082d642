use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{form::FormConfig, outcome::ForwardOutcome, submission::Submission};

#[derive(Error, Debug)]
pub enum EventError {
    #[error("Invalid event format: {details}")]
    InvalidEvent { details: String },
    #[error("Event processing failed: {details}")]
    ProcessingFailed { details: String },
}

/// A form submission as delivered by the host: the submitted form's settings and its data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionEvent {
    pub form: FormConfig,
    #[serde(default)]
    pub data: Submission,
}

impl SubmissionEvent {
    pub fn new(form: FormConfig, data: Submission) -> Self {
        Self { form, data }
    }
}

#[async_trait::async_trait]
pub trait SubmissionHandler: Send + Sync {
    async fn handle(
        &self,
        event: SubmissionEvent,
    ) -> error_stack::Result<ForwardOutcome, EventError>;

    /// Whether submissions can reach a spreadsheet at all.
    fn is_available(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_event() {
        let event: SubmissionEvent = serde_json::from_value(json!({
            "form": { "googleSheetSubmissions": true, "googleSpreadsheetId": "abc" },
            "data": { "Name": "Ann", "colors": ["red", "blue"] }
        }))
        .unwrap();

        assert_eq!(event.form, FormConfig::forwarding_to("abc"));
        assert_eq!(event.data.get("Name"), Some(&json!("Ann")));
        assert_eq!(event.data.get("colors"), Some(&json!(["red", "blue"])));
    }

    #[test]
    fn test_missing_data_is_empty_submission() {
        let event: SubmissionEvent =
            serde_json::from_value(json!({ "form": {} })).unwrap();
        assert!(event.data.is_empty());
        assert!(!event.form.sheet_submissions);
    }
}
