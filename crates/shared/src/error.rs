use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Display-ready failure record for one submission cycle. Replaced
/// wholesale by the next submission, never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorOutcome {
    pub message: String,
}

impl ErrorOutcome {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Validation failures that block a submission from being attempted.
/// These never reach the submission controller; the presentation layer
/// refuses to initiate while the form is incomplete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("user_id must not be empty")]
    MissingUserId,
    #[error("message must not be empty")]
    MissingMessage,
}
