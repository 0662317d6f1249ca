use chrono::{DateTime, Utc};
use shared::{
    domain::{Channel, RequestId, UserId},
    error::FormError,
    protocol::{RequestMetadata, TriageRequest},
};
use uuid::Uuid;

pub const DEFAULT_REGION: &str = "us-east-1";

/// Mutable, field-by-field editable form owned by the presentation
/// layer. Lives for the session; the builder never mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    pub request_id: RequestId,
    pub user_id: UserId,
    pub channel: Channel,
    pub message: String,
    pub product_name: Option<String>,
    pub product_version: Option<String>,
    pub region: Option<String>,
}

impl FormState {
    /// Session defaults: a random `req_` id, the web portal channel and
    /// the default region. Every field stays free-form afterwards.
    pub fn new_session() -> Self {
        let suffix = Uuid::new_v4().simple().to_string();
        Self {
            request_id: RequestId::new(format!("req_{}", &suffix[..8])),
            user_id: UserId::new(""),
            channel: Channel::WebPortal,
            message: String::new(),
            product_name: None,
            product_version: None,
            region: Some(DEFAULT_REGION.to_string()),
        }
    }

    /// Gate checked by the caller before initiating a submission.
    /// A blocked form is not an error state, it simply never submits.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.user_id.is_empty() {
            return Err(FormError::MissingUserId);
        }
        if self.message.trim().is_empty() {
            return Err(FormError::MissingMessage);
        }
        Ok(())
    }
}

/// Pure composer: copies the form verbatim and injects `now` as the
/// request timestamp. No validation happens here; malformed ids or an
/// empty message pass straight through. Each call yields a fresh
/// request even when the form is unchanged.
pub fn build_request(form: &FormState, now: DateTime<Utc>) -> TriageRequest {
    TriageRequest {
        request_id: form.request_id.clone(),
        user_id: form.user_id.clone(),
        channel: form.channel,
        message: form.message.clone(),
        metadata: RequestMetadata {
            product_name: form.product_name.clone(),
            product_version: form.product_version.clone(),
            region: form.region.clone(),
            timestamp: now,
        },
    }
}

#[cfg(test)]
#[path = "tests/builder_tests.rs"]
mod tests;
