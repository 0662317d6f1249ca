use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Channel, RequestId, Severity, UserId};

/// One triage submission, assembled once per submit and never mutated
/// afterwards. Field names here are the wire contract of
/// `POST /support/triage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageRequest {
    pub request_id: RequestId,
    pub user_id: UserId,
    pub channel: Channel,
    pub message: String,
    pub metadata: RequestMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Injected by the request builder at submit time; serialized as an
    /// RFC 3339 string.
    pub timestamp: DateTime<Utc>,
}

/// Parsed triage verdict. The service's output shape is not
/// contractually guaranteed field-by-field, so every nested field is
/// optional and unknown extras are ignored; absence is resolved to
/// display placeholders at render time, never here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TriageResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification: Option<Classification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decision: Option<Decision>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnostics: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    // The service has been seen emitting both spellings.
    #[serde(
        default,
        alias = "recommendedAction",
        skip_serializing_if = "Option::is_none"
    )]
    pub recommended_action: Option<RecommendedAction>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendedAction {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}
