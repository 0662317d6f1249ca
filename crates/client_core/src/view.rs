use shared::protocol::TriageResult;

const PLACEHOLDER_ACTION: &str = "Processed";
const PLACEHOLDER_CATEGORY: &str = "Unknown";
const PLACEHOLDER_SEVERITY: &str = "N/A";
const PLACEHOLDER_RECOMMENDED: &str = "Review";

/// Display-safe projection of a triage verdict. This is the single
/// place missing or empty response fields resolve to placeholders; no
/// other code carries these literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerdictView {
    pub action: String,
    pub category: String,
    pub severity: String,
    pub recommended_action: String,
    pub diagnostics: String,
}

impl VerdictView {
    pub fn from_result(result: &TriageResult) -> Self {
        let classification = result.classification.as_ref();
        let decision = result.decision.as_ref();

        Self {
            action: decision
                .and_then(|d| d.action.clone())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_ACTION.to_string()),
            category: classification
                .and_then(|c| c.category.clone())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_CATEGORY.to_string()),
            severity: classification
                .and_then(|c| c.severity.as_ref())
                .map(ToString::to_string)
                .unwrap_or_else(|| PLACEHOLDER_SEVERITY.to_string()),
            recommended_action: decision
                .and_then(|d| d.recommended_action.as_ref())
                .and_then(|r| r.kind.clone())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_RECOMMENDED.to_string()),
            // Opaque payload, round-tripped for display only.
            diagnostics: match &result.diagnostics {
                Some(value) => {
                    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
                }
                None => "null".to_string(),
            },
        }
    }
}

#[cfg(test)]
#[path = "tests/view_tests.rs"]
mod tests;
