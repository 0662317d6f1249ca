use super::*;
use shared::{
    domain::Severity,
    protocol::{Classification, Decision, RecommendedAction},
};

#[test]
fn empty_result_resolves_every_placeholder() {
    let view = VerdictView::from_result(&TriageResult::default());

    assert_eq!(view.action, "Processed");
    assert_eq!(view.category, "Unknown");
    assert_eq!(view.severity, "N/A");
    assert_eq!(view.recommended_action, "Review");
    assert_eq!(view.diagnostics, "null");
}

#[test]
fn populated_result_passes_fields_through() {
    let result = TriageResult {
        classification: Some(Classification {
            category: Some("billing".to_string()),
            severity: Some(Severity::Number(2.0)),
        }),
        decision: Some(Decision {
            action: Some("escalate".to_string()),
            recommended_action: Some(RecommendedAction {
                kind: Some("human_review".to_string()),
            }),
        }),
        diagnostics: Some(serde_json::json!({"errors": []})),
    };

    let view = VerdictView::from_result(&result);

    assert_eq!(view.action, "escalate");
    assert_eq!(view.category, "billing");
    assert_eq!(view.severity, "2");
    assert_eq!(view.recommended_action, "human_review");
    assert!(view.diagnostics.contains("\"errors\""));
}

#[test]
fn string_severity_renders_as_is() {
    let result = TriageResult {
        classification: Some(Classification {
            category: None,
            severity: Some(Severity::Text("high".to_string())),
        }),
        ..TriageResult::default()
    };

    let view = VerdictView::from_result(&result);
    assert_eq!(view.severity, "high");
    assert_eq!(view.category, "Unknown");
}

#[test]
fn empty_strings_degrade_like_missing_fields() {
    let result = TriageResult {
        classification: Some(Classification {
            category: Some(String::new()),
            severity: None,
        }),
        decision: Some(Decision {
            action: Some(String::new()),
            recommended_action: Some(RecommendedAction { kind: None }),
        }),
        diagnostics: None,
    };

    let view = VerdictView::from_result(&result);
    assert_eq!(view.category, "Unknown");
    assert_eq!(view.action, "Processed");
    assert_eq!(view.recommended_action, "Review");
}
