use std::sync::Arc;

use shared::{
    error::ErrorOutcome,
    protocol::{TriageRequest, TriageResult},
};
use tokio::sync::Mutex;
use tracing::{info, warn};

pub mod builder;
pub mod transport;
pub mod view;

pub use builder::{build_request, FormState, DEFAULT_REGION};
pub use transport::{HttpTransport, TransportReply, TriageTransport};
pub use view::VerdictView;

/// Shown when a failed reply carries no body text of its own.
pub const FALLBACK_SUBMIT_ERROR: &str = "Failed to submit request";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Default)]
struct SubmissionState {
    phase: SubmissionPhase,
    result: Option<TriageResult>,
    error: Option<ErrorOutcome>,
}

/// Owns the lifecycle of the single in-flight triage submission:
/// `Idle -> Submitting -> (Succeeded | Failed)`, then back to
/// `Submitting` on the next accepted submit. State is mutated only
/// here, in response to a submit call and to transport completion.
pub struct SubmissionController {
    transport: Arc<dyn TriageTransport>,
    inner: Mutex<SubmissionState>,
}

impl SubmissionController {
    pub fn new(transport: Arc<dyn TriageTransport>) -> Self {
        Self {
            transport,
            inner: Mutex::new(SubmissionState::default()),
        }
    }

    pub fn over_http(server_url: impl Into<String>) -> Self {
        Self::new(Arc::new(HttpTransport::new(server_url)))
    }

    /// Drives one submission to completion. Returns `false` without
    /// touching state or the wire when another submission is already in
    /// flight; the guard is part of the state machine rather than
    /// trusted to the caller. An accepted submit makes exactly one
    /// outbound call and suspends only at the transport boundary. There
    /// is no timeout: a hung call leaves the controller `Submitting`.
    pub async fn submit(&self, request: TriageRequest) -> bool {
        {
            let mut state = self.inner.lock().await;
            if state.phase == SubmissionPhase::Submitting {
                warn!(
                    request_id = %request.request_id,
                    "triage: submit ignored, a request is already in flight"
                );
                return false;
            }
            state.phase = SubmissionPhase::Submitting;
            state.result = None;
            state.error = None;
        }

        info!(
            request_id = %request.request_id,
            user_id = %request.user_id,
            "triage: submitting request"
        );

        let outcome = match self.transport.post_triage(&request).await {
            Ok(reply) if reply.success => {
                // Success status alone is not enough; the body must be
                // valid JSON. Unknown or missing fields are fine.
                match serde_json::from_str::<TriageResult>(&reply.body) {
                    Ok(result) => Ok(result),
                    Err(err) => Err(ErrorOutcome::new(err.to_string())),
                }
            }
            Ok(reply) => {
                let message = if reply.body.is_empty() {
                    FALLBACK_SUBMIT_ERROR.to_string()
                } else {
                    reply.body
                };
                Err(ErrorOutcome::new(message))
            }
            Err(err) => Err(ErrorOutcome::new(err.to_string())),
        };

        let mut state = self.inner.lock().await;
        match outcome {
            Ok(result) => {
                info!(request_id = %request.request_id, "triage: request succeeded");
                state.phase = SubmissionPhase::Succeeded;
                state.result = Some(result);
            }
            Err(error) => {
                warn!(
                    request_id = %request.request_id,
                    message = %error.message,
                    "triage: request failed"
                );
                state.phase = SubmissionPhase::Failed;
                state.error = Some(error);
            }
        }
        true
    }

    pub async fn phase(&self) -> SubmissionPhase {
        self.inner.lock().await.phase
    }

    /// Verdict of the last completed submission, if it succeeded.
    /// Exactly one of `result`/`error` is populated once a submission
    /// has completed.
    pub async fn result(&self) -> Option<TriageResult> {
        self.inner.lock().await.result.clone()
    }

    pub async fn error(&self) -> Option<ErrorOutcome> {
        self.inner.lock().await.error.clone()
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
