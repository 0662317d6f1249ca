use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client;
use shared::protocol::TriageRequest;

pub const TRIAGE_PATH: &str = "/support/triage";

/// What came back from one post attempt: the status class and the raw
/// body text. Interpreting the body (JSON on success, plain text on
/// failure) is the controller's job, not the transport's.
#[derive(Debug, Clone)]
pub struct TransportReply {
    pub success: bool,
    pub body: String,
}

/// Generic post primitive for the triage endpoint. A network-level
/// failure (no response at all) surfaces as `Err`; any HTTP response,
/// success or not, surfaces as a reply.
#[async_trait]
pub trait TriageTransport: Send + Sync {
    async fn post_triage(&self, request: &TriageRequest) -> Result<TransportReply>;
}

pub struct HttpTransport {
    http: Client,
    server_url: String,
}

impl HttpTransport {
    pub fn new(server_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            server_url: server_url.into(),
        }
    }
}

#[async_trait]
impl TriageTransport for HttpTransport {
    async fn post_triage(&self, request: &TriageRequest) -> Result<TransportReply> {
        let response = self
            .http
            .post(format!("{}{TRIAGE_PATH}", self.server_url))
            .json(request)
            .send()
            .await?;
        let success = response.status().is_success();
        let body = response.text().await?;
        Ok(TransportReply { success, body })
    }
}
