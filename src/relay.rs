//! Form relay over `fetch`.

use gloo::net::http::Request;
use portfolio_core::contact::{parse_reply, FormRelay, RelayError, RelayReply, SubmissionPayload};

/// Posts contact form payloads to the configured relay endpoint
#[derive(Debug, Clone)]
pub struct FetchRelay {
    endpoint: String,
}

impl FetchRelay {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

fn network(err: gloo::net::Error) -> RelayError {
    RelayError::Network(err.to_string())
}

impl FormRelay for FetchRelay {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<RelayReply, RelayError> {
        let body = payload
            .to_json()
            .map_err(|e| RelayError::Network(format!("could not encode payload: {e}")))?;

        let response = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .body(body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;

        let status = response.status();
        tracing::debug!(status, endpoint = %self.endpoint, "Relay responded");

        let reply = parse_reply(&response.text().await.map_err(network)?)?;
        if !response.ok() && reply.success {
            return Err(RelayError::Rejected(format!("HTTP {status}")));
        }
        Ok(reply)
    }
}
