// client.rs
use crate::remote::{RemoteError, RemoteValuation, ValuationPayload};
use reqwest::blocking::Client;
use std::time::Duration;

/// Blocking client for the pricing service's `POST /valuation`.
pub struct ValuationClient {
    base_url: String,
    client: Client,
}

impl ValuationClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, RemoteError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/valuation", self.base_url.trim_end_matches('/'))
    }

    pub fn request_valuation(
        &self,
        payload: &ValuationPayload,
    ) -> Result<RemoteValuation, RemoteError> {
        let url = self.endpoint();
        tracing::debug!(%url, "requesting remote valuation");

        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .json(payload)
            .send()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_else(|_| "(no body)".to_string());
            return Err(RemoteError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = resp
            .text()
            .map_err(|e| RemoteError::Network(e.to_string()))?;

        serde_json::from_str(&text).map_err(|e| RemoteError::Decode(e.to_string()))
    }
}
