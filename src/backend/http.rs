//! HTTP implementation of [`SummaryBackend`] for the `/process` endpoint.
//!
//! No auth, no retries, no client-side timeout: the call resolves whenever
//! the transport does.

use async_trait::async_trait;
use log::{debug, info, warn};

use crate::backend::{BackendError, ProcessRequest, ProcessResponse, SummaryBackend};

/// Path appended to the configured base URL.
pub const PROCESS_PATH: &str = "/process";

pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full endpoint URL, e.g. `http://localhost:5000/process`.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, PROCESS_PATH)
    }
}

#[async_trait]
impl SummaryBackend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn process(&self, text: &str) -> Result<String, BackendError> {
        let body = ProcessRequest {
            text: text.to_string(),
        };
        let url = self.endpoint();

        info!("POST {} (input_len={})", url, text.len());

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;

        debug!("Backend response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Backend error: {} - {}", status, message);
            return Err(BackendError::Api { status, message });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| BackendError::Network(e.to_string()))?;
        let parsed: ProcessResponse =
            serde_json::from_slice(&bytes).map_err(|e| BackendError::Parse(e.to_string()))?;

        info!("Backend returned summary ({} bytes)", parsed.summary.len());
        Ok(parsed.summary)
    }
}
