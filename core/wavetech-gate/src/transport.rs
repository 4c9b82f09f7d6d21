//! Network transport for validation requests.

use crate::error::{GateError, GateResult};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

/// Fetches a URL and returns its body as text.
///
/// An `Err` means the request never produced an answer (connection refused,
/// timeout, truncated body) and may be retried. A response with any status
/// code is an answer and comes back as `Ok`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn fetch_text(&self, url: &Url) -> GateResult<String>;
}

/// HTTP transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport with the given per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialised.
    pub fn new(timeout: Duration) -> GateResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GateError::Network(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Wraps an existing client.
    #[must_use]
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn fetch_text(&self, url: &Url) -> GateResult<String> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;
        debug!(%status, len = bytes.len(), "validation response received");
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
