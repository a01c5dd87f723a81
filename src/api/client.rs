//! HTTP client for the status endpoint.

use std::time::Duration;

use reqwest::Client;
use thiserror::Error;

use super::types::PairingStatus;

/// Errors that can occur when querying the status endpoint.
#[derive(Debug, Error)]
pub enum StatusError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Server returned status {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Status endpoint client.
#[derive(Clone)]
pub struct StatusClient {
    client: Client,
    endpoint: String,
}

impl StatusClient {
    /// Create a new status client for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, StatusError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .connect_timeout(Duration::from_secs(2))
            .build()
            .map_err(StatusError::Http)?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Endpoint URL this client polls.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issue one GET against the status endpoint and decode the body.
    pub async fn fetch_status(&self) -> Result<PairingStatus, StatusError> {
        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    StatusError::Connection(format!("Cannot connect to {}", self.endpoint))
                } else {
                    StatusError::Http(e)
                }
            })?;

        let code = response.status();
        if !code.is_success() {
            return Err(StatusError::Status(code.as_u16()));
        }

        response
            .json::<PairingStatus>()
            .await
            .map_err(|e| StatusError::Parse(e.to_string()))
    }

    /// Fetch that never propagates a failure: connection errors, non-2xx
    /// responses, and unparseable bodies all collapse to `None`, with one
    /// diagnostic line per failure.
    pub async fn try_fetch(&self) -> Option<PairingStatus> {
        match self.fetch_status().await {
            Ok(status) => Some(status),
            Err(e) => {
                tracing::warn!("status fetch failed: {}", e);
                None
            }
        }
    }
}
