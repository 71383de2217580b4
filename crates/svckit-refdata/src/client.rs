//! HTTP client for fetching reference data sources.
//!
//! Thin wrapper over `reqwest` with a fixed timeout. No retry or backoff:
//! these are one-shot batch fetches and a failure should surface.

use crate::error::{RefDataError, RefDataResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// Default timeout for source fetches.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for downloading reference data files.
pub struct RefDataClient {
    client: Client,
}

impl RefDataClient {
    /// Create a client with the default timeout.
    pub fn new() -> RefDataResult<Self> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .build()
            .map_err(|e| RefDataError::HttpClient(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Fetch a URL and deserialize the JSON body.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> RefDataResult<T> {
        info!(url = %url, "Fetching JSON source");

        let response = self.get_checked(url).await?;
        let body = response
            .json::<T>()
            .await
            .map_err(|e| RefDataError::HttpClient(format!("Failed to parse response: {e}")))?;

        debug!(url = %url, "JSON source fetched");
        Ok(body)
    }

    /// Fetch a URL as plain text.
    pub async fn get_text(&self, url: &str) -> RefDataResult<String> {
        info!(url = %url, "Fetching text source");

        let response = self.get_checked(url).await?;
        let body = response
            .text()
            .await
            .map_err(|e| RefDataError::HttpClient(format!("Failed to read response body: {e}")))?;

        debug!(url = %url, bytes = body.len(), "Text source fetched");
        Ok(body)
    }

    async fn get_checked(&self, url: &str) -> RefDataResult<reqwest::Response> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RefDataError::HttpClient(format!("HTTP request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RefDataError::HttpClient(format!("HTTP {status}: {body}")));
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unreachable_source_maps_to_http_client_error() {
        let client = RefDataClient::new().unwrap();

        // Grab a free port and release it so the connect is refused.
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let result = client
            .get_text(&format!("http://127.0.0.1:{port}/codes.csv"))
            .await;

        match result {
            Err(RefDataError::HttpClient(msg)) => {
                assert!(msg.contains("HTTP request failed"), "unexpected message: {msg}");
            }
            other => panic!("expected HttpClient error, got {other:?}"),
        }
    }
}
