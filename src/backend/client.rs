//! HTTP transport backed by reqwest.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use super::Transport;
use super::types::{RawResponse, SynthesisRequest, TransportError};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "api-subscription-key";

/// reqwest-based transport.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport with a default reqwest client (no timeout).
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Create a transport around a preconfigured reqwest client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_json(
        &self,
        url: &str,
        api_key: &str,
        body: &SynthesisRequest,
    ) -> Result<RawResponse, TransportError> {
        debug!(url, inputs = body.texts.len(), "POST");

        let response = self
            .client
            .post(url)
            .header(API_KEY_HEADER, api_key)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::ConnectionFailed(e.to_string()))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let body = response
            .bytes()
            .await
            .map(|b| b.to_vec())
            .map_err(|e| TransportError::InvalidResponse(e.to_string()))?;

        debug!(status, bytes = body.len(), "response received");

        Ok(RawResponse {
            status,
            content_type,
            body,
        })
    }
}
