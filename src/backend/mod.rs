//! Backend communication with the text-to-speech service.
//!
//! The [`Transport`] trait abstracts the HTTP exchange so the client can be
//! exercised against mock implementations in tests.

mod client;
mod types;

pub use client::{API_KEY_HEADER, HttpTransport};
pub use types::{
    DEFAULT_MODEL, DEFAULT_SAMPLE_RATE_HZ, RawResponse, SynthesisRequest, TransportError,
};

use async_trait::async_trait;

/// Trait for posting a synthesis request to the remote service.
///
/// Implementations return every HTTP status as a [`RawResponse`]; only a
/// missing or unreadable response is a [`TransportError`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// POST `body` as JSON to `url`, authenticated with `api_key`.
    async fn post_json(
        &self,
        url: &str,
        api_key: &str,
        body: &SynthesisRequest,
    ) -> Result<RawResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // Transport trait tests with mocks
    // ===========================================

    #[tokio::test]
    async fn test_mock_transport_success() {
        let mut mock = MockTransport::new();

        mock.expect_post_json()
            .withf(|url, key, body| {
                url == "https://api.sarvam.ai/text-to-speech"
                    && key == "secret"
                    && body.texts == vec!["Hello".to_string()]
            })
            .times(1)
            .returning(|_, _, _| {
                Ok(RawResponse {
                    status: 200,
                    content_type: Some("audio/wav".to_string()),
                    body: b"RIFF\x00\x00\x00\x00WAVEfmt ".to_vec(),
                })
            });

        let request = SynthesisRequest::new(vec!["Hello".to_string()], "hi-IN", "meera");
        let response = mock
            .post_json("https://api.sarvam.ai/text-to-speech", "secret", &request)
            .await
            .unwrap();

        assert!(response.is_success());
        assert!(response.body.starts_with(b"RIFF"));
    }

    #[tokio::test]
    async fn test_mock_transport_connection_failure() {
        let mut mock = MockTransport::new();

        mock.expect_post_json().times(1).returning(|_, _, _| {
            Err(TransportError::ConnectionFailed(
                "Connection refused".to_string(),
            ))
        });

        let request = SynthesisRequest::new(vec!["Hello".to_string()], "hi-IN", "meera");
        let result = mock.post_json("http://localhost:1", "k", &request).await;

        assert!(matches!(
            result.unwrap_err(),
            TransportError::ConnectionFailed(_)
        ));
    }
}
