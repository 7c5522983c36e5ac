//! Wire types for the text-to-speech endpoint.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when no usable response was obtained from the remote service.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// Default synthesis model.
pub const DEFAULT_MODEL: &str = "bulbul:v1";

/// Default output sample rate, in Hz.
pub const DEFAULT_SAMPLE_RATE_HZ: u32 = 8000;

/// JSON body of a synthesis call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SynthesisRequest {
    #[serde(rename = "inputs")]
    pub texts: Vec<String>,
    #[serde(rename = "target_language_code")]
    pub language_code: String,
    pub speaker: String,
    #[serde(default)]
    pub pitch: f32,
    #[serde(default = "default_unit")]
    pub pace: f32,
    #[serde(default = "default_unit")]
    pub loudness: f32,
    #[serde(rename = "speech_sample_rate", default = "default_sample_rate")]
    pub sample_rate_hz: u32,
    #[serde(rename = "enable_preprocessing", default = "default_true")]
    pub preprocessing_enabled: bool,
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_unit() -> f32 {
    1.0
}

fn default_sample_rate() -> u32 {
    DEFAULT_SAMPLE_RATE_HZ
}

fn default_true() -> bool {
    true
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl SynthesisRequest {
    /// Create a request with every tuning field at its default.
    pub fn new(
        texts: Vec<String>,
        language_code: impl Into<String>,
        speaker: impl Into<String>,
    ) -> Self {
        Self {
            texts,
            language_code: language_code.into(),
            speaker: speaker.into(),
            pitch: 0.0,
            pace: default_unit(),
            loudness: default_unit(),
            sample_rate_hz: DEFAULT_SAMPLE_RATE_HZ,
            preprocessing_enabled: true,
            model: default_model(),
        }
    }

    /// Returns true when there is at least one input and none is blank.
    pub fn has_valid_texts(&self) -> bool {
        !self.texts.is_empty() && self.texts.iter().all(|t| !t.trim().is_empty())
    }
}

/// Status, content type and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Returns true for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Body decoded as text, replacing invalid UTF-8.
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
