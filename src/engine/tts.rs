//! Text-to-speech client implementation.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::backend::{HttpTransport, SynthesisRequest, Transport, TransportError};
use crate::config::{Config, ConfigError, Overrides};
use crate::playback::{AudioRegistry, PlaybackHandle};
use crate::text::{chunk, normalize};
use crate::voice::{Language, Speaker};

/// Text sent by [`TextToSpeechClient::validate_key`].
pub const PROBE_TEXT: &str = "Hello";

/// Errors that can occur during synthesis.
#[derive(Error, Debug)]
pub enum TtsError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Remote service error ({status}): {body}")]
    RemoteService { status: u16, body: String },

    #[error("Nothing to synthesize: text is empty after normalization")]
    EmptyText,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Synthesized audio as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisResult {
    pub audio: Vec<u8>,
    /// Content type reported by the service, if any.
    pub content_type: Option<String>,
}

impl SynthesisResult {
    /// Returns true if the payload carries a RIFF/WAVE header.
    pub fn is_wav(&self) -> bool {
        self.audio.len() >= 12 && &self.audio[0..4] == b"RIFF" && &self.audio[8..12] == b"WAVE"
    }
}

/// Per-call overrides for a synthesis request.
///
/// Unset fields keep the request defaults; set fields always win.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SynthesisOptions {
    pub language: Option<Language>,
    pub speaker: Option<Speaker>,
    pub pitch: Option<f32>,
    pub pace: Option<f32>,
    pub loudness: Option<f32>,
    pub sample_rate_hz: Option<u32>,
    pub preprocessing_enabled: Option<bool>,
    pub model: Option<String>,
}

impl SynthesisOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_language(mut self, language: Language) -> Self {
        self.language = Some(language);
        self
    }

    pub fn with_speaker(mut self, speaker: Speaker) -> Self {
        self.speaker = Some(speaker);
        self
    }

    pub fn with_pitch(mut self, pitch: f32) -> Self {
        self.pitch = Some(pitch);
        self
    }

    pub fn with_pace(mut self, pace: f32) -> Self {
        self.pace = Some(pace);
        self
    }

    pub fn with_loudness(mut self, loudness: f32) -> Self {
        self.loudness = Some(loudness);
        self
    }

    pub fn with_sample_rate(mut self, sample_rate_hz: u32) -> Self {
        self.sample_rate_hz = Some(sample_rate_hz);
        self
    }

    pub fn with_preprocessing(mut self, enabled: bool) -> Self {
        self.preprocessing_enabled = Some(enabled);
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Build a request for `texts`: defaults first, then every set override.
    pub fn to_request(&self, texts: Vec<String>) -> SynthesisRequest {
        let mut request = SynthesisRequest::new(
            texts,
            Language::default().code(),
            Speaker::default().id(),
        );

        if let Some(language) = self.language {
            request.language_code = language.code().to_string();
        }
        if let Some(speaker) = self.speaker {
            request.speaker = speaker.id().to_string();
        }
        if let Some(pitch) = self.pitch {
            request.pitch = pitch;
        }
        if let Some(pace) = self.pace {
            request.pace = pace;
        }
        if let Some(loudness) = self.loudness {
            request.loudness = loudness;
        }
        if let Some(rate) = self.sample_rate_hz {
            request.sample_rate_hz = rate;
        }
        if let Some(enabled) = self.preprocessing_enabled {
            request.preprocessing_enabled = enabled;
        }
        if let Some(model) = &self.model {
            request.model = model.clone();
        }

        request
    }
}

/// Client for the remote text-to-speech service.
///
/// Holds an immutable [`Config`] and is safe to share across tasks. Every call
/// is a single attempt: no retries, no timeout, no fallback.
pub struct TextToSpeechClient<T: Transport = HttpTransport> {
    config: Config,
    transport: T,
    registry: AudioRegistry,
}

impl TextToSpeechClient<HttpTransport> {
    /// Create a client that talks HTTP.
    pub fn new(config: Config) -> Self {
        Self::with_transport(config, HttpTransport::new())
    }

    /// Create an HTTP client from the config file and environment.
    pub fn from_env() -> Result<Self, TtsError> {
        Ok(Self::new(Config::load(Overrides::default())?))
    }
}

impl<T: Transport> TextToSpeechClient<T> {
    /// Create a client over a custom transport.
    pub fn with_transport(config: Config, transport: T) -> Self {
        Self {
            config,
            transport,
            registry: AudioRegistry::new(),
        }
    }

    /// Returns the client configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the registry that backs playback handles.
    pub fn registry(&self) -> &AudioRegistry {
        &self.registry
    }

    /// Normalize `text` and synthesize it in a single request.
    pub async fn synthesize(
        &self,
        text: &str,
        options: &SynthesisOptions,
    ) -> Result<SynthesisResult, TtsError> {
        let request = options.to_request(vec![normalize(text)]);
        self.send(&request).await
    }

    /// Synthesize and register the audio for playback.
    ///
    /// The caller owns the returned handle and must pass it to
    /// [`AudioRegistry::release`] once playback is done.
    pub async fn synthesize_to_playable_handle(
        &self,
        text: &str,
        options: &SynthesisOptions,
    ) -> Result<PlaybackHandle, TtsError> {
        let audio = self.synthesize(text, options).await?;
        Ok(self.registry.register(audio))
    }

    /// Normalize and chunk `text`, then synthesize each chunk in order.
    ///
    /// The first failure aborts the whole call.
    pub async fn synthesize_chunks(
        &self,
        text: &str,
        options: &SynthesisOptions,
        max_length: usize,
    ) -> Result<Vec<SynthesisResult>, TtsError> {
        let chunks = chunk(&normalize(text), max_length);
        if chunks.is_empty() {
            return Err(TtsError::EmptyText);
        }

        debug!(chunks = chunks.len(), max_length, "synthesizing chunked text");

        let mut results = Vec::with_capacity(chunks.len());
        for piece in chunks {
            let request = options.to_request(vec![piece]);
            results.push(self.send(&request).await?);
        }
        Ok(results)
    }

    /// Probe the API key with a tiny English request.
    ///
    /// Any failure yields `false`; this never returns an error.
    pub async fn validate_key(&self) -> bool {
        let options = SynthesisOptions::new().with_language(Language::English);
        match self.synthesize(PROBE_TEXT, &options).await {
            Ok(_) => {
                info!("API key validated");
                true
            }
            Err(e) => {
                info!(error = %e, "API key validation failed");
                false
            }
        }
    }

    async fn send(&self, request: &SynthesisRequest) -> Result<SynthesisResult, TtsError> {
        if !request.has_valid_texts() {
            return Err(TtsError::EmptyText);
        }

        debug!(
            language = request.language_code.as_str(),
            speaker = request.speaker.as_str(),
            model = request.model.as_str(),
            "sending synthesis request"
        );

        let response = self
            .transport
            .post_json(&self.config.endpoint(), self.config.api_key(), request)
            .await?;

        if !response.is_success() {
            let body = response.body_text();
            warn!(status = response.status, body = body.as_str(), "synthesis rejected");
            return Err(TtsError::RemoteService {
                status: response.status,
                body,
            });
        }

        Ok(SynthesisResult {
            audio: response.body,
            content_type: response.content_type,
        })
    }
}
