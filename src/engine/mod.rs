//! Text-to-speech client.
//!
//! Coordinates text preparation, the transport and the playback registry.

mod tts;

pub use tts::{PROBE_TEXT, SynthesisOptions, SynthesisResult, TextToSpeechClient, TtsError};
