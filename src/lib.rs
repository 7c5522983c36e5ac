//! sarvam-tts: text-to-speech client for the Sarvam AI speech API.
//!
//! This crate cleans formatted text for speech, splits long input on sentence
//! boundaries, and synthesizes audio through the remote `text-to-speech`
//! endpoint. A small command-line interface is included.

pub mod audio;
pub mod backend;
pub mod cli;
pub mod config;
pub mod engine;
pub mod playback;
pub mod text;
pub mod voice;

pub use engine::{SynthesisOptions, SynthesisResult, TextToSpeechClient, TtsError};
pub use text::{chunk, estimate_duration_ms, normalize};
