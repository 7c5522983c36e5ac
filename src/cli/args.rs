//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

use crate::config::{API_KEY_ENV, BASE_URL_ENV, Overrides};
use crate::engine::SynthesisOptions;
use crate::text::{DEFAULT_MAX_CHUNK_LENGTH, DEFAULT_WORDS_PER_MINUTE};
use crate::voice::{Language, Speaker};

/// Text-to-speech CLI for the Sarvam speech API.
#[derive(Parser, Debug)]
#[command(name = "sarvam-tts")]
#[command(about = "Text-to-speech using the Sarvam AI speech API")]
#[command(version)]
pub struct Args {
    /// Text to generate speech from
    #[arg(short, long)]
    pub generate: Option<String>,

    /// Output audio file
    #[arg(short, long, default_value = "output.wav")]
    pub output: PathBuf,

    /// Target language code
    #[arg(short, long, value_enum, default_value = "hi-IN")]
    pub language: Language,

    /// Speaker voice
    #[arg(short, long, value_enum, default_value = "meera")]
    pub speaker: Speaker,

    /// Pitch shift (-0.75 to 0.75)
    #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
    pub pitch: f32,

    /// Speech pace multiplier (0.5 to 2.0)
    #[arg(long, default_value = "1.0")]
    pub pace: f32,

    /// Loudness multiplier (0.3 to 3.0)
    #[arg(long, default_value = "1.0")]
    pub loudness: f32,

    /// Output sample rate in Hz
    #[arg(long, default_value = "8000")]
    pub sample_rate: u32,

    /// Maximum characters per request; longer text is split on sentences
    #[arg(long, default_value_t = DEFAULT_MAX_CHUNK_LENGTH)]
    pub max_chunk: usize,

    /// Print the estimated speaking time of the text and exit
    #[arg(long)]
    pub estimate: bool,

    /// Words per minute used by --estimate
    #[arg(long, default_value_t = DEFAULT_WORDS_PER_MINUTE)]
    pub wpm: u32,

    /// Check that the API key is accepted
    #[arg(long)]
    pub validate_key: bool,

    /// List supported languages
    #[arg(long)]
    pub list_languages: bool,

    /// List supported speakers
    #[arg(long)]
    pub list_speakers: bool,

    /// API key (falls back to ~/.sarvam-tts/config.json)
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// API base URL
    #[arg(long, env = BASE_URL_ENV)]
    pub base_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Errors for argument values outside the accepted ranges.
#[derive(Error, Debug, PartialEq)]
pub enum ArgsError {
    #[error("Pitch must be between -0.75 and 0.75, got {0}")]
    PitchOutOfRange(f32),

    #[error("Pace must be between 0.5 and 2.0, got {0}")]
    PaceOutOfRange(f32),

    #[error("Loudness must be between 0.3 and 3.0, got {0}")]
    LoudnessOutOfRange(f32),

    #[error("Chunk length must be greater than zero")]
    ZeroChunkLength,
}

impl Args {
    /// Check tuning values against the ranges the service accepts.
    pub fn validate(&self) -> Result<(), ArgsError> {
        if !(-0.75..=0.75).contains(&self.pitch) {
            return Err(ArgsError::PitchOutOfRange(self.pitch));
        }
        if !(0.5..=2.0).contains(&self.pace) {
            return Err(ArgsError::PaceOutOfRange(self.pace));
        }
        if !(0.3..=3.0).contains(&self.loudness) {
            return Err(ArgsError::LoudnessOutOfRange(self.loudness));
        }
        if self.max_chunk == 0 {
            return Err(ArgsError::ZeroChunkLength);
        }
        Ok(())
    }

    /// Synthesis options built from the flags.
    pub fn options(&self) -> SynthesisOptions {
        SynthesisOptions::new()
            .with_language(self.language)
            .with_speaker(self.speaker)
            .with_pitch(self.pitch)
            .with_pace(self.pace)
            .with_loudness(self.loudness)
            .with_sample_rate(self.sample_rate)
    }

    /// Configuration values given on the command line.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            api_key: self.api_key.clone(),
            base_url: self.base_url.clone(),
        }
    }
}
