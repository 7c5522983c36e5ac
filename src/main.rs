//! sarvam-tts CLI entry point.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result, bail};
use clap::Parser;
use sarvam_tts::audio::{merge_wav, wav_duration_ms};
use sarvam_tts::cli::Args;
use sarvam_tts::config::Config;
use sarvam_tts::text::{estimate_duration_ms, normalize};
use sarvam_tts::voice::{Language, Speaker};
use sarvam_tts::{SynthesisResult, TextToSpeechClient};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    setup_tracing(args.verbose);

    // Handle offline commands first
    if args.list_languages {
        list_languages();
        return Ok(());
    }

    if args.list_speakers {
        list_speakers();
        return Ok(());
    }

    args.validate()?;

    if args.estimate {
        let text = args
            .generate
            .as_deref()
            .context("--estimate needs text passed with -g")?;
        let ms = estimate_duration_ms(&normalize(text), args.wpm);
        println!("Estimated duration: {:.1}s", ms as f64 / 1000.0);
        return Ok(());
    }

    let config = Config::load(args.overrides()).context("Failed to load configuration")?;
    debug!(?config, "configuration loaded");
    let client = TextToSpeechClient::new(config);

    if args.validate_key {
        if client.validate_key().await {
            println!("API key is valid.");
            return Ok(());
        }
        bail!("API key was rejected or the service is unreachable");
    }

    if let Some(text) = &args.generate {
        return generate_speech(&client, text, &args).await;
    }

    eprintln!("No action specified. Use -g to generate speech.");
    eprintln!("Run with --help for usage information.");
    Ok(())
}

fn setup_tracing(verbose: bool) {
    let default = if verbose { "sarvam_tts=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn list_languages() {
    println!("Supported languages:");
    for language in Language::ALL {
        println!("  {}  {}", language.code(), language.name());
    }
}

fn list_speakers() {
    println!("Available speakers:");
    for speaker in Speaker::ALL {
        let kind = if speaker.is_female() { "female" } else { "male" };
        println!("  {} ({kind})", speaker.id());
    }
}

async fn generate_speech(client: &TextToSpeechClient, text: &str, args: &Args) -> Result<()> {
    println!("Generating speech...");
    println!("  Language: {}", args.language.name());
    println!("  Speaker: {}", args.speaker);
    println!("  Pace: {:.1}x", args.pace);

    let parts = client
        .synthesize_chunks(text, &args.options(), args.max_chunk)
        .await
        .context("Failed to synthesize speech")?;

    let audio_data = join_parts(parts)?;

    let mut file = fs::File::create(&args.output)
        .with_context(|| format!("Failed to create output file: {}", args.output.display()))?;

    file.write_all(&audio_data)
        .with_context(|| format!("Failed to write audio to: {}", args.output.display()))?;

    println!("Audio saved to: {}", args.output.display());
    println!("  Size: {} bytes", audio_data.len());
    if let Ok(ms) = wav_duration_ms(&audio_data) {
        println!("  Duration: {:.2}s", ms as f64 / 1000.0);
    }

    Ok(())
}

/// A single part is written as-is; several parts must be WAV to be joined.
fn join_parts(mut parts: Vec<SynthesisResult>) -> Result<Vec<u8>> {
    if parts.len() == 1 {
        return Ok(parts.remove(0).audio);
    }

    if !parts.iter().all(SynthesisResult::is_wav) {
        bail!("Service returned non-WAV audio for a multi-part request; try a larger --max-chunk");
    }

    debug!(parts = parts.len(), "merging audio parts");
    merge_wav(&parts).context("Failed to merge audio parts")
}
