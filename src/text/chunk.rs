//! Sentence-boundary chunking for per-request size limits.

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid regex"));

/// Default maximum chunk length, in characters.
pub const DEFAULT_MAX_CHUNK_LENGTH: usize = 1000;

/// Split text into chunks of at most `max_length` characters on sentence
/// boundaries.
///
/// Text that already fits is returned unchanged as a single chunk. Longer text
/// is split on runs of `.`, `!` and `?`; the fragments are re-joined greedily
/// with `". "` so every chunk ends with a period.
///
/// A sentence whose length including its period exceeds `max_length` is
/// emitted as its own oversized chunk, so a sentence of exactly `max_length`
/// characters yields a chunk one character over. It is never split
/// mid-sentence.
pub fn chunk(text: &str, max_length: usize) -> Vec<String> {
    if text.chars().count() <= max_length {
        return vec![text.to_string()];
    }

    let mut chunks = Vec::new();
    let mut buffer = String::new();
    let mut buffer_len = 0;

    for fragment in SENTENCE_SPLIT_RE.split(text) {
        let fragment = fragment.trim();
        if fragment.is_empty() {
            continue;
        }

        let fragment_len = fragment.chars().count();
        // buffer holds "a. b. " so the flushed form is one char shorter than
        // buffer + fragment + ". "
        if buffer_len > 0 && buffer_len + fragment_len + 1 > max_length {
            chunks.push(buffer.trim_end().to_string());
            buffer.clear();
            buffer_len = 0;
        }

        buffer.push_str(fragment);
        buffer.push_str(". ");
        buffer_len += fragment_len + 2;
    }

    let rest = buffer.trim_end();
    if !rest.is_empty() {
        chunks.push(rest.to_string());
    }

    chunks
}
