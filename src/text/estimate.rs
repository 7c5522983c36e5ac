//! Speaking-time estimates.

/// Default speaking rate used for duration estimates.
pub const DEFAULT_WORDS_PER_MINUTE: u32 = 150;

/// Estimate how long `text` takes to speak, in milliseconds.
///
/// Words are whitespace-separated tokens. The result is rounded up and is only
/// meant for progress display.
pub fn estimate_duration_ms(text: &str, words_per_minute: u32) -> u64 {
    if words_per_minute == 0 {
        return 0;
    }

    let words = text.split_whitespace().count() as u64;
    (words * 60_000).div_ceil(u64::from(words_per_minute))
}
