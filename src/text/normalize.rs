//! Markup stripping for speech input.

use once_cell::sync::Lazy;
use regex::Regex;

static BRACKETED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[[^\]]*\]").expect("valid regex"));
static PARENTHETICAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\([^)]*\)").expect("valid regex"));
static NUMBERED_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+[.)]$").expect("valid regex"));

/// Strip formatting artifacts from text so it reads naturally when spoken.
///
/// Emphasis markers (`*`, `**`), heading markers, bullet and numbered-list
/// markers, `[...]` and `(...)` spans are removed. Whitespace is collapsed to
/// single spaces and the result is trimmed.
///
/// # Examples
/// ```
/// use sarvam_tts::text::normalize;
/// assert_eq!(normalize("**Hello** (world) #Title 1. Item"), "Hello Title Item");
/// ```
pub fn normalize(text: &str) -> String {
    let text = text.replace('*', "");
    let text = BRACKETED_RE.replace_all(&text, " ");
    let text = PARENTHETICAL_RE.replace_all(&text, " ");

    let mut words = Vec::new();
    for line in text.lines() {
        let mut prev = Prev::LineStart;
        for raw in line.split_whitespace() {
            let word = raw.trim_start_matches('#');
            if word.is_empty() || is_bullet(word) {
                prev = Prev::Marker;
                continue;
            }
            // "3." after ordinary words ends a sentence; elsewhere it opens a list item.
            if prev != Prev::Word && NUMBERED_MARKER_RE.is_match(word) {
                prev = Prev::Marker;
                continue;
            }
            prev = if raw.starts_with('#') {
                Prev::Heading
            } else {
                Prev::Word
            };
            words.push(word);
        }
    }

    words.join(" ")
}

/// What preceded the current word on its line.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Prev {
    LineStart,
    Marker,
    Heading,
    Word,
}

fn is_bullet(word: &str) -> bool {
    matches!(word, "-" | "+" | "•")
}
