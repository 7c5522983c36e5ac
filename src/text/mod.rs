//! Text preparation for speech synthesis.
//!
//! Turns formatted text into plain speech input, splits long input into
//! request-sized chunks, and estimates speaking time.

mod chunk;
mod estimate;
mod normalize;

pub use chunk::{DEFAULT_MAX_CHUNK_LENGTH, chunk};
pub use estimate::{DEFAULT_WORDS_PER_MINUTE, estimate_duration_ms};
pub use normalize::normalize;
