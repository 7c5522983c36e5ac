//! In-process registry backing playback handles.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::engine::SynthesisResult;

/// URI scheme prefix of every handle issued by a registry.
pub const HANDLE_PREFIX: &str = "blob:sarvam-tts/";

/// Reference to audio held in an [`AudioRegistry`].
///
/// The audio stays registered until the handle is passed to
/// [`AudioRegistry::release`]. Dropping the handle does not free it.
#[derive(Debug, PartialEq, Eq, Hash)]
#[must_use = "registered audio is only freed by AudioRegistry::release"]
pub struct PlaybackHandle {
    uri: String,
}

impl PlaybackHandle {
    /// URI that resolves to the audio through [`AudioRegistry::resolve`].
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

/// Summary of a handle that has not been released yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutstandingHandle {
    pub uri: String,
    pub bytes: usize,
    pub created_at: DateTime<Utc>,
}

struct Entry {
    audio: Arc<SynthesisResult>,
    created_at: DateTime<Utc>,
}

/// Shared table of registered audio, keyed by handle URI.
///
/// Cloning the registry shares the same table.
#[derive(Clone, Default)]
pub struct AudioRegistry {
    entries: Arc<Mutex<HashMap<String, Entry>>>,
}

impl AudioRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register audio and return a handle to it.
    pub fn register(&self, audio: SynthesisResult) -> PlaybackHandle {
        let uri = format!("{HANDLE_PREFIX}{}", Uuid::new_v4());
        debug!(uri = uri.as_str(), bytes = audio.audio.len(), "registering audio");

        self.lock().insert(
            uri.clone(),
            Entry {
                audio: Arc::new(audio),
                created_at: Utc::now(),
            },
        );

        PlaybackHandle { uri }
    }

    /// Look up the audio behind a handle URI.
    pub fn resolve(&self, uri: &str) -> Option<Arc<SynthesisResult>> {
        self.lock().get(uri).map(|entry| Arc::clone(&entry.audio))
    }

    /// Release a handle. Returns false if it was not registered here.
    pub fn release(&self, handle: PlaybackHandle) -> bool {
        let removed = self.lock().remove(&handle.uri).is_some();
        if !removed {
            warn!(uri = handle.uri.as_str(), "release of unknown playback handle");
        }
        removed
    }

    /// Number of handles not yet released.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns true when every handle has been released.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Handles not yet released, oldest first.
    pub fn outstanding(&self) -> Vec<OutstandingHandle> {
        let mut handles: Vec<OutstandingHandle> = self
            .lock()
            .iter()
            .map(|(uri, entry)| OutstandingHandle {
                uri: uri.clone(),
                bytes: entry.audio.audio.len(),
                created_at: entry.created_at,
            })
            .collect();
        handles.sort_by_key(|h| h.created_at);
        handles
    }
}
