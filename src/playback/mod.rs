//! Playable handles for synthesized audio.
//!
//! Audio is registered under a `blob:` style URI that a media player can
//! resolve. Handles are caller-owned and must be released explicitly.

mod registry;

pub use registry::{AudioRegistry, HANDLE_PREFIX, OutstandingHandle, PlaybackHandle};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SynthesisResult;

    fn audio(bytes: &[u8]) -> SynthesisResult {
        SynthesisResult {
            audio: bytes.to_vec(),
            content_type: Some("audio/wav".to_string()),
        }
    }

    #[test]
    fn test_register_and_resolve() {
        let registry = AudioRegistry::new();
        let handle = registry.register(audio(b"RIFF1"));

        assert!(handle.uri().starts_with(HANDLE_PREFIX));
        let resolved = registry.resolve(handle.uri()).unwrap();
        assert_eq!(resolved.audio, b"RIFF1");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_handles_are_unique() {
        let registry = AudioRegistry::new();
        let a = registry.register(audio(b"a"));
        let b = registry.register(audio(b"b"));

        assert_ne!(a.uri(), b.uri());
        assert_eq!(registry.resolve(a.uri()).unwrap().audio, b"a");
        assert_eq!(registry.resolve(b.uri()).unwrap().audio, b"b");
    }

    #[test]
    fn test_release_frees_audio() {
        let registry = AudioRegistry::new();
        let handle = registry.register(audio(b"bytes"));
        let uri = handle.uri().to_string();

        assert!(registry.release(handle));
        assert!(registry.resolve(&uri).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_release_in_other_registry_fails() {
        let first = AudioRegistry::new();
        let second = AudioRegistry::new();
        let handle = first.register(audio(b"x"));

        assert!(!second.release(handle));
        assert_eq!(first.len(), 1);
    }

    #[test]
    fn test_dropping_handle_keeps_audio() {
        let registry = AudioRegistry::new();
        let uri = registry.register(audio(b"kept")).uri().to_string();

        assert!(registry.resolve(&uri).is_some());
        assert_eq!(registry.outstanding().len(), 1);
    }

    #[test]
    fn test_clones_share_table() {
        let registry = AudioRegistry::new();
        let shared = registry.clone();
        let handle = registry.register(audio(b"shared"));

        assert!(shared.resolve(handle.uri()).is_some());
        assert!(shared.release(handle));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_outstanding_reports_sizes() {
        let registry = AudioRegistry::new();
        let _a = registry.register(audio(b"12345"));

        let outstanding = registry.outstanding();
        assert_eq!(outstanding.len(), 1);
        assert_eq!(outstanding[0].bytes, 5);
    }
}
