//! Language and speaker catalog.
//!
//! The service accepts a fixed set of language codes and speaker voices;
//! both are modelled as closed enums.

mod catalog;

pub use catalog::{CatalogError, Language, Speaker};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_language_default_is_hindi() {
        assert_eq!(Language::default(), Language::Hindi);
        assert_eq!(Language::default().code(), "hi-IN");
    }

    #[test]
    fn test_language_codes_unique() {
        let codes: HashSet<&str> = Language::ALL.iter().map(|l| l.code()).collect();
        assert_eq!(codes.len(), Language::ALL.len());
    }

    #[test]
    fn test_language_parse() {
        assert_eq!("en-IN".parse::<Language>().unwrap(), Language::English);
        assert_eq!("TA-in".parse::<Language>().unwrap(), Language::Tamil);
        assert_eq!(
            "fr-FR".parse::<Language>().unwrap_err(),
            CatalogError::UnknownLanguage("fr-FR".to_string())
        );
    }

    #[test]
    fn test_language_display_and_serde_agree() {
        for language in Language::ALL {
            let json = serde_json::to_string(&language).unwrap();
            assert_eq!(json, format!("\"{language}\""));
        }
    }

    #[test]
    fn test_speaker_default_is_meera() {
        assert_eq!(Speaker::default(), Speaker::Meera);
        assert!(Speaker::Meera.is_female());
        assert!(!Speaker::Arvind.is_female());
    }

    #[test]
    fn test_speaker_parse() {
        assert_eq!("arjun".parse::<Speaker>().unwrap(), Speaker::Arjun);
        assert_eq!("Maya".parse::<Speaker>().unwrap(), Speaker::Maya);
        assert!(matches!(
            "alice".parse::<Speaker>(),
            Err(CatalogError::UnknownSpeaker(_))
        ));
    }

    #[test]
    fn test_speaker_display_and_serde_agree() {
        for speaker in Speaker::ALL {
            let json = serde_json::to_string(&speaker).unwrap();
            assert_eq!(json, format!("\"{}\"", speaker.id()));
            assert_eq!(speaker.to_string(), speaker.id());
        }
    }
}
