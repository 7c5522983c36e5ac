//! Supported target languages and speaker voices.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when a language or speaker code is not in the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown language code: {0}")]
    UnknownLanguage(String),

    #[error("Unknown speaker: {0}")]
    UnknownSpeaker(String),
}

/// Target language for synthesis.
#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    /// Hindi
    #[default]
    #[value(name = "hi-IN")]
    #[serde(rename = "hi-IN")]
    Hindi,

    /// Bengali
    #[value(name = "bn-IN")]
    #[serde(rename = "bn-IN")]
    Bengali,

    /// Kannada
    #[value(name = "kn-IN")]
    #[serde(rename = "kn-IN")]
    Kannada,

    /// Malayalam
    #[value(name = "ml-IN")]
    #[serde(rename = "ml-IN")]
    Malayalam,

    /// Marathi
    #[value(name = "mr-IN")]
    #[serde(rename = "mr-IN")]
    Marathi,

    /// Odia
    #[value(name = "od-IN")]
    #[serde(rename = "od-IN")]
    Odia,

    /// Punjabi
    #[value(name = "pa-IN")]
    #[serde(rename = "pa-IN")]
    Punjabi,

    /// Tamil
    #[value(name = "ta-IN")]
    #[serde(rename = "ta-IN")]
    Tamil,

    /// Telugu
    #[value(name = "te-IN")]
    #[serde(rename = "te-IN")]
    Telugu,

    /// English (India)
    #[value(name = "en-IN")]
    #[serde(rename = "en-IN")]
    English,

    /// Gujarati
    #[value(name = "gu-IN")]
    #[serde(rename = "gu-IN")]
    Gujarati,
}

impl Language {
    /// Every supported language, in catalog order.
    pub const ALL: [Language; 11] = [
        Language::Hindi,
        Language::Bengali,
        Language::Kannada,
        Language::Malayalam,
        Language::Marathi,
        Language::Odia,
        Language::Punjabi,
        Language::Tamil,
        Language::Telugu,
        Language::English,
        Language::Gujarati,
    ];

    /// Returns the wire code for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Hindi => "hi-IN",
            Language::Bengali => "bn-IN",
            Language::Kannada => "kn-IN",
            Language::Malayalam => "ml-IN",
            Language::Marathi => "mr-IN",
            Language::Odia => "od-IN",
            Language::Punjabi => "pa-IN",
            Language::Tamil => "ta-IN",
            Language::Telugu => "te-IN",
            Language::English => "en-IN",
            Language::Gujarati => "gu-IN",
        }
    }

    /// Returns the English name of the language.
    pub fn name(&self) -> &'static str {
        match self {
            Language::Hindi => "Hindi",
            Language::Bengali => "Bengali",
            Language::Kannada => "Kannada",
            Language::Malayalam => "Malayalam",
            Language::Marathi => "Marathi",
            Language::Odia => "Odia",
            Language::Punjabi => "Punjabi",
            Language::Tamil => "Tamil",
            Language::Telugu => "Telugu",
            Language::English => "English",
            Language::Gujarati => "Gujarati",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::UnknownLanguage(s.to_string()))
    }
}

/// Speaker voice identifier.
#[derive(ValueEnum, Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    #[default]
    Meera,
    Pavithra,
    Maitreyi,
    Arvind,
    Amol,
    Amartya,
    Diya,
    Neel,
    Misha,
    Vian,
    Arjun,
    Maya,
}

impl Speaker {
    /// Every supported speaker, in catalog order.
    pub const ALL: [Speaker; 12] = [
        Speaker::Meera,
        Speaker::Pavithra,
        Speaker::Maitreyi,
        Speaker::Arvind,
        Speaker::Amol,
        Speaker::Amartya,
        Speaker::Diya,
        Speaker::Neel,
        Speaker::Misha,
        Speaker::Vian,
        Speaker::Arjun,
        Speaker::Maya,
    ];

    /// Returns the wire identifier for this speaker.
    pub fn id(&self) -> &'static str {
        match self {
            Speaker::Meera => "meera",
            Speaker::Pavithra => "pavithra",
            Speaker::Maitreyi => "maitreyi",
            Speaker::Arvind => "arvind",
            Speaker::Amol => "amol",
            Speaker::Amartya => "amartya",
            Speaker::Diya => "diya",
            Speaker::Neel => "neel",
            Speaker::Misha => "misha",
            Speaker::Vian => "vian",
            Speaker::Arjun => "arjun",
            Speaker::Maya => "maya",
        }
    }

    /// Returns true for the female voices.
    pub fn is_female(&self) -> bool {
        matches!(
            self,
            Speaker::Meera
                | Speaker::Pavithra
                | Speaker::Maitreyi
                | Speaker::Diya
                | Speaker::Misha
                | Speaker::Maya
        )
    }
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Speaker {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Speaker::ALL
            .into_iter()
            .find(|speaker| speaker.id().eq_ignore_ascii_case(s))
            .ok_or_else(|| CatalogError::UnknownSpeaker(s.to_string()))
    }
}
