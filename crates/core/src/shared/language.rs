use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown language '{0}', expected one of: english, spanish, french, german")]
pub struct UnknownLanguage(pub String);

/// A practice language and its phrase-database / recognizer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Spanish,
    French,
    German,
}

impl Language {
    pub const ALL: &'static [Language] = &[
        Language::English,
        Language::Spanish,
        Language::French,
        Language::German,
    ];

    /// Key under which phrase records store this language's text.
    pub fn phrase_key(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
            Language::French => "french",
            Language::German => "german",
        }
    }

    pub fn data_file_name(self) -> String {
        format!("{}.json", self.phrase_key())
    }

    /// Locale handed to the speech recognizer. Spanish targets Mexican Spanish.
    pub fn recognition_locale(self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Spanish => "es-MX",
            Language::French => "fr-FR",
            Language::German => "de-DE",
        }
    }

    pub fn fallback_tts_locale(self) -> &'static str {
        match self {
            Language::English => "en-GB",
            Language::Spanish => "es-ES",
            Language::French => "fr-FR",
            Language::German => "de-DE",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::Spanish => write!(f, "Spanish"),
            Language::French => write!(f, "French"),
            Language::German => write!(f, "German"),
        }
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Language::ALL
            .iter()
            .copied()
            .find(|lang| lang.phrase_key() == key)
            .ok_or(UnknownLanguage(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::lowercase("spanish", Language::Spanish)]
    #[case::capitalized("French", Language::French)]
    #[case::padded("  german ", Language::German)]
    #[case::upper("ENGLISH", Language::English)]
    fn test_parse_language(#[case] input: &str, #[case] expected: Language) {
        assert_eq!(input.parse::<Language>().unwrap(), expected);
    }

    #[test]
    fn test_parse_unknown_language() {
        let err = "klingon".parse::<Language>().unwrap_err();
        assert_eq!(err, UnknownLanguage("klingon".to_string()));
    }

    #[test]
    fn test_data_file_name_uses_phrase_key() {
        assert_eq!(Language::Spanish.data_file_name(), "spanish.json");
    }

    #[test]
    fn test_spanish_prefers_mexican_locale() {
        assert_eq!(Language::Spanish.recognition_locale(), "es-MX");
        assert_eq!(Language::Spanish.fallback_tts_locale(), "es-ES");
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&Language::German).unwrap();
        assert_eq!(json, "\"german\"");
    }
}
