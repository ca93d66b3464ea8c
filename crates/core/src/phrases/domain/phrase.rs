use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::shared::language::Language;

/// A practice phrase with its text in each language the database carries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PhraseRecord", into = "PhraseRecord")]
pub struct Phrase {
    pub id: u32,
    /// Language key to phrase text.
    pub text: BTreeMap<String, String>,
    /// Optional per-language glosses that take precedence over `text`
    /// when showing the learner a translation.
    pub translations: BTreeMap<String, String>,
    pub audio_file: Option<String>,
}

impl Phrase {
    pub fn new(id: u32) -> Self {
        Self {
            id,
            text: BTreeMap::new(),
            translations: BTreeMap::new(),
            audio_file: None,
        }
    }

    pub fn with_text(mut self, language: Language, text: impl Into<String>) -> Self {
        self.text.insert(language.phrase_key().to_string(), text.into());
        self
    }

    pub fn text_for(&self, language: Language) -> Option<&str> {
        self.text.get(language.phrase_key()).map(String::as_str)
    }

    pub fn translation_for(&self, language: Language) -> Option<&str> {
        let key = language.phrase_key();
        self.translations
            .get(key)
            .or_else(|| self.text.get(key))
            .map(String::as_str)
    }
}

/// On-disk shape: language texts sit next to `id` as plain string fields.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PhraseRecord {
    id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    audio_file: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    translations: BTreeMap<String, String>,
    #[serde(flatten)]
    fields: BTreeMap<String, serde_json::Value>,
}

impl From<PhraseRecord> for Phrase {
    fn from(record: PhraseRecord) -> Self {
        let text = record
            .fields
            .into_iter()
            .filter_map(|(key, value)| match value {
                serde_json::Value::String(s) => Some((key, s)),
                _ => None,
            })
            .collect();
        Self {
            id: record.id,
            text,
            translations: record.translations,
            audio_file: record.audio_file,
        }
    }
}

impl From<Phrase> for PhraseRecord {
    fn from(phrase: Phrase) -> Self {
        Self {
            id: phrase.id,
            audio_file: phrase.audio_file,
            translations: phrase.translations,
            fields: phrase
                .text
                .into_iter()
                .map(|(key, value)| (key, serde_json::Value::String(value)))
                .collect(),
        }
    }
}
