use std::path::PathBuf;

use thiserror::Error;

use super::phrase::Phrase;
use crate::shared::language::{Language, UnknownLanguage};

#[derive(Error, Debug)]
pub enum PhraseRepositoryError {
    #[error("failed to read phrase database {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse phrase database {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    UnknownLanguage(#[from] UnknownLanguage),
    #[error("no phrase with id {id}")]
    PhraseNotFound { id: u32 },
    #[error("phrase {id} has no {} text", .language.phrase_key())]
    MissingText { id: u32, language: Language },
}

/// Source of the phrase list for a practice language.
pub trait PhraseRepository {
    fn load(&self, language: Language) -> Result<Vec<Phrase>, PhraseRepositoryError>;
}

/// Finds phrase `id` and returns its text in `language`.
pub fn resolve_expected_phrase(
    phrases: &[Phrase],
    id: u32,
    language: Language,
) -> Result<&str, PhraseRepositoryError> {
    let phrase = phrases
        .iter()
        .find(|p| p.id == id)
        .ok_or(PhraseRepositoryError::PhraseNotFound { id })?;
    phrase
        .text_for(language)
        .ok_or(PhraseRepositoryError::MissingText { id, language })
}
