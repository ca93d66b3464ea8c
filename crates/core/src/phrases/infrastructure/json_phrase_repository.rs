use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::phrases::domain::phrase::Phrase;
use crate::phrases::domain::phrase_repository::{PhraseRepository, PhraseRepositoryError};
use crate::shared::language::Language;

#[derive(Deserialize)]
struct PhraseDatabase {
    #[serde(default)]
    phrases: Vec<Phrase>,
    #[serde(default)]
    categories: Vec<PhraseCategory>,
}

#[derive(Deserialize)]
struct PhraseCategory {
    #[serde(default)]
    name: String,
    #[serde(default)]
    phrases: Vec<Phrase>,
}

/// Reads `<data_dir>/<language>.json` phrase databases.
pub struct JsonPhraseRepository {
    data_dir: PathBuf,
}

impl JsonPhraseRepository {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn path_for(&self, language: Language) -> PathBuf {
        self.data_dir.join(language.data_file_name())
    }

    fn parse(path: &Path, contents: &str) -> Result<Vec<Phrase>, PhraseRepositoryError> {
        let database: PhraseDatabase =
            serde_json::from_str(contents).map_err(|source| PhraseRepositoryError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let mut phrases = database.phrases;
        for category in database.categories {
            log::debug!(
                "Category '{}' contributes {} phrases",
                category.name,
                category.phrases.len()
            );
            phrases.extend(category.phrases);
        }
        Ok(phrases)
    }
}

impl PhraseRepository for JsonPhraseRepository {
    fn load(&self, language: Language) -> Result<Vec<Phrase>, PhraseRepositoryError> {
        let path = self.path_for(language);
        let contents = fs::read_to_string(&path).map_err(|source| PhraseRepositoryError::Io {
            path: path.clone(),
            source,
        })?;
        let phrases = Self::parse(&path, &contents)?;
        if phrases.is_empty() {
            log::warn!("Phrase database {} has no phrases", path.display());
        }
        log::info!(
            "Loaded {} {language} phrases from {}",
            phrases.len(),
            path.display()
        );
        Ok(phrases)
    }
}
