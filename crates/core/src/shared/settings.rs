use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::constants::{
    CORRECT_CREDIT, CORRECT_THRESHOLD, FLUENCY_WEIGHT, MINIMAL_CREDIT, MINIMAL_THRESHOLD,
    PARTIAL_CREDIT, PARTIAL_THRESHOLD, PAUSE_BUFFER_MS, SETTINGS_DIR_NAME, SETTINGS_FILE_NAME,
    SYLLABLES_PER_SECOND, TIMING_WEIGHT, WORD_ACCURACY_WEIGHT,
};

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid setting {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Similarity bands and the credit each band earns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccuracyBands {
    pub correct_threshold: f64,
    pub partial_threshold: f64,
    pub minimal_threshold: f64,
    pub correct_credit: f64,
    pub partial_credit: f64,
    pub minimal_credit: f64,
}

impl Default for AccuracyBands {
    fn default() -> Self {
        Self {
            correct_threshold: CORRECT_THRESHOLD,
            partial_threshold: PARTIAL_THRESHOLD,
            minimal_threshold: MINIMAL_THRESHOLD,
            correct_credit: CORRECT_CREDIT,
            partial_credit: PARTIAL_CREDIT,
            minimal_credit: MINIMAL_CREDIT,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AggregateWeights {
    pub word_accuracy: f64,
    pub timing: f64,
    pub fluency: f64,
}

impl Default for AggregateWeights {
    fn default() -> Self {
        Self {
            word_accuracy: WORD_ACCURACY_WEIGHT,
            timing: TIMING_WEIGHT,
            fluency: FLUENCY_WEIGHT,
        }
    }
}

/// Tuning knobs for the assessment engine.
///
/// Every field has a default, so a settings file only needs to name the
/// values it overrides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScoringSettings {
    pub bands: AccuracyBands,
    pub syllables_per_second: f64,
    pub pause_buffer_ms: f64,
    pub weights: AggregateWeights,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            bands: AccuracyBands::default(),
            syllables_per_second: SYLLABLES_PER_SECOND,
            pause_buffer_ms: PAUSE_BUFFER_MS,
            weights: AggregateWeights::default(),
        }
    }
}

impl ScoringSettings {
    /// `<config_dir>/SpeakScore/settings.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(SETTINGS_DIR_NAME).join(SETTINGS_FILE_NAME))
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = fs::read_to_string(path).map_err(|e| SettingsError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        let settings: Self = serde_json::from_str(&json).map_err(|e| SettingsError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads from the default path, falling back to defaults when the file is
    /// absent or unusable.
    pub fn load_or_default() -> Self {
        let Some(path) = Self::default_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Ignoring settings file: {e}");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        let b = &self.bands;
        for (field, value) in [
            ("bands.correctThreshold", b.correct_threshold),
            ("bands.partialThreshold", b.partial_threshold),
            ("bands.minimalThreshold", b.minimal_threshold),
            ("bands.correctCredit", b.correct_credit),
            ("bands.partialCredit", b.partial_credit),
            ("bands.minimalCredit", b.minimal_credit),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SettingsError::Invalid {
                    field,
                    reason: format!("must be between 0.0 and 1.0, got {value}"),
                });
            }
        }
        if !(b.correct_threshold > b.partial_threshold && b.partial_threshold > b.minimal_threshold)
        {
            return Err(SettingsError::Invalid {
                field: "bands",
                reason: "thresholds must be strictly descending (correct > partial > minimal)"
                    .to_string(),
            });
        }
        if self.syllables_per_second <= 0.0 {
            return Err(SettingsError::Invalid {
                field: "syllablesPerSecond",
                reason: format!("must be positive, got {}", self.syllables_per_second),
            });
        }
        if self.pause_buffer_ms < 0.0 {
            return Err(SettingsError::Invalid {
                field: "pauseBufferMs",
                reason: format!("must not be negative, got {}", self.pause_buffer_ms),
            });
        }
        let w = &self.weights;
        if w.word_accuracy < 0.0 || w.timing < 0.0 || w.fluency < 0.0 {
            return Err(SettingsError::Invalid {
                field: "weights",
                reason: "weights must not be negative".to_string(),
            });
        }
        let sum = w.word_accuracy + w.timing + w.fluency;
        if (sum - 1.0).abs() > 1e-6 {
            return Err(SettingsError::Invalid {
                field: "weights",
                reason: format!("weights must sum to 1.0, got {sum}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_settings(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_match_constants() {
        let s = ScoringSettings::default();
        assert_relative_eq!(s.bands.correct_threshold, 0.85);
        assert_relative_eq!(s.bands.partial_threshold, 0.55);
        assert_relative_eq!(s.bands.minimal_threshold, 0.3);
        assert_relative_eq!(s.syllables_per_second, 3.5);
        assert_relative_eq!(s.pause_buffer_ms, 1000.0);
        assert_relative_eq!(s.weights.word_accuracy, 0.6);
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let file = write_settings(r#"{ "syllablesPerSecond": 4.0 }"#);
        let s = ScoringSettings::load(file.path()).unwrap();
        assert_relative_eq!(s.syllables_per_second, 4.0);
        assert_relative_eq!(s.pause_buffer_ms, 1000.0);
        assert_eq!(s.bands, AccuracyBands::default());
    }

    #[test]
    fn test_load_nested_override() {
        let file = write_settings(r#"{ "bands": { "partialThreshold": 0.6 } }"#);
        let s = ScoringSettings::load(file.path()).unwrap();
        assert_relative_eq!(s.bands.partial_threshold, 0.6);
        assert_relative_eq!(s.bands.correct_threshold, 0.85);
    }

    #[test]
    fn test_load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ScoringSettings::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }

    #[test]
    fn test_load_malformed_json_is_parse_error() {
        let file = write_settings("{ not json");
        let err = ScoringSettings::load(file.path()).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn test_validate_rejects_weights_not_summing_to_one() {
        let mut s = ScoringSettings::default();
        s.weights.timing = 0.5;
        let err = s.validate().unwrap_err();
        assert!(matches!(err, SettingsError::Invalid { field: "weights", .. }));
    }

    #[test]
    fn test_validate_rejects_unordered_thresholds() {
        let mut s = ScoringSettings::default();
        s.bands.partial_threshold = 0.9;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_speaking_rate() {
        let s = ScoringSettings {
            syllables_per_second: 0.0,
            ..ScoringSettings::default()
        };
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let file = write_settings(r#"{ "pauseBufferMs": -5 }"#);
        let err = ScoringSettings::load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Invalid {
                field: "pauseBufferMs",
                ..
            }
        ));
    }
}
