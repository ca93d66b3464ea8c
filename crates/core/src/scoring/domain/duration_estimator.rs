use crate::shared::constants::{PAUSE_BUFFER_MS, SYLLABLES_PER_SECOND};

const VOWELS: &str = "aeiouáéíóúàèìòùâêîôûäëïöü";

/// Predicts how long a learner should take to say a phrase.
///
/// Runs once when a recording starts, before any transcript exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DurationEstimator {
    syllables_per_second: f64,
    pause_buffer_ms: f64,
}

impl Default for DurationEstimator {
    fn default() -> Self {
        Self::new(SYLLABLES_PER_SECOND, PAUSE_BUFFER_MS)
    }
}

impl DurationEstimator {
    pub fn new(syllables_per_second: f64, pause_buffer_ms: f64) -> Self {
        Self {
            syllables_per_second,
            pause_buffer_ms,
        }
    }

    /// Vowel-group count as a syllable proxy; word count when there are no
    /// vowels at all. Never returns zero.
    pub fn estimate_syllables(text: &str) -> usize {
        let lowered = text.to_lowercase();
        let mut groups = 0;
        let mut in_group = false;
        for c in lowered.chars() {
            let is_vowel = VOWELS.contains(c);
            if is_vowel && !in_group {
                groups += 1;
            }
            in_group = is_vowel;
        }
        if groups > 0 {
            groups
        } else {
            text.split_whitespace().count().max(1)
        }
    }

    pub fn expected_duration_ms(&self, text: &str) -> f64 {
        let syllables = Self::estimate_syllables(text) as f64;
        (syllables / self.syllables_per_second) * 1000.0 + self.pause_buffer_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case::hola("Hola", 2)]
    #[case::diphthong_is_one_group("bueno", 2)]
    #[case::accented("¿Dónde está el baño?", 7)]
    #[case::french("Je voudrais un café", 6)]
    #[case::german_umlaut("Schön", 1)]
    #[case::no_vowels("hmm brr", 2)]
    #[case::empty("", 1)]
    fn test_estimate_syllables(#[case] text: &str, #[case] expected: usize) {
        assert_eq!(DurationEstimator::estimate_syllables(text), expected);
    }

    #[test]
    fn test_expected_duration_for_hola() {
        let ms = DurationEstimator::default().expected_duration_ms("Hola");
        assert_relative_eq!(ms, (2.0 / 3.5) * 1000.0 + 1000.0);
        assert_eq!(ms.round() as u64, 1571);
    }

    #[test]
    fn test_expected_duration_includes_pause_buffer() {
        let estimator = DurationEstimator::new(3.5, 0.0);
        assert_relative_eq!(estimator.expected_duration_ms("Hola"), 2000.0 / 3.5);
    }

    #[test]
    fn test_faster_rate_shortens_duration() {
        let slow = DurationEstimator::new(2.0, 1000.0).expected_duration_ms("Buenos días");
        let fast = DurationEstimator::new(5.0, 1000.0).expected_duration_ms("Buenos días");
        assert!(fast < slow);
    }
}
