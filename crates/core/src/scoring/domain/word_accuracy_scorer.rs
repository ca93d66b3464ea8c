use serde::{Deserialize, Serialize};

use super::feedback::WordFeedback;
use super::word_match::{MatchStatus, WordMatch};
use crate::shared::settings::AccuracyBands;
use crate::text::domain::text_normalizer::words;
use crate::text::domain::word_similarity::WordSimilarity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordAccuracyResult {
    pub score: u8,
    pub correct_count: usize,
    pub total_expected: usize,
    pub extra_word_count: usize,
    pub matches: Vec<WordMatch>,
    pub feedback_tag: WordFeedback,
    /// Set when no expected word was even attempted; the score is then a
    /// hard zero regardless of transcript length.
    pub unrelated_speech: bool,
}

/// Greedy per-word alignment of expected words against the transcript.
///
/// Each expected word independently takes its best spoken match, so two
/// expected words may claim the same spoken word.
pub struct WordAccuracyScorer {
    similarity: Box<dyn WordSimilarity>,
    bands: AccuracyBands,
}

impl WordAccuracyScorer {
    pub fn new(similarity: Box<dyn WordSimilarity>, bands: AccuracyBands) -> Self {
        Self { similarity, bands }
    }

    pub fn score(&self, expected_phrase: &str, transcript: &str) -> WordAccuracyResult {
        let expected_words = words(expected_phrase);
        let spoken_words = words(transcript);

        if expected_words.is_empty() {
            log::warn!("Expected phrase has no words; scoring as full accuracy");
            return WordAccuracyResult {
                score: 100,
                correct_count: 0,
                total_expected: 0,
                extra_word_count: spoken_words.len(),
                matches: Vec::new(),
                feedback_tag: WordFeedback::Excellent,
                unrelated_speech: false,
            };
        }

        let mut correct_count = 0;
        let mut credit = 0.0;
        let mut attempted = false;
        let mut matches = Vec::with_capacity(expected_words.len());

        for expected in &expected_words {
            let (matched_word, similarity) = self.best_match(expected, &spoken_words);
            let status = self.classify(similarity, matched_word.is_empty());
            match status {
                MatchStatus::Correct => {
                    correct_count += 1;
                    credit += self.bands.correct_credit;
                    attempted = true;
                }
                MatchStatus::Partial => {
                    credit += self.bands.partial_credit;
                    attempted = true;
                }
                MatchStatus::Incorrect if similarity >= self.bands.minimal_threshold => {
                    credit += self.bands.minimal_credit;
                    attempted = true;
                }
                MatchStatus::Incorrect | MatchStatus::Missing => {}
            }
            log::debug!("'{expected}' -> '{matched_word}' ({similarity:.3}, {status:?})");
            matches.push(WordMatch {
                expected_word: expected.clone(),
                matched_word,
                similarity,
                status,
            });
        }

        let total_expected = expected_words.len();

        if !attempted {
            log::debug!("No expected word attempted; word accuracy is a hard zero");
            return WordAccuracyResult {
                score: 0,
                correct_count: 0,
                total_expected,
                extra_word_count: spoken_words.len(),
                matches,
                feedback_tag: WordFeedback::TryTargetLanguage,
                unrelated_speech: true,
            };
        }

        let extra_word_count = spoken_words.len().saturating_sub(total_expected);
        let raw = (credit / total_expected as f64 * 100.0).round() as i64;
        let penalized = (raw - extra_word_penalty(extra_word_count)).max(0);
        let score = encourage(penalized).clamp(0, 100) as u8;

        WordAccuracyResult {
            score,
            correct_count,
            total_expected,
            extra_word_count,
            matches,
            feedback_tag: WordFeedback::from_correct_ratio(correct_count, total_expected),
            unrelated_speech: false,
        }
    }

    /// Highest-similarity spoken word; the first one wins ties. A word that
    /// scores zero against everything matches nothing.
    fn best_match(&self, expected: &str, spoken_words: &[String]) -> (String, f64) {
        let mut best_word = "";
        let mut best = 0.0;
        for spoken in spoken_words {
            let similarity = self.similarity.similarity(expected, spoken);
            if similarity > best {
                best = similarity;
                best_word = spoken.as_str();
            }
        }
        (best_word.to_string(), best)
    }

    fn classify(&self, similarity: f64, nothing_matched: bool) -> MatchStatus {
        if similarity >= self.bands.correct_threshold {
            MatchStatus::Correct
        } else if similarity >= self.bands.partial_threshold {
            MatchStatus::Partial
        } else if nothing_matched {
            MatchStatus::Missing
        } else {
            MatchStatus::Incorrect
        }
    }
}

/// 5 points for each of the first two extra words, 10 for every one beyond.
pub fn extra_word_penalty(extra_words: usize) -> i64 {
    let extra = extra_words as i64;
    if extra <= 2 {
        extra * 5
    } else {
        10 + (extra - 2) * 10
    }
}

fn encourage(score: i64) -> i64 {
    if score >= 70 {
        (score + 8).min(100)
    } else if score >= 50 {
        (score + 5).min(100)
    } else {
        score
    }
}
