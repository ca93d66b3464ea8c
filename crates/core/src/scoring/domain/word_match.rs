use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Correct,
    Partial,
    /// Attempted but too far off; may still earn minimal credit.
    Incorrect,
    /// No spoken word resembled the expected word at all.
    Missing,
}

/// Alignment result for one expected word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordMatch {
    pub expected_word: String,
    /// Best-matching spoken word, empty when nothing matched.
    pub matched_word: String,
    pub similarity: f64,
    pub status: MatchStatus,
}

impl WordMatch {
    pub fn is_correct(&self) -> bool {
        self.status == MatchStatus::Correct
    }
}
