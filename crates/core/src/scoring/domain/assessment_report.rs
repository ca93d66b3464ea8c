use serde::{Deserialize, Serialize};

use super::feedback::OverallFeedback;
use super::fluency_scorer::FluencyResult;
use super::timing_scorer::TimingResult;
use super::word_accuracy_scorer::WordAccuracyResult;

/// Complete, serializable result of one assessed attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentReport {
    pub word_accuracy: WordAccuracyResult,
    pub timing: TimingResult,
    pub fluency: FluencyResult,
    pub overall: u8,
    pub overall_feedback: OverallFeedback,
}

impl AssessmentReport {
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
