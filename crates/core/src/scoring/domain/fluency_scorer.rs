use serde::{Deserialize, Serialize};

use super::dominance::Dominance;
use super::feedback::FluencyFeedback;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FluencyResult {
    pub score: u8,
    /// Interim recognition events per second, rounded to one decimal.
    pub words_per_second: f64,
    pub feedback_tag: FluencyFeedback,
}

/// Infers continuity from the cadence of interim recognition events.
///
/// Recognizers emit an interim result roughly per recognized word, so the
/// event rate stands in for speaking rate.
pub struct FluencyScorer;

impl FluencyScorer {
    pub fn score(
        interim_event_count: usize,
        actual_duration_ms: u64,
        expected_duration_ms: f64,
        dominance: Dominance,
    ) -> FluencyResult {
        let seconds = actual_duration_ms.max(1) as f64 / 1000.0;
        let words_per_second = interim_event_count as f64 / seconds;

        let (score, feedback_tag) = if dominance.is_zeroed() {
            (0, FluencyFeedback::FocusOnCorrectWords)
        } else if interim_event_count < 2 {
            if (actual_duration_ms as f64) < expected_duration_ms * 0.8 {
                (85, FluencyFeedback::GoodSpeedWorkOnClarity)
            } else {
                (70, FluencyFeedback::SpeakMoreContinuously)
            }
        } else if words_per_second > 5.0 {
            (75, FluencyFeedback::SlightlyFast)
        } else if words_per_second < 1.0 {
            (65, FluencyFeedback::Hesitant)
        } else {
            (100, FluencyFeedback::Smooth)
        };

        FluencyResult {
            score,
            words_per_second: (words_per_second * 10.0).round() / 10.0,
            feedback_tag,
        }
    }
}
