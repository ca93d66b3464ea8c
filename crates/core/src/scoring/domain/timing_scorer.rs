use serde::{Deserialize, Serialize};

use super::dominance::Dominance;
use super::feedback::TimingFeedback;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingResult {
    pub score: u8,
    pub actual_duration_ms: u64,
    pub expected_duration_ms: u64,
    /// Actual over expected duration.
    pub ratio: f64,
    pub feedback_tag: TimingFeedback,
}

/// Scores pacing against the estimated duration.
pub struct TimingScorer;

impl TimingScorer {
    pub fn score(
        actual_duration_ms: u64,
        expected_duration_ms: f64,
        dominance: Dominance,
    ) -> TimingResult {
        let ratio = if expected_duration_ms > 0.0 {
            actual_duration_ms as f64 / expected_duration_ms
        } else {
            log::warn!(
                "Non-positive expected duration {expected_duration_ms}; treating pace as on target"
            );
            1.0
        };

        let (score, feedback_tag) = if dominance.is_zeroed() {
            (0.0, TimingFeedback::TryTargetPhrase)
        } else {
            Self::band(ratio)
        };

        TimingResult {
            score: score.round().clamp(0.0, 100.0) as u8,
            actual_duration_ms,
            expected_duration_ms: expected_duration_ms.max(0.0).round() as u64,
            ratio,
            feedback_tag,
        }
    }

    fn band(ratio: f64) -> (f64, TimingFeedback) {
        if ratio < 0.7 {
            ((100.0 - (0.7 - ratio) * 200.0).max(60.0), TimingFeedback::TooFast)
        } else if ratio > 2.0 {
            ((100.0 - (ratio - 2.0) * 150.0).max(60.0), TimingFeedback::TooSlow)
        } else if ratio > 1.5 {
            ((100.0 - (ratio - 1.5) * 80.0).max(80.0), TimingFeedback::SlightlySlow)
        } else {
            (100.0, TimingFeedback::GoodPace)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::domain::duration_estimator::DurationEstimator;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn score(actual: u64, expected: f64) -> TimingResult {
        TimingScorer::score(actual, expected, Dominance::Independent)
    }

    #[test]
    fn test_hola_at_natural_pace() {
        let expected = DurationEstimator::default().expected_duration_ms("Hola");
        let result = score(1600, expected);
        assert_relative_eq!(result.ratio, 1600.0 / expected);
        assert!((1.01..1.03).contains(&result.ratio));
        assert_eq!(result.score, 100);
        assert_eq!(result.feedback_tag, TimingFeedback::GoodPace);
        assert_eq!(result.expected_duration_ms, 1571);
    }

    #[rstest]
    #[case::far_too_fast(300, 60, TimingFeedback::TooFast)]
    #[case::too_fast(500, 60, TimingFeedback::TooFast)]
    #[case::a_bit_fast(600, 80, TimingFeedback::TooFast)]
    #[case::lower_edge(700, 100, TimingFeedback::GoodPace)]
    #[case::upper_good_edge(1500, 100, TimingFeedback::GoodPace)]
    #[case::slightly_slow(1600, 92, TimingFeedback::SlightlySlow)]
    #[case::slightly_slow_floor(2000, 80, TimingFeedback::SlightlySlow)]
    #[case::too_slow(2200, 70, TimingFeedback::TooSlow)]
    #[case::far_too_slow(2500, 60, TimingFeedback::TooSlow)]
    fn test_bands(#[case] actual: u64, #[case] expected_score: u8, #[case] tag: TimingFeedback) {
        let result = score(actual, 1000.0);
        assert_eq!(result.score, expected_score);
        assert_eq!(result.feedback_tag, tag);
    }

    #[test]
    fn test_dominance_zeroes_score_but_keeps_measurements() {
        let result = TimingScorer::score(1000, 1000.0, Dominance::ZeroedByWordAccuracy);
        assert_eq!(result.score, 0);
        assert_eq!(result.feedback_tag, TimingFeedback::TryTargetPhrase);
        assert_relative_eq!(result.ratio, 1.0);
        assert_eq!(result.actual_duration_ms, 1000);
    }

    #[test]
    fn test_non_positive_expected_duration_is_on_target() {
        let result = score(1234, 0.0);
        assert_relative_eq!(result.ratio, 1.0);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_zero_actual_duration_is_too_fast() {
        let result = score(0, 2000.0);
        assert_eq!(result.score, 60);
        assert_eq!(result.feedback_tag, TimingFeedback::TooFast);
    }
}
