use super::dominance::Dominance;
use super::fluency_scorer::FluencyResult;
use super::timing_scorer::TimingResult;
use super::word_accuracy_scorer::WordAccuracyResult;
use crate::shared::settings::AggregateWeights;

/// Combines the three sub-scores into the overall score.
///
/// Word accuracy dominates: a zero there is a zero overall, whatever timing
/// and fluency computed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreAggregator {
    weights: AggregateWeights,
}

impl ScoreAggregator {
    pub fn new(weights: AggregateWeights) -> Self {
        Self { weights }
    }

    pub fn aggregate(
        &self,
        word_accuracy: &WordAccuracyResult,
        timing: &TimingResult,
        fluency: &FluencyResult,
    ) -> u8 {
        match Dominance::from_word_accuracy(word_accuracy) {
            Dominance::ZeroedByWordAccuracy => 0,
            Dominance::Independent => {
                let weighted = word_accuracy.score as f64 * self.weights.word_accuracy
                    + timing.score as f64 * self.weights.timing
                    + fluency.score as f64 * self.weights.fluency;
                weighted.round().clamp(0.0, 100.0) as u8
            }
        }
    }
}
