use super::word_accuracy_scorer::WordAccuracyResult;

/// Whether dependent scores may stand on their own.
///
/// A zero word-accuracy score means the learner did not attempt the target
/// phrase, so timing, fluency and the overall score are forced to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dominance {
    Independent,
    ZeroedByWordAccuracy,
}

impl Dominance {
    pub fn from_word_accuracy(word_accuracy: &WordAccuracyResult) -> Self {
        if word_accuracy.score == 0 {
            Dominance::ZeroedByWordAccuracy
        } else {
            Dominance::Independent
        }
    }

    pub fn is_zeroed(self) -> bool {
        self == Dominance::ZeroedByWordAccuracy
    }
}
