use crate::scoring::domain::assessment_report::AssessmentReport;
use crate::scoring::domain::dominance::Dominance;
use crate::scoring::domain::duration_estimator::DurationEstimator;
use crate::scoring::domain::feedback::OverallFeedback;
use crate::scoring::domain::fluency_scorer::FluencyScorer;
use crate::scoring::domain::score_aggregator::ScoreAggregator;
use crate::scoring::domain::timing_scorer::TimingScorer;
use crate::scoring::domain::word_accuracy_scorer::WordAccuracyScorer;
use crate::session::domain::speech_session::SpeechSession;
use crate::shared::settings::ScoringSettings;
use crate::text::domain::word_similarity::WordSimilarity;
use crate::text::infrastructure::heuristic_word_similarity::HeuristicWordSimilarity;

/// Assessment pipeline: word accuracy → dominance → timing → fluency → aggregate.
pub struct AssessAttemptUseCase {
    word_accuracy: WordAccuracyScorer,
    estimator: DurationEstimator,
    aggregator: ScoreAggregator,
}

impl AssessAttemptUseCase {
    pub fn new(settings: ScoringSettings, similarity: Box<dyn WordSimilarity>) -> Self {
        Self {
            word_accuracy: WordAccuracyScorer::new(similarity, settings.bands),
            estimator: DurationEstimator::new(
                settings.syllables_per_second,
                settings.pause_buffer_ms,
            ),
            aggregator: ScoreAggregator::new(settings.weights),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(
            ScoringSettings::default(),
            Box::new(HeuristicWordSimilarity::new()),
        )
    }

    pub fn expected_duration_ms(&self, expected_phrase: &str) -> f64 {
        self.estimator.expected_duration_ms(expected_phrase)
    }

    /// Scores one finished attempt. `expected_duration_ms` is estimated from
    /// the phrase when not supplied.
    pub fn execute(
        &self,
        expected_phrase: &str,
        transcript: &str,
        session: &SpeechSession,
        expected_duration_ms: Option<f64>,
    ) -> AssessmentReport {
        let expected_duration_ms =
            expected_duration_ms.unwrap_or_else(|| self.expected_duration_ms(expected_phrase));
        let actual_duration_ms = session.actual_duration_ms();

        let word_accuracy = self.word_accuracy.score(expected_phrase, transcript);
        let dominance = Dominance::from_word_accuracy(&word_accuracy);
        if dominance.is_zeroed() {
            log::debug!("Word accuracy is zero; timing and fluency are zeroed");
        }

        let timing = TimingScorer::score(actual_duration_ms, expected_duration_ms, dominance);
        let fluency = FluencyScorer::score(
            session.interim_event_count(),
            actual_duration_ms,
            expected_duration_ms,
            dominance,
        );
        let overall = self.aggregator.aggregate(&word_accuracy, &timing, &fluency);

        log::debug!(
            "Scored attempt: words {} timing {} fluency {} overall {overall}",
            word_accuracy.score,
            timing.score,
            fluency.score
        );

        AssessmentReport {
            word_accuracy,
            timing,
            fluency,
            overall,
            overall_feedback: OverallFeedback::from_score(overall),
        }
    }
}

impl Default for AssessAttemptUseCase {
    fn default() -> Self {
        Self::with_defaults()
    }
}
