pub mod assessment_report;
pub mod dominance;
pub mod duration_estimator;
pub mod feedback;
pub mod fluency_scorer;
pub mod score_aggregator;
pub mod timing_scorer;
pub mod word_accuracy_scorer;
pub mod word_match;
