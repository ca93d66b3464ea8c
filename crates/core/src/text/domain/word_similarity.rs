/// Domain interface for word-to-word similarity.
///
/// Implementations return a score in `[0, 1]`, with `1.0` for identical
/// words. The word-accuracy band thresholds are calibrated against the
/// heuristic implementation, so alternatives must keep a comparable scale.
pub trait WordSimilarity: Send + Sync {
    fn similarity(&self, expected: &str, spoken: &str) -> f64;
}
