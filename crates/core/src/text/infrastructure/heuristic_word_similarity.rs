use strsim::levenshtein;

use crate::text::domain::phonetic_reducer::to_phonetic_pattern;
use crate::text::domain::pronunciation_folder::fold;
use crate::text::domain::substitution_table::{is_known_confusion, SUBSTITUTION_SIMILARITY};
use crate::text::domain::word_similarity::WordSimilarity;

/// Score when one folded word contains the other (fast-speech truncation).
pub const CONTAINMENT_SIMILARITY: f64 = 0.9;
/// Ceiling for the phonetic fallback when both patterns are identical.
pub const PHONETIC_MATCH_SIMILARITY: f64 = 0.9;
pub const PHONETIC_SCALE: f64 = 0.8;

/// Layered similarity tuned for speech-recognizer noise on short
/// second-language utterances.
///
/// Rules, first hit wins:
/// 1. exact equality → 1.0
/// 2. equality after pronunciation folding → 1.0
/// 3. containment between folded forms → 0.9
/// 4. known confusion pair → 0.95
/// 5. the larger of the length-boosted edit similarity and the phonetic
///    pattern similarity
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicWordSimilarity;

impl HeuristicWordSimilarity {
    pub fn new() -> Self {
        Self
    }
}

impl WordSimilarity for HeuristicWordSimilarity {
    fn similarity(&self, expected: &str, spoken: &str) -> f64 {
        if expected == spoken {
            return 1.0;
        }

        let a = fold(expected);
        let b = fold(spoken);
        if a == b {
            return 1.0;
        }

        if !a.is_empty() && !b.is_empty() && (a.contains(b.as_str()) || b.contains(a.as_str())) {
            return CONTAINMENT_SIMILARITY;
        }

        if is_known_confusion(&a, &b) {
            return SUBSTITUTION_SIMILARITY;
        }

        forgiving_edit_similarity(&a, &b)
            .max(phonetic_similarity(&a, &b))
            .clamp(0.0, 1.0)
    }
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// `(maxLen - distance) / maxLen` over Unicode scalar values.
pub fn edit_similarity(a: &str, b: &str) -> f64 {
    let max_len = char_len(a).max(char_len(b));
    if max_len == 0 {
        return 1.0;
    }
    let distance = levenshtein(a, b).min(max_len);
    (max_len - distance) as f64 / max_len as f64
}

/// Edit similarity plus a boost tiered on the longer word's length.
pub fn forgiving_edit_similarity(a: &str, b: &str) -> f64 {
    let max_len = char_len(a).max(char_len(b));
    let similarity = edit_similarity(a, b);
    let boost = if max_len <= 3 && similarity >= 0.3 {
        0.4
    } else if max_len <= 5 && similarity >= 0.4 {
        0.3
    } else if similarity >= 0.5 {
        0.2
    } else {
        0.0
    };
    (similarity + boost).min(1.0)
}

pub fn phonetic_similarity(a: &str, b: &str) -> f64 {
    let pa = to_phonetic_pattern(a);
    let pb = to_phonetic_pattern(b);
    if pa == pb {
        return PHONETIC_MATCH_SIMILARITY;
    }
    let max_len = char_len(&pa).max(char_len(&pb));
    if max_len == 0 {
        return 0.0;
    }
    edit_similarity(&pa, &pb) * PHONETIC_SCALE
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn sim(a: &str, b: &str) -> f64 {
        HeuristicWordSimilarity::new().similarity(a, b)
    }

    // --- Rule order ---

    #[rstest]
    #[case::plain("hola")]
    #[case::accented("está")]
    #[case::german("straße")]
    #[case::empty("")]
    fn test_identical_words_score_one(#[case] word: &str) {
        assert_relative_eq!(sim(word, word), 1.0);
    }

    #[rstest]
    #[case::accent("está", "esta")]
    #[case::eñe("baño", "bano")]
    #[case::b_v("vaso", "baso")]
    #[case::silent_h("hablar", "ablar")]
    #[case::ll_y("llamo", "yamo")]
    #[case::umlaut("schön", "schon")]
    fn test_pronunciation_equal_scores_one(#[case] a: &str, #[case] b: &str) {
        assert_relative_eq!(sim(a, b), 1.0);
    }

    #[rstest]
    #[case::truncated_plural("noche", "noches")]
    #[case::dropped_ending("voudrais", "voudrai")]
    #[case::french_elision("restaurante", "restaurant")]
    fn test_containment(#[case] a: &str, #[case] b: &str) {
        assert_relative_eq!(sim(a, b), CONTAINMENT_SIMILARITY);
    }

    #[test]
    fn test_containment_beats_substitution_table() {
        // "pa" is a listed contraction of "para" but containment fires first
        assert_relative_eq!(sim("para", "pa"), 0.9);
    }

    #[rstest]
    #[case("el", "al")]
    #[case("la", "ya")]
    #[case("bano", "pano")]
    #[case("en", "an")]
    fn test_substitution_table(#[case] a: &str, #[case] b: &str) {
        assert_relative_eq!(sim(a, b), 0.95);
    }

    // --- Edit distance tiers ---

    #[test]
    fn test_short_word_tier() {
        // 1 edit over 2 letters = 0.5, +0.4
        assert_relative_eq!(sim("mi", "me"), 0.9);
    }

    #[test]
    fn test_medium_word_tier() {
        // 2 edits over 4 letters = 0.5, +0.3
        assert_relative_eq!(sim("casa", "mesa"), 0.8);
    }

    #[test]
    fn test_medium_tier_caps_at_one() {
        assert_relative_eq!(sim("gato", "pato"), 1.0);
    }

    #[test]
    fn test_long_word_tier() {
        // 3 edits over 8 letters = 0.625, +0.2
        assert_relative_eq!(sim("escuela", "escalera"), 0.825, epsilon = 1e-9);
    }

    #[test]
    fn test_long_word_tier_after_folding() {
        // "quiero"/"kiero": 2 edits over 6 letters, +0.2
        assert_relative_eq!(sim("quiero", "kiero"), 4.0 / 6.0 + 0.2, epsilon = 1e-9);
    }

    #[test]
    fn test_below_tier_threshold_gets_no_boost() {
        // "pero"/"gato": 3 edits over 4 letters = 0.25, phonetic 0.2
        assert_relative_eq!(sim("perro", "gato"), 0.25);
    }

    // --- Phonetic fallback ---

    #[test]
    fn test_phonetic_pattern_match_wins_over_edit_distance() {
        // edit: 2/6 → 0.667 + 0.2 = 0.867; patterns identical → 0.9
        assert_relative_eq!(sim("tomate", "domade"), 0.9);
    }

    #[test]
    fn test_phonetic_partial_similarity_is_scaled() {
        // edit distance gives 0; "sor"/"nar" differ by 2 of 3 → 1/3 * 0.8
        assert_relative_eq!(sim("sol", "mar"), 0.8 / 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_unrelated_words_score_zero() {
        assert_relative_eq!(sim("xyz", "abc"), 0.0);
    }

    // --- Properties ---

    #[rstest]
    #[case("el", "al")]
    #[case("noche", "noches")]
    #[case("casa", "mesa")]
    #[case("hola", "today")]
    #[case("escuela", "escalera")]
    #[case("sol", "mar")]
    fn test_symmetric(#[case] a: &str, #[case] b: &str) {
        assert_relative_eq!(sim(a, b), sim(b, a));
    }

    #[rstest]
    #[case("hola", "today")]
    #[case("estás", "weather")]
    #[case("xyz", "ß")]
    #[case("h", "abc")]
    fn test_within_unit_interval(#[case] a: &str, #[case] b: &str) {
        let s = sim(a, b);
        assert!((0.0..=1.0).contains(&s), "{a}/{b} -> {s}");
    }

    #[test]
    fn test_edit_similarity_counts_chars_not_bytes() {
        // "ñu" and "nu" are two chars each, one substitution apart
        assert_relative_eq!(edit_similarity("ñu", "nu"), 0.5);
    }

    #[test]
    fn test_edit_similarity_both_empty() {
        assert_relative_eq!(edit_similarity("", ""), 1.0);
    }

    #[test]
    fn test_phonetic_similarity_of_identical_patterns() {
        assert_relative_eq!(phonetic_similarity("bed", "pet"), PHONETIC_MATCH_SIMILARITY);
    }

    #[test]
    fn test_silent_h_alone_does_not_contain_everything() {
        // "h" folds to "" which must not trigger containment
        assert!(sim("h", "casa") < CONTAINMENT_SIMILARITY);
    }
}
