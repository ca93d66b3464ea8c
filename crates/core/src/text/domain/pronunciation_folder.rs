//! Pronunciation-level normalization of a single word.
//!
//! The rules are heuristic tuning knobs for recognizer noise in Spanish,
//! French and German, not a linguistic model. They run top to bottom; order
//! matters (`ll` must fold before `h` is dropped, accents before `ß`).

/// Ordered `(pattern, replacement)` rewrite rules.
const FOLD_RULES: &[(&str, &str)] = &[
    // Spanish accents and eñe
    ("á", "a"),
    ("à", "a"),
    ("é", "e"),
    ("è", "e"),
    ("í", "i"),
    ("ì", "i"),
    ("ó", "o"),
    ("ò", "o"),
    ("ú", "u"),
    ("ù", "u"),
    ("ñ", "n"),
    // b/v are indistinguishable in Spanish speech
    ("v", "b"),
    // yeísmo
    ("ll", "y"),
    ("rr", "r"),
    // silent h
    ("h", ""),
    // French
    ("ç", "c"),
    ("â", "a"),
    ("ê", "e"),
    ("ë", "e"),
    ("î", "i"),
    ("ï", "i"),
    ("ô", "o"),
    // German
    ("ä", "a"),
    ("ö", "o"),
    ("û", "u"),
    ("ü", "u"),
    ("ß", "ss"),
];

/// Folds a word to the form used for pronunciation-level equality and edit
/// distance.
pub fn fold(word: &str) -> String {
    FOLD_RULES
        .iter()
        .fold(word.to_lowercase(), |acc, (pattern, replacement)| {
            if acc.contains(pattern) {
                acc.replace(pattern, replacement)
            } else {
                acc
            }
        })
}
