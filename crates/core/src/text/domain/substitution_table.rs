/// Known recognizer confusions.
///
/// Pairs are unordered and matched against pronunciation-folded words, so an
/// entry spelled with `v` or `h` only documents the raw confusion. Entries
/// are empirical mishearings and fast-speech contractions seen from browser
/// recognizers on learner speech.
const CONFUSION_PAIRS: &[(&str, &str)] = &[
    // Spanish
    ("bano", "vano"),
    ("bano", "baho"),
    ("bano", "bao"),
    ("bano", "pano"),
    ("bano", "albano"),
    ("bano", "abano"),
    ("donde", "onde"),
    ("donde", "don"),
    ("el", "al"),
    ("la", "ya"),
    ("de", "del"),
    ("en", "an"),
    // Fast speech contractions
    ("para", "pa"),
    ("porque", "por"),
    ("esta", "ta"),
];

pub const SUBSTITUTION_SIMILARITY: f64 = 0.95;

/// Returns true when `a` and `b` form a known confusion pair, in either order.
pub fn is_known_confusion(a: &str, b: &str) -> bool {
    CONFUSION_PAIRS
        .iter()
        .any(|&(x, y)| (a == x && b == y) || (a == y && b == x))
}
