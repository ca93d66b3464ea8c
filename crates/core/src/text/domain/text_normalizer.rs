/// Inverted Spanish punctuation plus generic sentence punctuation.
const STRIPPED_PUNCTUATION: &[char] = &['¿', '¡', '.', ',', '!', '?', ';', ':'];

/// Canonicalizes a phrase or transcript for word-level comparison.
///
/// Lower-cases, drops punctuation, collapses whitespace runs to one space
/// and trims. Idempotent.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect();
    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalizes and splits into words. Empty input yields no words.
pub fn words(text: &str) -> Vec<String> {
    normalize(text)
        .split(' ')
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::inverted_marks("¿Dónde está el baño?", "dónde está el baño")]
    #[case::exclamation("¡Hola!", "hola")]
    #[case::commas("Hola, ¿cómo estás?", "hola cómo estás")]
    #[case::whitespace_runs("  Guten \t Morgen \n ", "guten morgen")]
    #[case::semicolons("oui; non: peut-être.", "oui non peut-être")]
    #[case::empty("", "")]
    #[case::only_punctuation("¿?¡!", "")]
    fn test_normalize(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize(input), expected);
    }

    #[rstest]
    #[case("¿Dónde está el baño?")]
    #[case("  Je   VOUDRAIS un café, s'il vous plaît. ")]
    #[case("Entschuldigung! Wo ist der Bahnhof?")]
    #[case("")]
    fn test_normalize_is_idempotent(#[case] input: &str) {
        let once = normalize(input);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_normalize_keeps_apostrophes_and_hyphens() {
        assert_eq!(normalize("S'il vous plaît"), "s'il vous plaît");
    }

    #[test]
    fn test_words_splits_on_whitespace() {
        assert_eq!(words("Hola, ¿cómo estás?"), vec!["hola", "cómo", "estás"]);
    }

    #[test]
    fn test_words_empty_transcript() {
        assert!(words("   ").is_empty());
    }
}
