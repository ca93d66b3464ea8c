//! Lossy sound-class encoding used as the last similarity fallback.

/// Voiced/unvoiced and liquid/nasal pairs merged to one class.
const CONSONANT_CLASSES: &[(char, char)] = &[
    ('b', 'p'),
    ('d', 't'),
    ('g', 'k'),
    ('z', 's'),
    ('l', 'r'),
    ('m', 'n'),
];

const VOWEL_BASES: &[(char, char)] = &[
    ('á', 'a'),
    ('à', 'a'),
    ('â', 'a'),
    ('ä', 'a'),
    ('é', 'e'),
    ('è', 'e'),
    ('ê', 'e'),
    ('ë', 'e'),
    ('í', 'i'),
    ('ì', 'i'),
    ('î', 'i'),
    ('ï', 'i'),
    ('ó', 'o'),
    ('ò', 'o'),
    ('ô', 'o'),
    ('ö', 'o'),
    ('ú', 'u'),
    ('ù', 'u'),
    ('û', 'u'),
    ('ü', 'u'),
];

fn reduce_char(c: char) -> char {
    CONSONANT_CLASSES
        .iter()
        .chain(VOWEL_BASES)
        .find(|(from, _)| *from == c)
        .map_or(c, |(_, to)| *to)
}

/// Maps a word to its coarse sound-class pattern.
///
/// Consonant classes merge first, accented vowels strip to their base, then
/// any run of a repeated character collapses to one.
pub fn to_phonetic_pattern(word: &str) -> String {
    let mut pattern = String::with_capacity(word.len());
    let mut last: Option<char> = None;
    for c in word.to_lowercase().chars().map(reduce_char) {
        if last != Some(c) {
            pattern.push(c);
        }
        last = Some(c);
    }
    pattern
}
