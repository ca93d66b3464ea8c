/// Similarity at or above which an expected word counts as correct.
pub const CORRECT_THRESHOLD: f64 = 0.85;
/// Similarity at or above which an expected word earns partial credit.
pub const PARTIAL_THRESHOLD: f64 = 0.55;
/// Lowest similarity that still counts as an attempt at the word.
pub const MINIMAL_THRESHOLD: f64 = 0.3;

pub const CORRECT_CREDIT: f64 = 1.0;
pub const PARTIAL_CREDIT: f64 = 0.8;
pub const MINIMAL_CREDIT: f64 = 0.2;

/// Base speaking rate for a learner, in syllables per second.
pub const SYLLABLES_PER_SECOND: f64 = 3.5;
/// Grace time added to every expected duration for natural pauses.
pub const PAUSE_BUFFER_MS: f64 = 1000.0;

pub const WORD_ACCURACY_WEIGHT: f64 = 0.6;
pub const TIMING_WEIGHT: f64 = 0.2;
pub const FLUENCY_WEIGHT: f64 = 0.2;

pub const SETTINGS_DIR_NAME: &str = "SpeakScore";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
