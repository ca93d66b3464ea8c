//! Feedback tags attached to each sub-score.
//!
//! Tags serialize as stable snake_case identifiers so a UI can localize
//! them; `message()` gives the default English text.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordFeedback {
    Excellent,
    Good,
    GettingBetter,
    KeepPracticing,
    TryTargetLanguage,
}

impl WordFeedback {
    /// Tag from the share of expected words said correctly.
    pub fn from_correct_ratio(correct: usize, total: usize) -> Self {
        if total == 0 {
            return WordFeedback::Excellent;
        }
        let percentage = (correct as f64 / total as f64 * 100.0).round();
        if percentage >= 90.0 {
            WordFeedback::Excellent
        } else if percentage >= 75.0 {
            WordFeedback::Good
        } else if percentage >= 60.0 {
            WordFeedback::GettingBetter
        } else {
            WordFeedback::KeepPracticing
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            WordFeedback::Excellent => "Excellent word accuracy!",
            WordFeedback::Good => "Good pronunciation, keep practicing!",
            WordFeedback::GettingBetter => "Getting better, focus on unclear words",
            WordFeedback::KeepPracticing => "Keep practicing, you're improving!",
            WordFeedback::TryTargetLanguage => "Try saying the phrase in the target language",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimingFeedback {
    TooFast,
    TooSlow,
    SlightlySlow,
    GoodPace,
    TryTargetPhrase,
}

impl TimingFeedback {
    pub fn message(self) -> &'static str {
        match self {
            TimingFeedback::TooFast => "Try speaking a bit slower for clearer pronunciation",
            TimingFeedback::TooSlow => "Try to speak more fluently with fewer pauses",
            TimingFeedback::SlightlySlow => "Good pace, try to be a bit more natural",
            TimingFeedback::GoodPace => "Great speaking pace!",
            TimingFeedback::TryTargetPhrase => "Please try the target phrase",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FluencyFeedback {
    GoodSpeedWorkOnClarity,
    SpeakMoreContinuously,
    SlightlyFast,
    Hesitant,
    Smooth,
    FocusOnCorrectWords,
}

impl FluencyFeedback {
    pub fn message(self) -> &'static str {
        match self {
            FluencyFeedback::GoodSpeedWorkOnClarity => "Good speed, work on clarity",
            FluencyFeedback::SpeakMoreContinuously => "Try to speak more continuously",
            FluencyFeedback::SlightlyFast => "Good fluency, try speaking slightly slower",
            FluencyFeedback::Hesitant => "Work on speaking more fluently with fewer pauses",
            FluencyFeedback::Smooth => "Smooth and fluent delivery!",
            FluencyFeedback::FocusOnCorrectWords => "Focus on saying the correct words",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallFeedback {
    Outstanding,
    Excellent,
    Great,
    GoodEffort,
    NiceTry,
    KeepPracticing,
}

impl OverallFeedback {
    pub fn from_score(score: u8) -> Self {
        match score {
            95.. => OverallFeedback::Outstanding,
            85..=94 => OverallFeedback::Excellent,
            75..=84 => OverallFeedback::Great,
            65..=74 => OverallFeedback::GoodEffort,
            50..=64 => OverallFeedback::NiceTry,
            _ => OverallFeedback::KeepPracticing,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            OverallFeedback::Outstanding => "Outstanding! Your pronunciation is excellent!",
            OverallFeedback::Excellent => "Excellent work! You're speaking very well!",
            OverallFeedback::Great => "Great job! Keep up the good practice!",
            OverallFeedback::GoodEffort => "Good effort! You're making solid progress!",
            OverallFeedback::NiceTry => "Nice try! Focus on the areas that need work!",
            OverallFeedback::KeepPracticing => "Keep practicing! Every attempt helps you improve!",
        }
    }
}
