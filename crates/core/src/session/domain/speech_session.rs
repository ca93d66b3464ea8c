use serde::{Deserialize, Serialize};

/// A provisional recognition result delivered before the final transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterimEvent {
    pub transcript: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: u64,
}

/// Timing snapshot of one recording, handed to the scorers read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechSession {
    pub start_time: u64,
    #[serde(default)]
    pub end_time: Option<u64>,
    #[serde(default)]
    pub interim_events: Vec<InterimEvent>,
}

impl SpeechSession {
    pub fn new(start_time: u64) -> Self {
        Self {
            start_time,
            end_time: None,
            interim_events: Vec::new(),
        }
    }

    /// Builds a session spanning `duration_ms` with `interim_count` placeholder events.
    pub fn synthetic(duration_ms: u64, interim_count: usize) -> Self {
        let interim_events = (0..interim_count)
            .map(|i| InterimEvent {
                transcript: String::new(),
                timestamp: (i as u64 + 1) * duration_ms / (interim_count as u64 + 1),
            })
            .collect();
        Self {
            start_time: 0,
            end_time: Some(duration_ms),
            interim_events,
        }
    }

    pub fn record_interim(&mut self, transcript: impl Into<String>, timestamp: u64) {
        self.interim_events.push(InterimEvent {
            transcript: transcript.into(),
            timestamp,
        });
    }

    pub fn end(&mut self, end_time: u64) {
        self.end_time = Some(end_time);
    }

    pub fn actual_duration_ms(&self) -> u64 {
        match self.end_time {
            Some(end) if end < self.start_time => {
                log::warn!(
                    "Session ended at {end} before it started at {}; duration is 0",
                    self.start_time
                );
                0
            }
            Some(end) => end - self.start_time,
            None => 0,
        }
    }

    pub fn interim_event_count(&self) -> usize {
        self.interim_events.len()
    }
}
