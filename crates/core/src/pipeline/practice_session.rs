use thiserror::Error;

use crate::pipeline::assess_attempt_use_case::AssessAttemptUseCase;
use crate::scoring::domain::assessment_report::AssessmentReport;
use crate::session::domain::speech_session::SpeechSession;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("no practice attempt in progress")]
    NotActive,
}

struct Attempt {
    expected_phrase: String,
    expected_duration_ms: f64,
    session: SpeechSession,
}

/// Recording lifecycle around a single in-flight attempt.
///
/// Starting a new attempt or cancelling discards whatever was in flight, and
/// an attempt is assessed at most once.
pub struct PracticeSession {
    use_case: AssessAttemptUseCase,
    current: Option<Attempt>,
}

impl PracticeSession {
    pub fn new(use_case: AssessAttemptUseCase) -> Self {
        Self {
            use_case,
            current: None,
        }
    }

    pub fn start(&mut self, expected_phrase: impl Into<String>, started_at_ms: u64) {
        if self.current.is_some() {
            log::info!("Discarding in-flight attempt");
        }
        let expected_phrase = expected_phrase.into();
        let expected_duration_ms = self.use_case.expected_duration_ms(&expected_phrase);
        log::info!(
            "Attempt started for \"{expected_phrase}\" (expected {expected_duration_ms:.0} ms)"
        );
        self.current = Some(Attempt {
            expected_phrase,
            expected_duration_ms,
            session: SpeechSession::new(started_at_ms),
        });
    }

    pub fn record_interim(&mut self, fragment: impl Into<String>, timestamp_ms: u64) {
        match self.current.as_mut() {
            Some(attempt) => attempt.session.record_interim(fragment, timestamp_ms),
            None => log::debug!("Interim result with no active attempt ignored"),
        }
    }

    pub fn finish(
        &mut self,
        transcript: &str,
        ended_at_ms: u64,
    ) -> Result<AssessmentReport, SessionError> {
        let mut attempt = self.current.take().ok_or(SessionError::NotActive)?;
        attempt.session.end(ended_at_ms);
        let report = self.use_case.execute(
            &attempt.expected_phrase,
            transcript,
            &attempt.session,
            Some(attempt.expected_duration_ms),
        );
        log::info!("Attempt finished with overall score {}", report.overall);
        Ok(report)
    }

    pub fn cancel(&mut self) {
        if self.current.take().is_some() {
            log::info!("Attempt cancelled");
        }
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some()
    }

    pub fn expected_phrase(&self) -> Option<&str> {
        self.current.as_ref().map(|a| a.expected_phrase.as_str())
    }
}

impl Default for PracticeSession {
    fn default() -> Self {
        Self::new(AssessAttemptUseCase::with_defaults())
    }
}
