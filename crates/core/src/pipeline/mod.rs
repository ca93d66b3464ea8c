pub mod assess_attempt_use_case;
pub mod practice_session;
