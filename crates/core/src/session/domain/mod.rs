pub mod speech_session;
