pub mod phrase;
pub mod phrase_repository;
