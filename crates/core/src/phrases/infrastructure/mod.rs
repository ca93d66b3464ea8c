pub mod json_phrase_repository;
