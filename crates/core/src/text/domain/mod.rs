pub mod phonetic_reducer;
pub mod pronunciation_folder;
pub mod substitution_table;
pub mod text_normalizer;
pub mod word_similarity;
