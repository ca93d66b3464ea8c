pub mod heuristic_word_similarity;
