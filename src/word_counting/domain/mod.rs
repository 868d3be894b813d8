pub mod normalized_word;
pub mod word_counts;

pub use normalized_word::NormalizedWord;
pub use word_counts::WordCounts;
