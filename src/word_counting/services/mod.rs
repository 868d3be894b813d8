mod tokenizer;
mod word_aggregator;

pub use tokenizer::Tokenizer;
pub use word_aggregator::WordAggregator;
