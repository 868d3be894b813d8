use super::Tokenizer;
use crate::word_counting::domain::{NormalizedWord, WordCounts};
use std::io::{self, BufRead};

/// WordAggregator service - folds raw tokens into `WordCounts`
///
/// Keeps the number of tokens seen alongside the counts so callers can tell
/// how many tokens were discarded for having no letters.
#[derive(Debug, Default)]
pub struct WordAggregator {
    counts: WordCounts,
    tokens_seen: u64,
}

impl WordAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes one raw token and counts it if anything is left.
    pub fn add_token(&mut self, token: &str) {
        self.tokens_seen += 1;
        self.counts.record(NormalizedWord::from_token(token));
    }

    /// Drains every token from `reader`.
    ///
    /// # Errors
    /// Returns the first read error; nothing after it is counted.
    pub fn consume<R: BufRead>(&mut self, reader: R) -> io::Result<()> {
        for token in Tokenizer::new(reader) {
            self.add_token(&token?);
        }
        Ok(())
    }

    /// Total tokens seen, including those that normalized to nothing
    pub fn tokens_seen(&self) -> u64 {
        self.tokens_seen
    }

    pub fn counts(&self) -> &WordCounts {
        &self.counts
    }

    pub fn into_counts(self) -> WordCounts {
        self.counts
    }
}
