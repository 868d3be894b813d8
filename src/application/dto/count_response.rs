use crate::word_counting::domain::WordCounts;

/// CountResponse - Result of one counting run
#[derive(Debug, Clone)]
pub struct CountResponse {
    /// Final, authoritative counts for the run
    pub counts: WordCounts,
    /// Every whitespace-delimited token read, including discarded ones
    pub tokens_seen: u64,
    /// The rendered report exactly as written to both sinks
    pub rendered: String,
}

impl CountResponse {
    pub fn new(counts: WordCounts, tokens_seen: u64, rendered: String) -> Self {
        Self {
            counts,
            tokens_seen,
            rendered,
        }
    }

    /// Tokens that normalized to the empty word
    pub fn discarded_tokens(&self) -> u64 {
        self.tokens_seen - self.counts.total()
    }
}
