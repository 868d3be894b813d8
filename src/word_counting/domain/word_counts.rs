use super::NormalizedWord;
use std::collections::hash_map;
use std::collections::HashMap;

/// WordCounts aggregate - frequency of each distinct normalized word
///
/// Every key is non-empty and made of lowercase ASCII letters only; that is
/// enforced by only accepting `NormalizedWord` and skipping empty ones.
/// Iteration follows the underlying `HashMap`, so its order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCounts {
    counts: HashMap<String, u64>,
}

impl WordCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `word`.
    ///
    /// Returns `false` without touching the map when the word is empty.
    pub fn record(&mut self, word: NormalizedWord) -> bool {
        if word.is_empty() {
            return false;
        }
        *self.counts.entry(word.into_string()).or_insert(0) += 1;
        true
    }

    pub fn get(&self, word: &str) -> Option<u64> {
        self.counts.get(word).copied()
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all frequencies
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Entries in the map's natural iteration order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.counts.iter(),
        }
    }

    /// Entries ordered by word, ascending
    pub fn sorted_by_word(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }

    /// Entries ordered by frequency, descending; ties broken by word
    pub fn sorted_by_count(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

/// Borrowing iterator over `(word, count)` pairs
pub struct Iter<'a> {
    inner: hash_map::Iter<'a, String, u64>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, u64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(word, count)| (word.as_str(), *count))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a WordCounts {
    type Item = (&'a str, u64);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts_of(tokens: &[&str]) -> WordCounts {
        let mut counts = WordCounts::new();
        for token in tokens {
            counts.record(NormalizedWord::from_token(token));
        }
        counts
    }

    #[test]
    fn test_new_is_empty() {
        let counts = WordCounts::new();
        assert!(counts.is_empty());
        assert_eq!(counts.len(), 0);
        assert_eq!(counts.total(), 0);
    }

    #[test]
    fn test_record_inserts_then_increments() {
        let mut counts = WordCounts::new();
        assert!(counts.record(NormalizedWord::from_token("cat")));
        assert_eq!(counts.get("cat"), Some(1));
        assert!(counts.record(NormalizedWord::from_token("cat")));
        assert_eq!(counts.get("cat"), Some(2));
    }

    #[test]
    fn test_record_skips_empty_word() {
        let mut counts = WordCounts::new();
        assert!(!counts.record(NormalizedWord::from_token("123")));
        assert!(counts.is_empty());
        assert_eq!(counts.get(""), None);
    }

    #[test]
    fn test_case_variants_share_one_key() {
        let counts = counts_of(&["Cat", "cat", "CAT"]);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("cat"), Some(3));
    }

    #[test]
    fn test_total_sums_frequencies() {
        let counts = counts_of(&["a", "b", "a", "!!", "c", "A"]);
        assert_eq!(counts.total(), 5);
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn test_keys_are_lowercase_letters_only() {
        let counts = counts_of(&["Hello,", "WORLD!", "x-ray", "42"]);
        for (word, _) in &counts {
            assert!(!word.is_empty());
            assert!(word.chars().all(|c| c.is_ascii_lowercase()));
        }
    }

    #[test]
    fn test_sorted_by_word() {
        let counts = counts_of(&["pear", "apple", "fig", "apple"]);
        assert_eq!(
            counts.sorted_by_word(),
            vec![("apple", 2), ("fig", 1), ("pear", 1)]
        );
    }

    #[test]
    fn test_sorted_by_count_breaks_ties_by_word() {
        let counts = counts_of(&["b", "a", "c", "c", "b", "c"]);
        assert_eq!(
            counts.sorted_by_count(),
            vec![("c", 3), ("b", 2), ("a", 1)]
        );

        let ties = counts_of(&["zeta", "alpha", "mid"]);
        assert_eq!(
            ties.sorted_by_count(),
            vec![("alpha", 1), ("mid", 1), ("zeta", 1)]
        );
    }
}
