//! Word frequency model built from a reference corpus.

use std::fs;
use std::path::Path;

use ahash::AHashMap;
use log::{debug, info};

use crate::analysis::analyzer::{Analyzer, WordAnalyzer};
use crate::error::{AutocorrectError, Result};

/// Occurrence counts of normalized tokens.
///
/// The table has no mutating methods: once constructed it is read-only, so
/// the cached total count can never go stale and a shared reference can be
/// used from any number of threads. Unknown tokens are absent rather than
/// stored with a zero count.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    counts: AHashMap<String, u64>,
    total_count: u64,
}

impl FrequencyTable {
    /// Build a table from corpus text using the default [`WordAnalyzer`].
    ///
    /// An empty corpus yields an empty table.
    ///
    /// # Examples
    ///
    /// ```
    /// use autocorrect::spelling::FrequencyTable;
    ///
    /// let table = FrequencyTable::from_corpus("The cat sat on the mat.").unwrap();
    /// assert_eq!(table.count("the"), 2);
    /// assert_eq!(table.total_count(), 6);
    /// ```
    pub fn from_corpus(text: &str) -> Result<Self> {
        Self::from_corpus_with(text, &WordAnalyzer::new())
    }

    /// Build a table from corpus text using a custom analyzer.
    pub fn from_corpus_with(text: &str, analyzer: &dyn Analyzer) -> Result<Self> {
        let mut counts: AHashMap<String, u64> = AHashMap::new();
        let mut total_count = 0u64;

        for token in analyzer.analyze(text)? {
            if token.is_empty() {
                continue;
            }
            *counts.entry(token.text).or_insert(0) += 1;
            total_count += 1;
        }

        debug!(
            "built frequency table: {} distinct tokens, {} total",
            counts.len(),
            total_count
        );

        Ok(FrequencyTable {
            counts,
            total_count,
        })
    }

    /// Build a table from already counted `(word, count)` pairs.
    ///
    /// Words are lowercased, repeated words have their counts summed, and
    /// empty words or zero counts are dropped so that absence remains the
    /// only way a word is unknown.
    pub fn from_counts<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut counts: AHashMap<String, u64> = AHashMap::new();
        for (word, count) in pairs {
            let word = word.as_ref();
            if word.is_empty() || count == 0 {
                continue;
            }
            *counts.entry(word.to_lowercase()).or_insert(0) += count;
        }
        let total_count = counts.values().sum();

        FrequencyTable {
            counts,
            total_count,
        }
    }

    /// Read a plain-text corpus file and build a table from its content.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let table = Self::from_corpus(&text)?;

        info!(
            "loaded corpus {}: {} distinct words, {} tokens",
            path.display(),
            table.len(),
            table.total_count()
        );

        Ok(table)
    }

    /// Whether the exact token is present.
    ///
    /// Lookups are case-sensitive; callers are expected to pass lowercase words.
    pub fn contains(&self, word: &str) -> bool {
        self.counts.contains_key(word)
    }

    /// Occurrence count of a token, 0 when absent.
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Sum of all counts.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether the table holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Relative frequency `count(word) / total_count`.
    ///
    /// Absent words have probability 0.
    ///
    /// # Errors
    ///
    /// Returns [`AutocorrectError::DegenerateModel`] when the total count is
    /// zero, since no probability is defined for an empty model.
    pub fn probability(&self, word: &str) -> Result<f64> {
        if self.total_count == 0 {
            return Err(AutocorrectError::degenerate_model(format!(
                "cannot compute the probability of '{word}' with a total count of zero"
            )));
        }
        Ok(self.count(word) as f64 / self.total_count as f64)
    }

    /// Iterate over `(word, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    /// The `limit` most frequent tokens, highest count first.
    ///
    /// Equal counts are ordered lexicographically.
    pub fn most_frequent(&self, limit: usize) -> Vec<(&str, u64)> {
        let mut words: Vec<(&str, u64)> = self.iter().collect();
        words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        words.truncate(limit);
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_from_corpus() {
        let corpus = "The quick brown fox jumps over the lazy dog. The dog was lazy.";
        let table = FrequencyTable::from_corpus(corpus).unwrap();

        assert!(table.contains("the"));
        assert!(table.contains("quick"));
        assert!(!table.contains("The"));
        assert_eq!(table.count("the"), 3);
        assert_eq!(table.count("dog"), 2);
        assert_eq!(table.count("lazy"), 2);
        assert_eq!(table.count("quick"), 1);
        assert_eq!(table.count("cat"), 0);
        assert_eq!(table.total_count(), 13);
        assert_eq!(table.len(), 9);
    }

    #[test]
    fn test_empty_corpus() {
        let table = FrequencyTable::from_corpus("").unwrap();
        assert!(table.is_empty());
        assert_eq!(table.total_count(), 0);

        let table = FrequencyTable::from_corpus(" ,.;!? ").unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_unknown_words_are_absent() {
        let table = FrequencyTable::from_corpus("alpha beta").unwrap();
        assert!(!table.contains("gamma"));
        assert_eq!(table.iter().count(), 2);
        assert!(table.iter().all(|(_, count)| count > 0));
    }

    #[test]
    fn test_probability() {
        let table = FrequencyTable::from_counts([("hello", 6), ("world", 4)]);

        assert!((table.probability("hello").unwrap() - 0.6).abs() < 1e-12);
        assert!((table.probability("world").unwrap() - 0.4).abs() < 1e-12);
        assert_eq!(table.probability("nonexistent").unwrap(), 0.0);
    }

    #[test]
    fn test_probability_on_empty_model() {
        let table = FrequencyTable::default();
        let result = table.probability("anything");
        assert!(matches!(result, Err(AutocorrectError::DegenerateModel(_))));
    }

    #[test]
    fn test_probability_monotonic_with_count() {
        let table = FrequencyTable::from_counts([("common", 100), ("medium", 50), ("rare", 1)]);
        let common = table.probability("common").unwrap();
        let medium = table.probability("medium").unwrap();
        let rare = table.probability("rare").unwrap();

        assert!(common > medium);
        assert!(medium > rare);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let corpus = "a b b c c c d d d d some more words to make the table longer a b";
        let table = FrequencyTable::from_corpus(corpus).unwrap();

        let sum: f64 = table
            .iter()
            .map(|(word, _)| table.probability(word).unwrap())
            .sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_counts_normalizes() {
        let table = FrequencyTable::from_counts(vec![
            ("Hello".to_string(), 2),
            ("hello".to_string(), 3),
            ("".to_string(), 7),
            ("ghost".to_string(), 0),
        ]);

        assert_eq!(table.count("hello"), 5);
        assert!(!table.contains(""));
        assert!(!table.contains("ghost"));
        assert_eq!(table.total_count(), 5);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_most_frequent() {
        let table = FrequencyTable::from_counts([
            ("common", 100),
            ("rare", 1),
            ("medium", 50),
            ("alsomedium", 50),
        ]);

        let top = table.most_frequent(3);
        assert_eq!(top, vec![("common", 100), ("alsomedium", 50), ("medium", 50)]);
        assert_eq!(table.most_frequent(10).len(), 4);
        assert!(table.most_frequent(0).is_empty());
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "Hello world!").unwrap();
        writeln!(temp_file, "HELLO again, world.").unwrap();
        temp_file.flush().unwrap();

        let table = FrequencyTable::load_from_file(temp_file.path()).unwrap();
        assert_eq!(table.count("hello"), 2);
        assert_eq!(table.count("world"), 2);
        assert_eq!(table.count("again"), 1);
        assert_eq!(table.total_count(), 5);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = FrequencyTable::load_from_file(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(AutocorrectError::Io(_))));
    }
}
