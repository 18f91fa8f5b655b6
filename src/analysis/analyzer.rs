//! Analyzers combine a tokenizer with token filters.
//!
//! # Examples
//!
//! ```
//! use autocorrect::analysis::analyzer::{Analyzer, WordAnalyzer};
//!
//! let analyzer = WordAnalyzer::new();
//! let words = analyzer.words("The Cat's hat.").unwrap();
//! assert_eq!(words, vec!["the", "cat", "s", "hat"]);
//! ```

use std::sync::Arc;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// Trait for the complete analysis pipeline.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (used for debugging).
    fn name(&self) -> &'static str;

    /// Analyze the text and keep only the token strings.
    fn words(&self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|token| token.text).collect())
    }
}

/// The analyzer that defines a model token: a `\w+` run, lowercased.
#[derive(Clone)]
pub struct WordAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl WordAnalyzer {
    /// Create the default word analyzer.
    pub fn new() -> Self {
        WordAnalyzer {
            tokenizer: Arc::new(RegexTokenizer::new()),
            filters: vec![Arc::new(LowercaseFilter::new())],
        }
    }

    /// Create an analyzer with a custom tokenizer, still lowercasing its output.
    pub fn with_tokenizer(tokenizer: Arc<dyn Tokenizer>) -> Self {
        WordAnalyzer {
            tokenizer,
            filters: vec![Arc::new(LowercaseFilter::new())],
        }
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }
}

impl Default for WordAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for WordAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }
        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "word"
    }
}

impl std::fmt::Debug for WordAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    #[test]
    fn test_word_analyzer() {
        let analyzer = WordAnalyzer::new();
        let tokens: Vec<Token> = analyzer.analyze("Hello WORLD").unwrap().collect();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "hello");
        assert_eq!(tokens[1].text, "world");
        assert_eq!(tokens[1].start_offset, 6);
    }

    #[test]
    fn test_punctuation_separates_words() {
        let analyzer = WordAnalyzer::new();
        let words = analyzer.words("one,two;three\nFour--five_six").unwrap();
        assert_eq!(words, vec!["one", "two", "three", "four", "five_six"]);
    }

    #[test]
    fn test_custom_tokenizer() {
        let tokenizer = Arc::new(RegexTokenizer::with_pattern(r"[A-Za-z]+").unwrap());
        let analyzer = WordAnalyzer::with_tokenizer(tokenizer);
        assert_eq!(analyzer.tokenizer().name(), "regex");
        assert_eq!(analyzer.words("Abc9Def").unwrap(), vec!["abc", "def"]);
    }

    #[test]
    fn test_debug_lists_pipeline() {
        let debug = format!("{:?}", WordAnalyzer::new());
        assert!(debug.contains("regex"));
        assert!(debug.contains("lowercase"));
    }
}
