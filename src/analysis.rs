//! Text analysis for building the frequency model.
//!
//! A corpus is turned into tokens by a regex tokenizer (`\w+`) and a
//! lowercase filter. The combined pipeline is the [`analyzer::WordAnalyzer`].

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;
