//! Token filters that transform token streams.
//!
//! # Examples
//!
//! ```
//! use autocorrect::analysis::token_filter::Filter;
//! use autocorrect::analysis::token_filter::lowercase::LowercaseFilter;
//! use autocorrect::analysis::token::Token;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("Hello", 0), Token::new("WORLD", 1)];
//! let filtered: Vec<_> = filter.filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(filtered[0].text, "hello");
//! assert_eq!(filtered[1].text, "world");
//! ```

pub mod lowercase;

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (used for debugging).
    fn name(&self) -> &'static str;
}
