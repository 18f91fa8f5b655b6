//! # autocorrect
//!
//! A single-word spelling corrector driven by word frequencies from a
//! reference corpus.
//!
//! ## Features
//!
//! - Regex (`\w+`) and lowercase analysis of the corpus
//! - Immutable frequency table with cached total count
//! - Delete, transpose, replace and insert candidate generation
//! - Ordered tiers: exact match, one edit, two edits, pass-through
//! - Parallel batch correction
//!
//! ## Example
//!
//! ```
//! use autocorrect::spelling::{Corrector, FrequencyTable};
//!
//! let table = FrequencyTable::from_corpus("the cat sat on the mat").unwrap();
//! let corrector = Corrector::new(&table);
//!
//! assert_eq!(corrector.correction("cst").unwrap(), "cat");
//! assert_eq!(corrector.correction("the").unwrap(), "the");
//! assert_eq!(corrector.correction("zebra").unwrap(), "zebra");
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod spelling;

pub mod prelude {
    pub use crate::error::{AutocorrectError, Result};
    pub use crate::spelling::{Candidates, Correction, Corrector, CorrectorConfig, FrequencyTable, Tier};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
