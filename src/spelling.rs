//! Spelling correction.
//!
//! A [`FrequencyTable`] is built once from a reference corpus and then
//! borrowed by a [`Corrector`], which proposes the most probable known word
//! within two edits of its input.

pub mod corrector;
pub mod dictionary;
pub mod edits;

// Re-export commonly used types
pub use corrector::*;
pub use dictionary::*;
pub use edits::*;
