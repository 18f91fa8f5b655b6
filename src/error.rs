//! Error types for the autocorrect library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`AutocorrectError`] enum.
//!
//! # Examples
//!
//! ```
//! use autocorrect::error::{AutocorrectError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(AutocorrectError::invalid_config("max_distance must be at most 2"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for autocorrect operations.
///
/// A correction that finds no known candidate is not an error: the input word
/// is returned unchanged. Errors are limited to degenerate models, bad
/// configuration and the I/O of the outer layers.
#[derive(Error, Debug)]
pub enum AutocorrectError {
    /// Probability was requested against a model with a total count of zero.
    #[error("Degenerate model: {0}")]
    DegenerateModel(String),

    /// I/O errors (corpus and configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Analysis-related errors (tokenizer construction)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Configuration values outside their valid range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with AutocorrectError.
pub type Result<T> = std::result::Result<T, AutocorrectError>;

impl AutocorrectError {
    /// Create a new degenerate model error.
    pub fn degenerate_model<S: Into<String>>(msg: S) -> Self {
        AutocorrectError::DegenerateModel(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        AutocorrectError::Analysis(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        AutocorrectError::InvalidConfig(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        AutocorrectError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = AutocorrectError::degenerate_model("empty corpus");
        assert_eq!(error.to_string(), "Degenerate model: empty corpus");

        let error = AutocorrectError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = AutocorrectError::invalid_config("max_distance is 3");
        assert_eq!(error.to_string(), "Invalid configuration: max_distance is 3");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = AutocorrectError::from(io_error);

        match error {
            AutocorrectError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: AutocorrectError = json_error.into();
        assert!(error.to_string().starts_with("JSON error:"));
    }
}
