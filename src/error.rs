//! Error types for the Intentia library.
//!
//! All fallible operations return [`Result`], whose error type is the
//! [`IntentiaError`] enum. The query entry point itself never returns an
//! error: failures are converted into `ERROR`-intent results by the parser.
//!
//! # Examples
//!
//! ```
//! use intentia::error::{IntentiaError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(IntentiaError::analysis("token/tag length mismatch"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for Intentia operations.
#[derive(Error, Debug)]
pub enum IntentiaError {
    /// I/O errors (model and config files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Empty or otherwise unusable input
    #[error("{0}")]
    InvalidInput(String),

    /// Input longer than the configured maximum
    #[error("Input too long. Maximum {max} characters allowed (got {length})")]
    InputTooLong { length: usize, max: usize },

    /// Analysis-related errors (tokenization, tagging, chunking, etc.)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// A linguistic capability could not be constructed
    #[error("Capability error: {0}")]
    Capability(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid regular expression
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with IntentiaError.
pub type Result<T> = std::result::Result<T, IntentiaError>;

impl IntentiaError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        IntentiaError::InvalidInput(msg.into())
    }

    /// Create a new input length error.
    pub fn input_too_long(length: usize, max: usize) -> Self {
        IntentiaError::InputTooLong { length, max }
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        IntentiaError::Analysis(msg.into())
    }

    /// Create a new capability error.
    pub fn capability<S: Into<String>>(msg: S) -> Self {
        IntentiaError::Capability(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        IntentiaError::Config(msg.into())
    }

    /// Whether this error was caused by the caller's input rather than by
    /// the pipeline itself.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            IntentiaError::InvalidInput(_) | IntentiaError::InputTooLong { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = IntentiaError::analysis("Test analysis error");
        assert_eq!(error.to_string(), "Analysis error: Test analysis error");

        let error = IntentiaError::capability("pos tagger");
        assert_eq!(error.to_string(), "Capability error: pos tagger");

        let error = IntentiaError::input_too_long(1200, 1000);
        assert_eq!(
            error.to_string(),
            "Input too long. Maximum 1000 characters allowed (got 1200)"
        );
    }

    #[test]
    fn test_invalid_input_message_is_verbatim() {
        let error = IntentiaError::invalid_input("Input cannot be empty");
        assert_eq!(error.to_string(), "Input cannot be empty");
    }

    #[test]
    fn test_input_error_classification() {
        assert!(IntentiaError::invalid_input("Input cannot be empty").is_input_error());
        assert!(IntentiaError::input_too_long(2, 1).is_input_error());
        assert!(!IntentiaError::analysis("boom").is_input_error());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = IntentiaError::from(io_error);

        match error {
            IntentiaError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }
}
