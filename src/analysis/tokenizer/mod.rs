//! Tokenizer capability.
//!
//! Two implementations ship with the crate:
//!
//! - [`UnicodeWordTokenizer`] - UAX #29 word segmentation, case preserved
//! - [`SimpleTokenizer`] - the heuristic fallback: punctuation becomes
//!   whitespace, text is lower-cased and split on whitespace

use crate::analysis::capability::CapabilitySource;
use crate::error::Result;

/// Trait for tokenizers that split a sentence into word tokens.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into an ordered list of tokens.
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this tokenizer (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Whether this tokenizer is model-backed or a heuristic fallback.
    fn source(&self) -> CapabilitySource {
        CapabilitySource::Model
    }
}

pub mod simple;
pub mod unicode_word;

pub use simple::SimpleTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
