//! Unicode word tokenizer implementation.
//!
//! This module provides a tokenizer that splits text using Unicode word boundary
//! rules (UAX #29). Unlike the heuristic fallback it keeps the original casing,
//! which is what lets the capitalized-pair person finder see proper nouns.
//!
//! # Examples
//!
//! ```
//! use intentia::analysis::tokenizer::Tokenizer;
//! use intentia::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let tokenizer = UnicodeWordTokenizer::new();
//! let tokens = tokenizer.tokenize("Show contract #123456, please!").unwrap();
//!
//! assert_eq!(tokens, vec!["Show", "contract", "123456", "please"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
///
/// Segments that contain no alphanumeric character (whitespace, punctuation)
/// are dropped.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer;

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer
    }
}

impl Tokenizer for UnicodeWordTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(text
            .split_word_bounds()
            .filter(|word| word.chars().any(|c| c.is_alphanumeric()))
            .map(str::to_string)
            .collect())
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
