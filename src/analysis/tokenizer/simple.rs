//! Heuristic fallback tokenizer.

use crate::analysis::capability::CapabilitySource;
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// Lower-cases the text, turns every character that is neither an ASCII
/// letter/digit nor whitespace into a space, and splits on whitespace.
///
/// ```
/// use intentia::analysis::tokenizer::{SimpleTokenizer, Tokenizer};
///
/// let tokens = SimpleTokenizer::new().tokenize("Contract#123456?").unwrap();
/// assert_eq!(tokens, vec!["contract", "123456"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimpleTokenizer;

impl SimpleTokenizer {
    /// Create a new fallback tokenizer.
    pub fn new() -> Self {
        SimpleTokenizer
    }
}

impl Tokenizer for SimpleTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        let cleaned: String = text
            .to_lowercase()
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c.is_whitespace() {
                    c
                } else {
                    ' '
                }
            })
            .collect();

        Ok(cleaned.split_whitespace().map(str::to_string).collect())
    }

    fn name(&self) -> &'static str {
        "simple"
    }

    fn source(&self) -> CapabilitySource {
        CapabilitySource::Heuristic
    }
}
