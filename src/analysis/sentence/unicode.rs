//! UAX #29 sentence segmentation.

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::sentence::SentenceDetector;
use crate::error::Result;

/// Sentence detector based on the Unicode sentence boundary rules.
///
/// Terminators stay attached to their sentence, and a period between two
/// letters (as in an e-mail address) does not end a sentence.
///
/// ```
/// use intentia::analysis::sentence::{SentenceDetector, UnicodeSentenceDetector};
///
/// let sentences = UnicodeSentenceDetector::new()
///     .detect("Mail a@b.com today. Then call me!")
///     .unwrap();
/// assert_eq!(sentences, vec!["Mail a@b.com today.", "Then call me!"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct UnicodeSentenceDetector;

impl UnicodeSentenceDetector {
    pub fn new() -> Self {
        UnicodeSentenceDetector
    }
}

impl SentenceDetector for UnicodeSentenceDetector {
    fn detect(&self, text: &str) -> Result<Vec<String>> {
        Ok(text
            .unicode_sentences()
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn name(&self) -> &'static str {
        "unicode_sentence"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sentences() {
        let detector = UnicodeSentenceDetector::new();
        let sentences = detector.detect("Hello there. Show contract 123456.").unwrap();
        assert_eq!(sentences, vec!["Hello there.", "Show contract 123456."]);
    }

    #[test]
    fn test_blank_input() {
        let detector = UnicodeSentenceDetector::new();
        assert!(detector.detect("   ").unwrap().is_empty());
    }
}
