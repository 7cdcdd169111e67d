//! Fallback sentence splitter.

use crate::analysis::capability::CapabilitySource;
use crate::analysis::sentence::SentenceDetector;
use crate::error::Result;

/// Splits on runs of `.`, `!` and `?`, trims each piece and drops empty ones.
///
/// ```
/// use intentia::analysis::sentence::{SentenceDetector, TerminatorSentenceDetector};
///
/// let sentences = TerminatorSentenceDetector::new()
///     .detect("hi there!! show contract 123456. ")
///     .unwrap();
/// assert_eq!(sentences, vec!["hi there", "show contract 123456"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TerminatorSentenceDetector;

impl TerminatorSentenceDetector {
    pub fn new() -> Self {
        TerminatorSentenceDetector
    }
}

impl SentenceDetector for TerminatorSentenceDetector {
    fn detect(&self, text: &str) -> Result<Vec<String>> {
        Ok(text
            .split(['.', '!', '?'])
            .map(str::trim)
            .filter(|sentence| !sentence.is_empty())
            .map(str::to_string)
            .collect())
    }

    fn name(&self) -> &'static str {
        "terminator"
    }

    fn source(&self) -> CapabilitySource {
        CapabilitySource::Heuristic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_terminator_is_one_sentence() {
        let detector = TerminatorSentenceDetector::new();
        assert_eq!(detector.detect("show contract 123456").unwrap(), vec!["show contract 123456"]);
    }

    #[test]
    fn test_only_terminators_yields_nothing() {
        let detector = TerminatorSentenceDetector::new();
        assert!(detector.detect("...?!").unwrap().is_empty());
        assert!(detector.detect("").unwrap().is_empty());
    }

    #[test]
    fn test_splits_emails_too() {
        // The fallback has no notion of abbreviations or addresses.
        let detector = TerminatorSentenceDetector::new();
        assert_eq!(detector.detect("mail a@b.com").unwrap(), vec!["mail a@b", "com"]);
    }
}
