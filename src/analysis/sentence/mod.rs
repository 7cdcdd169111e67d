//! Sentence boundary detection capability.

use crate::analysis::capability::CapabilitySource;
use crate::error::Result;

/// Trait for sentence detectors.
///
/// Implementations return the sentences of `text` in order, trimmed, with
/// empty sentences removed. Detection is a pure function of the input.
pub trait SentenceDetector: Send + Sync {
    /// Split `text` into sentences.
    fn detect(&self, text: &str) -> Result<Vec<String>>;

    /// Get the name of this detector.
    fn name(&self) -> &'static str;

    /// Whether this detector is model-backed or a heuristic fallback.
    fn source(&self) -> CapabilitySource {
        CapabilitySource::Model
    }
}

pub mod terminator;
pub mod unicode;

pub use terminator::TerminatorSentenceDetector;
pub use unicode::UnicodeSentenceDetector;
