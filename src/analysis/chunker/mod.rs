//! Phrase chunking capability.
//!
//! Chunk labels use the BIO convention: `B-XX` opens a phrase of type `XX`,
//! `I-XX` continues it and `O` marks a token outside any phrase.

use crate::analysis::capability::CapabilitySource;
use crate::error::Result;

/// Trait for phrase chunkers.
pub trait Chunker: Send + Sync {
    /// Label each token. `tokens` and `tags` are parallel; the result has the
    /// same length.
    fn chunk(&self, tokens: &[String], tags: &[String]) -> Result<Vec<String>>;

    /// Get the name of this chunker.
    fn name(&self) -> &'static str;

    /// Whether this chunker is model-backed or a heuristic fallback.
    fn source(&self) -> CapabilitySource {
        CapabilitySource::Model
    }
}

pub mod outside;
pub mod tag_pattern;

pub use outside::OutsideChunker;
pub use tag_pattern::TagPatternChunker;
