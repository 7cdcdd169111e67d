//! Part-of-speech tagging capability.
//!
//! Tags follow the Penn Treebank tag set (`NN`, `VB`, `CD`, ...). Implementations
//! must return exactly one tag per input token.

use crate::analysis::capability::CapabilitySource;
use crate::error::Result;

/// Trait for part-of-speech taggers.
pub trait PosTagger: Send + Sync {
    /// Tag each token. The returned vector has the same length as `tokens`.
    fn tag(&self, tokens: &[String]) -> Result<Vec<String>>;

    /// Get the name of this tagger.
    fn name(&self) -> &'static str;

    /// Whether this tagger is model-backed or a heuristic fallback.
    fn source(&self) -> CapabilitySource {
        CapabilitySource::Model
    }
}

pub mod heuristic;
pub mod lexicon;

pub use heuristic::HeuristicPosTagger;
pub use lexicon::LexiconPosTagger;
