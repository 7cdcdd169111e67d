//! Lemmatization capability.

use crate::analysis::capability::CapabilitySource;
use crate::error::Result;

/// Trait for lemmatizers.
pub trait Lemmatizer: Send + Sync {
    /// Return one lemma per token. `tokens` and `tags` are parallel.
    fn lemmatize(&self, tokens: &[String], tags: &[String]) -> Result<Vec<String>>;

    /// Get the name of this lemmatizer.
    fn name(&self) -> &'static str;

    /// Whether this lemmatizer is model-backed or a heuristic fallback.
    fn source(&self) -> CapabilitySource {
        CapabilitySource::Model
    }
}

pub mod dictionary;
pub mod identity;

pub use dictionary::DictionaryLemmatizer;
pub use identity::IdentityLemmatizer;
