use crate::analysis::capability::CapabilitySource;
use crate::analysis::lemmatizer::Lemmatizer;
use crate::error::Result;

/// Fallback lemmatizer that returns every token unchanged.
#[derive(Clone, Debug, Default)]
pub struct IdentityLemmatizer;

impl Lemmatizer for IdentityLemmatizer {
    fn lemmatize(&self, tokens: &[String], _tags: &[String]) -> Result<Vec<String>> {
        Ok(tokens.to_vec())
    }

    fn name(&self) -> &'static str {
        "identity"
    }

    fn source(&self) -> CapabilitySource {
        CapabilitySource::Heuristic
    }
}
