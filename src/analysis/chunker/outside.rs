//! Fallback chunker.

use crate::analysis::capability::CapabilitySource;
use crate::analysis::chunker::Chunker;
use crate::error::Result;

/// Labels every token `O`.
#[derive(Clone, Debug, Default)]
pub struct OutsideChunker;

impl Chunker for OutsideChunker {
    fn chunk(&self, tokens: &[String], _tags: &[String]) -> Result<Vec<String>> {
        Ok(vec!["O".to_string(); tokens.len()])
    }

    fn name(&self) -> &'static str {
        "outside"
    }

    fn source(&self) -> CapabilitySource {
        CapabilitySource::Heuristic
    }
}
