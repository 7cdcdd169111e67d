//! Parser configuration.
//!
//! Configuration is plain serde data with sensible defaults, so it can be
//! built in code or read from a JSON file:
//!
//! ```json
//! {
//!   "max_input_length": 1000,
//!   "max_cache_size": 1000,
//!   "min_confidence": 0.1,
//!   "models": { "unicode_tokenizer": true, "pos_lexicon": "models/en-lexicon.txt" }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{IntentiaError, Result};

/// Configuration for [`QueryParser`](crate::pipeline::QueryParser).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Maximum accepted input length, in characters.
    pub max_input_length: usize,
    /// Maximum number of cached results. `0` disables the cache.
    pub max_cache_size: usize,
    /// Global confidence floor. Results below it are treated as general
    /// inquiries, and sub-threshold confidences are raised to it.
    pub min_confidence: f64,
    /// Which linguistic models to load.
    pub models: ModelConfig,
}

impl Default for ParserConfig {
    fn default() -> Self {
        ParserConfig {
            max_input_length: 1000,
            max_cache_size: 1000,
            min_confidence: 0.1,
            models: ModelConfig::default(),
        }
    }
}

impl ParserConfig {
    /// Read a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: ParserConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.max_input_length == 0 {
            return Err(IntentiaError::config("max_input_length must be positive"));
        }
        if !(0.0..=1.0).contains(&self.min_confidence) {
            return Err(IntentiaError::config(format!(
                "min_confidence must be within [0, 1], got {}",
                self.min_confidence
            )));
        }
        Ok(())
    }
}

/// Model selection for each linguistic capability.
///
/// Capabilities left unset use their heuristic fallback. File-backed models
/// that fail to load also fall back, with a warning.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Use UAX #29 word segmentation instead of the fallback tokenizer.
    pub unicode_tokenizer: bool,
    /// Use UAX #29 sentence segmentation instead of terminator splitting.
    pub unicode_sentences: bool,
    /// Use the tag-pattern chunker instead of all-`O` labels.
    pub tag_pattern_chunker: bool,
    /// `word TAG` lexicon for the part-of-speech tagger.
    pub pos_lexicon: Option<PathBuf>,
    /// `word<TAB>tag<TAB>lemma` dictionary for the lemmatizer.
    pub lemma_dictionary: Option<PathBuf>,
    pub person_gazetteer: Option<PathBuf>,
    pub organization_gazetteer: Option<PathBuf>,
    pub location_gazetteer: Option<PathBuf>,
}
