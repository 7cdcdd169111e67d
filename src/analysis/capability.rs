//! Capability set: the linguistic functions the pipeline consumes.
//!
//! Every capability is held as a trait object and is either model-backed or a
//! deterministic heuristic. Each slot is chosen independently when the set is
//! built; a model that fails to load is logged and replaced by its heuristic
//! for the lifetime of the set.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use intentia::analysis::capability::CapabilitySet;
//! use intentia::analysis::tokenizer::UnicodeWordTokenizer;
//!
//! let capabilities = CapabilitySet::heuristic()
//!     .with_tokenizer(Arc::new(UnicodeWordTokenizer::new()));
//!
//! assert_eq!(capabilities.loaded_count(), 1);
//! ```

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::analysis::chunker::{Chunker, OutsideChunker, TagPatternChunker};
use crate::analysis::lemmatizer::{DictionaryLemmatizer, IdentityLemmatizer, Lemmatizer};
use crate::analysis::name_finder::{
    CapitalizedPairFinder, EmptyNameFinder, GazetteerNameFinder, NameFinder, NameKind, Span,
};
use crate::analysis::pos_tagger::{HeuristicPosTagger, LexiconPosTagger, PosTagger};
use crate::analysis::sentence::{
    SentenceDetector, TerminatorSentenceDetector, UnicodeSentenceDetector,
};
use crate::analysis::tokenizer::{SimpleTokenizer, Tokenizer, UnicodeWordTokenizer};
use crate::config::ModelConfig;
use crate::error::Result;

/// Where a capability's behavior comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilitySource {
    /// A dedicated implementation: trained, dictionary or standard driven.
    Model,
    /// The built-in deterministic fallback.
    Heuristic,
}

/// The full set of linguistic capabilities used by the pipeline.
#[derive(Clone)]
pub struct CapabilitySet {
    tokenizer: Arc<dyn Tokenizer>,
    pos_tagger: Arc<dyn PosTagger>,
    sentence_detector: Arc<dyn SentenceDetector>,
    person_finder: Arc<dyn NameFinder>,
    organization_finder: Arc<dyn NameFinder>,
    location_finder: Arc<dyn NameFinder>,
    chunker: Arc<dyn Chunker>,
    lemmatizer: Arc<dyn Lemmatizer>,
}

impl CapabilitySet {
    /// Total number of capability slots.
    pub const SLOT_COUNT: usize = 8;

    /// A set where every capability uses its heuristic fallback.
    pub fn heuristic() -> Self {
        CapabilitySet {
            tokenizer: Arc::new(SimpleTokenizer::new()),
            pos_tagger: Arc::new(HeuristicPosTagger::new()),
            sentence_detector: Arc::new(TerminatorSentenceDetector::new()),
            person_finder: Arc::new(CapitalizedPairFinder::new()),
            organization_finder: Arc::new(EmptyNameFinder),
            location_finder: Arc::new(EmptyNameFinder),
            chunker: Arc::new(OutsideChunker),
            lemmatizer: Arc::new(IdentityLemmatizer),
        }
    }

    /// Build a set from model configuration.
    ///
    /// Never fails: every capability whose model cannot be constructed keeps
    /// its heuristic fallback and the failure is logged.
    pub fn load(config: &ModelConfig) -> Self {
        let mut set = CapabilitySet::heuristic();

        if config.unicode_tokenizer {
            set.tokenizer = Arc::new(UnicodeWordTokenizer::new());
        }
        if config.unicode_sentences {
            set.sentence_detector = Arc::new(UnicodeSentenceDetector::new());
        }
        if config.tag_pattern_chunker {
            set.chunker = Arc::new(TagPatternChunker::new());
        }
        if let Some(tagger) = load_model("pos", config.pos_lexicon.as_deref(), |p| {
            LexiconPosTagger::from_path(p)
        }) {
            set.pos_tagger = Arc::new(tagger);
        }
        if let Some(lemmatizer) = load_model(
            "lemmatizer",
            config.lemma_dictionary.as_deref(),
            |p| DictionaryLemmatizer::from_path(p),
        ) {
            set.lemmatizer = Arc::new(lemmatizer);
        }
        if let Some(finder) = load_model(
            "person",
            config.person_gazetteer.as_deref(),
            |p| GazetteerNameFinder::from_path(p),
        ) {
            set.person_finder = Arc::new(finder);
        }
        if let Some(finder) = load_model(
            "organization",
            config.organization_gazetteer.as_deref(),
            |p| GazetteerNameFinder::from_path(p),
        ) {
            set.organization_finder = Arc::new(finder);
        }
        if let Some(finder) = load_model(
            "location",
            config.location_gazetteer.as_deref(),
            |p| GazetteerNameFinder::from_path(p),
        ) {
            set.location_finder = Arc::new(finder);
        }

        let loaded = set.loaded_count();
        info!(
            "Loaded {loaded}/{} linguistic models successfully",
            Self::SLOT_COUNT
        );
        for (slot, source) in set.sources() {
            let status = match source {
                CapabilitySource::Model => "LOADED",
                CapabilitySource::Heuristic => "FALLBACK",
            };
            info!("Model {slot}: {status}");
        }
        if loaded == 0 {
            warn!("No linguistic models loaded. Using fallback processing only.");
        }

        set
    }

    pub fn with_tokenizer(mut self, tokenizer: Arc<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn with_pos_tagger(mut self, pos_tagger: Arc<dyn PosTagger>) -> Self {
        self.pos_tagger = pos_tagger;
        self
    }

    pub fn with_sentence_detector(mut self, sentence_detector: Arc<dyn SentenceDetector>) -> Self {
        self.sentence_detector = sentence_detector;
        self
    }

    /// Replace the name finder for one entity kind.
    pub fn with_name_finder(mut self, kind: NameKind, finder: Arc<dyn NameFinder>) -> Self {
        match kind {
            NameKind::Person => self.person_finder = finder,
            NameKind::Organization => self.organization_finder = finder,
            NameKind::Location => self.location_finder = finder,
        }
        self
    }

    pub fn with_chunker(mut self, chunker: Arc<dyn Chunker>) -> Self {
        self.chunker = chunker;
        self
    }

    pub fn with_lemmatizer(mut self, lemmatizer: Arc<dyn Lemmatizer>) -> Self {
        self.lemmatizer = lemmatizer;
        self
    }

    pub fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        self.tokenizer.tokenize(text)
    }

    pub fn pos_tag(&self, tokens: &[String]) -> Result<Vec<String>> {
        self.pos_tagger.tag(tokens)
    }

    pub fn detect_sentences(&self, text: &str) -> Result<Vec<String>> {
        self.sentence_detector.detect(text)
    }

    pub fn find_named_entities(&self, kind: NameKind, tokens: &[String]) -> Result<Vec<Span>> {
        self.name_finder(kind).find(tokens)
    }

    pub fn chunk(&self, tokens: &[String], tags: &[String]) -> Result<Vec<String>> {
        self.chunker.chunk(tokens, tags)
    }

    pub fn lemmatize(&self, tokens: &[String], tags: &[String]) -> Result<Vec<String>> {
        self.lemmatizer.lemmatize(tokens, tags)
    }

    fn name_finder(&self, kind: NameKind) -> &Arc<dyn NameFinder> {
        match kind {
            NameKind::Person => &self.person_finder,
            NameKind::Organization => &self.organization_finder,
            NameKind::Location => &self.location_finder,
        }
    }

    /// Source of every slot, in a fixed order.
    pub fn sources(&self) -> [(&'static str, CapabilitySource); Self::SLOT_COUNT] {
        [
            ("tokenizer", self.tokenizer.source()),
            ("pos", self.pos_tagger.source()),
            ("sentence", self.sentence_detector.source()),
            ("person", self.person_finder.source()),
            ("organization", self.organization_finder.source()),
            ("location", self.location_finder.source()),
            ("chunker", self.chunker.source()),
            ("lemmatizer", self.lemmatizer.source()),
        ]
    }

    /// Number of model-backed capabilities.
    pub fn loaded_count(&self) -> usize {
        self.sources()
            .iter()
            .filter(|(_, source)| *source == CapabilitySource::Model)
            .count()
    }
}

impl Default for CapabilitySet {
    fn default() -> Self {
        CapabilitySet::heuristic()
    }
}

impl fmt::Debug for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilitySet")
            .field("tokenizer", &self.tokenizer.name())
            .field("pos_tagger", &self.pos_tagger.name())
            .field("sentence_detector", &self.sentence_detector.name())
            .field("person_finder", &self.person_finder.name())
            .field("organization_finder", &self.organization_finder.name())
            .field("location_finder", &self.location_finder.name())
            .field("chunker", &self.chunker.name())
            .field("lemmatizer", &self.lemmatizer.name())
            .finish()
    }
}

/// Construct a model from `path` if one is configured; a failure is logged
/// and reported as `None` so the caller keeps its fallback.
fn load_model<T, F>(slot: &str, path: Option<&Path>, loader: F) -> Option<T>
where
    F: FnOnce(&Path) -> Result<T>,
{
    let path = path?;
    match loader(path) {
        Ok(model) => Some(model),
        Err(e) => {
            warn!(
                "Failed to load {slot} model from {}: {e}. Using fallback.",
                path.display()
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_heuristic_set_has_no_models() {
        let set = CapabilitySet::heuristic();
        assert_eq!(set.loaded_count(), 0);
        assert!(set
            .sources()
            .iter()
            .all(|(_, source)| *source == CapabilitySource::Heuristic));
    }

    #[test]
    fn test_builder_replaces_single_slot() {
        let set = CapabilitySet::heuristic()
            .with_name_finder(NameKind::Location, Arc::new(GazetteerNameFinder::from_names(["Paris"])));

        assert_eq!(set.loaded_count(), 1);
        let tokens = vec!["to".to_string(), "Paris".to_string()];
        assert_eq!(
            set.find_named_entities(NameKind::Location, &tokens).unwrap(),
            vec![Span::new(1, 2)]
        );
        assert!(set
            .find_named_entities(NameKind::Organization, &tokens)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_load_falls_back_per_capability() {
        let mut lexicon = NamedTempFile::new().unwrap();
        writeln!(lexicon, "contract NN").unwrap();

        let config = ModelConfig {
            unicode_tokenizer: true,
            pos_lexicon: Some(lexicon.path().to_path_buf()),
            lemma_dictionary: Some("/nonexistent/lemmas.txt".into()),
            ..ModelConfig::default()
        };
        let set = CapabilitySet::load(&config);

        let sources: Vec<_> = set.sources().to_vec();
        assert_eq!(sources[0], ("tokenizer", CapabilitySource::Model));
        assert_eq!(sources[1], ("pos", CapabilitySource::Model));
        assert_eq!(sources[7], ("lemmatizer", CapabilitySource::Heuristic));
        assert_eq!(set.loaded_count(), 2);
    }

    #[test]
    fn test_debug_lists_names() {
        let debug = format!("{:?}", CapabilitySet::heuristic());
        assert!(debug.contains("simple"));
        assert!(debug.contains("capitalized_pair"));
    }
}
