//! Query parser service.
//!
//! # Examples
//!
//! ```
//! use intentia::config::ParserConfig;
//! use intentia::entity::EntityType;
//! use intentia::intent::Intent;
//! use intentia::pipeline::QueryParser;
//!
//! let parser = QueryParser::new(ParserConfig::default()).unwrap();
//! let result = parser.parse_query("show contract 123456");
//!
//! assert_eq!(result.intent, Intent::ContractDetails);
//! assert_eq!(result.entity(EntityType::ContractNumbers), ["123456"]);
//! assert!(result.confidence >= 0.5);
//! ```

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, error, info};

use crate::analysis::capability::CapabilitySet;
use crate::analysis::normalizer::Normalizer;
use crate::cache::{QueryCache, cache_key};
use crate::config::ParserConfig;
use crate::entity::{Entities, EntityExtractor};
use crate::error::{IntentiaError, Result};
use crate::intent::{ClassificationInput, IntentClassifier, IntentConfig, KeywordIntentClassifier};
use crate::pipeline::query::{
    META_CACHE_HIT_RATE, META_KEY_PHRASES, META_SENTENCE_COUNT, META_TOKEN_COUNT,
    META_TOTAL_QUERIES, ParsedQuery,
};
use crate::pipeline::sentence::{ProcessedSentence, SentenceAnalyzer};
use crate::stats::{QueryStats, Statistics};

/// Query-understanding service.
///
/// `QueryParser` is `Send + Sync`; share it by reference or behind an `Arc`.
/// The cache and statistics are synchronized internally.
pub struct QueryParser {
    config: ParserConfig,
    capabilities: Arc<CapabilitySet>,
    normalizer: Normalizer,
    analyzer: SentenceAnalyzer,
    classifier: Arc<dyn IntentClassifier>,
    cache: QueryCache,
    stats: QueryStats,
}

impl QueryParser {
    /// Create a parser, loading the capabilities named in `config.models`.
    ///
    /// Capabilities that cannot be loaded fall back to heuristics; only an
    /// invalid configuration is an error.
    pub fn new(config: ParserConfig) -> Result<Self> {
        let capabilities = CapabilitySet::load(&config.models);
        Self::with_capabilities(config, capabilities)
    }

    /// Create a parser over an already built capability set.
    pub fn with_capabilities(config: ParserConfig, capabilities: CapabilitySet) -> Result<Self> {
        let intent_config = IntentConfig::new()?;
        Self::from_parts(config, capabilities, intent_config)
    }

    /// Create a parser from explicit parts. The configured confidence floor
    /// overrides the one in `intent_config`.
    pub fn from_parts(
        config: ParserConfig,
        capabilities: CapabilitySet,
        intent_config: IntentConfig,
    ) -> Result<Self> {
        info!("Initializing query parser...");
        config.validate()?;

        let intent_config = Arc::new(intent_config.with_min_confidence(config.min_confidence));
        let normalizer = Normalizer::new(
            intent_config
                .spelling_corrections()
                .iter()
                .map(|(from, to)| (from.as_str(), to.as_str())),
        )?;
        let capabilities = Arc::new(capabilities);
        let analyzer = SentenceAnalyzer::new(
            Arc::clone(&capabilities),
            Arc::new(EntityExtractor::new()?),
        );

        let parser = QueryParser {
            cache: QueryCache::new(config.max_cache_size),
            stats: QueryStats::new(),
            classifier: Arc::new(KeywordIntentClassifier::new(intent_config)),
            config,
            capabilities,
            normalizer,
            analyzer,
        };
        info!(
            "Query parser initialization completed ({}/{} models loaded)",
            parser.capabilities.loaded_count(),
            CapabilitySet::SLOT_COUNT
        );
        Ok(parser)
    }

    /// Replace the intent classifier.
    pub fn with_classifier(mut self, classifier: Arc<dyn IntentClassifier>) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Parse one query.
    ///
    /// Never fails: invalid input and pipeline failures produce an `ERROR`
    /// result with a message under the `error` metadata key.
    pub fn parse_query(&self, input: &str) -> Arc<ParsedQuery> {
        let start = Instant::now();
        self.stats.record_query();

        if let Err(e) = self.validate(input) {
            debug!("Rejected query: {e}");
            return Arc::new(ParsedQuery::error(input, e.to_string()));
        }

        let key = cache_key(input);
        if let Some(cached) = self.cache.get(&key) {
            self.stats.record_cache_hit();
            debug!("Cache hit for query: {}", preview(input, 50));
            return cached;
        }

        match self.process(input) {
            Ok(result) => {
                let result = Arc::new(result);
                self.cache.put(key, Arc::clone(&result));

                let elapsed = start.elapsed();
                self.stats.record_processing_time(result.intent, elapsed);
                debug!(
                    "Query processed in {}ms: {} -> {} ({:.2})",
                    elapsed.as_millis(),
                    preview(input, 30),
                    result.intent,
                    result.confidence
                );
                result
            }
            Err(e) => {
                error!("Error processing query: {}: {e}", preview(input, 50));
                Arc::new(ParsedQuery::error(
                    input,
                    format!("Error processing query: {e}"),
                ))
            }
        }
    }

    fn validate(&self, input: &str) -> Result<()> {
        if input.trim().is_empty() {
            return Err(IntentiaError::invalid_input("Input cannot be empty"));
        }
        let length = input.chars().count();
        if length > self.config.max_input_length {
            return Err(IntentiaError::input_too_long(
                length,
                self.config.max_input_length,
            ));
        }
        Ok(())
    }

    /// Run the full pipeline on validated input.
    fn process(&self, input: &str) -> Result<ParsedQuery> {
        let normalized = self.normalizer.normalize(input);
        let sentences = self.analyze_sentences(input, &normalized)?;

        let mut entities = Entities::new();
        for sentence in &sentences {
            entities.merge(&sentence.entities);
        }
        let tokens: Vec<String> = sentences
            .iter()
            .flat_map(|sentence| sentence.tokens.iter().cloned())
            .collect();

        let classification = self.classifier.classify(&ClassificationInput {
            normalized_input: &normalized,
            tokens: &tokens,
            sentence_count: sentences.len(),
            entities: &entities,
        })?;

        let mut result = ParsedQuery::new(
            classification.intent,
            classification.confidence,
            entities.clean(),
            input,
            normalized,
        );
        self.enrich(&mut result, &sentences, tokens.len());
        Ok(result)
    }

    /// Segment and analyze the normalized input. Each normalized sentence is
    /// paired with the raw sentence at the same position; when the raw input
    /// segments differently, the normalized sentence stands in for it.
    fn analyze_sentences(&self, input: &str, normalized: &str) -> Result<Vec<ProcessedSentence>> {
        let sentences = self.capabilities.detect_sentences(normalized)?;
        let originals = self.capabilities.detect_sentences(input.trim())?;
        let paired = originals.len() == sentences.len();

        let mut processed = Vec::with_capacity(sentences.len());
        for (i, sentence) in sentences.iter().enumerate() {
            if sentence.trim().is_empty() {
                continue;
            }
            let original = if paired { &originals[i] } else { sentence };
            processed.push(self.analyzer.analyze(sentence, original)?);
        }
        Ok(processed)
    }

    fn enrich(&self, result: &mut ParsedQuery, sentences: &[ProcessedSentence], token_count: usize) {
        let mut key_phrases: Vec<String> = Vec::new();
        for phrase in sentences.iter().flat_map(|s| &s.key_phrases) {
            if !key_phrases.contains(phrase) {
                key_phrases.push(phrase.clone());
            }
        }

        result.add_metadata(META_SENTENCE_COUNT, sentences.len());
        result.add_metadata(META_TOKEN_COUNT, token_count);
        result.add_metadata(META_KEY_PHRASES, key_phrases);
        result.add_metadata(META_CACHE_HIT_RATE, self.stats.cache_hit_rate());
        result.add_metadata(META_TOTAL_QUERIES, self.stats.total_queries());
    }

    /// Snapshot of usage statistics.
    pub fn statistics(&self) -> Statistics {
        self.stats
            .snapshot(self.cache.len(), self.capabilities.loaded_count())
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
        info!("Query cache cleared");
    }

    /// Reset query counters and timings. The cache is kept.
    pub fn reset_statistics(&self) {
        self.stats.reset();
        info!("Service statistics reset");
    }
}

impl fmt::Debug for QueryParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QueryParser")
            .field("config", &self.config)
            .field("capabilities", &self.capabilities)
            .field("classifier", &self.classifier.name())
            .field("cache_size", &self.cache.len())
            .finish()
    }
}

fn preview(input: &str, max_chars: usize) -> String {
    input.chars().take(max_chars).collect()
}
