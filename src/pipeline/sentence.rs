//! Per-sentence linguistic analysis.
//!
//! A sentence is tokenized, tagged, lemmatized and chunked with the
//! capability set, then entities and key phrases are extracted from it.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::capability::CapabilitySet;
use crate::analysis::stop_words::is_stop_word;
use crate::entity::{Entities, EntityExtractor};
use crate::error::{IntentiaError, Result};

/// Analysis of one sentence.
///
/// `tokens`, `pos_tags`, `lemmas` and `chunks` are parallel sequences of the
/// same length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedSentence {
    pub tokens: Vec<String>,
    pub pos_tags: Vec<String>,
    pub lemmas: Vec<String>,
    /// `B-XX` / `I-XX` / `O` phrase labels.
    pub chunks: Vec<String>,
    pub entities: Entities,
    /// Noun phrases and content words, deduplicated in first-seen order.
    pub key_phrases: Vec<String>,
    /// The normalized sentence that was analyzed.
    pub text: String,
    /// The sentence as it appeared in the raw input.
    pub original_text: String,
}

/// Runs the per-sentence pipeline.
#[derive(Debug, Clone)]
pub struct SentenceAnalyzer {
    capabilities: Arc<CapabilitySet>,
    extractor: Arc<EntityExtractor>,
}

impl SentenceAnalyzer {
    pub fn new(capabilities: Arc<CapabilitySet>, extractor: Arc<EntityExtractor>) -> Self {
        Self {
            capabilities,
            extractor,
        }
    }

    /// Analyze the normalized sentence `text`. Regex entities are taken from
    /// `original_text`, which preserves the user's casing.
    pub fn analyze(&self, text: &str, original_text: &str) -> Result<ProcessedSentence> {
        let tokens = self.capabilities.tokenize(text)?;

        let pos_tags = self.capabilities.pos_tag(&tokens)?;
        check_parallel("pos tagger", &tokens, &pos_tags)?;

        let lemmas = self.capabilities.lemmatize(&tokens, &pos_tags)?;
        check_parallel("lemmatizer", &tokens, &lemmas)?;

        let chunks = self.capabilities.chunk(&tokens, &pos_tags)?;
        check_parallel("chunker", &tokens, &chunks)?;

        let entities = self
            .extractor
            .extract(original_text, &tokens, &self.capabilities)?;
        let key_phrases = key_phrases(&tokens, &pos_tags, &chunks);

        Ok(ProcessedSentence {
            tokens,
            pos_tags,
            lemmas,
            chunks,
            entities,
            key_phrases,
            text: text.to_string(),
            original_text: original_text.to_string(),
        })
    }
}

fn check_parallel(capability: &str, tokens: &[String], output: &[String]) -> Result<()> {
    if tokens.len() != output.len() {
        return Err(IntentiaError::analysis(format!(
            "{capability} returned {} labels for {} tokens",
            output.len(),
            tokens.len()
        )));
    }
    Ok(())
}

fn is_noun_phrase_label(label: &str) -> bool {
    label.starts_with("B-NP") || label.starts_with("I-NP")
}

fn is_valid_phrase(phrase: &str) -> bool {
    let len = phrase.chars().count();
    len > 2 && len < 50 && !is_stop_word(phrase)
}

/// Extract key phrases from a tagged and chunked sentence.
///
/// Maximal runs of noun-phrase tokens come first, followed by single nouns
/// and verbs longer than two characters. Stop words are skipped.
pub fn key_phrases(tokens: &[String], pos_tags: &[String], chunks: &[String]) -> Vec<String> {
    let mut candidates = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for (token, label) in tokens.iter().zip(chunks) {
        if is_noun_phrase_label(label) {
            current.push(token);
        } else if !current.is_empty() {
            candidates.push(current.join(" "));
            current.clear();
        }
    }
    if !current.is_empty() {
        candidates.push(current.join(" "));
    }
    candidates.retain(|phrase| is_valid_phrase(phrase));

    for (token, tag) in tokens.iter().zip(pos_tags) {
        if (tag.starts_with("NN") || tag.starts_with("VB"))
            && token.chars().count() > 2
            && !is_stop_word(token)
        {
            candidates.push(token.clone());
        }
    }

    let mut phrases: Vec<String> = Vec::with_capacity(candidates.len());
    for phrase in candidates {
        if !phrases.contains(&phrase) {
            phrases.push(phrase);
        }
    }
    phrases
}
