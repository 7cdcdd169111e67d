//! The structured result of parsing one query.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::entity::{Entities, EntityType};
use crate::intent::Intent;

pub const META_SENTENCE_COUNT: &str = "sentenceCount";
pub const META_TOKEN_COUNT: &str = "tokenCount";
pub const META_KEY_PHRASES: &str = "keyPhrases";
pub const META_CACHE_HIT_RATE: &str = "cacheHitRate";
pub const META_TOTAL_QUERIES: &str = "totalQueriesProcessed";
pub const META_ERROR: &str = "error";

/// Parsed query.
///
/// Immutable once returned by the parser; cache hits hand out the same value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuery {
    pub intent: Intent,
    /// In `[0, 1]`.
    pub confidence: f64,
    pub entities: Entities,
    pub original_input: String,
    /// Normalized input. Empty for error results.
    pub processed_input: String,
    pub timestamp: DateTime<Utc>,
    pub processing_id: String,
    pub metadata: BTreeMap<String, Value>,
}

impl ParsedQuery {
    pub fn new(
        intent: Intent,
        confidence: f64,
        entities: Entities,
        original_input: impl Into<String>,
        processed_input: impl Into<String>,
    ) -> Self {
        ParsedQuery {
            intent,
            confidence,
            entities,
            original_input: original_input.into(),
            processed_input: processed_input.into(),
            timestamp: Utc::now(),
            processing_id: Uuid::new_v4().to_string(),
            metadata: BTreeMap::new(),
        }
    }

    /// An `ERROR` result carrying `message` under the `error` metadata key.
    pub fn error(original_input: impl Into<String>, message: impl Into<String>) -> Self {
        let mut query = ParsedQuery::new(Intent::Error, 0.0, Entities::new(), original_input, "");
        query.add_metadata(META_ERROR, message.into());
        query
    }

    pub fn add_metadata(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.metadata.insert(key.into(), value.into());
    }

    pub fn metadata(&self, key: &str) -> Option<&Value> {
        self.metadata.get(key)
    }

    pub fn is_error(&self) -> bool {
        self.intent == Intent::Error
    }

    /// The error message of an error result.
    pub fn error_message(&self) -> Option<&str> {
        self.metadata(META_ERROR).and_then(Value::as_str)
    }

    pub fn has_entity(&self, entity_type: EntityType) -> bool {
        self.entities.has(entity_type)
    }

    pub fn entity(&self, entity_type: EntityType) -> &[String] {
        self.entities.get(entity_type)
    }

    pub fn is_high_confidence(&self) -> bool {
        self.confidence >= 0.7
    }

    pub fn is_low_confidence(&self) -> bool {
        self.confidence < 0.3
    }
}

impl fmt::Display for ParsedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let input: String = self.original_input.chars().take(50).collect();
        write!(
            f,
            "ParsedQuery{{intent='{}', confidence={:.2}, entities={} found, input='{}'}}",
            self.intent,
            self.confidence,
            self.entities.total(),
            input
        )
    }
}
