//! Keyword, pattern and entity based intent classifier.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::entity::{Entities, EntityType};
use crate::error::Result;
use crate::intent::classifier::IntentClassifier;
use crate::intent::config::IntentConfig;
use crate::intent::types::{Classification, ClassificationInput, Intent};

const KEYWORD_SCORE: f64 = 1.0;
const PATTERN_SCORE: f64 = 2.0;
const ENTITY_BONUS: f64 = 1.5;

const ENTITY_BONUSES: [(EntityType, Intent); 3] = [
    (EntityType::ContractNumbers, Intent::ContractDetails),
    (EntityType::CustomerNames, Intent::CustomerInfo),
    (EntityType::AccountNumbers, Intent::AccountInfo),
];

/// Keyword-based intent classifier.
///
/// Scores every intent by keyword hits, pattern matches and entity presence,
/// picks the best one and computes a confidence for it.
#[derive(Debug, Clone)]
pub struct KeywordIntentClassifier {
    config: Arc<IntentConfig>,
}

impl KeywordIntentClassifier {
    pub fn new(config: Arc<IntentConfig>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &IntentConfig {
        &self.config
    }

    /// Raw score of every scored intent.
    pub fn score(&self, input: &ClassificationInput<'_>) -> BTreeMap<Intent, f64> {
        let mut scores: BTreeMap<Intent, f64> =
            Intent::SCORED.iter().map(|intent| (*intent, 0.0)).collect();

        for token in input.tokens {
            let lower = token.to_lowercase();
            for intent in Intent::SCORED {
                if self.config.is_keyword(intent, &lower) {
                    *scores.entry(intent).or_default() += KEYWORD_SCORE;
                }
            }
        }

        let lower_input = input.normalized_input.to_lowercase();
        for intent in Intent::SCORED {
            let matches = self
                .config
                .patterns(intent)
                .iter()
                .filter(|pattern| pattern.is_match(&lower_input))
                .count();
            *scores.entry(intent).or_default() += PATTERN_SCORE * matches as f64;
        }

        for (entity_type, intent) in ENTITY_BONUSES {
            if input.entities.has(entity_type) {
                *scores.entry(intent).or_default() += ENTITY_BONUS;
            }
        }

        scores
    }

    /// Confidence that `intent` is the right classification.
    pub fn confidence(&self, intent: Intent, input: &ClassificationInput<'_>) -> f64 {
        let keyword_hits = input
            .tokens
            .iter()
            .filter(|token| self.config.is_keyword(intent, &token.to_lowercase()))
            .count();
        let mut confidence = (keyword_hits as f64 * 0.2).min(0.6);

        let lower_input = input.normalized_input.to_lowercase();
        if self
            .config
            .patterns(intent)
            .iter()
            .any(|pattern| pattern.is_match(&lower_input))
        {
            confidence += 0.3;
        }

        confidence += (input.entities.total() as f64 * 0.1).min(0.3);

        if input.sentence_count > 0 && !input.normalized_input.trim().is_empty() {
            confidence += 0.1;
        }

        // Sub-threshold values are only lifted to the global floor.
        if let Some(threshold) = self.config.threshold(intent)
            && confidence < threshold
        {
            confidence = confidence.max(self.config.min_confidence());
        }

        confidence.clamp(0.0, 1.0)
    }
}

/// Highest scoring intent, first in declaration order on ties. Falls back to
/// [`Intent::GeneralInquiry`] when nothing scored.
fn best_intent(scores: &BTreeMap<Intent, f64>) -> Intent {
    let mut best = Intent::GeneralInquiry;
    let mut best_score = 0.0;
    for intent in Intent::SCORED {
        let score = scores.get(&intent).copied().unwrap_or_default();
        if score > best_score {
            best = intent;
            best_score = score;
        }
    }
    best
}

/// Adjust a classification using the extracted entities.
///
/// Low-confidence results become general inquiries; general inquiries that
/// carry an identifier are re-targeted; and any low-confidence result that
/// mentions a contract number becomes a contract lookup.
pub fn refine_intent(
    intent: Intent,
    confidence: f64,
    entities: &Entities,
    min_confidence: f64,
) -> Intent {
    let mut intent = intent;
    if confidence < min_confidence {
        intent = Intent::GeneralInquiry;
    }

    if intent == Intent::GeneralInquiry {
        if entities.has(EntityType::ContractNumbers) {
            intent = Intent::ContractDetails;
        } else if entities.has(EntityType::CustomerNames) {
            intent = Intent::CustomerInfo;
        } else if entities.has(EntityType::AccountNumbers) {
            intent = Intent::AccountInfo;
        }
    }

    if entities.has(EntityType::ContractNumbers)
        && (intent == Intent::GeneralInquiry || confidence < 0.5)
    {
        intent = Intent::ContractDetails;
    }

    intent
}

impl IntentClassifier for KeywordIntentClassifier {
    fn classify(&self, input: &ClassificationInput<'_>) -> Result<Classification> {
        let scores = self.score(input);
        let winner = best_intent(&scores);
        let confidence = self.confidence(winner, input);
        let intent = refine_intent(
            winner,
            confidence,
            input.entities,
            self.config.min_confidence(),
        );

        Ok(Classification {
            intent,
            confidence,
            scores,
        })
    }

    fn name(&self) -> &str {
        "keyword"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> KeywordIntentClassifier {
        KeywordIntentClassifier::new(Arc::new(IntentConfig::new().unwrap()))
    }

    fn tokens(text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn classify(text: &str, entities: &Entities) -> Classification {
        let tokens = tokens(text);
        let input = ClassificationInput {
            normalized_input: text,
            tokens: &tokens,
            sentence_count: usize::from(!tokens.is_empty()),
            entities,
        };
        classifier().classify(&input).unwrap()
    }

    #[test]
    fn test_contract_query() {
        let mut entities = Entities::new();
        entities.push_unique(EntityType::ContractNumbers, "123456");
        entities.push_unique(EntityType::Actions, "show");

        let result = classify("show contract 123456", &entities);
        assert_eq!(result.intent, Intent::ContractDetails);
        // 2 keywords + 2 patterns + entity bonus
        assert_eq!(result.scores[&Intent::ContractDetails], 7.5);
        // 0.4 + 0.3 + 0.2 + 0.1
        assert!((result.confidence - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_greeting() {
        let result = classify("hello there", &Entities::new());
        assert_eq!(result.intent, Intent::Greeting);
        assert!((result.confidence - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_nothing_scores() {
        let result = classify("xyzzy plugh", &Entities::new());
        assert_eq!(result.intent, Intent::GeneralInquiry);
        // only the sentence bonus, at the general inquiry threshold
        assert!((result.confidence - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_tie_goes_to_first_declared() {
        // "information" is a keyword of both contract details and customer info
        let result = classify("information", &Entities::new());
        assert_eq!(result.scores[&Intent::ContractDetails], 1.0);
        assert_eq!(result.scores[&Intent::CustomerInfo], 1.0);
        assert_eq!(result.intent, Intent::ContractDetails);
    }

    #[test]
    fn test_sub_threshold_confidence_lifted_to_floor_only() {
        let classifier = classifier();
        let tokens = tokens("password");
        let entities = Entities::new();
        let input = ClassificationInput {
            normalized_input: "",
            tokens: &tokens,
            sentence_count: 0,
            entities: &entities,
        };
        // 0.2 from one keyword, below the 0.4 user management threshold
        let confidence = classifier.confidence(Intent::UserManagement, &input);
        assert!((confidence - 0.2).abs() < 1e-9);

        let none = ClassificationInput {
            tokens: &[],
            ..input
        };
        assert!((classifier.confidence(Intent::UserManagement, &none) - 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_is_capped() {
        let mut entities = Entities::new();
        entities.extend_unique(EntityType::ContractNumbers, ["123456", "234567", "345678", "456789"]);
        let result = classify(
            "show contract 123456 get contract details find agreement lookup policy",
            &entities,
        );
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn test_refine_low_confidence() {
        let entities = Entities::new();
        assert_eq!(
            refine_intent(Intent::Greeting, 0.05, &entities, 0.1),
            Intent::GeneralInquiry
        );
        assert_eq!(
            refine_intent(Intent::Greeting, 0.3, &entities, 0.1),
            Intent::Greeting
        );
    }

    #[test]
    fn test_refine_general_inquiry_by_entities() {
        let mut customers = Entities::new();
        customers.push_unique(EntityType::CustomerNames, "Jane Doe");
        customers.push_unique(EntityType::AccountNumbers, "12345678");
        assert_eq!(
            refine_intent(Intent::GeneralInquiry, 0.8, &customers, 0.1),
            Intent::CustomerInfo
        );

        let mut accounts = Entities::new();
        accounts.push_unique(EntityType::AccountNumbers, "12345678");
        assert_eq!(
            refine_intent(Intent::GeneralInquiry, 0.8, &accounts, 0.1),
            Intent::AccountInfo
        );
    }

    #[test]
    fn test_refine_contract_numbers_override_weak_results() {
        let mut entities = Entities::new();
        entities.push_unique(EntityType::ContractNumbers, "123456");
        assert_eq!(
            refine_intent(Intent::SystemStatus, 0.4, &entities, 0.1),
            Intent::ContractDetails
        );
        assert_eq!(
            refine_intent(Intent::SystemStatus, 0.9, &entities, 0.1),
            Intent::SystemStatus
        );
    }
}
