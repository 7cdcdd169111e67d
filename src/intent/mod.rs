//! Intent classification.
//!
//! This module scores a normalized query against a fixed intent vocabulary:
//! - keyword frequency per intent
//! - regex patterns per intent
//! - presence of identifying entities
//!
//! The best intent is selected, a confidence value is computed for it, and
//! the result is refined using the extracted entities.
//!
//! # Architecture
//!
//! - `IntentClassifier` trait: common interface for classifiers
//! - `KeywordIntentClassifier`: keyword, pattern and entity scoring
//! - `IntentConfig`: keyword, pattern, threshold and correction tables
//! - `Intent`: the intent vocabulary

mod classifier;
mod config;
mod keyword_classifier;
mod types;

pub use classifier::IntentClassifier;
pub use config::{IntentConfig, MIN_CONFIDENCE, SPELLING_CORRECTIONS};
pub use keyword_classifier::{KeywordIntentClassifier, refine_intent};
pub use types::{Classification, ClassificationInput, Intent};
