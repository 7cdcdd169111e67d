//! Linguistic analysis for query understanding.
//!
//! This module holds the text normalizer and every linguistic capability the
//! pipeline consumes: tokenization, part-of-speech tagging, sentence
//! detection, name finding, chunking and lemmatization. Each capability is a
//! trait with a model-backed and a heuristic implementation; a
//! [`CapabilitySet`] selects one per capability.

pub mod capability;
pub mod char_filter;
pub mod chunker;
pub mod lemmatizer;
pub mod name_finder;
pub mod normalizer;
pub mod pos_tagger;
pub mod sentence;
pub mod stop_words;
pub mod tokenizer;

pub use capability::{CapabilitySet, CapabilitySource};
pub use normalizer::Normalizer;
