//! Entity extraction.
//!
//! Regex extractors for identifiers (contract and account numbers, user
//! names, dates, phone numbers, emails), capability-driven extraction of
//! person, organization and location names, and action-word matching.

pub mod extractor;
pub mod types;

pub use extractor::EntityExtractor;
pub use types::{Entities, EntityType};
