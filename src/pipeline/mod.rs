//! The query-understanding pipeline.
//!
//! [`QueryParser`] owns the configuration tables, the capability set, the
//! cache and the statistics, and runs each query through normalization,
//! sentence analysis, entity aggregation and intent classification.

pub mod parser;
pub mod query;
pub mod sentence;

pub use parser::QueryParser;
pub use query::ParsedQuery;
pub use sentence::{ProcessedSentence, SentenceAnalyzer};
