//! # Intentia
//!
//! Query understanding for chat front-ends: free text goes in, a structured
//! [`ParsedQuery`] comes out.
//!
//! ## Features
//!
//! - Normalization built from an ordered chain of char filters
//! - Pluggable linguistic capabilities with deterministic heuristic fallbacks
//! - Regex and capability driven entity extraction
//! - Keyword, pattern and entity scoring for intent classification
//! - A bounded, thread-safe result cache with usage statistics
//!
//! ## Example
//!
//! ```
//! use intentia::{Intent, ParserConfig, QueryParser};
//!
//! let parser = QueryParser::new(ParserConfig::default()).unwrap();
//! let result = parser.parse_query("hello there");
//! assert_eq!(result.intent, Intent::Greeting);
//! ```

pub mod analysis;
pub mod cache;
pub mod cli;
pub mod config;
pub mod entity;
pub mod error;
pub mod intent;
pub mod pipeline;
pub mod stats;

pub use config::ParserConfig;
pub use entity::{Entities, EntityType};
pub use error::{IntentiaError, Result};
pub use intent::Intent;
pub use pipeline::{ParsedQuery, QueryParser};
pub use stats::Statistics;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
