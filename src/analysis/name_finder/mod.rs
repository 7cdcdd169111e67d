//! Named-entity finding capability.
//!
//! A name finder works on an already tokenized sentence and returns token
//! spans. There is one finder per [`NameKind`]; each kind is loaded, and can
//! fall back, independently of the others.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::capability::CapabilitySource;
use crate::error::{IntentiaError, Result};

/// Category of named entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameKind {
    Person,
    Organization,
    Location,
}

impl NameKind {
    /// All kinds, in extraction order.
    pub const ALL: [NameKind; 3] = [NameKind::Person, NameKind::Organization, NameKind::Location];

    pub fn as_str(&self) -> &'static str {
        match self {
            NameKind::Person => "person",
            NameKind::Organization => "organization",
            NameKind::Location => "location",
        }
    }
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half-open token range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Join the covered tokens with single spaces.
    ///
    /// Fails if the span does not fit in `tokens`, which means the finder
    /// that produced it is broken.
    pub fn join(&self, tokens: &[String]) -> Result<String> {
        tokens
            .get(self.start..self.end)
            .map(|covered| covered.join(" "))
            .ok_or_else(|| {
                IntentiaError::analysis(format!(
                    "name span {}..{} out of range for {} tokens",
                    self.start,
                    self.end,
                    tokens.len()
                ))
            })
    }
}

/// Trait for named-entity finders.
pub trait NameFinder: Send + Sync {
    /// Find entity spans in a token sequence.
    fn find(&self, tokens: &[String]) -> Result<Vec<Span>>;

    /// Get the name of this finder.
    fn name(&self) -> &'static str;

    /// Whether this finder is model-backed or a heuristic fallback.
    fn source(&self) -> CapabilitySource {
        CapabilitySource::Model
    }
}

pub mod gazetteer;
pub mod heuristic;

pub use gazetteer::GazetteerNameFinder;
pub use heuristic::{CapitalizedPairFinder, EmptyNameFinder};
