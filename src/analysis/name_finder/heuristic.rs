//! Fallback name finders.

use crate::analysis::capability::CapabilitySource;
use crate::analysis::name_finder::{NameFinder, Span};
use crate::error::Result;

/// Person-name fallback: every adjacent pair of purely alphabetic tokens that
/// both start with an upper-case letter is a two-token candidate.
///
/// Pairs overlap, so `Mary Jane Watson` yields `Mary Jane` and `Jane Watson`.
#[derive(Clone, Debug, Default)]
pub struct CapitalizedPairFinder;

impl CapitalizedPairFinder {
    pub fn new() -> Self {
        CapitalizedPairFinder
    }

    fn is_capitalized_word(token: &str) -> bool {
        token.chars().next().is_some_and(char::is_uppercase)
            && token.chars().all(|c| c.is_ascii_alphabetic())
    }
}

impl NameFinder for CapitalizedPairFinder {
    fn find(&self, tokens: &[String]) -> Result<Vec<Span>> {
        Ok(tokens
            .windows(2)
            .enumerate()
            .filter(|(_, pair)| pair.iter().all(|t| Self::is_capitalized_word(t)))
            .map(|(i, _)| Span::new(i, i + 2))
            .collect())
    }

    fn name(&self) -> &'static str {
        "capitalized_pair"
    }

    fn source(&self) -> CapabilitySource {
        CapabilitySource::Heuristic
    }
}

/// Fallback for organization and location names: finds nothing.
#[derive(Clone, Debug, Default)]
pub struct EmptyNameFinder;

impl NameFinder for EmptyNameFinder {
    fn find(&self, _tokens: &[String]) -> Result<Vec<Span>> {
        Ok(Vec::new())
    }

    fn name(&self) -> &'static str {
        "empty"
    }

    fn source(&self) -> CapabilitySource {
        CapabilitySource::Heuristic
    }
}
