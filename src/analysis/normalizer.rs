//! Query text normalization.
//!
//! The normalizer is an ordered chain of [`CharFilter`]s:
//!
//! 1. lower-case
//! 2. spelling corrections (whole word, in table order)
//! 3. contract-number canonicalization (`contract #123456`, `#123456` and
//!    `contract123456` all become `contract 123456`)
//! 4. abbreviation expansion (`info`, `deets`, `u`, `r`)
//! 5. whitespace runs collapsed to a single space
//! 6. runs of `.`, `!` and `?` collapsed to a single `.`
//!
//! The input is trimmed before the chain and the result is trimmed after it.
//!
//! # Examples
//!
//! ```
//! use intentia::analysis::normalizer::Normalizer;
//!
//! let normalizer = Normalizer::new([("contarct", "contract")]).unwrap();
//! assert_eq!(
//!     normalizer.normalize("  Show CONTARCT #123456!!! "),
//!     "show contract 123456."
//! );
//! ```

use std::sync::Arc;

use crate::analysis::char_filter::{
    CaseFoldCharFilter, CharFilter, MappingCharFilter, PatternReplaceCharFilter,
};
use crate::error::Result;

const CONTRACT_REWRITES: &[(&str, &str)] = &[
    (r"contract\s*#\s*(\d+)", "contract ${1}"),
    (r"#(\d{6})", "contract ${1}"),
    (r"contract(\d{6,8})", "contract ${1}"),
];

const ABBREVIATIONS: &[(&str, &str)] = &[
    (r"\binfo\b", "information"),
    (r"\bdeets\b", "details"),
    (r"\bu\b", "you"),
    (r"\br\b", "are"),
];

/// Pure, deterministic text normalizer.
#[derive(Clone)]
pub struct Normalizer {
    char_filters: Vec<Arc<dyn CharFilter>>,
}

impl Normalizer {
    /// Build the standard chain with the given spelling corrections.
    pub fn new<I, K, V>(corrections: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut normalizer = Normalizer::empty()
            .add_char_filter(Arc::new(CaseFoldCharFilter::new()))
            .add_char_filter(Arc::new(MappingCharFilter::new(corrections)?));

        for (pattern, replacement) in CONTRACT_REWRITES.iter().chain(ABBREVIATIONS) {
            normalizer = normalizer
                .add_char_filter(Arc::new(PatternReplaceCharFilter::new(pattern, replacement)?));
        }

        Ok(normalizer
            .add_char_filter(Arc::new(PatternReplaceCharFilter::new(r"\s+", " ")?))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::new(r"[.!?]+", ".")?)))
    }

    /// A normalizer that only trims.
    pub fn empty() -> Self {
        Normalizer {
            char_filters: Vec::new(),
        }
    }

    /// Append a char filter to the chain.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    pub fn normalize(&self, input: &str) -> String {
        let mut text = input.trim().to_string();
        for char_filter in &self.char_filters {
            text = char_filter.filter(&text);
        }
        text.trim().to_string()
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.char_filters.iter().map(|filter| filter.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new([
            ("contarct", "contract"),
            ("custmer", "customer"),
            ("teh", "the"),
        ])
        .unwrap()
    }

    #[test]
    fn test_filter_chain_order() {
        let names: Vec<_> = normalizer()
            .char_filters()
            .iter()
            .map(|filter| filter.name())
            .collect();
        assert_eq!(names.len(), 11);
        assert_eq!(&names[..2], ["case_fold", "mapping"]);
        assert!(names[2..].iter().all(|name| *name == "pattern_replace"));
        assert!(Normalizer::empty().char_filters().is_empty());
    }

    #[test]
    fn test_case_and_whitespace() {
        assert_eq!(
            normalizer().normalize("  Contract   999999  "),
            "contract 999999"
        );
    }

    #[test]
    fn test_spelling_corrections() {
        assert_eq!(
            normalizer().normalize("show teh custmer CONTARCT"),
            "show the customer contract"
        );
    }

    #[test]
    fn test_contract_canonicalization() {
        let n = normalizer();
        assert_eq!(n.normalize("contract #123456"), "contract 123456");
        assert_eq!(n.normalize("contract# 123456"), "contract 123456");
        assert_eq!(n.normalize("see #123456"), "see contract 123456");
        assert_eq!(n.normalize("contract12345678"), "contract 12345678");
    }

    #[test]
    fn test_abbreviations() {
        assert_eq!(
            normalizer().normalize("r u able to send info and deets"),
            "are you able to send information and details"
        );
        assert_eq!(normalizer().normalize("fur"), "fur");
    }

    #[test]
    fn test_terminators() {
        assert_eq!(normalizer().normalize("hello!!! bye?!"), "hello. bye.");
    }

    #[test]
    fn test_idempotent() {
        let n = normalizer();
        for input in ["Show Contract #123456!!", "  hi   u  ", "contract123456?"] {
            let once = n.normalize(input);
            assert_eq!(n.normalize(&once), once);
        }
    }

    #[test]
    fn test_empty() {
        assert_eq!(normalizer().normalize("   "), "");
        assert_eq!(Normalizer::empty().normalize(" Keep Case "), "Keep Case");
    }
}
