//! Char filters that rewrite raw text before segmentation.
//!
//! Filters are applied in sequence by the [`Normalizer`](crate::analysis::normalizer::Normalizer);
//! each one sees the output of the previous one.
//!
//! # Available Filters
//!
//! - [`case_fold::CaseFoldCharFilter`] - Lower-case conversion
//! - [`mapping::MappingCharFilter`] - Ordered whole-word substitution
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//!
//! # Examples
//!
//! ```
//! use intentia::analysis::char_filter::CharFilter;
//! use intentia::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
//!
//! let filter = PatternReplaceCharFilter::new(r"\s+", " ").unwrap();
//! assert_eq!(filter.filter("show   contract"), "show contract");
//! ```

/// Trait for character filters that transform text before analysis.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod case_fold;
pub mod mapping;
pub mod pattern_replace;

pub use case_fold::CaseFoldCharFilter;
pub use mapping::MappingCharFilter;
pub use pattern_replace::PatternReplaceCharFilter;
