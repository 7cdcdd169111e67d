use regex::{NoExpand, Regex};

use super::CharFilter;
use crate::error::Result;

/// A char filter that substitutes whole words, case-insensitively.
///
/// Entries are applied one after another in the order given, so when two
/// entries overlap the earlier one is applied first.
#[derive(Clone, Debug)]
pub struct MappingCharFilter {
    entries: Vec<(Regex, String)>,
}

impl MappingCharFilter {
    pub fn new<I, K, V>(mapping: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let entries = mapping
            .into_iter()
            .map(|(from, to)| -> Result<(Regex, String)> {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(from.as_ref()));
                Ok((Regex::new(&pattern)?, to.into()))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = input.to_string();
        for (pattern, replacement) in &self.entries {
            if pattern.is_match(&output) {
                output = pattern
                    .replace_all(&output, NoExpand(replacement))
                    .into_owned();
            }
        }
        output
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_word_only() {
        let filter = MappingCharFilter::new([("teh", "the")]).unwrap();
        assert_eq!(filter.filter("teh tehran TEH"), "the tehran the");
    }

    #[test]
    fn test_entries_apply_in_order() {
        let filter = MappingCharFilter::new([("shwo", "show"), ("show", "display")]).unwrap();
        assert_eq!(filter.filter("shwo it"), "display it");

        let reversed = MappingCharFilter::new([("show", "display"), ("shwo", "show")]).unwrap();
        assert_eq!(reversed.filter("shwo it"), "show it");
    }

    #[test]
    fn test_replacement_is_literal() {
        let filter = MappingCharFilter::new([("cost", "$1")]).unwrap();
        assert_eq!(filter.filter("cost"), "$1");
    }

    #[test]
    fn test_empty_mapping() {
        let filter = MappingCharFilter::new(Vec::<(&str, &str)>::new()).unwrap();
        assert!(filter.is_empty());
        assert_eq!(filter.filter("unchanged"), "unchanged");
    }
}
