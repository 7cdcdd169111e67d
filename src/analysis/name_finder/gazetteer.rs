//! Gazetteer (name list) based finder.
//!
//! A gazetteer file holds one name per line; each name is split on whitespace
//! into its tokens. Matching is case-insensitive, scans left to right and
//! prefers the longest name starting at a position. Matches never overlap.
//!
//! # Examples
//!
//! ```
//! use intentia::analysis::name_finder::{GazetteerNameFinder, NameFinder, Span};
//!
//! let finder = GazetteerNameFinder::from_names(["New York", "New York City", "Paris"]);
//! let tokens: Vec<String> = "flights from new york city to Paris"
//!     .split(' ')
//!     .map(String::from)
//!     .collect();
//!
//! assert_eq!(finder.find(&tokens).unwrap(), vec![Span::new(2, 5), Span::new(6, 7)]);
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use ahash::AHashMap;

use crate::analysis::name_finder::{NameFinder, Span};
use crate::error::{IntentiaError, Result};

/// Name finder backed by a list of known names.
#[derive(Debug, Clone, Default)]
pub struct GazetteerNameFinder {
    /// First token (lower-cased) -> candidate names, longest first.
    entries: AHashMap<String, Vec<Vec<String>>>,
    name_count: usize,
}

impl GazetteerNameFinder {
    /// Build a gazetteer from in-memory names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut finder = GazetteerNameFinder::default();
        for name in names {
            finder.add_name(name.as_ref());
        }
        finder
    }

    /// Load a gazetteer from a reader, one name per line.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut finder = GazetteerNameFinder::default();
        for line in BufReader::new(reader).lines() {
            let line = line?;
            let line = line.trim();
            if !line.is_empty() && !line.starts_with('#') {
                finder.add_name(line);
            }
        }

        if finder.name_count == 0 {
            return Err(IntentiaError::capability("gazetteer contains no names"));
        }
        Ok(finder)
    }

    /// Load a gazetteer file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    fn add_name(&mut self, name: &str) {
        let tokens: Vec<String> = name.split_whitespace().map(str::to_lowercase).collect();
        let Some(first) = tokens.first().cloned() else {
            return;
        };

        let candidates = self.entries.entry(first).or_default();
        if candidates.contains(&tokens) {
            return;
        }
        candidates.push(tokens);
        candidates.sort_by(|a, b| b.len().cmp(&a.len()));
        self.name_count += 1;
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.name_count
    }

    pub fn is_empty(&self) -> bool {
        self.name_count == 0
    }
}

impl NameFinder for GazetteerNameFinder {
    fn find(&self, tokens: &[String]) -> Result<Vec<Span>> {
        let lowered: Vec<String> = tokens.iter().map(|t| t.to_lowercase()).collect();
        let mut spans = Vec::new();
        let mut i = 0;

        while i < lowered.len() {
            let matched = self.entries.get(&lowered[i]).and_then(|candidates| {
                candidates
                    .iter()
                    .find(|name| lowered[i..].starts_with(name))
                    .map(Vec::len)
            });

            match matched {
                Some(len) => {
                    spans.push(Span::new(i, i + len));
                    i += len;
                }
                None => i += 1,
            }
        }

        Ok(spans)
    }

    fn name(&self) -> &'static str {
        "gazetteer"
    }
}
