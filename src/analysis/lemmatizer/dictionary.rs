//! Dictionary lemmatizer.
//!
//! Reads the tab-separated `word<TAB>postag<TAB>lemma` format used by common
//! English lemma dictionaries. A lookup first tries the exact (word, tag)
//! pair and then any entry for the word; unknown words are their own lemma.
//!
//! # Examples
//!
//! ```
//! use intentia::analysis::lemmatizer::{DictionaryLemmatizer, Lemmatizer};
//!
//! let dictionary = "contracts\tNNS\tcontract\nshowed\tVBD\tshow\n";
//! let lemmatizer = DictionaryLemmatizer::from_reader(dictionary.as_bytes()).unwrap();
//!
//! let tokens = vec!["Contracts".to_string(), "showed".to_string(), "balance".to_string()];
//! let tags = vec!["NNS".to_string(), "VBD".to_string(), "NN".to_string()];
//!
//! assert_eq!(
//!     lemmatizer.lemmatize(&tokens, &tags).unwrap(),
//!     vec!["contract", "show", "balance"]
//! );
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use ahash::AHashMap;

use crate::analysis::lemmatizer::Lemmatizer;
use crate::error::{IntentiaError, Result};

#[derive(Debug, Clone, Default)]
pub struct DictionaryLemmatizer {
    by_word_and_tag: AHashMap<(String, String), String>,
    by_word: AHashMap<String, String>,
}

impl DictionaryLemmatizer {
    /// Load a dictionary from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut lemmatizer = DictionaryLemmatizer::default();

        for (line_no, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let fields: Vec<&str> = line.split('\t').collect();
            let [word, tag, lemma] = fields.as_slice() else {
                return Err(IntentiaError::capability(format!(
                    "lemma dictionary line {} must have 3 tab-separated fields",
                    line_no + 1
                )));
            };
            lemmatizer.insert(word, tag, lemma);
        }

        if lemmatizer.by_word.is_empty() {
            return Err(IntentiaError::capability("lemma dictionary is empty"));
        }
        Ok(lemmatizer)
    }

    /// Load a dictionary file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    fn insert(&mut self, word: &str, tag: &str, lemma: &str) {
        let word = word.to_lowercase();
        self.by_word_and_tag
            .insert((word.clone(), tag.to_string()), lemma.to_string());
        self.by_word.entry(word).or_insert_with(|| lemma.to_string());
    }

    fn lookup(&self, token: &str, tag: &str) -> Option<&String> {
        let word = token.to_lowercase();
        self.by_word_and_tag
            .get(&(word.clone(), tag.to_string()))
            .or_else(|| self.by_word.get(&word))
    }
}

impl Lemmatizer for DictionaryLemmatizer {
    fn lemmatize(&self, tokens: &[String], tags: &[String]) -> Result<Vec<String>> {
        if tokens.len() != tags.len() {
            return Err(IntentiaError::analysis(format!(
                "lemmatizer received {} tokens but {} tags",
                tokens.len(),
                tags.len()
            )));
        }

        Ok(tokens
            .iter()
            .zip(tags)
            .map(|(token, tag)| {
                self.lookup(token, tag)
                    .cloned()
                    .unwrap_or_else(|| token.to_lowercase())
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_tag_specific_entry_wins() {
        let text = "saw\tVBD\tsee\nsaw\tNN\tsaw\n";
        let lemmatizer = DictionaryLemmatizer::from_reader(text.as_bytes()).unwrap();

        let lemmas = lemmatizer
            .lemmatize(&strings(&["saw", "saw"]), &strings(&["NN", "VBD"]))
            .unwrap();
        assert_eq!(lemmas, vec!["saw", "see"]);
    }

    #[test]
    fn test_falls_back_to_any_tag() {
        let text = "contracts\tNNS\tcontract\n";
        let lemmatizer = DictionaryLemmatizer::from_reader(text.as_bytes()).unwrap();
        let lemmas = lemmatizer
            .lemmatize(&strings(&["contracts"]), &strings(&["NN"]))
            .unwrap();
        assert_eq!(lemmas, vec!["contract"]);
    }

    #[test]
    fn test_malformed_line() {
        let result = DictionaryLemmatizer::from_reader("contracts contract\n".as_bytes());
        assert!(matches!(result, Err(IntentiaError::Capability(_))));
    }

    #[test]
    fn test_length_mismatch() {
        let lemmatizer =
            DictionaryLemmatizer::from_reader("a\tDT\ta\n".as_bytes()).unwrap();
        assert!(lemmatizer.lemmatize(&strings(&["a"]), &[]).is_err());
    }
}
