//! Lexicon-backed part-of-speech tagger.
//!
//! The lexicon is a plain-text file with one `word TAG` pair per line
//! (tab or space separated). Lines starting with `#` are comments. Words
//! missing from the lexicon are tagged by [`HeuristicPosTagger`].
//!
//! # Examples
//!
//! ```
//! use intentia::analysis::pos_tagger::{LexiconPosTagger, PosTagger};
//!
//! let tagger = LexiconPosTagger::from_reader("balance NN\nsigned VBN\n".as_bytes()).unwrap();
//! let tokens = vec!["signed".to_string(), "balance".to_string(), "123".to_string()];
//!
//! assert_eq!(tagger.tag(&tokens).unwrap(), vec!["VBN", "NN", "CD"]);
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use ahash::AHashMap;

use crate::analysis::pos_tagger::{HeuristicPosTagger, PosTagger};
use crate::error::{IntentiaError, Result};

/// A tagger that looks words up in a word → tag lexicon.
#[derive(Debug, Clone, Default)]
pub struct LexiconPosTagger {
    lexicon: AHashMap<String, String>,
}

impl LexiconPosTagger {
    /// Create a tagger from in-memory entries.
    pub fn from_entries<I, W, T>(entries: I) -> Self
    where
        I: IntoIterator<Item = (W, T)>,
        W: AsRef<str>,
        T: Into<String>,
    {
        let lexicon = entries
            .into_iter()
            .map(|(word, tag)| (word.as_ref().to_lowercase(), tag.into()))
            .collect();
        LexiconPosTagger { lexicon }
    }

    /// Load a lexicon from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut lexicon = AHashMap::new();

        for (line_no, line) in BufReader::new(reader).lines().enumerate() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some(word), Some(tag)) => {
                    lexicon.insert(word.to_lowercase(), tag.to_string());
                }
                _ => {
                    return Err(IntentiaError::capability(format!(
                        "malformed POS lexicon entry on line {}: {line:?}",
                        line_no + 1
                    )));
                }
            }
        }

        if lexicon.is_empty() {
            return Err(IntentiaError::capability("POS lexicon is empty"));
        }

        Ok(LexiconPosTagger { lexicon })
    }

    /// Load a lexicon file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::from_reader(File::open(path)?)
    }

    /// Number of words in the lexicon.
    pub fn len(&self) -> usize {
        self.lexicon.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lexicon.is_empty()
    }
}

impl PosTagger for LexiconPosTagger {
    fn tag(&self, tokens: &[String]) -> Result<Vec<String>> {
        Ok(tokens
            .iter()
            .map(|token| match self.lexicon.get(&token.to_lowercase()) {
                Some(tag) => tag.clone(),
                None => HeuristicPosTagger::tag_token(token).to_string(),
            })
            .collect())
    }

    fn name(&self) -> &'static str {
        "lexicon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_lookup_is_case_insensitive() {
        let tagger = LexiconPosTagger::from_entries([("Contract", "NN"), ("show", "VB")]);
        let tokens = vec!["CONTRACT".to_string(), "Show".to_string()];
        assert_eq!(tagger.tag(&tokens).unwrap(), vec!["NN", "VB"]);
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let text = "# lexicon\n\nbalance\tNN\n";
        let tagger = LexiconPosTagger::from_reader(text.as_bytes()).unwrap();
        assert_eq!(tagger.len(), 1);
    }

    #[test]
    fn test_malformed_line_is_an_error() {
        let result = LexiconPosTagger::from_reader("balance\n".as_bytes());
        assert!(matches!(result, Err(IntentiaError::Capability(_))));
    }

    #[test]
    fn test_empty_lexicon_is_an_error() {
        assert!(LexiconPosTagger::from_reader("".as_bytes()).is_err());
    }

    #[test]
    fn test_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "invoice NN").unwrap();
        let tagger = LexiconPosTagger::from_path(file.path()).unwrap();
        assert_eq!(tagger.tag(&["invoice".to_string()]).unwrap(), vec!["NN"]);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = LexiconPosTagger::from_path("/nonexistent/lexicon.txt");
        assert!(matches!(result, Err(IntentiaError::Io(_))));
    }
}
