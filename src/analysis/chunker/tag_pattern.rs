//! Chunker driven by part-of-speech tag classes.
//!
//! Each tag maps to a phrase class; consecutive tokens of the same class form
//! one phrase. A determiner or possessive pronoun following a noun opens a new
//! noun phrase, and every preposition opens its own prepositional phrase.
//!
//! ```text
//! tokens: show  the  contract  for  john  smith
//! tags:   VB    DT   NN        IN   NNP   NNP
//! chunks: B-VP  B-NP I-NP      B-PP B-NP  I-NP
//! ```

use crate::analysis::chunker::Chunker;
use crate::error::{IntentiaError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PhraseClass {
    Noun,
    Verb,
    Preposition,
    Adverb,
    Interjection,
    Outside,
}

impl PhraseClass {
    fn of(tag: &str) -> Self {
        match tag {
            "DT" | "PDT" | "PRP$" | "WP$" | "CD" | "PRP" | "POS" => PhraseClass::Noun,
            "IN" | "TO" => PhraseClass::Preposition,
            "MD" | "RP" => PhraseClass::Verb,
            t if t.starts_with("NN") || t.starts_with("JJ") => PhraseClass::Noun,
            t if t.starts_with("VB") => PhraseClass::Verb,
            t if t.starts_with("RB") => PhraseClass::Adverb,
            "UH" => PhraseClass::Interjection,
            _ => PhraseClass::Outside,
        }
    }

    fn label(&self) -> Option<&'static str> {
        match self {
            PhraseClass::Noun => Some("NP"),
            PhraseClass::Verb => Some("VP"),
            PhraseClass::Preposition => Some("PP"),
            PhraseClass::Adverb => Some("ADVP"),
            PhraseClass::Interjection => Some("INTJ"),
            PhraseClass::Outside => None,
        }
    }
}

/// Rule chunker over Penn Treebank tags.
#[derive(Clone, Debug, Default)]
pub struct TagPatternChunker;

impl TagPatternChunker {
    pub fn new() -> Self {
        TagPatternChunker
    }

    fn opens_noun_phrase(tag: &str) -> bool {
        matches!(tag, "DT" | "PDT" | "PRP$" | "WP$")
    }
}

impl Chunker for TagPatternChunker {
    fn chunk(&self, tokens: &[String], tags: &[String]) -> Result<Vec<String>> {
        if tokens.len() != tags.len() {
            return Err(IntentiaError::analysis(format!(
                "chunker received {} tokens but {} tags",
                tokens.len(),
                tags.len()
            )));
        }

        let mut labels = Vec::with_capacity(tags.len());
        let mut previous = PhraseClass::Outside;

        for tag in tags {
            let class = PhraseClass::of(tag);
            let label = match class.label() {
                None => "O".to_string(),
                Some(kind) => {
                    let continues = class == previous
                        && class != PhraseClass::Preposition
                        && !(class == PhraseClass::Noun && Self::opens_noun_phrase(tag));
                    if continues {
                        format!("I-{kind}")
                    } else {
                        format!("B-{kind}")
                    }
                }
            };
            labels.push(label);
            previous = class;
        }

        Ok(labels)
    }

    fn name(&self) -> &'static str {
        "tag_pattern"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_chunk_sentence() {
        let tokens = strings(&["show", "the", "contract", "for", "john", "smith"]);
        let tags = strings(&["VB", "DT", "NN", "IN", "NNP", "NNP"]);
        let chunks = TagPatternChunker::new().chunk(&tokens, &tags).unwrap();
        assert_eq!(chunks, vec!["B-VP", "B-NP", "I-NP", "B-PP", "B-NP", "I-NP"]);
    }

    #[test]
    fn test_determiner_after_noun_opens_new_phrase() {
        let tokens = strings(&["contract", "the", "balance"]);
        let tags = strings(&["NN", "DT", "NN"]);
        let chunks = TagPatternChunker::new().chunk(&tokens, &tags).unwrap();
        assert_eq!(chunks, vec!["B-NP", "B-NP", "I-NP"]);
    }

    #[test]
    fn test_unknown_tags_are_outside() {
        let tokens = strings(&["?"]);
        let tags = strings(&["."]);
        assert_eq!(TagPatternChunker::new().chunk(&tokens, &tags).unwrap(), vec!["O"]);
    }

    #[test]
    fn test_length_mismatch_is_an_error() {
        let result = TagPatternChunker::new().chunk(&strings(&["a", "b"]), &strings(&["DT"]));
        assert!(result.is_err());
    }
}
