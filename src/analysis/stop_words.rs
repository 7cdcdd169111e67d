//! English stop words used when selecting key phrases.

use std::collections::HashSet;
use std::sync::LazyLock;

const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "he", "in", "is", "it",
    "its", "of", "on", "that", "the", "to", "was", "will", "with", "i", "me", "my", "we", "our",
    "you", "your", "this", "these", "those", "they", "them", "their", "have", "had", "do", "does",
    "did", "can", "could", "should", "would", "may", "might", "must", "shall", "am", "were", "been",
    "being",
];

static STOP_WORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_STOP_WORDS.iter().copied().collect());

/// Whether `word` is a stop word. The comparison is case-insensitive.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word) || STOP_WORDS.contains(word.to_lowercase().as_str())
}

/// The full stop-word set.
pub fn stop_words() -> &'static HashSet<&'static str> {
    &STOP_WORDS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("The"));
        assert!(is_stop_word("being"));
        assert!(!is_stop_word("contract"));
        assert_eq!(stop_words().len(), ENGLISH_STOP_WORDS.len());
    }
}
