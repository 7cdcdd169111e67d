//! Suffix and word-list based fallback tagger.

use crate::analysis::capability::CapabilitySource;
use crate::analysis::pos_tagger::PosTagger;
use crate::error::Result;

const DETERMINERS: &[&str] = &["the", "a", "an"];

const COMMON_VERBS: &[&str] = &["show", "get", "find", "tell", "give"];

/// Rule-based tagger used when no tagging model is available.
///
/// Rules are tried in order and the first match wins:
///
/// | rule                         | tag   |
/// |------------------------------|-------|
/// | all digits                   | `CD`  |
/// | ends with `ing`              | `VBG` |
/// | ends with `ed`               | `VBD` |
/// | ends with `ly`               | `RB`  |
/// | upper-case initial           | `NNP` |
/// | `the`, `a`, `an`             | `DT`  |
/// | show, get, find, tell, give  | `VB`  |
/// | anything else                | `NN`  |
#[derive(Clone, Debug, Default)]
pub struct HeuristicPosTagger;

impl HeuristicPosTagger {
    pub fn new() -> Self {
        HeuristicPosTagger
    }

    /// Tag a single token.
    pub fn tag_token(token: &str) -> &'static str {
        if !token.is_empty() && token.chars().all(|c| c.is_ascii_digit()) {
            return "CD";
        }
        if token.ends_with("ing") {
            return "VBG";
        }
        if token.ends_with("ed") {
            return "VBD";
        }
        if token.ends_with("ly") {
            return "RB";
        }
        if token.chars().next().is_some_and(char::is_uppercase) {
            return "NNP";
        }

        let lower = token.to_lowercase();
        if DETERMINERS.contains(&lower.as_str()) {
            "DT"
        } else if COMMON_VERBS.contains(&lower.as_str()) {
            "VB"
        } else {
            "NN"
        }
    }
}

impl PosTagger for HeuristicPosTagger {
    fn tag(&self, tokens: &[String]) -> Result<Vec<String>> {
        Ok(tokens
            .iter()
            .map(|token| Self::tag_token(token).to_string())
            .collect())
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn source(&self) -> CapabilitySource {
        CapabilitySource::Heuristic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rules_in_order() {
        assert_eq!(HeuristicPosTagger::tag_token("123456"), "CD");
        assert_eq!(HeuristicPosTagger::tag_token("running"), "VBG");
        assert_eq!(HeuristicPosTagger::tag_token("signed"), "VBD");
        assert_eq!(HeuristicPosTagger::tag_token("quickly"), "RB");
        assert_eq!(HeuristicPosTagger::tag_token("John"), "NNP");
        assert_eq!(HeuristicPosTagger::tag_token("the"), "DT");
        assert_eq!(HeuristicPosTagger::tag_token("show"), "VB");
        assert_eq!(HeuristicPosTagger::tag_token("contract"), "NN");
    }

    #[test]
    fn test_suffix_beats_capitalization() {
        // "Reading" ends with "ing" before the proper-noun rule is reached.
        assert_eq!(HeuristicPosTagger::tag_token("Reading"), "VBG");
    }

    #[test]
    fn test_tag_preserves_length() {
        let tokens: Vec<String> = ["show", "the", "contract"].iter().map(|s| s.to_string()).collect();
        let tags = HeuristicPosTagger::new().tag(&tokens).unwrap();
        assert_eq!(tags, vec!["VB", "DT", "NN"]);
    }
}
