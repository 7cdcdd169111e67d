//! Entity extraction over a single sentence.
//!
//! Identifier-like entities are found with regular expressions over the
//! sentence text. Names come from the capability set's name finders over the
//! token sequence, and actions from a fixed vocabulary.
//!
//! # Examples
//!
//! ```
//! use intentia::analysis::CapabilitySet;
//! use intentia::entity::{EntityExtractor, EntityType};
//!
//! let extractor = EntityExtractor::new().unwrap();
//! let capabilities = CapabilitySet::heuristic();
//! let text = "show contract 123456";
//! let tokens = capabilities.tokenize(text).unwrap();
//!
//! let entities = extractor.extract(text, &tokens, &capabilities).unwrap();
//! assert_eq!(entities.get(EntityType::ContractNumbers), ["123456"]);
//! assert_eq!(entities.get(EntityType::Actions), ["show"]);
//! ```

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::analysis::capability::CapabilitySet;
use crate::analysis::name_finder::NameKind;
use crate::entity::types::{Entities, EntityType};
use crate::error::Result;

const ACTION_WORDS: &[&str] = &[
    "show", "get", "find", "details", "info", "view", "display", "tell", "give", "provide",
    "retrieve", "fetch", "lookup", "check", "examine", "review", "see", "access", "pull", "what",
    "how", "where", "when", "which", "who", "data", "information", "content", "summary",
    "overview", "have", "contain", "include", "say", "state", "need", "want", "create", "update",
    "modify", "delete", "remove", "add", "search", "query", "list", "browse", "explore",
];

static ACTIONS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ACTION_WORDS.iter().copied().collect());

const RESERVED_PERSON_NAMES: &[&str] = &["user", "customer", "client", "person"];

/// Label-prefixed contract patterns, tried in order. The entry `None` marks
/// where the bare whitespace-delimited six digit token is matched.
const CONTRACT_PATTERNS: &[Option<&str>] = &[
    Some(r"(?i)contract\s+(?:number\s+)?(\d{6,8})"),
    Some(r"(?i)agreement\s+(?:number\s+)?(\d{6,8})"),
    Some(r"(?i)deal\s+(?:number\s+)?(\d{6,8})"),
    Some(r"(?i)policy\s+(?:number\s+)?(\d{6,8})"),
    None,
    Some(r"(?i)contract\s+id\s+(\d{6,8})"),
    Some(r"(?i)ref\s+(?:number\s+)?(\d{6,8})"),
    Some(r"(?i)contract#(\d{6,8})"),
    Some(r"(?i)contract(\d{6,8})"),
    Some(r"(?i)info\s+(\d{6,8})"),
    Some(r"(?i)details\s+(\d{6,8})"),
];

const BARE_CONTRACT_PATTERN: &str = r"(?:^|\s)(\d{6})";

const ACCOUNT_PATTERNS: &[&str] = &[
    r"(?i)account\s+(?:number\s+)?(\d{8,12})",
    r"(?i)acc\s+(?:no\s+)?(\d{8,12})",
    r"(?i)account\s+id\s+(\d{8,12})",
    r"(?i)customer\s+(?:number\s+)?(\d{8,12})",
];

const USER_NAME_PATTERNS: &[&str] = &[
    r"(?i)user\s+(?:name\s+)?(\w+)",
    r"(?i)username\s+(\w+)",
    r"(?i)employee\s+(?:id\s+)?(\w+)",
    r"(?i)staff\s+(?:id\s+)?(\w+)",
];

const DATE_PATTERNS: &[&str] = &[
    r"(?i)\b(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})\b",
    r"(?i)\b(\d{4}[/-]\d{1,2}[/-]\d{1,2})\b",
    r"(?i)\b((?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{1,2},?\s+\d{4})\b",
    r"(?i)\b(\d{1,2}\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+\d{4})\b",
];

const PHONE_PATTERNS: &[&str] = &[
    r"\b(\d{3}[.-]\d{3}[.-]\d{4})\b",
    r"(\(\d{3}\)\s*\d{3}[.-]\d{4})\b",
    r"\b(\d{10})\b",
];

const EMAIL_PATTERN: &str = r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b";

enum ContractPattern {
    Labelled(Regex),
    Bare(Regex),
}

/// Extracts every [`EntityType`] from one sentence.
pub struct EntityExtractor {
    contract_patterns: Vec<ContractPattern>,
    account_patterns: Vec<Regex>,
    user_name_patterns: Vec<Regex>,
    date_patterns: Vec<Regex>,
    phone_patterns: Vec<Regex>,
    email_pattern: Regex,
    contract_number: Regex,
    account_number: Regex,
    user_name: Regex,
    person_name: Regex,
}

impl EntityExtractor {
    /// Compile all extraction patterns.
    pub fn new() -> Result<Self> {
        let contract_patterns = CONTRACT_PATTERNS
            .iter()
            .map(|pattern| -> Result<ContractPattern> {
                Ok(match pattern {
                    Some(pattern) => ContractPattern::Labelled(Regex::new(pattern)?),
                    None => ContractPattern::Bare(Regex::new(BARE_CONTRACT_PATTERN)?),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(EntityExtractor {
            contract_patterns,
            account_patterns: compile_all(ACCOUNT_PATTERNS)?,
            user_name_patterns: compile_all(USER_NAME_PATTERNS)?,
            date_patterns: compile_all(DATE_PATTERNS)?,
            phone_patterns: compile_all(PHONE_PATTERNS)?,
            email_pattern: Regex::new(EMAIL_PATTERN)?,
            contract_number: Regex::new(r"^\d{6,8}$")?,
            account_number: Regex::new(r"^\d{8,12}$")?,
            user_name: Regex::new(r"^[A-Za-z0-9_]{3,20}$")?,
            person_name: Regex::new(r"^[A-Za-z\s]{2,50}$")?,
        })
    }

    /// Extract entities from `text` and its `tokens`.
    ///
    /// `text` should be the sentence as the user typed it, so that name and
    /// identifier patterns see the original casing and punctuation.
    pub fn extract(
        &self,
        text: &str,
        tokens: &[String],
        capabilities: &CapabilitySet,
    ) -> Result<Entities> {
        let mut entities = Entities::new();

        entities.extend_unique(EntityType::ContractNumbers, self.contract_numbers(text));
        entities.extend_unique(
            EntityType::CustomerNames,
            self.names(NameKind::Person, tokens, capabilities)?,
        );
        entities.extend_unique(
            EntityType::OrganizationNames,
            self.names(NameKind::Organization, tokens, capabilities)?,
        );
        entities.extend_unique(
            EntityType::Locations,
            self.names(NameKind::Location, tokens, capabilities)?,
        );
        entities.extend_unique(EntityType::Actions, action_words(tokens));
        entities.extend_unique(EntityType::AccountNumbers, self.account_numbers(text));
        entities.extend_unique(EntityType::UserNames, self.user_names(text));
        entities.extend_unique(EntityType::Dates, capture_all(&self.date_patterns, text));
        entities.extend_unique(EntityType::PhoneNumbers, capture_all(&self.phone_patterns, text));
        entities.extend_unique(
            EntityType::Emails,
            self.email_pattern
                .find_iter(text)
                .map(|m| m.as_str().to_string()),
        );

        Ok(entities)
    }

    pub fn contract_numbers(&self, text: &str) -> Vec<String> {
        let mut numbers: Vec<String> = Vec::new();

        for pattern in &self.contract_patterns {
            let candidates = match pattern {
                ContractPattern::Labelled(regex) => capture_first(regex, text),
                ContractPattern::Bare(regex) => regex
                    .captures_iter(text)
                    .filter_map(|caps| caps.get(1))
                    .filter(|m| {
                        text[m.end()..]
                            .chars()
                            .next()
                            .is_none_or(char::is_whitespace)
                    })
                    .map(|m| m.as_str().to_string())
                    .collect(),
            };

            for number in candidates {
                if self.is_valid_contract_number(&number) && !numbers.contains(&number) {
                    numbers.push(number);
                }
            }
        }

        numbers
    }

    pub fn account_numbers(&self, text: &str) -> Vec<String> {
        capture_all(&self.account_patterns, text)
            .into_iter()
            .filter(|number| self.account_number.is_match(number) && number != "00000000")
            .collect()
    }

    pub fn user_names(&self, text: &str) -> Vec<String> {
        capture_all(&self.user_name_patterns, text)
            .into_iter()
            .filter(|name| self.user_name.is_match(name))
            .collect()
    }

    fn names(
        &self,
        kind: NameKind,
        tokens: &[String],
        capabilities: &CapabilitySet,
    ) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for span in capabilities.find_named_entities(kind, tokens)? {
            let name = span.join(tokens)?;
            if kind != NameKind::Person || self.is_valid_person_name(&name) {
                names.push(name);
            }
        }
        Ok(names)
    }

    fn is_valid_contract_number(&self, number: &str) -> bool {
        self.contract_number.is_match(number) && number != "000000"
    }

    fn is_valid_person_name(&self, name: &str) -> bool {
        self.person_name.is_match(name)
            && !RESERVED_PERSON_NAMES
                .iter()
                .any(|reserved| name.eq_ignore_ascii_case(reserved))
    }
}

impl std::fmt::Debug for EntityExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EntityExtractor")
            .field("contract_patterns", &self.contract_patterns.len())
            .field("account_patterns", &self.account_patterns.len())
            .field("user_name_patterns", &self.user_name_patterns.len())
            .field("date_patterns", &self.date_patterns.len())
            .field("phone_patterns", &self.phone_patterns.len())
            .finish()
    }
}

/// Lower-cased action words in first-occurrence order.
pub fn action_words(tokens: &[String]) -> Vec<String> {
    let mut actions: Vec<String> = Vec::new();
    for token in tokens {
        let lower = token.to_lowercase();
        if ACTIONS.contains(lower.as_str()) && !actions.contains(&lower) {
            actions.push(lower);
        }
    }
    actions
}

fn compile_all(patterns: &[&str]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|pattern| -> Result<Regex> { Ok(Regex::new(pattern)?) })
        .collect()
}

fn capture_first(regex: &Regex, text: &str) -> Vec<String> {
    regex
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

fn capture_all(patterns: &[Regex], text: &str) -> Vec<String> {
    patterns
        .iter()
        .flat_map(|regex| capture_first(regex, text))
        .collect()
}
