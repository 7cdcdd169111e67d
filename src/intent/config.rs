//! Intent configuration tables.

use std::collections::HashSet;

use ahash::{AHashMap, AHashSet};
use regex::Regex;

use crate::analysis::stop_words;
use crate::error::Result;
use crate::intent::types::Intent;

const KEYWORDS: &[(Intent, &[&str])] = &[
    (
        Intent::ContractDetails,
        &[
            "contract", "agreement", "deal", "policy", "details", "information", "show", "get",
            "find", "lookup", "retrieve", "view", "display", "give", "tell", "about", "data", "say",
            "check", "need", "want",
        ],
    ),
    (
        Intent::CustomerInfo,
        &[
            "customer", "client", "person", "user", "account", "profile", "information", "details",
            "data", "record", "history",
        ],
    ),
    (
        Intent::AccountInfo,
        &[
            "account", "balance", "statement", "transaction", "payment", "billing", "invoice",
            "charges", "fees", "summary",
        ],
    ),
    (
        Intent::UserManagement,
        &[
            "user", "username", "password", "login", "access", "permission", "role", "admin",
            "create", "delete", "modify", "update",
        ],
    ),
    (
        Intent::SystemStatus,
        &[
            "status", "health", "system", "server", "database", "connection", "online", "offline",
            "working", "down", "error", "issue",
        ],
    ),
    (
        Intent::GeneralInquiry,
        &[
            "help", "what", "how", "when", "where", "why", "can", "could", "would", "should",
            "tell", "explain", "describe",
        ],
    ),
    (
        Intent::Greeting,
        &[
            "hello", "hi", "hey", "good", "morning", "afternoon", "evening", "greetings", "welcome",
            "start", "begin",
        ],
    ),
    (
        Intent::Goodbye,
        &[
            "bye", "goodbye", "farewell", "exit", "quit", "end", "finish", "thanks", "thank",
            "done", "complete",
        ],
    ),
];

const PATTERNS: &[(Intent, &[&str])] = &[
    (
        Intent::ContractDetails,
        &[
            r"contract\s+\d+",
            r"show.*contract",
            r"get.*contract.*details",
            r"find.*agreement",
            r"lookup.*policy",
            r"can\s+you\s+give.*contract",
            r"could\s+you\s+tell.*contract",
            r"do\s+you\s+have.*contract",
            r"what\s+does\s+contract.*say",
            r"tell\s+me\s+about\s+contract",
            r"i\s+need.*check.*contract",
            r"i\s+want.*details.*contract",
            r"need\s+data.*contract",
            r"please\s+show\s+contract",
        ],
    ),
    (
        Intent::CustomerInfo,
        &[
            r"customer\s+\w+",
            r"client\s+information",
            r"user\s+profile",
            r"account\s+holder",
        ],
    ),
    (
        Intent::AccountInfo,
        &[r"account\s+\d+", r"balance", r"statement", r"transaction.*history"],
    ),
    (
        Intent::UserManagement,
        &[
            r"create\s+user",
            r"delete\s+user",
            r"user\s+access",
            r"reset\s+password",
        ],
    ),
    (
        Intent::Greeting,
        &[
            r"^(hi|hello|hey|good\s+(morning|afternoon|evening))",
            r"greetings",
            r"welcome",
        ],
    ),
    (
        Intent::Goodbye,
        &[r"(bye|goodbye|farewell|exit|quit)", r"thank.*you", r"(done|finished|complete)"],
    ),
];

const THRESHOLDS: &[(Intent, f64)] = &[
    (Intent::ContractDetails, 0.3),
    (Intent::CustomerInfo, 0.25),
    (Intent::AccountInfo, 0.25),
    (Intent::UserManagement, 0.4),
    (Intent::SystemStatus, 0.35),
    (Intent::GeneralInquiry, 0.1),
    (Intent::Greeting, 0.2),
    (Intent::Goodbye, 0.2),
];

/// Default spelling corrections, applied in this order.
pub const SPELLING_CORRECTIONS: &[(&str, &str)] = &[
    ("contarct", "contract"),
    ("contrct", "contract"),
    ("conract", "contract"),
    ("cntrct", "contract"),
    ("contrac", "contract"),
    ("contractt", "contract"),
    ("custmer", "customer"),
    ("cusotmer", "customer"),
    ("accont", "account"),
    ("acount", "account"),
    ("infomation", "information"),
    ("informaton", "information"),
    ("detials", "details"),
    ("deatils", "details"),
    ("shwo", "show"),
    ("teh", "the"),
    ("recrod", "record"),
    ("reocrd", "record"),
];

/// Default global confidence floor.
pub const MIN_CONFIDENCE: f64 = 0.1;

/// Read-only tables driving normalization and intent scoring.
#[derive(Debug, Clone)]
pub struct IntentConfig {
    keywords: AHashMap<Intent, AHashSet<String>>,
    patterns: AHashMap<Intent, Vec<Regex>>,
    thresholds: AHashMap<Intent, f64>,
    spelling_corrections: Vec<(String, String)>,
    min_confidence: f64,
}

impl IntentConfig {
    /// Build the default tables. Patterns are compiled case-insensitively.
    pub fn new() -> Result<Self> {
        let keywords: AHashMap<Intent, AHashSet<String>> = KEYWORDS
            .iter()
            .map(|(intent, words)| (*intent, words.iter().map(|w| w.to_string()).collect()))
            .collect();

        let mut patterns = AHashMap::new();
        for (intent, sources) in PATTERNS {
            let compiled = sources
                .iter()
                .map(|source| -> Result<Regex> { Ok(Regex::new(&format!("(?i){source}"))?) })
                .collect::<Result<Vec<_>>>()?;
            patterns.insert(*intent, compiled);
        }

        Ok(IntentConfig {
            keywords,
            patterns,
            thresholds: THRESHOLDS.iter().copied().collect(),
            spelling_corrections: SPELLING_CORRECTIONS
                .iter()
                .map(|(from, to)| (from.to_string(), to.to_string()))
                .collect(),
            min_confidence: MIN_CONFIDENCE,
        })
    }

    /// Override the global confidence floor.
    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    /// Replace the spelling-correction table.
    pub fn with_spelling_corrections<I, K, V>(mut self, corrections: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.spelling_corrections = corrections
            .into_iter()
            .map(|(from, to)| (from.into(), to.into()))
            .collect();
        self
    }

    /// Whether `word` (already lower-cased) is a keyword of `intent`.
    pub fn is_keyword(&self, intent: Intent, word: &str) -> bool {
        self.keywords
            .get(&intent)
            .is_some_and(|words| words.contains(word))
    }

    pub fn patterns(&self, intent: Intent) -> &[Regex] {
        self.patterns.get(&intent).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn threshold(&self, intent: Intent) -> Option<f64> {
        self.thresholds.get(&intent).copied()
    }

    pub fn spelling_corrections(&self) -> &[(String, String)] {
        &self.spelling_corrections
    }

    pub fn min_confidence(&self) -> f64 {
        self.min_confidence
    }

    pub fn stop_words(&self) -> &'static HashSet<&'static str> {
        stop_words::stop_words()
    }
}
