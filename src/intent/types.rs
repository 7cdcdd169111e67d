//! Common types for intent classification.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entity::Entities;
use crate::error::IntentiaError;

/// Query intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Intent {
    ContractDetails,
    CustomerInfo,
    AccountInfo,
    UserManagement,
    SystemStatus,
    GeneralInquiry,
    Greeting,
    Goodbye,
    /// Validation or processing failure. Never produced by scoring.
    Error,
}

impl Intent {
    /// Intents that take part in scoring, in declaration order. Ties are
    /// resolved in favor of the earliest one.
    pub const SCORED: [Intent; 8] = [
        Intent::ContractDetails,
        Intent::CustomerInfo,
        Intent::AccountInfo,
        Intent::UserManagement,
        Intent::SystemStatus,
        Intent::GeneralInquiry,
        Intent::Greeting,
        Intent::Goodbye,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::ContractDetails => "CONTRACT_DETAILS",
            Intent::CustomerInfo => "CUSTOMER_INFO",
            Intent::AccountInfo => "ACCOUNT_INFO",
            Intent::UserManagement => "USER_MANAGEMENT",
            Intent::SystemStatus => "SYSTEM_STATUS",
            Intent::GeneralInquiry => "GENERAL_INQUIRY",
            Intent::Greeting => "GREETING",
            Intent::Goodbye => "GOODBYE",
            Intent::Error => "ERROR",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Intent {
    type Err = IntentiaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Intent::SCORED
            .iter()
            .chain(std::iter::once(&Intent::Error))
            .find(|intent| intent.as_str().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| IntentiaError::invalid_input(format!("unknown intent: {s}")))
    }
}

/// Everything a classifier looks at.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationInput<'a> {
    /// The normalized query text.
    pub normalized_input: &'a str,
    /// Tokens of all sentences, in order.
    pub tokens: &'a [String],
    pub sentence_count: usize,
    /// Entities merged across sentences.
    pub entities: &'a Entities,
}

/// Result of classifying one query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub intent: Intent,
    pub confidence: f64,
    /// Raw score of every scored intent.
    pub scores: BTreeMap<Intent, f64>,
}
