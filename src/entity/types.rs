//! Entity types and the per-type entity map.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of extracted entity.
///
/// The declaration order is the order entity lists appear in results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityType {
    ContractNumbers,
    CustomerNames,
    OrganizationNames,
    Locations,
    Actions,
    AccountNumbers,
    UserNames,
    Dates,
    PhoneNumbers,
    Emails,
}

impl EntityType {
    pub const ALL: [EntityType; 10] = [
        EntityType::ContractNumbers,
        EntityType::CustomerNames,
        EntityType::OrganizationNames,
        EntityType::Locations,
        EntityType::Actions,
        EntityType::AccountNumbers,
        EntityType::UserNames,
        EntityType::Dates,
        EntityType::PhoneNumbers,
        EntityType::Emails,
    ];

    /// The key used for this type in serialized results.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::ContractNumbers => "contractNumbers",
            EntityType::CustomerNames => "customerNames",
            EntityType::OrganizationNames => "organizationNames",
            EntityType::Locations => "locations",
            EntityType::Actions => "actions",
            EntityType::AccountNumbers => "accountNumbers",
            EntityType::UserNames => "userNames",
            EntityType::Dates => "dates",
            EntityType::PhoneNumbers => "phoneNumbers",
            EntityType::Emails => "emails",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extracted entities, grouped by type.
///
/// Every [`EntityType`] is always present, possibly with an empty list. Lists
/// keep first-seen order and hold no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<EntityType, Vec<String>>")]
pub struct Entities {
    #[serde(flatten)]
    by_type: BTreeMap<EntityType, Vec<String>>,
}

impl Entities {
    /// An entity map with every type present and empty.
    pub fn new() -> Self {
        Entities {
            by_type: EntityType::ALL
                .iter()
                .map(|entity_type| (*entity_type, Vec::new()))
                .collect(),
        }
    }

    pub fn get(&self, entity_type: EntityType) -> &[String] {
        self.by_type
            .get(&entity_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether any entity of this type was found.
    pub fn has(&self, entity_type: EntityType) -> bool {
        !self.get(entity_type).is_empty()
    }

    /// Append `value` unless it is already present. Returns whether it was added.
    pub fn push_unique(&mut self, entity_type: EntityType, value: impl Into<String>) -> bool {
        let value = value.into();
        let list = self.by_type.entry(entity_type).or_default();
        if list.contains(&value) {
            false
        } else {
            list.push(value);
            true
        }
    }

    pub fn extend_unique<I, S>(&mut self, entity_type: EntityType, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for value in values {
            self.push_unique(entity_type, value);
        }
    }

    /// Ordered, deduplicated union with `other`.
    pub fn merge(&mut self, other: &Entities) {
        for (entity_type, values) in &other.by_type {
            self.extend_unique(*entity_type, values.iter().cloned());
        }
    }

    /// Total number of entities across all types.
    pub fn total(&self) -> usize {
        self.by_type.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Trim every value, then drop empty values and duplicates.
    pub fn clean(self) -> Self {
        let mut cleaned = Entities::new();
        for (entity_type, values) in self.by_type {
            for value in values {
                let value = value.trim();
                if !value.is_empty() {
                    cleaned.push_unique(entity_type, value);
                }
            }
        }
        cleaned
    }

    pub fn iter(&self) -> impl Iterator<Item = (EntityType, &[String])> {
        self.by_type
            .iter()
            .map(|(entity_type, values)| (*entity_type, values.as_slice()))
    }
}

impl Default for Entities {
    fn default() -> Self {
        Entities::new()
    }
}

impl From<BTreeMap<EntityType, Vec<String>>> for Entities {
    fn from(map: BTreeMap<EntityType, Vec<String>>) -> Self {
        let mut entities = Entities::new();
        for (entity_type, values) in map {
            entities.extend_unique(entity_type, values);
        }
        entities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_has_every_type() {
        let entities = Entities::new();
        assert_eq!(entities.iter().count(), EntityType::ALL.len());
        assert!(entities.is_empty());
    }

    #[test]
    fn test_push_unique_keeps_order() {
        let mut entities = Entities::new();
        assert!(entities.push_unique(EntityType::Actions, "show"));
        assert!(entities.push_unique(EntityType::Actions, "get"));
        assert!(!entities.push_unique(EntityType::Actions, "show"));
        assert_eq!(entities.get(EntityType::Actions), ["show", "get"]);
    }

    #[test]
    fn test_merge() {
        let mut first = Entities::new();
        first.push_unique(EntityType::ContractNumbers, "123456");
        let mut second = Entities::new();
        second.extend_unique(EntityType::ContractNumbers, ["654321", "123456"]);
        second.push_unique(EntityType::Emails, "a@b.io");

        first.merge(&second);
        assert_eq!(
            first.get(EntityType::ContractNumbers),
            ["123456", "654321"]
        );
        assert_eq!(first.total(), 3);
    }

    #[test]
    fn test_clean() {
        let mut entities = Entities::new();
        entities.extend_unique(EntityType::CustomerNames, [" Jane Doe", "Jane Doe", "  "]);
        let cleaned = entities.clean();
        assert_eq!(cleaned.get(EntityType::CustomerNames), ["Jane Doe"]);
    }

    #[test]
    fn test_serialized_keys() {
        let mut entities = Entities::new();
        entities.push_unique(EntityType::PhoneNumbers, "555-123-4567");
        let json = serde_json::to_value(&entities).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(object.len(), 10);
        assert_eq!(object["phoneNumbers"][0], "555-123-4567");
        assert!(object["contractNumbers"].as_array().unwrap().is_empty());

        let keys: Vec<_> = object.keys().cloned().collect();
        let expected: Vec<_> = EntityType::ALL.iter().map(|t| t.as_str().to_string()).collect();
        let mut sorted_expected = expected.clone();
        sorted_expected.sort();
        // serde_json maps are sorted unless preserve_order is enabled
        assert!(keys == expected || keys == sorted_expected);
    }

    #[test]
    fn test_deserialize_fills_missing_types() {
        let entities: Entities = serde_json::from_str(r#"{"emails": ["a@b.io"]}"#).unwrap();
        assert_eq!(entities.get(EntityType::Emails), ["a@b.io"]);
        assert!(entities.get(EntityType::Dates).is_empty());
        assert_eq!(entities.iter().count(), 10);
    }
}
