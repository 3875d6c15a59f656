//! Item records as supplied by the world catalog.

use core::fmt;

use crate::amount::Amount;

/// World-unique item identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An item a player can carry, equip, or consume.
///
/// `kind` is free-form content data ("Weapon", "armor ", "Potion", ...).
/// Rules compare it through [`Item::normalized_kind`]; grouping views use the
/// raw value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(rename = "type", alias = "kind", default))]
    pub kind: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attack: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub defense: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub weight: Amount,
    #[cfg_attr(feature = "serde", serde(default))]
    pub value: Amount,
}

impl Item {
    /// Creates an item with no stats, weight, or value.
    pub fn new(id: ItemId, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            kind: kind.into(),
            attack: 0,
            defense: 0,
            weight: Amount::ZERO,
            value: Amount::ZERO,
        }
    }

    pub fn with_attack(mut self, attack: u32) -> Self {
        self.attack = attack;
        self
    }

    pub fn with_defense(mut self, defense: u32) -> Self {
        self.defense = defense;
        self
    }

    pub fn with_weight(mut self, weight: Amount) -> Self {
        self.weight = weight;
        self
    }

    /// Lowercased, trimmed type used by slot and consumption rules.
    pub fn normalized_kind(&self) -> String {
        self.kind.trim().to_lowercase()
    }

    /// Case-insensitive exact name comparison.
    pub fn name_matches(&self, name: &str) -> bool {
        !self.name.is_empty() && self.name.to_lowercase() == name.to_lowercase()
    }

    /// Case-insensitive substring comparison against the name.
    pub fn name_contains(&self, part: &str) -> bool {
        self.name.to_lowercase().contains(&part.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_kind_trims_and_lowercases() {
        let item = Item::new(ItemId(1), "Elixir", "  PoTiOn ");
        assert_eq!(item.normalized_kind(), "potion");
    }

    #[test]
    fn name_matching_ignores_case() {
        let item = Item::new(ItemId(1), "Iron Sword", "weapon");
        assert!(item.name_matches("iron sword"));
        assert!(!item.name_matches("iron"));
        assert!(item.name_contains("RON SW"));
    }

    #[test]
    fn empty_name_never_matches_exactly() {
        let item = Item::new(ItemId(1), "", "misc");
        assert!(!item.name_matches(""));
    }
}
