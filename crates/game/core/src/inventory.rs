//! Inventory storage and the weight-bounded manager that mutates it.
//!
//! [`InventoryManager`] is the only writer of an [`Inventory`]. Every
//! successful mutation leaves `total_weight() <= max_weight()`.

use core::cmp::Reverse;

use crate::amount::Amount;
use crate::error::CoreError;
use crate::item::{Item, ItemId};
use crate::player::PlayerId;

/// Items carried by one player, in insertion order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    pub player_id: PlayerId,
    pub items: Vec<Item>,
}

impl Inventory {
    pub fn new(player_id: PlayerId) -> Self {
        Self {
            player_id,
            items: Vec::new(),
        }
    }

    pub fn with_items(player_id: PlayerId, items: Vec<Item>) -> Self {
        Self { player_id, items }
    }
}

/// Items sharing the same raw `kind` value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemGroup {
    pub kind: String,
    pub items: Vec<Item>,
}

/// Result of resolving free-form user input against the inventory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Selection {
    /// Nothing matched (or the query was blank).
    None,
    /// Exactly one item matched.
    Single(Item),
    /// Several items matched; the caller must pick one.
    Ambiguous(Vec<Item>),
}

/// Weight-bounded view over a player's inventory.
#[derive(Clone, Debug)]
pub struct InventoryManager {
    inventory: Inventory,
    max_weight: Amount,
}

impl InventoryManager {
    /// Wraps an inventory with a carrying capacity.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingInventory`] when no inventory is supplied.
    pub fn new(inventory: Option<Inventory>, max_weight: Amount) -> Result<Self, CoreError> {
        let inventory = inventory.ok_or(CoreError::MissingInventory)?;
        Ok(Self::from_inventory(inventory, max_weight))
    }

    pub fn from_inventory(inventory: Inventory, max_weight: Amount) -> Self {
        Self {
            inventory,
            max_weight,
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn max_weight(&self) -> Amount {
        self.max_weight
    }

    /// Changes capacity. Items already held are kept even if the new
    /// capacity is lower; only future additions are checked against it.
    pub fn set_max_weight(&mut self, max_weight: Amount) {
        self.max_weight = max_weight;
    }

    /// All held items in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.inventory.items
    }

    pub fn is_empty(&self) -> bool {
        self.inventory.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inventory.items.len()
    }

    pub fn total_weight(&self) -> Amount {
        self.inventory.items.iter().map(|item| item.weight).sum()
    }

    /// Capacity left before `max_weight` is reached.
    pub fn remaining_capacity(&self) -> Amount {
        self.max_weight.saturating_sub(self.total_weight())
    }

    /// Whether `item` fits. The boundary is inclusive.
    pub fn can_add_item(&self, item: Option<&Item>) -> bool {
        let Some(item) = item else {
            return false;
        };
        if item.weight.is_negative() {
            return false;
        }
        self.total_weight() + item.weight <= self.max_weight
    }

    /// Appends `item` if it fits. Leaves the inventory untouched otherwise.
    pub fn add_item(&mut self, item: Option<Item>) -> bool {
        let Some(item) = item else {
            return false;
        };
        if !self.can_add_item(Some(&item)) {
            tracing::debug!(
                item = %item.name,
                weight = %item.weight,
                total = %self.total_weight(),
                max = %self.max_weight,
                "item rejected by weight limit"
            );
            return false;
        }

        tracing::debug!(item = %item.name, id = %item.id, "item added to inventory");
        self.inventory.items.push(item);
        true
    }

    /// Removes the earliest item whose name matches case-insensitively.
    pub fn remove_item(&mut self, name: &str) -> bool {
        if name.trim().is_empty() {
            return false;
        }
        let Some(index) = self.position_by_name(name) else {
            return false;
        };

        let removed = self.inventory.items.remove(index);
        tracing::debug!(item = %removed.name, id = %removed.id, "item removed from inventory");
        true
    }

    /// Removes the earliest item with id `id`.
    pub fn remove_item_by_id(&mut self, id: ItemId) -> bool {
        let Some(index) = self.inventory.items.iter().position(|item| item.id == id) else {
            return false;
        };

        let removed = self.inventory.items.remove(index);
        tracing::debug!(item = %removed.name, id = %removed.id, "item removed from inventory");
        true
    }

    /// First item whose name matches case-insensitively.
    pub fn find_item_by_name(&self, name: &str) -> Option<&Item> {
        if name.trim().is_empty() {
            return None;
        }
        self.position_by_name(name)
            .map(|index| &self.inventory.items[index])
    }

    /// First item carrying `id`.
    pub fn find_item_by_id(&self, id: ItemId) -> Option<&Item> {
        self.inventory.items.iter().find(|item| item.id == id)
    }

    /// Items whose name contains `name_part`, ignoring case.
    ///
    /// A blank query returns every item.
    pub fn search_items(&self, name_part: &str) -> Vec<Item> {
        if name_part.trim().is_empty() {
            return self.inventory.items.clone();
        }
        self.inventory
            .items
            .iter()
            .filter(|item| item.name_contains(name_part))
            .cloned()
            .collect()
    }

    /// Groups items by their raw `kind`, in order of first appearance.
    pub fn list_items_by_type(&self) -> Vec<ItemGroup> {
        let mut groups: Vec<ItemGroup> = Vec::new();
        for item in &self.inventory.items {
            match groups.iter_mut().find(|group| group.kind == item.kind) {
                Some(group) => group.items.push(item.clone()),
                None => groups.push(ItemGroup {
                    kind: item.kind.clone(),
                    items: vec![item.clone()],
                }),
            }
        }
        groups
    }

    /// Ascending by name using `str` ordering (by code point, so uppercase
    /// sorts before lowercase).
    pub fn sort_by_name(&self) -> Vec<Item> {
        let mut items = self.inventory.items.clone();
        items.sort_by(|a, b| a.name.cmp(&b.name));
        items
    }

    /// Descending by attack; equal attacks keep insertion order.
    pub fn sort_by_attack(&self) -> Vec<Item> {
        let mut items = self.inventory.items.clone();
        items.sort_by_key(|item| Reverse(item.attack));
        items
    }

    /// Descending by defense; equal defenses keep insertion order.
    pub fn sort_by_defense(&self) -> Vec<Item> {
        let mut items = self.inventory.items.clone();
        items.sort_by_key(|item| Reverse(item.defense));
        items
    }

    /// Resolves user input to an item.
    ///
    /// A numeric query is treated as an item id. Anything else is a
    /// case-insensitive substring search that may yield several candidates.
    pub fn select(&self, query: &str) -> Selection {
        let query = query.trim();
        if query.is_empty() {
            return Selection::None;
        }

        if let Ok(id) = query.parse::<u32>() {
            return match self.find_item_by_id(ItemId(id)) {
                Some(item) => Selection::Single(item.clone()),
                None => Selection::None,
            };
        }

        let mut matches = self.search_items(query);
        match matches.len() {
            0 => Selection::None,
            1 => Selection::Single(matches.remove(0)),
            _ => Selection::Ambiguous(matches),
        }
    }

    fn position_by_name(&self, name: &str) -> Option<usize> {
        self.inventory
            .items
            .iter()
            .position(|item| item.name_matches(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, name: &str, kind: &str, weight: i64) -> Item {
        Item::new(ItemId(id), name, kind).with_weight(Amount::from_units(weight))
    }

    fn manager(max: i64) -> InventoryManager {
        InventoryManager::new(Some(Inventory::new(PlayerId(1))), Amount::from_units(max)).unwrap()
    }

    #[test]
    fn construction_requires_inventory() {
        let result = InventoryManager::new(None, Amount::from_units(100));
        assert_eq!(result.unwrap_err(), CoreError::MissingInventory);
    }

    #[test]
    fn total_weight_sums_items() {
        let mut inv = manager(100);
        assert_eq!(inv.total_weight(), Amount::ZERO);

        assert!(inv.add_item(Some(item(1, "Sword", "weapon", 10))));
        assert!(inv.add_item(Some(
            Item::new(ItemId(2), "Feather", "misc").with_weight(Amount::from_hundredths(25))
        )));
        assert_eq!(inv.total_weight(), Amount::from_hundredths(1025));
        assert_eq!(inv.remaining_capacity(), Amount::from_hundredths(8975));
    }

    #[test]
    fn capacity_boundary_is_inclusive() {
        let mut inv = manager(100);
        assert!(inv.add_item(Some(item(1, "Anvil", "misc", 60))));
        assert!(inv.add_item(Some(item(2, "Crate", "misc", 40))));
        assert_eq!(inv.total_weight(), Amount::from_units(100));

        assert!(!inv.add_item(Some(
            Item::new(ItemId(3), "Coin", "misc").with_weight(Amount::from_hundredths(1))
        )));
        assert_eq!(inv.len(), 2);
        assert_eq!(inv.total_weight(), Amount::from_units(100));
    }

    #[test]
    fn rejects_absent_and_negative_weight_items() {
        let mut inv = manager(100);
        assert!(!inv.can_add_item(None));
        assert!(!inv.add_item(None));

        let cursed = Item::new(ItemId(9), "Balloon", "misc").with_weight(Amount::from_units(-5));
        assert!(!inv.can_add_item(Some(&cursed)));
        assert!(!inv.add_item(Some(cursed)));
        assert!(inv.is_empty());
    }

    #[test]
    fn zero_weight_fits_a_full_inventory() {
        let mut inv = manager(10);
        assert!(inv.add_item(Some(item(1, "Brick", "misc", 10))));
        assert!(inv.add_item(Some(item(2, "Letter", "misc", 0))));
    }

    #[test]
    fn remove_takes_earliest_of_same_name() {
        let mut inv = manager(100);
        inv.add_item(Some(item(1, "Potion", "potion", 1)));
        inv.add_item(Some(item(2, "Sword", "weapon", 5)));
        inv.add_item(Some(item(3, "Potion", "potion", 1)));

        assert!(inv.remove_item("potion"));
        let ids: Vec<_> = inv.items().iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![ItemId(2), ItemId(3)]);

        assert!(inv.remove_item("POTION"));
        assert_eq!(inv.items().len(), 1);
        assert!(!inv.remove_item("Potion"));
    }

    #[test]
    fn remove_rejects_blank_and_unknown_names() {
        let mut inv = manager(100);
        inv.add_item(Some(item(1, "Shield", "armor", 8)));
        assert!(!inv.remove_item(""));
        assert!(!inv.remove_item("   "));
        assert!(!inv.remove_item("Shie"));
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn find_by_name_is_exact_and_case_insensitive() {
        let mut inv = manager(100);
        inv.add_item(Some(item(1, "Iron Sword", "weapon", 5)));
        inv.add_item(Some(item(2, "iron sword", "weapon", 5)));

        assert_eq!(inv.find_item_by_name("IRON SWORD").map(|i| i.id), Some(ItemId(1)));
        assert!(inv.find_item_by_name("Iron").is_none());
        assert!(inv.find_item_by_name("").is_none());
    }

    #[test]
    fn search_matches_substrings_and_blank_returns_all() {
        let mut inv = manager(100);
        assert!(inv.search_items("").is_empty());
        assert!(inv.search_items("xyz-no-match").is_empty());

        inv.add_item(Some(item(1, "Healing Potion", "potion", 1)));
        inv.add_item(Some(item(2, "Mana Potion", "potion", 1)));
        inv.add_item(Some(item(3, "Dagger", "weapon", 2)));

        assert_eq!(inv.search_items("").len(), 3);
        assert_eq!(inv.search_items("  ").len(), 3);
        assert_eq!(inv.search_items("POTION").len(), 2);
        assert!(inv.search_items("xyz-no-match").is_empty());
    }

    #[test]
    fn views_are_snapshots() {
        let mut inv = manager(100);
        inv.add_item(Some(item(1, "Rope", "misc", 2)));
        let snapshot = inv.search_items("");
        let sorted = inv.sort_by_name();

        inv.add_item(Some(item(2, "Torch", "misc", 1)));
        inv.remove_item("Rope");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].name, "Rope");
        assert_eq!(sorted.len(), 1);
    }

    #[test]
    fn groups_by_raw_type_in_first_seen_order() {
        let mut inv = manager(100);
        assert!(inv.list_items_by_type().is_empty());

        inv.add_item(Some(item(1, "Sword", "Weapon", 5)));
        inv.add_item(Some(item(2, "Potion", "potion", 1)));
        inv.add_item(Some(item(3, "Axe", "weapon", 6)));
        inv.add_item(Some(item(4, "Bow", "Weapon", 3)));

        let groups = inv.list_items_by_type();
        let kinds: Vec<_> = groups.iter().map(|g| g.kind.as_str()).collect();
        assert_eq!(kinds, vec!["Weapon", "potion", "weapon"]);
        let first: Vec<_> = groups[0].items.iter().map(|i| i.id).collect();
        assert_eq!(first, vec![ItemId(1), ItemId(4)]);
    }

    #[test]
    fn sort_by_name_uses_ordinal_order() {
        let mut inv = manager(100);
        inv.add_item(Some(item(1, "banana", "misc", 1)));
        inv.add_item(Some(item(2, "Apple", "misc", 1)));
        inv.add_item(Some(item(3, "Zebra", "misc", 1)));

        let names: Vec<_> = inv.sort_by_name().into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Apple", "Zebra", "banana"]);
    }

    #[test]
    fn stat_sorts_are_descending_and_stable() {
        let mut inv = manager(100);
        inv.add_item(Some(item(1, "Club", "weapon", 1).with_attack(3).with_defense(1)));
        inv.add_item(Some(item(2, "Sword", "weapon", 1).with_attack(7)));
        inv.add_item(Some(item(3, "Mace", "weapon", 1).with_attack(3).with_defense(4)));
        inv.add_item(Some(item(4, "Buckler", "armor", 1).with_defense(4)));

        let by_attack: Vec<_> = inv.sort_by_attack().into_iter().map(|i| i.id.0).collect();
        assert_eq!(by_attack, vec![2, 1, 3, 4]);

        let by_defense: Vec<_> = inv.sort_by_defense().into_iter().map(|i| i.id.0).collect();
        assert_eq!(by_defense, vec![3, 4, 1, 2]);
    }

    #[test]
    fn select_resolves_ids_names_and_ambiguity() {
        let mut inv = manager(100);
        inv.add_item(Some(item(10, "Healing Potion", "potion", 1)));
        inv.add_item(Some(item(11, "Mana Potion", "potion", 1)));
        inv.add_item(Some(item(12, "Longsword", "weapon", 4)));

        assert_eq!(inv.select(""), Selection::None);
        assert_eq!(inv.select("99"), Selection::None);
        assert!(matches!(inv.select(" 12 "), Selection::Single(ref i) if i.name == "Longsword"));
        assert!(matches!(inv.select("sword"), Selection::Single(ref i) if i.id == ItemId(12)));
        match inv.select("potion") {
            Selection::Ambiguous(candidates) => {
                let ids: Vec<_> = candidates.iter().map(|i| i.id.0).collect();
                assert_eq!(ids, vec![10, 11]);
            }
            other => panic!("expected ambiguous selection, got {other:?}"),
        }
        assert_eq!(inv.select("shield"), Selection::None);
    }
}
