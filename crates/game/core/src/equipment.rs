//! Equipment slots and the rules for filling them.
//!
//! A player has one weapon slot and one armor slot. Slots hold a copy of the
//! equipped item; identity is the item id, so two inventory entries with the
//! same name but different ids are distinct for unequipping.

use crate::item::Item;
use crate::outcome::{ItemOutcome, SlotRejection};

/// The two equipment positions.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipSlot {
    Weapon,
    Armor,
}

/// Equipment state for a player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    /// Currently equipped weapon (contributes attack).
    pub weapon: Option<Item>,

    /// Currently equipped armor (contributes defense).
    pub armor: Option<Item>,
}

impl Equipment {
    /// Creates empty equipment (no weapon or armor).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> EquipmentBuilder {
        EquipmentBuilder::default()
    }

    /// Equips a weapon, returning the previously equipped weapon if any.
    pub fn equip_weapon(&mut self, item: Item) -> Option<Item> {
        self.weapon.replace(item)
    }

    /// Unequips the current weapon, returning it if any was equipped.
    pub fn unequip_weapon(&mut self) -> Option<Item> {
        self.weapon.take()
    }

    /// Equips armor, returning the previously equipped armor if any.
    pub fn equip_armor(&mut self, item: Item) -> Option<Item> {
        self.armor.replace(item)
    }

    /// Unequips the current armor, returning it if any was equipped.
    pub fn unequip_armor(&mut self) -> Option<Item> {
        self.armor.take()
    }

    pub fn slot(&self, slot: EquipSlot) -> Option<&Item> {
        match slot {
            EquipSlot::Weapon => self.weapon.as_ref(),
            EquipSlot::Armor => self.armor.as_ref(),
        }
    }
}

#[derive(Default)]
pub struct EquipmentBuilder {
    weapon: Option<Item>,
    armor: Option<Item>,
}

impl EquipmentBuilder {
    pub fn weapon(mut self, item: Item) -> Self {
        self.weapon = Some(item);
        self
    }

    pub fn armor(mut self, item: Item) -> Self {
        self.armor = Some(item);
        self
    }

    pub fn build(self) -> Equipment {
        Equipment {
            weapon: self.weapon,
            armor: self.armor,
        }
    }
}

/// Decides which slot an item belongs in.
///
/// Rules, in order:
/// 1. attack and defense both zero: rejected.
/// 2. kind "weapon", or kind not "armor" with attack > defense: weapon.
/// 3. kind "armor", or defense >= attack: armor.
///
/// Rule 3 uses `>=`, so an untyped item with equal attack and defense goes
/// to the armor slot.
pub fn slot_for(item: &Item) -> Result<EquipSlot, SlotRejection> {
    if item.attack == 0 && item.defense == 0 {
        return Err(SlotRejection::NoEquipStats);
    }

    let kind = item.normalized_kind();
    if kind == "weapon" || (kind != "armor" && item.attack > item.defense) {
        Ok(EquipSlot::Weapon)
    } else if kind == "armor" || item.defense >= item.attack {
        Ok(EquipSlot::Armor)
    } else {
        Err(SlotRejection::Undetermined)
    }
}

/// Owns a player's [`Equipment`] and applies the slot rules to it.
#[derive(Clone, Debug, Default)]
pub struct EquipmentManager {
    equipment: Equipment,
}

impl EquipmentManager {
    /// Wraps existing equipment, or starts empty.
    pub fn new(equipment: Option<Equipment>) -> Self {
        Self {
            equipment: equipment.unwrap_or_default(),
        }
    }

    pub fn equipment(&self) -> &Equipment {
        &self.equipment
    }

    pub fn weapon(&self) -> Option<&Item> {
        self.equipment.weapon.as_ref()
    }

    pub fn armor(&self) -> Option<&Item> {
        self.equipment.armor.as_ref()
    }

    /// Places `item` in the slot chosen by [`slot_for`], replacing the
    /// previous occupant.
    pub fn equip_item(&mut self, item: Option<&Item>) -> ItemOutcome {
        let Some(item) = item else {
            return ItemOutcome::InvalidItem;
        };

        let slot = match slot_for(item) {
            Ok(slot) => slot,
            Err(rejection) => {
                tracing::debug!(item = %item.name, ?rejection, "equip rejected");
                return ItemOutcome::InvalidSlot(rejection);
            }
        };

        let previous = match slot {
            EquipSlot::Weapon => self.equipment.equip_weapon(item.clone()),
            EquipSlot::Armor => self.equipment.equip_armor(item.clone()),
        };
        tracing::debug!(
            item = %item.name,
            %slot,
            replaced = previous.as_ref().map(|p| p.name.as_str()),
            "item equipped"
        );

        ItemOutcome::Equipped {
            name: item.name.clone(),
            slot,
        }
    }

    /// Clears every slot holding an item with the same id as `item`.
    pub fn unequip_item(&mut self, item: Option<&Item>) {
        let Some(item) = item else {
            return;
        };

        if self.weapon().is_some_and(|w| w.id == item.id) {
            self.equipment.unequip_weapon();
            tracing::debug!(item = %item.name, "weapon unequipped");
        }
        if self.armor().is_some_and(|a| a.id == item.id) {
            self.equipment.unequip_armor();
            tracing::debug!(item = %item.name, "armor unequipped");
        }
    }

    /// Whether `item` (by id) occupies any slot.
    pub fn is_equipped(&self, item: &Item) -> bool {
        self.weapon().is_some_and(|w| w.id == item.id)
            || self.armor().is_some_and(|a| a.id == item.id)
    }

    /// Attack of the equipped weapon, or 0.
    pub fn total_attack(&self) -> u32 {
        self.weapon().map_or(0, |w| w.attack)
    }

    /// Defense of the equipped armor, or 0.
    pub fn total_defense(&self) -> u32 {
        self.armor().map_or(0, |a| a.defense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::ItemId;

    fn gear(id: u32, kind: &str, attack: u32, defense: u32) -> Item {
        Item::new(ItemId(id), format!("Gear {id}"), kind)
            .with_attack(attack)
            .with_defense(defense)
    }

    #[test]
    fn rejects_absent_item() {
        let mut manager = EquipmentManager::default();
        assert_eq!(manager.equip_item(None), ItemOutcome::InvalidItem);
        assert_eq!(manager.equipment(), &Equipment::empty());
    }

    #[test]
    fn rejects_items_without_stats_regardless_of_type() {
        let mut manager = EquipmentManager::default();
        for kind in ["weapon", "armor", ""] {
            let outcome = manager.equip_item(Some(&gear(1, kind, 0, 0)));
            assert_eq!(outcome, ItemOutcome::InvalidSlot(SlotRejection::NoEquipStats));
        }
        assert!(manager.weapon().is_none());
        assert!(manager.armor().is_none());
    }

    #[test]
    fn equal_stats_without_type_go_to_armor() {
        let mut manager = EquipmentManager::default();
        let outcome = manager.equip_item(Some(&gear(1, "", 5, 5)));
        assert!(matches!(outcome, ItemOutcome::Equipped { slot: EquipSlot::Armor, .. }));
        assert_eq!(outcome.to_string(), "Gear 1 equipped as armor.");
    }

    #[test]
    fn higher_attack_without_type_goes_to_weapon() {
        let mut manager = EquipmentManager::default();
        let outcome = manager.equip_item(Some(&gear(1, "", 6, 5)));
        assert!(matches!(outcome, ItemOutcome::Equipped { slot: EquipSlot::Weapon, .. }));
        assert_eq!(manager.total_attack(), 6);
        assert_eq!(manager.total_defense(), 0);
    }

    #[test]
    fn declared_type_overrides_stats() {
        assert_eq!(slot_for(&gear(1, " WEAPON ", 0, 9)), Ok(EquipSlot::Weapon));
        assert_eq!(slot_for(&gear(2, "Armor", 9, 1)), Ok(EquipSlot::Armor));
        assert_eq!(slot_for(&gear(3, "ring", 1, 9)), Ok(EquipSlot::Armor));
        assert_eq!(slot_for(&gear(4, "ring", 9, 1)), Ok(EquipSlot::Weapon));
    }

    #[test]
    fn equipping_replaces_previous_occupant() {
        let mut manager = EquipmentManager::default();
        manager.equip_item(Some(&gear(1, "weapon", 4, 0)));
        manager.equip_item(Some(&gear(2, "weapon", 9, 0)));
        assert_eq!(manager.weapon().map(|w| w.id), Some(ItemId(2)));
        assert_eq!(manager.total_attack(), 9);
    }

    #[test]
    fn unequip_clears_matching_slots_only() {
        let sword = gear(1, "weapon", 7, 0);
        let plate = gear(2, "armor", 0, 6);
        let mut manager = EquipmentManager::new(Some(
            Equipment::builder().weapon(sword.clone()).armor(plate.clone()).build(),
        ));

        manager.unequip_item(Some(&gear(99, "weapon", 1, 0)));
        manager.unequip_item(None);
        assert!(manager.is_equipped(&sword));
        assert!(manager.is_equipped(&plate));

        manager.unequip_item(Some(&sword));
        assert_eq!(manager.total_attack(), 0);
        assert_eq!(manager.total_defense(), 6);
    }

    #[test]
    fn unequip_clears_both_slots_when_ids_collide() {
        let mut manager = EquipmentManager::new(Some(
            Equipment::builder()
                .weapon(gear(5, "weapon", 3, 0))
                .armor(gear(5, "armor", 0, 3))
                .build(),
        ));
        manager.unequip_item(Some(&gear(5, "", 1, 1)));
        assert_eq!(manager.equipment(), &Equipment::empty());
    }

    #[test]
    fn slot_names_parse_case_insensitively() {
        assert_eq!("WEAPON".parse::<EquipSlot>().unwrap(), EquipSlot::Weapon);
        assert_eq!(EquipSlot::Armor.to_string(), "armor");
    }
}
