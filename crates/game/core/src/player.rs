//! The player: owner of one inventory and one set of equipment.
//!
//! `Player` is the coordinating owner. It routes name-based requests to the
//! managers and keeps them consistent: an item leaving the inventory leaves
//! its equipment slot first.

use core::fmt;

use crate::amount::Amount;
use crate::config::GameConfig;
use crate::equipment::{Equipment, EquipmentManager, slot_for};
use crate::inventory::{Inventory, InventoryManager, ItemGroup, Selection};
use crate::item::{Item, ItemId};
use crate::outcome::{ItemOutcome, NotFoundReason};
use crate::usage::{ConsumableEffect, ItemUsageService};
use crate::world::ItemSource;

/// Player identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A player character.
///
/// The inventory and equipment managers are built on first access and then
/// reused for the lifetime of the player.
#[derive(Clone, Debug)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub experience: u32,
    pub health: i32,
    max_weight: Amount,
    inventory: Option<InventoryManager>,
    equipment: Option<EquipmentManager>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            experience: 0,
            health: 100,
            max_weight: GameConfig::DEFAULT_MAX_WEIGHT,
            inventory: None,
            equipment: None,
        }
    }

    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    pub fn with_max_weight(mut self, max_weight: Amount) -> Self {
        self.set_max_weight(max_weight);
        self
    }

    /// Attaches previously persisted inventory contents.
    ///
    /// Contents are taken as-is; capacity applies to later additions.
    pub fn with_inventory(mut self, inventory: Inventory) -> Self {
        self.inventory = Some(InventoryManager::from_inventory(inventory, self.max_weight));
        self
    }

    /// Attaches previously persisted equipment.
    pub fn with_equipment(mut self, equipment: Equipment) -> Self {
        self.equipment = Some(EquipmentManager::new(Some(equipment)));
        self
    }

    pub fn max_weight(&self) -> Amount {
        self.max_weight
    }

    pub fn set_max_weight(&mut self, max_weight: Amount) {
        self.max_weight = max_weight;
        if let Some(manager) = self.inventory.as_mut() {
            manager.set_max_weight(max_weight);
        }
    }

    /// The player's inventory manager, created empty on first access.
    pub fn inventory_manager(&mut self) -> &mut InventoryManager {
        let (id, max_weight) = (self.id, self.max_weight);
        self.inventory
            .get_or_insert_with(|| InventoryManager::from_inventory(Inventory::new(id), max_weight))
    }

    /// The player's equipment manager, created empty on first access.
    pub fn equipment_manager(&mut self) -> &mut EquipmentManager {
        self.equipment.get_or_insert_with(EquipmentManager::default)
    }

    /// Inventory contents, if the inventory has been created.
    pub fn inventory(&self) -> Option<&Inventory> {
        self.inventory.as_ref().map(InventoryManager::inventory)
    }

    /// Equipment state, if equipment has been created.
    pub fn equipment(&self) -> Option<&Equipment> {
        self.equipment.as_ref().map(EquipmentManager::equipment)
    }

    pub fn items(&self) -> &[Item] {
        self.inventory
            .as_ref()
            .map(InventoryManager::items)
            .unwrap_or_default()
    }

    pub fn total_weight(&self) -> Amount {
        self.inventory
            .as_ref()
            .map_or(Amount::ZERO, InventoryManager::total_weight)
    }

    pub fn can_add_item(&self, item: &Item) -> bool {
        match self.inventory.as_ref() {
            Some(manager) => manager.can_add_item(Some(item)),
            None => !item.weight.is_negative() && item.weight <= self.max_weight,
        }
    }

    pub fn total_attack(&self) -> u32 {
        self.equipment
            .as_ref()
            .map_or(0, EquipmentManager::total_attack)
    }

    pub fn total_defense(&self) -> u32 {
        self.equipment
            .as_ref()
            .map_or(0, EquipmentManager::total_defense)
    }

    /// Adds `item` if it fits. The caller reports weight rejections.
    pub fn add_item(&mut self, item: Item) -> bool {
        self.inventory_manager().add_item(Some(item))
    }

    /// Removes the first item named `name`, unequipping it beforehand.
    pub fn remove_item(&mut self, name: &str) -> bool {
        match self.find_item_by_name(name).cloned() {
            Some(item) => self.remove_resolved(&item),
            None => false,
        }
    }

    /// Removes the item with id `id`, unequipping it beforehand.
    pub fn remove_item_by_id(&mut self, id: ItemId) -> bool {
        match self.find_item_by_id(id).cloned() {
            Some(item) => self.remove_resolved(&item),
            None => false,
        }
    }

    /// Equips the first item named `name`.
    pub fn equip_item(&mut self, name: &str) -> ItemOutcome {
        match self.find_item_by_name(name).cloned() {
            Some(item) => self.equip_resolved(item),
            None => ItemOutcome::NotFound(NotFoundReason::Inventory),
        }
    }

    /// Equips the item with id `id`.
    pub fn equip_item_by_id(&mut self, id: ItemId) -> ItemOutcome {
        match self.find_item_by_id(id).cloned() {
            Some(item) => self.equip_resolved(item),
            None => ItemOutcome::NotFound(NotFoundReason::Inventory),
        }
    }

    /// Uses the first item named `name` with the default (effect-free) policy.
    pub fn use_item(&mut self, name: &str) -> ItemOutcome {
        self.use_item_with(name, &ItemUsageService::new())
    }

    /// Uses the first item named `name` with a caller-supplied policy.
    pub fn use_item_with<E: ConsumableEffect>(
        &mut self,
        name: &str,
        service: &ItemUsageService<E>,
    ) -> ItemOutcome {
        let Some(item) = self.find_item_by_name(name).cloned() else {
            return ItemOutcome::NotFound(NotFoundReason::Inventory);
        };

        if service.is_consumable(Some(&item)) {
            self.equipment_manager().unequip_item(Some(&item));
        }
        service.use_item(Some(&item), self.inventory_manager())
    }

    /// Uses the item with id `id` with the default (effect-free) policy.
    pub fn use_item_by_id(&mut self, id: ItemId) -> ItemOutcome {
        let Some(item) = self.find_item_by_id(id).cloned() else {
            return ItemOutcome::NotFound(NotFoundReason::Inventory);
        };

        let service = ItemUsageService::new();
        if service.is_consumable(Some(&item)) {
            self.equipment_manager().unequip_item(Some(&item));
        }
        service.use_item_by_id(Some(&item), self.inventory_manager())
    }

    fn remove_resolved(&mut self, item: &Item) -> bool {
        self.equipment_manager().unequip_item(Some(item));
        self.inventory_manager().remove_item_by_id(item.id)
    }

    fn equip_resolved(&mut self, item: Item) -> ItemOutcome {
        if let Ok(slot) = slot_for(&item) {
            let occupied = self
                .equipment
                .as_ref()
                .and_then(|manager| manager.equipment().slot(slot))
                .is_some_and(|current| current.id == item.id);
            if occupied {
                return ItemOutcome::AlreadyEquipped {
                    name: item.name,
                    slot,
                };
            }
        }

        self.equipment_manager().equip_item(Some(&item))
    }

    /// Adds the world item `id` to the inventory.
    pub fn add_world_item<S>(&mut self, id: ItemId, source: &S) -> ItemOutcome
    where
        S: ItemSource + ?Sized,
    {
        let Some(item) = source.find(id) else {
            return ItemOutcome::NotFound(NotFoundReason::World);
        };

        let name = item.name.clone();
        if !self.add_item(item) {
            tracing::warn!(
                player = %self.id,
                item = %name,
                total = %self.total_weight(),
                max = %self.max_weight,
                "world item exceeds carrying capacity"
            );
            return ItemOutcome::OutOfCapacity;
        }

        tracing::info!(player = %self.id, item = %name, %id, "world item added");
        ItemOutcome::Added { name }
    }

    pub fn find_item_by_name(&self, name: &str) -> Option<&Item> {
        self.inventory.as_ref()?.find_item_by_name(name)
    }

    pub fn find_item_by_id(&self, id: ItemId) -> Option<&Item> {
        self.inventory.as_ref()?.find_item_by_id(id)
    }

    pub fn search_items(&self, name_part: &str) -> Vec<Item> {
        self.inventory
            .as_ref()
            .map_or_else(Vec::new, |manager| manager.search_items(name_part))
    }

    pub fn select(&self, query: &str) -> Selection {
        self.inventory
            .as_ref()
            .map_or(Selection::None, |manager| manager.select(query))
    }

    pub fn list_items_by_type(&self) -> Vec<ItemGroup> {
        self.inventory
            .as_ref()
            .map_or_else(Vec::new, InventoryManager::list_items_by_type)
    }

    pub fn sort_by_name(&self) -> Vec<Item> {
        self.inventory
            .as_ref()
            .map_or_else(Vec::new, InventoryManager::sort_by_name)
    }

    pub fn sort_by_attack(&self) -> Vec<Item> {
        self.inventory
            .as_ref()
            .map_or_else(Vec::new, InventoryManager::sort_by_attack)
    }

    pub fn sort_by_defense(&self) -> Vec<Item> {
        self.inventory
            .as_ref()
            .map_or_else(Vec::new, InventoryManager::sort_by_defense)
    }
}
