//! Consumable item usage.

use crate::inventory::InventoryManager;
use crate::item::Item;
use crate::outcome::{ItemOutcome, NotFoundReason};

/// Normalized type marking an item as consumable.
pub const CONSUMABLE_KIND: &str = "potion";

/// Hook run after a consumable has been removed from the inventory.
///
/// Potions carry no numeric effect yet; implement this to attach one
/// (healing, buffs) without changing the removal rules.
pub trait ConsumableEffect {
    fn apply(&self, item: &Item);
}

/// Effect that does nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoEffect;

impl ConsumableEffect for NoEffect {
    fn apply(&self, _item: &Item) {}
}

/// Stateless policy for consuming items.
#[derive(Clone, Debug, Default)]
pub struct ItemUsageService<E = NoEffect> {
    effect: E,
}

impl ItemUsageService<NoEffect> {
    pub fn new() -> Self {
        Self { effect: NoEffect }
    }
}

impl<E: ConsumableEffect> ItemUsageService<E> {
    pub fn with_effect(effect: E) -> Self {
        Self { effect }
    }

    /// Consumes `item` if it is a potion, removing it by name from `inventory`.
    pub fn use_item(&self, item: Option<&Item>, inventory: &mut InventoryManager) -> ItemOutcome {
        self.consume(item, inventory, |inventory, item| inventory.remove_item(&item.name))
    }

    /// Like [`ItemUsageService::use_item`], but removes the entry with `item`'s id
    /// so a same-named sibling is left alone.
    pub fn use_item_by_id(
        &self,
        item: Option<&Item>,
        inventory: &mut InventoryManager,
    ) -> ItemOutcome {
        self.consume(item, inventory, |inventory, item| {
            inventory.remove_item_by_id(item.id)
        })
    }

    fn consume(
        &self,
        item: Option<&Item>,
        inventory: &mut InventoryManager,
        remove: impl FnOnce(&mut InventoryManager, &Item) -> bool,
    ) -> ItemOutcome {
        let Some(item) = item else {
            return ItemOutcome::InvalidItem;
        };

        if !self.is_consumable(Some(item)) {
            return ItemOutcome::NotConsumable {
                name: item.name.clone(),
            };
        }

        if !remove(inventory, item) {
            tracing::warn!(item = %item.name, "consumable vanished before removal");
            return ItemOutcome::NotFound(NotFoundReason::RemovalFailed);
        }

        self.effect.apply(item);
        tracing::debug!(item = %item.name, id = %item.id, "item consumed");
        ItemOutcome::Consumed {
            name: item.name.clone(),
        }
    }

    pub fn is_consumable(&self, item: Option<&Item>) -> bool {
        item.is_some_and(|item| item.normalized_kind() == CONSUMABLE_KIND)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::amount::Amount;
    use crate::inventory::Inventory;
    use crate::item::ItemId;
    use crate::player::PlayerId;

    fn inventory_with(items: Vec<Item>) -> InventoryManager {
        InventoryManager::new(
            Some(Inventory::with_items(PlayerId(1), items)),
            Amount::from_units(100),
        )
        .unwrap()
    }

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl ConsumableEffect for &Recorder {
        fn apply(&self, item: &Item) {
            self.0.borrow_mut().push(item.name.clone());
        }
    }

    #[test]
    fn consumes_potions() {
        let potion = Item::new(ItemId(1), "Healing Potion", " Potion ");
        let mut inventory = inventory_with(vec![potion.clone()]);

        let outcome = ItemUsageService::new().use_item(Some(&potion), &mut inventory);
        assert_eq!(outcome.to_string(), "Healing Potion consumed.");
        assert!(outcome.is_success());
        assert!(inventory.is_empty());
    }

    #[test]
    fn refuses_non_consumables_without_mutation() {
        let axe = Item::new(ItemId(2), "Axe", "weapon").with_attack(5);
        let mut inventory = inventory_with(vec![axe.clone()]);

        let outcome = ItemUsageService::new().use_item(Some(&axe), &mut inventory);
        assert_eq!(outcome, ItemOutcome::NotConsumable { name: "Axe".into() });
        assert_eq!(outcome.to_string(), "Axe cannot be consumed.");
        assert_eq!(inventory.len(), 1);
    }

    #[test]
    fn reports_absent_item() {
        let mut inventory = inventory_with(Vec::new());
        let outcome = ItemUsageService::new().use_item(None, &mut inventory);
        assert_eq!(outcome.to_string(), "Item is null.");
    }

    #[test]
    fn reports_removal_failure() {
        let ghost = Item::new(ItemId(3), "Ghost Potion", "potion");
        let mut inventory = inventory_with(Vec::new());

        let outcome = ItemUsageService::new().use_item(Some(&ghost), &mut inventory);
        assert_eq!(outcome, ItemOutcome::NotFound(NotFoundReason::RemovalFailed));
        assert_eq!(outcome.to_string(), "Failed to remove item from inventory.");
    }

    #[test]
    fn effect_runs_only_after_successful_consumption() {
        let recorder = Recorder::default();
        let service = ItemUsageService::with_effect(&recorder);
        let potion = Item::new(ItemId(4), "Elixir", "potion");
        let bread = Item::new(ItemId(5), "Bread", "food");
        let mut inventory = inventory_with(vec![potion.clone(), bread.clone()]);

        service.use_item(Some(&bread), &mut inventory);
        service.use_item(Some(&potion), &mut inventory);
        service.use_item(Some(&potion), &mut inventory);

        assert_eq!(*recorder.0.borrow(), vec!["Elixir".to_string()]);
    }

    #[test]
    fn consuming_by_id_spares_same_named_sibling() {
        let cheap = Item::new(ItemId(6), "Tonic", "potion");
        let rare = Item::new(ItemId(7), "Tonic", "potion");
        let mut inventory = inventory_with(vec![cheap.clone(), rare.clone()]);

        let outcome = ItemUsageService::new().use_item_by_id(Some(&rare), &mut inventory);
        assert!(outcome.is_success());
        assert_eq!(inventory.items(), &[cheap]);
    }

    #[test]
    fn consumable_check_normalizes_type() {
        let service = ItemUsageService::new();
        assert!(service.is_consumable(Some(&Item::new(ItemId(1), "p", "POTION"))));
        assert!(!service.is_consumable(Some(&Item::new(ItemId(2), "s", "scroll"))));
        assert!(!service.is_consumable(None));
    }
}
