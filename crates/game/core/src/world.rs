//! Read-only access to the items that exist in the game world.

use crate::item::{Item, ItemId};

/// Supplies world items to the core.
///
/// The core never mutates world items; adding one to a player copies it into
/// the inventory through the normal capacity check.
pub trait ItemSource {
    /// Looks up a world item by id.
    fn find(&self, id: ItemId) -> Option<Item>;

    /// Items whose name contains `name_part`, ignoring case.
    fn search(&self, name_part: &str) -> Vec<Item>;
}

impl ItemSource for [Item] {
    fn find(&self, id: ItemId) -> Option<Item> {
        self.iter().find(|item| item.id == id).cloned()
    }

    /// A blank query returns every item.
    fn search(&self, name_part: &str) -> Vec<Item> {
        let name_part = name_part.trim();
        self.iter()
            .filter(|item| name_part.is_empty() || item.name_contains(name_part))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_source_finds_and_searches() {
        let world = [
            Item::new(ItemId(1), "Short Bow", "weapon"),
            Item::new(ItemId(2), "Long Bow", "weapon"),
            Item::new(ItemId(3), "Bowl", "misc"),
        ];

        assert_eq!(world.find(ItemId(2)).map(|i| i.name), Some("Long Bow".into()));
        assert!(world.find(ItemId(9)).is_none());
        assert_eq!(world.search(" BOW ").len(), 3);
        assert_eq!(world.search("long").len(), 1);
        assert_eq!(world.search("").len(), 3);
    }
}
