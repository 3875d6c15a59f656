//! The world's item catalog.

use rpg_core::{GameConfig, Item, ItemId, ItemSource};

/// Every item that exists in the game world, in catalog order.
///
/// Browsing with a blank search term lists only the first `sample_size`
/// items so a large catalog does not flood the console.
#[derive(Clone, Debug, Default)]
pub struct WorldCatalog {
    items: Vec<Item>,
    sample_size: usize,
}

impl WorldCatalog {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            items,
            sample_size: GameConfig::DEFAULT_WORLD_SAMPLE_SIZE,
        }
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemSource for WorldCatalog {
    fn find(&self, id: ItemId) -> Option<Item> {
        self.items.as_slice().find(id)
    }

    fn search(&self, name_part: &str) -> Vec<Item> {
        if name_part.trim().is_empty() {
            return self.items.iter().take(self.sample_size).cloned().collect();
        }
        self.items.as_slice().search(name_part)
    }
}
