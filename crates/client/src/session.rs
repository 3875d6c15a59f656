//! A running game: the loaded player and the world they can draw items from.

use rpg_content::WorldCatalog;
use rpg_core::{Item, ItemId, ItemOutcome, ItemSource, Player};

pub struct GameSession {
    player: Player,
    catalog: WorldCatalog,
}

impl GameSession {
    pub fn new(player: Player, catalog: WorldCatalog) -> Self {
        Self { player, catalog }
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn catalog(&self) -> &WorldCatalog {
        &self.catalog
    }

    /// World items matching `name_part`; a blank query yields the catalog sample.
    pub fn find_world_items(&self, name_part: &str) -> Vec<Item> {
        self.catalog.search(name_part)
    }

    /// Copies world item `id` into the player's inventory if it fits.
    pub fn try_add_item_by_id(&mut self, id: ItemId) -> ItemOutcome {
        self.player.add_world_item(id, &self.catalog)
    }
}
