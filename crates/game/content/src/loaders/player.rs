//! Starting player loader.

use std::path::Path;

use rpg_core::{GameConfig, Item, ItemId, Player, PlayerId};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Player definition as written in `player.ron`.
///
/// Items are referenced by world catalog id and copied into the inventory
/// in the order listed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSeed {
    pub id: PlayerId,
    pub name: String,
    #[serde(default = "default_health")]
    pub health: i32,
    #[serde(default)]
    pub experience: u32,
    /// Overrides `GameConfig::max_weight` for this player.
    #[serde(default)]
    pub max_weight: Option<rpg_core::Amount>,
    #[serde(default)]
    pub items: Vec<ItemId>,
    /// Inventory items to equip after loading.
    #[serde(default)]
    pub equipped: Vec<ItemId>,
}

fn default_health() -> i32 {
    100
}

impl PlayerSeed {
    /// Builds a player from this seed.
    ///
    /// Unknown item ids are an error. Items that would exceed capacity are
    /// skipped with a warning, as are equip requests the slot rules reject.
    pub fn build(&self, world: &[Item], config: &GameConfig) -> LoadResult<Player> {
        let max_weight = self.max_weight.unwrap_or(config.max_weight);
        if max_weight.is_negative() {
            anyhow::bail!("max_weight must not be negative (got {})", max_weight);
        }
        let mut player = Player::new(self.id, self.name.clone())
            .with_health(self.health)
            .with_max_weight(max_weight);
        player.experience = self.experience;

        for &id in &self.items {
            let item = lookup(world, id)?;
            let name = item.name.clone();
            if !player.add_item(item) {
                tracing::warn!(item = %name, %id, "starting item exceeds capacity, skipped");
            }
        }

        for &id in &self.equipped {
            let name = lookup(world, id)?.name;
            if !player.items().iter().any(|item| item.id == id) {
                anyhow::bail!("Equipped item {} ({}) is not in the starting inventory", id, name);
            }
            let outcome = player.equip_item_by_id(id);
            if !outcome.is_success() {
                tracing::warn!(item = %name, %outcome, "starting equipment rejected");
            }
        }

        tracing::debug!(
            player = %player.name,
            items = player.items().len(),
            weight = %player.total_weight(),
            "player built from seed"
        );
        Ok(player)
    }
}

fn lookup(world: &[Item], id: ItemId) -> LoadResult<Item> {
    world
        .iter()
        .find(|item| item.id == id)
        .cloned()
        .ok_or_else(|| anyhow::anyhow!("Unknown item id {} in player seed", id))
}

/// Loader for the starting player from RON files.
pub struct PlayerLoader;

impl PlayerLoader {
    pub fn load(path: &Path) -> LoadResult<PlayerSeed> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<PlayerSeed> {
        ron::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse player RON: {}", e))
    }
}
