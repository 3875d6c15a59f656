//! Content factory for building the world and the starting player from data files.

use std::path::{Path, PathBuf};

use rpg_core::{GameConfig, Item, Player};

use crate::catalog::WorldCatalog;
use crate::loaders::{ConfigLoader, ItemLoader, LoadResult, PlayerLoader, PlayerSeed};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── items.ron
/// └── player.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    ///
    /// A missing file yields the default configuration.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(GameConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load item catalog from `items.ron`.
    pub fn load_items(&self) -> LoadResult<Vec<Item>> {
        let path = self.data_dir.join("items.ron");
        ItemLoader::load(&path)
    }

    /// Load the starting player definition from `player.ron`.
    pub fn load_player_seed(&self) -> LoadResult<PlayerSeed> {
        let path = self.data_dir.join("player.ron");
        PlayerLoader::load(&path)
    }

    /// Load the world catalog, capped for browsing by `config.world_sample_size`.
    pub fn load_catalog(&self, config: &GameConfig) -> LoadResult<WorldCatalog> {
        let items = self.load_items()?;
        Ok(WorldCatalog::new(items).with_sample_size(config.world_sample_size))
    }

    /// Load the starting player and resolve its items against `catalog`.
    pub fn load_player(&self, catalog: &WorldCatalog, config: &GameConfig) -> LoadResult<Player> {
        self.load_player_seed()?.build(catalog.items(), config)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
