//! Content loaders for reading game data from files.
//!
//! Each loader turns one RON/TOML file into rpg-core values. Loaders only
//! parse and validate; they never touch a player.

pub mod config;
pub mod factory;
pub mod item;
pub mod player;

pub use config::ConfigLoader;
pub use factory::ContentFactory;
pub use item::{ItemCatalog, ItemLoader};
pub use player::{PlayerLoader, PlayerSeed};

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
