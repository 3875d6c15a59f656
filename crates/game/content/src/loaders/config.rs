//! Game configuration loader.

use std::path::Path;

use rpg_core::GameConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for game configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`GameConfig::default`].
    pub fn load(path: &Path) -> LoadResult<GameConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<GameConfig> {
        let config: GameConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        if config.max_weight.is_negative() {
            anyhow::bail!("max_weight must not be negative (got {})", config.max_weight);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rpg_core::Amount;

    #[test]
    fn parses_decimal_capacity() {
        let config = ConfigLoader::parse("max_weight = 75.5\nworld_sample_size = 10\n").unwrap();
        assert_eq!(config.max_weight, Amount::from_hundredths(7550));
        assert_eq!(config.world_sample_size, 10);
    }

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(ConfigLoader::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn rejects_negative_capacity() {
        assert!(ConfigLoader::parse("max_weight = -1").is_err());
    }
}
