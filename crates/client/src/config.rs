//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

use rpg_core::Amount;

/// Console client configuration.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Directory holding `config.toml`, `items.ron` and `player.ron`.
    /// Defaults to [`crate::dirs::data_dir`].
    pub data_dir: PathBuf,
    /// Log session name; a timestamped one is generated when absent.
    pub session_id: Option<String>,
    /// Overrides the loaded player's carrying capacity.
    pub max_weight: Option<Amount>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: crate::dirs::data_dir(),
            session_id: None,
            max_weight: None,
        }
    }
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RPG_DATA_DIR` - content directory
    /// - `RPG_SESSION_ID` - log session name
    /// - `RPG_MAX_WEIGHT` - carrying capacity override (e.g. `120.5`)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("RPG_DATA_DIR") {
            config.data_dir = dir;
        }

        config.session_id = read_env::<String>("RPG_SESSION_ID").filter(|id| !id.trim().is_empty());

        // Negative capacities are ignored
        config.max_weight = read_env::<Amount>("RPG_MAX_WEIGHT").filter(|w| !w.is_negative());

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
