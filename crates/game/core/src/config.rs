use crate::amount::Amount;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Carrying capacity given to players that do not set their own.
    pub max_weight: Amount,

    /// Number of world items listed when browsing without a search term.
    pub world_sample_size: usize,
}

impl GameConfig {
    pub const DEFAULT_MAX_WEIGHT: Amount = Amount::from_units(100);
    pub const DEFAULT_WORLD_SAMPLE_SIZE: usize = 50;

    pub fn new() -> Self {
        Self {
            max_weight: Self::DEFAULT_MAX_WEIGHT,
            world_sample_size: Self::DEFAULT_WORLD_SAMPLE_SIZE,
        }
    }

    pub fn with_max_weight(max_weight: Amount) -> Self {
        Self {
            max_weight,
            ..Self::new()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
