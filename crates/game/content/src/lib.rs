//! Data-driven content definitions and loaders.
//!
//! This crate houses the world item catalog and provides loaders for RON/TOML data files:
//! - Item catalogs (data-driven via RON)
//! - Starting player (data-driven via RON)
//! - Game configuration (data-driven via TOML)
//!
//! All loaders use rpg-core types directly with serde for RON/TOML deserialization.

pub mod catalog;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use catalog::WorldCatalog;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, ItemCatalog, ItemLoader, LoadResult, PlayerLoader, PlayerSeed,
};
