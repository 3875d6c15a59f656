//! Inventory, equipment and item-usage rules for the console RPG.
//!
//! `rpg-core` holds the rules only. Content loading lives in `rpg-content`
//! and the console menu in `rpg-client`; both drive the core through
//! [`Player`], which coordinates an [`InventoryManager`] and an
//! [`EquipmentManager`].
pub mod amount;
pub mod config;
pub mod equipment;
pub mod error;
pub mod inventory;
pub mod item;
pub mod outcome;
pub mod player;
pub mod usage;
pub mod world;

pub use amount::{Amount, ParseAmountError};
pub use config::GameConfig;
pub use equipment::{EquipSlot, Equipment, EquipmentBuilder, EquipmentManager, slot_for};
pub use error::CoreError;
pub use inventory::{Inventory, InventoryManager, ItemGroup, Selection};
pub use item::{Item, ItemId};
pub use outcome::{ItemOutcome, NotFoundReason, SlotRejection};
pub use player::{Player, PlayerId};
pub use usage::{CONSUMABLE_KIND, ConsumableEffect, ItemUsageService, NoEffect};
pub use world::ItemSource;
