//! Tagged results for inventory, equipment and usage operations.
//!
//! Callers branch on the variant; `Display` renders the player-facing text.

use core::fmt;

use crate::equipment::EquipSlot;

/// Result of a player-facing item operation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemOutcome {
    /// Item placed in an equipment slot.
    Equipped { name: String, slot: EquipSlot },

    /// Consumable used up and removed from the inventory.
    Consumed { name: String },

    /// World item added to the inventory.
    Added { name: String },

    /// No item matched the request.
    NotFound(NotFoundReason),

    /// Adding the item would push total weight past the player's capacity.
    OutOfCapacity,

    /// The item cannot occupy any equipment slot.
    InvalidSlot(SlotRejection),

    /// The item is already in the slot it would be equipped to.
    AlreadyEquipped { name: String, slot: EquipSlot },

    /// No item was supplied.
    InvalidItem,

    /// The item exists but is not a consumable.
    NotConsumable { name: String },
}

/// Where a lookup came up empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NotFoundReason {
    /// Name did not resolve in the player's inventory.
    Inventory,
    /// Id did not resolve in the world catalog.
    World,
    /// The item vanished between lookup and removal.
    RemovalFailed,
}

/// Why an item was refused by the equipment slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SlotRejection {
    /// Attack and defense are both zero.
    NoEquipStats,
    /// No slot rule matched.
    Undetermined,
}

impl ItemOutcome {
    /// True for outcomes that changed player state as asked.
    pub fn is_success(&self) -> bool {
        matches!(
            self,
            Self::Equipped { .. } | Self::Consumed { .. } | Self::Added { .. }
        )
    }

    /// Stable tag for log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Equipped { .. } => "equipped",
            Self::Consumed { .. } => "consumed",
            Self::Added { .. } => "added",
            Self::NotFound(_) => "not_found",
            Self::OutOfCapacity => "out_of_capacity",
            Self::InvalidSlot(_) => "invalid_slot",
            Self::AlreadyEquipped { .. } => "already_equipped",
            Self::InvalidItem => "invalid_item",
            Self::NotConsumable { .. } => "not_consumable",
        }
    }
}

impl fmt::Display for ItemOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equipped { name, slot } => write!(f, "{} equipped as {}.", name, slot),
            Self::Consumed { name } => write!(f, "{} consumed.", name),
            Self::Added { .. } => f.write_str("Item added to inventory."),
            Self::NotFound(NotFoundReason::Inventory) => f.write_str("Item not found."),
            Self::NotFound(NotFoundReason::World) => f.write_str("Item not found in the world."),
            Self::NotFound(NotFoundReason::RemovalFailed) => {
                f.write_str("Failed to remove item from inventory.")
            }
            Self::OutOfCapacity => f.write_str("Cannot add item; it would exceed MaxWeight."),
            Self::InvalidSlot(SlotRejection::NoEquipStats) => {
                f.write_str("Item has no equip stats.")
            }
            Self::InvalidSlot(SlotRejection::Undetermined) => {
                f.write_str("Unable to determine equip slot for item.")
            }
            Self::AlreadyEquipped { name, slot } => {
                write!(f, "{} is already equipped as {}.", name, slot)
            }
            Self::InvalidItem => f.write_str("Item is null."),
            Self::NotConsumable { name } => write!(f, "{} cannot be consumed.", name),
        }
    }
}
