//! Error infrastructure for rpg-core.
//!
//! Expected rejections (unknown item, capacity exceeded, nothing to equip)
//! are not errors here; they are reported as [`crate::ItemOutcome`] values.
//! `Err` is reserved for setup mistakes such as building a manager without
//! its backing store.

/// Errors raised while wiring the inventory subsystem together.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// An inventory manager was requested without an inventory to manage.
    #[error("inventory manager requires an inventory")]
    MissingInventory,
}
