//! Commands for the Cart actor.
//!
//! These are the cart operations the storefront can request. They are handled
//! by [`ActorState::handle`](crate::framework::ActorState::handle) on
//! [`Cart`](crate::model::Cart); see [`entity`](super::entity).

use crate::model::{ItemId, Money};

/// Operations on the customer's cart.
#[derive(Debug, Clone, PartialEq)]
pub enum CartCommand {
    /// Adds one of the catalog item, creating the line if needed.
    ///
    /// # Errors
    /// Fails if the id is not in the catalog.
    Add(ItemId),
    /// Adds the item with quantity 1 unless a line already exists.
    ///
    /// # Errors
    /// Fails if the id is not in the catalog.
    AddIfAbsent(ItemId),
    /// Deletes the line. No-op if absent.
    Remove(ItemId),
    /// Adds `delta` to the line's quantity, removing it at zero or below.
    UpdateQuantity { id: ItemId, delta: i64 },
    /// Checks whether a line exists.
    IsInCart(ItemId),
    /// Sum of quantities.
    TotalItems,
    /// Sum of line subtotals.
    TotalAmount,
    /// Empties the cart.
    Clear,
}

/// Results from CartCommands.
#[derive(Debug, Clone, PartialEq)]
pub enum CartReply {
    /// New line quantity; `None` when the line is gone or never existed.
    Quantity(Option<u32>),
    /// `AddIfAbsent` found an existing line and left it alone.
    AlreadyPresent,
    /// Whether `Remove` deleted a line.
    Removed(bool),
    /// Result of `IsInCart`.
    Present(bool),
    /// Result of `TotalItems`.
    Items(u64),
    /// Result of `TotalAmount`.
    Amount(Money),
    /// Number of lines dropped by `Clear`.
    Cleared(usize),
}
