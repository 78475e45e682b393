//! The shopping cart.
//!
//! A cart is an ordered list of [`CartLine`]s keyed by [`ItemId`]. Lines keep
//! insertion order for display. A line never sits at quantity zero: any
//! change that would bring it to zero or below removes it.
//!
//! # Actor Framework
//! [`Cart`] implements the [`ActorState`](crate::framework::ActorState) trait,
//! allowing it to be owned by a [`StateActor`](crate::framework::StateActor).
//!
//! See [`impl ActorState for Cart`](#impl-ActorState-for-Cart) for the command set
//! ([`CartCommand`](crate::cart_actor::CartCommand)).

use crate::model::{CatalogItem, Currency, ItemId, Money};
use serde::{Deserialize, Serialize};

/// One catalog item plus the quantity the customer wants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: CatalogItem,
    pub quantity: u32,
}

impl CartLine {
    pub fn id(&self) -> &ItemId {
        &self.item.id
    }

    /// Price times quantity.
    pub fn subtotal(&self) -> Money {
        self.item.price.times(self.quantity)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &ItemId) -> Option<usize> {
        self.lines.iter().position(|line| &line.item.id == id)
    }

    /// Adds one of `item`. Returns the line's new quantity.
    ///
    /// An existing line is incremented; otherwise a new line with quantity 1
    /// is appended.
    pub fn add_item(&mut self, item: CatalogItem) -> u32 {
        match self.position(&item.id) {
            Some(pos) => {
                let line = &mut self.lines[pos];
                line.quantity = line.quantity.saturating_add(1);
                line.quantity
            }
            None => {
                self.lines.push(CartLine { item, quantity: 1 });
                1
            }
        }
    }

    /// Appends a line for `item` only if none exists.
    ///
    /// Returns `true` when a new line (quantity 1) was added.
    pub fn add_if_absent(&mut self, item: CatalogItem) -> bool {
        if self.is_in_cart(&item.id) {
            return false;
        }
        self.lines.push(CartLine { item, quantity: 1 });
        true
    }

    /// Deletes the line for `id`. Returns the removed line, if any.
    pub fn remove_item(&mut self, id: &ItemId) -> Option<CartLine> {
        self.position(id).map(|pos| self.lines.remove(pos))
    }

    /// Adds `delta` to the quantity of `id`.
    ///
    /// Returns the new quantity, or `None` if the line was removed (result
    /// ≤ 0) or was never there.
    pub fn update_quantity(&mut self, id: &ItemId, delta: i64) -> Option<u32> {
        let pos = self.position(id)?;
        let next = i64::from(self.lines[pos].quantity).saturating_add(delta);
        if next <= 0 {
            self.lines.remove(pos);
            return None;
        }
        let quantity = u32::try_from(next).unwrap_or(u32::MAX);
        self.lines[pos].quantity = quantity;
        Some(quantity)
    }

    pub fn is_in_cart(&self, id: &ItemId) -> bool {
        self.position(id).is_some()
    }

    pub fn quantity_of(&self, id: &ItemId) -> u32 {
        self.position(id).map_or(0, |pos| self.lines[pos].quantity)
    }

    /// Sum of quantities across all lines.
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of line subtotals. Zero for an empty cart.
    pub fn total_amount(&self) -> Money {
        self.lines
            .iter()
            .map(CartLine::subtotal)
            .fold(Money::zero(self.currency()), |acc, m| acc + m)
    }

    fn currency(&self) -> Currency {
        self.lines
            .first()
            .map(|line| line.item.price.currency())
            .unwrap_or_default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }
}
