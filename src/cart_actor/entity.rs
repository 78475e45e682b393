//! ActorState implementation for the Cart.
//!
//! The catalog is the actor's context: `Add` carries only an [`ItemId`] and
//! the full item is looked up here, so a cart line always matches the menu.
//!
//! See the trait implementation on [`Cart`] for method documentation.

use super::commands::{CartCommand, CartReply};
use crate::framework::ActorState;
use crate::model::{Cart, Catalog};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

#[async_trait]
impl ActorState for Cart {
    type Command = CartCommand;
    type Reply = CartReply;
    type Context = Arc<Catalog>;

    /// Handles cart commands.
    ///
    /// # Commands
    /// - `Add`: Resolves the id in the catalog, then increments or inserts
    /// - `AddIfAbsent`: Same lookup, but inserts only; an existing line is untouched
    /// - `Remove` / `UpdateQuantity`: Mutate an existing line, no-op if absent
    /// - `IsInCart` / `TotalItems` / `TotalAmount`: Read-only queries
    /// - `Clear`: Drops every line
    async fn handle(&mut self, command: CartCommand, catalog: &Arc<Catalog>) -> Result<CartReply, String> {
        match command {
            CartCommand::Add(id) => {
                let item = catalog.require(&id).map_err(|e| e.to_string())?;
                let quantity = self.add_item(item.clone());
                info!(item_id = %id, quantity, lines = self.len(), "Added to cart");
                Ok(CartReply::Quantity(Some(quantity)))
            }
            CartCommand::AddIfAbsent(id) => {
                let item = catalog.require(&id).map_err(|e| e.to_string())?;
                if !self.add_if_absent(item.clone()) {
                    return Ok(CartReply::AlreadyPresent);
                }
                info!(item_id = %id, quantity = 1, lines = self.len(), "Added to cart");
                Ok(CartReply::Quantity(Some(1)))
            }
            CartCommand::Remove(id) => {
                let removed = self.remove_item(&id).is_some();
                if removed {
                    info!(item_id = %id, lines = self.len(), "Removed from cart");
                }
                Ok(CartReply::Removed(removed))
            }
            CartCommand::UpdateQuantity { id, delta } => {
                let quantity = self.update_quantity(&id, delta);
                info!(item_id = %id, delta, ?quantity, "Quantity updated");
                Ok(CartReply::Quantity(quantity))
            }
            CartCommand::IsInCart(id) => Ok(CartReply::Present(self.is_in_cart(&id))),
            CartCommand::TotalItems => Ok(CartReply::Items(self.total_items())),
            CartCommand::TotalAmount => Ok(CartReply::Amount(self.total_amount())),
            CartCommand::Clear => {
                let dropped = self.len();
                self.clear();
                Ok(CartReply::Cleared(dropped))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Currency, ItemId, Money};

    fn catalog() -> Arc<Catalog> {
        Arc::new(Catalog::bakery().unwrap())
    }

    #[tokio::test]
    async fn add_resolves_items_from_catalog() {
        let catalog = catalog();
        let mut cart = Cart::new();

        let reply = cart.handle(CartCommand::Add("nutella-single".into()), &catalog).await.unwrap();
        assert_eq!(reply, CartReply::Quantity(Some(1)));
        assert_eq!(cart.lines()[0].item.description, "Cookie loaded with Nutella goodness");

        let reply = cart.handle(CartCommand::TotalAmount, &catalog).await.unwrap();
        assert_eq!(reply, CartReply::Amount(Money::from_major(109, Currency::Inr)));
    }

    #[tokio::test]
    async fn add_if_absent_is_a_single_step() {
        let catalog = catalog();
        let mut cart = Cart::new();

        let first = cart.handle(CartCommand::AddIfAbsent("brookie-single".into()), &catalog).await.unwrap();
        let second = cart.handle(CartCommand::AddIfAbsent("brookie-single".into()), &catalog).await.unwrap();
        assert_eq!(first, CartReply::Quantity(Some(1)));
        assert_eq!(second, CartReply::AlreadyPresent);
        assert_eq!(cart.total_items(), 1);

        let err = cart.handle(CartCommand::AddIfAbsent("croissant".into()), &catalog).await.unwrap_err();
        assert_eq!(err, "Unknown catalog item: croissant");
    }

    #[tokio::test]
    async fn unknown_item_leaves_cart_untouched() {
        let catalog = catalog();
        let mut cart = Cart::new();

        let err = cart.handle(CartCommand::Add(ItemId::from("croissant")), &catalog).await.unwrap_err();
        assert_eq!(err, "Unknown catalog item: croissant");
        assert!(cart.is_empty());
    }

    #[tokio::test]
    async fn clear_reports_dropped_lines() {
        let catalog = catalog();
        let mut cart = Cart::new();
        cart.handle(CartCommand::Add("brookie-single".into()), &catalog).await.unwrap();
        cart.handle(CartCommand::Add("brookie-party".into()), &catalog).await.unwrap();

        let reply = cart.handle(CartCommand::Clear, &catalog).await.unwrap();
        assert_eq!(reply, CartReply::Cleared(2));
        assert_eq!(
            cart.handle(CartCommand::TotalItems, &catalog).await.unwrap(),
            CartReply::Items(0)
        );
    }
}
