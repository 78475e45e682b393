use crate::cart_actor::{CartCommand, CartError, CartReply};
use crate::clients::actor_client::ActorClient;
use crate::framework::StateClient;
use crate::model::{Cart, ItemId, Money};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Cart actor.
///
/// This is the handle the storefront holds instead of a global cart. Clone
/// it freely; every clone talks to the same cart.
#[derive(Clone)]
pub struct CartClient {
    inner: StateClient<Cart>,
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &StateClient<Cart> {
        &self.inner
    }
}

fn unexpected(reply: CartReply) -> CartError {
    CartError::UnexpectedReply(format!("{:?}", reply))
}

impl CartClient {
    pub fn new(inner: StateClient<Cart>) -> Self {
        Self { inner }
    }

    /// Adds one of `id`. Returns the line's new quantity.
    #[instrument(skip(self))]
    pub async fn add_item(&self, id: ItemId) -> Result<u32, CartError> {
        debug!("Sending request");
        match self.inner.send(CartCommand::Add(id)).await? {
            CartReply::Quantity(Some(quantity)) => Ok(quantity),
            other => Err(unexpected(other)),
        }
    }

    /// Adds `id` with quantity 1 unless it is already in the cart.
    ///
    /// Returns `Some(1)` when added, `None` when a line already existed.
    #[instrument(skip(self))]
    pub async fn add_if_absent(&self, id: ItemId) -> Result<Option<u32>, CartError> {
        debug!("Sending request");
        match self.inner.send(CartCommand::AddIfAbsent(id)).await? {
            CartReply::Quantity(Some(quantity)) => Ok(Some(quantity)),
            CartReply::AlreadyPresent => Ok(None),
            other => Err(unexpected(other)),
        }
    }

    /// Deletes the line for `id`. Returns whether a line was removed.
    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: ItemId) -> Result<bool, CartError> {
        debug!("Sending request");
        match self.inner.send(CartCommand::Remove(id)).await? {
            CartReply::Removed(removed) => Ok(removed),
            other => Err(unexpected(other)),
        }
    }

    /// Adds `delta` to the quantity of `id`.
    ///
    /// Returns the new quantity, or `None` when the line is gone.
    #[instrument(skip(self))]
    pub async fn update_quantity(&self, id: ItemId, delta: i64) -> Result<Option<u32>, CartError> {
        debug!("Sending request");
        match self.inner.send(CartCommand::UpdateQuantity { id, delta }).await? {
            CartReply::Quantity(quantity) => Ok(quantity),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn is_in_cart(&self, id: ItemId) -> Result<bool, CartError> {
        match self.inner.send(CartCommand::IsInCart(id)).await? {
            CartReply::Present(present) => Ok(present),
            other => Err(unexpected(other)),
        }
    }

    pub async fn total_items(&self) -> Result<u64, CartError> {
        match self.inner.send(CartCommand::TotalItems).await? {
            CartReply::Items(items) => Ok(items),
            other => Err(unexpected(other)),
        }
    }

    pub async fn total_amount(&self) -> Result<Money, CartError> {
        match self.inner.send(CartCommand::TotalAmount).await? {
            CartReply::Amount(amount) => Ok(amount),
            other => Err(unexpected(other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<usize, CartError> {
        debug!("Sending request");
        match self.inner.send(CartCommand::Clear).await? {
            CartReply::Cleared(dropped) => Ok(dropped),
            other => Err(unexpected(other)),
        }
    }
}
