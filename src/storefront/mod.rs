//! The presentation shell.
//!
//! [`Storefront`] turns customer clicks ([`ShopAction`]) into cart commands,
//! writes the order message to the clipboard, and renders the page from a
//! fresh cart snapshot. It owns no cart state itself; it holds a
//! [`CartClient`] handed to it by the [`lifecycle`](crate::lifecycle).

pub mod actions;
pub mod clipboard;
pub mod error;
pub mod render;
pub mod sections;

pub use actions::*;
pub use clipboard::*;
pub use error::*;
pub use sections::SectionId;

use crate::clients::{ActorClient, CartClient};
use crate::config::StorefrontConfig;
use crate::model::{Catalog, ItemId};
use crate::order::format_order_message_with;
use chrono::NaiveDateTime;
use render::PageContext;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Shown after a successful copy.
pub const COPIED_NOTICE: &str = "Order details copied to clipboard!";
/// Shown when there is nothing to copy.
pub const EMPTY_CART_NOTICE: &str = "Your cart is empty";

pub struct Storefront {
    config: Arc<StorefrontConfig>,
    catalog: Arc<Catalog>,
    cart: CartClient,
    clipboard: Arc<dyn Clipboard>,
}

impl Storefront {
    pub fn new(
        config: Arc<StorefrontConfig>,
        catalog: Arc<Catalog>,
        cart: CartClient,
        clipboard: Arc<dyn Clipboard>,
    ) -> Self {
        Self {
            config,
            catalog,
            cart,
            clipboard,
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartClient {
        &self.cart
    }

    /// Handles one customer action.
    #[instrument(skip(self))]
    pub async fn dispatch(&self, action: ShopAction) -> Result<ShopOutcome, ShopError> {
        match action {
            ShopAction::AddToCart(id) => self.add_to_cart(id).await,
            ShopAction::Increment(id) => self.change_quantity(id, 1).await,
            ShopAction::Decrement(id) => self.change_quantity(id, -1).await,
            ShopAction::Remove(id) => {
                let removed = self.cart.remove_item(id.clone()).await?;
                Ok(ShopOutcome::Removed { id, removed })
            }
            ShopAction::CopyOrder => Ok(ShopOutcome::Notice(self.copy_order_details().await?)),
            ShopAction::ScrollTo(anchor) => Ok(ShopOutcome::Scrolled(self.scroll_to(&anchor))),
        }
    }

    /// The menu button: adds the item once; pressing it again does nothing.
    ///
    /// # Errors
    /// [`ShopError::Catalog`] if the id is not on the menu.
    pub async fn add_to_cart(&self, id: ItemId) -> Result<ShopOutcome, ShopError> {
        self.catalog.require(&id)?;
        match self.cart.add_if_absent(id.clone()).await? {
            Some(quantity) => Ok(ShopOutcome::Added { id, quantity }),
            None => {
                debug!(item_id = %id, "Already in cart");
                Ok(ShopOutcome::AlreadyInCart(id))
            }
        }
    }

    async fn change_quantity(&self, id: ItemId, delta: i64) -> Result<ShopOutcome, ShopError> {
        let quantity = self.cart.update_quantity(id.clone(), delta).await?;
        Ok(ShopOutcome::Quantity { id, quantity })
    }

    /// The current order message, addressed with the configured greeting.
    pub async fn order_message(&self) -> Result<String, ShopError> {
        let cart = self.cart.snapshot().await?;
        Ok(format_order_message_with(&self.config.greeting_name, cart.lines()))
    }

    /// Writes the order message to the clipboard and reports the result.
    ///
    /// A clipboard failure is not an error here: it becomes a failure
    /// notice for the customer. Only cart communication errors propagate.
    #[instrument(skip(self))]
    pub async fn copy_order_details(&self) -> Result<Notice, ShopError> {
        let cart = self.cart.snapshot().await?;
        if cart.is_empty() {
            return Ok(Notice::info(EMPTY_CART_NOTICE));
        }

        let message = format_order_message_with(&self.config.greeting_name, cart.lines());
        match self.clipboard.write_text(&message).await {
            Ok(()) => {
                let total = cart.total_amount();
                info!(lines = cart.len(), %total, currency = total.currency().code(), "Order copied");
                Ok(Notice::success(COPIED_NOTICE))
            }
            Err(e) => {
                warn!(error = %e, "Clipboard write failed");
                Ok(Notice::failure(format!(
                    "Could not copy order details ({}). Please DM us your order at {}.",
                    e,
                    self.config.instagram_display()
                )))
            }
        }
    }

    /// Resolves a navigation anchor. Unknown anchors are a silent no-op.
    pub fn scroll_to(&self, anchor: &str) -> Option<SectionId> {
        let target = SectionId::from_anchor(anchor);
        if target.is_none() {
            debug!(anchor, "No such section");
        }
        target
    }

    /// Renders one section against the current cart.
    pub async fn render_section(&self, section: SectionId, now: NaiveDateTime) -> Result<String, ShopError> {
        let cart = self.cart.snapshot().await?;
        Ok(render::render_section(
            section,
            &PageContext {
                config: &self.config,
                catalog: &self.catalog,
                cart: &cart,
                now,
            },
        ))
    }

    /// Renders the whole page against the current cart.
    pub async fn render_page(&self, now: NaiveDateTime) -> Result<String, ShopError> {
        let cart = self.cart.snapshot().await?;
        Ok(render::render_page(&PageContext {
            config: &self.config,
            catalog: &self.catalog,
            cart: &cart,
            now,
        }))
    }
}
