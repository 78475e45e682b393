use crate::cart_actor;
use crate::config::StorefrontConfig;
use crate::model::{Cart, Catalog, CatalogError};
use crate::storefront::{Clipboard, Storefront};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The runtime orchestrator for one storefront session.
///
/// `StorefrontSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the cart actor
/// - **Dependency Wiring**: Handing the catalog to the actor and the cart client to the shell
///
/// # Example
///
/// ```ignore
/// let system = StorefrontSystem::new(StorefrontConfig::default(), Arc::new(MemoryClipboard::new()))?;
///
/// system.storefront.dispatch(ShopAction::AddToCart("brookie-single".into())).await?;
/// let notice = system.storefront.copy_order_details().await?;
///
/// // The cart is discarded on shutdown
/// let final_cart = system.shutdown().await?;
/// ```
pub struct StorefrontSystem {
    /// The shell customers interact with.
    pub storefront: Storefront,

    /// Cart actor task (used for graceful shutdown)
    cart_handle: JoinHandle<Cart>,
}

impl StorefrontSystem {
    /// Loads the built-in catalog and starts the cart actor.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: StorefrontConfig, clipboard: Arc<dyn Clipboard>) -> Result<Self, CatalogError> {
        let catalog = Catalog::bakery()?;
        Ok(Self::with_catalog(config, catalog, clipboard))
    }

    /// Starts the system with a caller-supplied catalog.
    pub fn with_catalog(config: StorefrontConfig, catalog: Catalog, clipboard: Arc<dyn Clipboard>) -> Self {
        let catalog = Arc::new(catalog);

        // 1. Create the actor (no dependencies yet)
        let (cart_actor, cart_client) = cart_actor::new(config.cart_buffer);

        // 2. Start it with the catalog injected as context
        let cart_handle = tokio::spawn(cart_actor.run(catalog.clone()));
        info!(items = catalog.len(), "Storefront started");

        let storefront = Storefront::new(Arc::new(config), catalog, cart_client, clipboard);
        Self {
            storefront,
            cart_handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the storefront (and with it the last cart client), then waits
    /// for the cart actor to drain its queue and exit.
    ///
    /// # Returns
    ///
    /// - `Ok(cart)` with the cart as it was at shutdown
    /// - `Err(String)` if the actor task failed or panicked
    ///
    /// Any `CartClient` clones held elsewhere keep the actor alive; drop
    /// them first.
    pub async fn shutdown(self) -> Result<Cart, String> {
        info!("Shutting down storefront...");
        drop(self.storefront);

        match self.cart_handle.await {
            Ok(cart) => {
                info!(lines = cart.len(), "Storefront shutdown complete.");
                Ok(cart)
            }
            Err(e) => {
                error!("Cart actor task failed: {:?}", e);
                Err(format!("Cart actor task failed: {:?}", e))
            }
        }
    }
}
