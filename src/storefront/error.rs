//! Error types for the storefront shell.

use crate::cart_actor::CartError;
use crate::model::CatalogError;
use thiserror::Error;

/// Errors that can occur while handling a storefront action.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShopError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Cart(#[from] CartError),
}
