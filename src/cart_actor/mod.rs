//! Cart-specific state logic: the command set and its handler.

mod commands;
pub mod entity;
pub mod error;

pub use commands::*;
pub use error::*;

use crate::clients::CartClient;
use crate::framework::StateActor;
use crate::model::Cart;

/// Creates a new Cart actor (holding an empty cart) and its client.
pub fn new(buffer_size: usize) -> (StateActor<Cart>, CartClient) {
    let (actor, generic_client) = StateActor::new(buffer_size, Cart::new());
    let client = CartClient::new(generic_client);

    (actor, client)
}
