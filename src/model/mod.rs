//! Pure data structures: money, the catalog and the cart.
//!
//! [`Cart`] implements the [`ActorState`](crate::framework::ActorState) trait.

pub mod cart;
pub mod catalog;
pub mod money;

pub use cart::*;
pub use catalog::*;
pub use money::*;
