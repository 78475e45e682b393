//! # System Lifecycle & Orchestration
//!
//! Starts the cart actor, wires it to the storefront shell, and shuts it down.
//!
//! ## Dependency Injection via Context
//!
//! The cart actor is created without dependencies and receives the catalog
//! through `run(context)`:
//!
//! ```rust,ignore
//! impl ActorState for Cart {
//!     type Context = Arc<Catalog>;
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop the storefront** - closes the last client, and with it the channel
//! 2. **Actor detects closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - the task hands back the final cart
//!
//! Commands already queued are applied before the actor exits.

pub mod storefront_system;
pub mod tracing;

pub use self::storefront_system::*;
pub use self::tracing::*;
