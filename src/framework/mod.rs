//! Generic actor framework for owned state.
//!
//! This module provides the building blocks for keeping one piece of mutable
//! state in its own task and talking to it through a typed client.
//!
//! # Main Components
//!
//! - [`ActorState`] - Trait that owned state types implement
//! - [`StateActor`] - Generic actor that owns the state
//! - [`StateClient`] - Type-safe client for sending commands
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use self::core::*;
