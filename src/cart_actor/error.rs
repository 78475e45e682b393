//! Error types for the Cart actor.

use crate::framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during cart operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// The cart rejected the command (e.g. the item is not on the menu).
    #[error("Cart rejected command: {0}")]
    Rejected(String),

    /// The actor answered with a reply that does not match the command.
    #[error("Unexpected cart reply: {0}")]
    UnexpectedReply(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CartError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::Custom(msg) => CartError::Rejected(msg),
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}
