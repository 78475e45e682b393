//! # Core Actor Framework
//!
//! This module defines the generic building blocks for owning one piece of
//! mutable state in its own task.
//!
//! ## Key Types
//!
//! - [`ActorState`]: The trait that owned state types must implement.
//! - [`StateActor`]: The generic actor that owns the state.
//! - [`StateClient`]: The generic client for communicating with the actor.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, ActorDropped).

use async_trait::async_trait;
use std::fmt::Debug;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any state must implement to be owned by a [`StateActor`].
///
/// # Architecture Note
/// The state never leaves its task. Callers describe what they want as a
/// `Command` and receive a `Reply`; the actor applies commands one at a time,
/// so every command is atomic from the caller's point of view and no lock
/// guards the state.
///
/// # Async & Context
/// The `Context` is injected into [`ActorState::handle`] by [`StateActor::run`].
/// This allows "Late Binding" of read-only dependencies (e.g. the catalog).
#[async_trait]
pub trait ActorState: Clone + Send + Sync + 'static {
    /// Enum of operations the state understands.
    type Command: Send + Sync + Debug;

    /// The result type returned by commands.
    type Reply: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// Apply one command.
    ///
    /// An `Err` leaves the state as the handler left it; handlers should
    /// validate before mutating.
    async fn handle(&mut self, command: Self::Command, ctx: &Self::Context) -> Result<Self::Reply, String>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Custom error: {0}")]
    Custom(String),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// - **Command**: run a [`ActorState::Command`] against the state.
/// - **Snapshot**: return a clone of the whole state (for rendering).
#[derive(Debug)]
pub enum StateRequest<T: ActorState> {
    Command {
        command: T::Command,
        respond_to: Response<T::Reply>,
    },
    Snapshot {
        respond_to: Response<T>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that owns a single state value.
///
/// **Concurrency Model**:
/// The actor processes its messages *sequentially* in a loop, so the state
/// needs no `Mutex`. Exclusive ownership inside the task is the guarantee.
pub struct StateActor<T: ActorState> {
    receiver: mpsc::Receiver<StateRequest<T>>,
    state: T,
}

impl<T: ActorState> StateActor<T> {
    pub fn new(buffer_size: usize, initial: T) -> (Self, StateClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            state: initial,
        };
        let client = StateClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop until every client is dropped.
    ///
    /// Returns the final state so the owner can inspect it after shutdown.
    pub async fn run(mut self, context: T::Context) -> T {
        // Extract just the type name (e.g., "Cart" instead of "cookie_menace::model::cart::Cart")
        let state_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(state_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                StateRequest::Command { command, respond_to } => {
                    debug!(state_type, ?command, "Command");
                    let result = self
                        .state
                        .handle(command, &context)
                        .await
                        .map_err(FrameworkError::Custom);
                    match &result {
                        Ok(reply) => debug!(state_type, ?reply, "Command ok"),
                        Err(e) => warn!(state_type, error = %e, "Command failed"),
                    }
                    let _ = respond_to.send(result);
                }
                StateRequest::Snapshot { respond_to } => {
                    debug!(state_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.state.clone()));
                }
            }
        }

        info!(state_type, "Shutdown");
        self.state
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a [`StateActor`].
#[derive(Clone)]
pub struct StateClient<T: ActorState> {
    sender: mpsc::Sender<StateRequest<T>>,
}

impl<T: ActorState> StateClient<T> {
    pub fn new(sender: mpsc::Sender<StateRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn send(&self, command: T::Command) -> Result<T::Reply, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Command { command, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn snapshot(&self) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(StateRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- State Definition ---

    #[derive(Clone, Debug, Default, PartialEq)]
    struct Tally {
        count: i64,
    }

    #[derive(Debug)]
    enum TallyCommand {
        Add(i64),
        Read,
    }

    #[async_trait]
    impl ActorState for Tally {
        type Command = TallyCommand;
        type Reply = i64;
        type Context = i64; // upper bound

        async fn handle(&mut self, command: TallyCommand, limit: &i64) -> Result<i64, String> {
            match command {
                TallyCommand::Add(n) => {
                    if self.count + n > *limit {
                        return Err(format!("limit {} exceeded", limit));
                    }
                    self.count += n;
                    Ok(self.count)
                }
                TallyCommand::Read => Ok(self.count),
            }
        }
    }

    // --- Test ---

    #[tokio::test]
    async fn test_state_actor_commands_and_snapshot() {
        let (actor, client) = StateActor::new(10, Tally::default());
        let handle = tokio::spawn(actor.run(5));

        assert_eq!(client.send(TallyCommand::Add(2)).await.unwrap(), 2);
        assert_eq!(client.send(TallyCommand::Add(3)).await.unwrap(), 5);

        let err = client.send(TallyCommand::Add(1)).await.unwrap_err();
        assert_eq!(err, FrameworkError::Custom("limit 5 exceeded".into()));
        assert_eq!(client.send(TallyCommand::Read).await.unwrap(), 5);

        let snapshot = client.snapshot().await.unwrap();
        assert_eq!(snapshot, Tally { count: 5 });

        drop(client);
        let final_state = handle.await.unwrap();
        assert_eq!(final_state.count, 5);
    }

    #[tokio::test]
    async fn test_commands_are_serialized() {
        let (actor, client) = StateActor::new(4, Tally::default());
        let handle = tokio::spawn(actor.run(i64::MAX));

        let mut tasks = Vec::new();
        for _ in 0..50 {
            let client = client.clone();
            tasks.push(tokio::spawn(async move { client.send(TallyCommand::Add(1)).await }));
        }
        for task in tasks {
            task.await.unwrap().unwrap();
        }

        assert_eq!(client.snapshot().await.unwrap().count, 50);
        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_closed_actor_reports_error() {
        let (actor, client) = StateActor::<Tally>::new(1, Tally::default());
        drop(actor);
        assert_eq!(
            client.send(TallyCommand::Read).await.unwrap_err(),
            FrameworkError::ActorClosed
        );
    }
}
