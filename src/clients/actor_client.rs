use crate::framework::{ActorState, FrameworkError, StateClient};
use async_trait::async_trait;

/// Trait for state-specific clients to inherit the standard operations.
///
/// Provides a default `snapshot` so each client only writes its own
/// command methods.
#[async_trait]
pub trait ActorClient<T: ActorState>: Send + Sync {
    /// The state-specific error type.
    type Error: From<FrameworkError> + Send + Sync;

    /// Access the inner generic StateClient.
    fn inner(&self) -> &StateClient<T>;

    /// Fetch a copy of the current state.
    #[tracing::instrument(skip(self))]
    async fn snapshot(&self) -> Result<T, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().snapshot().await.map_err(Self::Error::from)
    }
}
