//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`MockClient`] to script replies with an expectation builder, or
//! [`create_mock_client`] to get a client and the raw receiver.

use crate::framework::{ActorState, FrameworkError, StateClient, StateRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock client.
enum Expectation<T: ActorState> {
    Command {
        response: Result<T::Reply, FrameworkError>,
    },
    Snapshot {
        response: Result<T, FrameworkError>,
    },
}

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<Cart>::new();
/// mock.expect_command().return_ok(CartReply::Quantity(Some(1)));
/// mock.expect_snapshot().return_ok(Cart::new());
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorState> {
    client: StateClient<T>,
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
    received: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorState> MockClient<T> {
    /// Creates a new mock client with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<StateRequest<T>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let received = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let received_clone = received.clone();

        // Spawn background task to answer requests
        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (StateRequest::Command { command, respond_to }, Some(Expectation::Command { response })) => {
                        received_clone.lock().unwrap().push(format!("{:?}", command));
                        let _ = respond_to.send(response);
                    }
                    (StateRequest::Snapshot { respond_to }, Some(Expectation::Snapshot { response })) => {
                        received_clone.lock().unwrap().push("Snapshot".to_string());
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: StateClient::new(sender),
            expectations,
            received,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> StateClient<T> {
        self.client.clone()
    }

    /// Expects a command.
    pub fn expect_command(&mut self) -> CommandExpectationBuilder<T> {
        CommandExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a snapshot request.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<T> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// `Debug` renderings of the requests answered so far, in order.
    pub fn received(&self) -> Vec<String> {
        self.received.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<T: ActorState> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for command expectations.
pub struct CommandExpectationBuilder<T: ActorState> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorState> CommandExpectationBuilder<T> {
    /// Sets the expectation to return a successful reply.
    pub fn return_ok(self, reply: T::Reply) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Command { response: Ok(reply) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Command { response: Err(error) });
    }
}

/// Builder for snapshot expectations.
pub struct SnapshotExpectationBuilder<T: ActorState> {
    expectations: Arc<Mutex<VecDeque<Expectation<T>>>>,
}

impl<T: ActorState> SnapshotExpectationBuilder<T> {
    /// Sets the expectation to return the given state.
    pub fn return_ok(self, state: T) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Snapshot { response: Ok(state) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations
            .lock()
            .unwrap()
            .push_back(Expectation::Snapshot { response: Err(error) });
    }
}

// =============================================================================
// RAW HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Use this when a test needs to look at the command payload itself. For
/// scripted replies [`MockClient`] is shorter.
pub fn create_mock_client<T: ActorState>(
    buffer_size: usize,
) -> (StateClient<T>, mpsc::Receiver<StateRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (StateClient::new(sender), receiver)
}

/// Helper to take the next message if it is a command.
pub async fn expect_command<T: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<T>>,
) -> Option<(T::Command, oneshot::Sender<Result<T::Reply, FrameworkError>>)> {
    match receiver.recv().await {
        Some(StateRequest::Command { command, respond_to }) => Some((command, respond_to)),
        _ => None,
    }
}

/// Helper to take the next message if it is a snapshot request.
pub async fn expect_snapshot<T: ActorState>(
    receiver: &mut mpsc::Receiver<StateRequest<T>>,
) -> Option<oneshot::Sender<Result<T, FrameworkError>>> {
    match receiver.recv().await {
        Some(StateRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}
