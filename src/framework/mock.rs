//! # Mock Platform & Testing Guide
//!
//! `MockPlatform<T>` hands out the same [`PlatformClient<T>`] the real platform does, but
//! answers from a queue of expectations instead of a store. Every request it receives is
//! recorded, so a test can assert exactly which remote calls an operation issued and with
//! what payload.
//!
//! ## When to use Mocks vs the Real Platform
//!
//! | Feature | MockPlatform | PlatformActor |
//! |---------|--------------|---------------|
//! | **State** | None (scripted responses) | Real in-memory store |
//! | **Error Injection** | Easy (`return_err`) | Only domain rejections and not-found |
//! | **Call inspection** | Full (`calls()`) | Logs only |
//! | **Use Case** | Reconciler logic, failure paths | End-to-end lifecycle |
//!
//! ## Example
//!
//! ```ignore
//! let mut mock = MockPlatform::<CustomAlert>::new();
//! mock.expect_create().return_ok(alert.clone());
//! mock.expect_fetch("al_123").return_ok(alert);
//!
//! let client = AlertClient::new(mock.client());
//! // drive the code under test...
//! mock.verify();
//! ```

use crate::framework::client::PlatformClient;
use crate::framework::entity::RemoteEntity;
use crate::framework::error::ApiError;
use crate::framework::message::{PlatformRequest, Scope};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};
use tokio::sync::mpsc;

enum Expectation<T: RemoteEntity> {
    Create {
        response: Result<T, ApiError>,
    },
    Fetch {
        id: String,
        response: Result<T, ApiError>,
    },
    Replace {
        id: String,
        response: Result<T, ApiError>,
    },
    Delete {
        id: String,
        response: Result<(), ApiError>,
    },
}

impl<T: RemoteEntity> Expectation<T> {
    fn describe(&self) -> String {
        match self {
            Expectation::Create { .. } => "create".to_string(),
            Expectation::Fetch { id, .. } => format!("fetch {id}"),
            Expectation::Replace { id, .. } => format!("replace {id}"),
            Expectation::Delete { id, .. } => format!("delete {id}"),
        }
    }
}

/// A request the mock received, in arrival order.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall<T: RemoteEntity> {
    Create { scope: Scope },
    Fetch { scope: Scope, id: String },
    Replace { scope: Scope, id: String, body: T::Body },
    Delete { scope: Scope, id: String },
}

struct MockState<T: RemoteEntity> {
    expectations: VecDeque<Expectation<T>>,
    calls: Vec<RecordedCall<T>>,
    failures: Vec<String>,
}

type Shared<T> = Arc<Mutex<MockState<T>>>;

fn lock<T: RemoteEntity>(state: &Shared<T>) -> MutexGuard<'_, MockState<T>> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// A scripted platform for fluent testing.
///
/// A request that does not match the next expectation (wrong kind or wrong id) gets no
/// response, so the caller sees [`ApiError::PlatformDropped`], and the mismatch is
/// reported by [`MockPlatform::verify`].
pub struct MockPlatform<T: RemoteEntity> {
    client: PlatformClient<T>,
    state: Shared<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: RemoteEntity> Default for MockPlatform<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: RemoteEntity> MockPlatform<T> {
    /// Creates a new mock with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<PlatformRequest<T>>(100);
        let state: Shared<T> = Arc::new(Mutex::new(MockState {
            expectations: VecDeque::new(),
            calls: Vec::new(),
            failures: Vec::new(),
        }));
        let task_state = state.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let mut guard = lock(&task_state);
                let expectation = guard.expectations.pop_front();

                match (request, expectation) {
                    (
                        PlatformRequest::Create { scope, respond_to },
                        Some(Expectation::Create { response }),
                    ) => {
                        guard.calls.push(RecordedCall::Create { scope });
                        let _ = respond_to.send(response);
                    }
                    (
                        PlatformRequest::Fetch {
                            scope,
                            id,
                            respond_to,
                        },
                        Some(Expectation::Fetch {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        guard.calls.push(RecordedCall::Fetch { scope, id });
                        let _ = respond_to.send(response);
                    }
                    (
                        PlatformRequest::Replace {
                            scope,
                            id,
                            body,
                            respond_to,
                        },
                        Some(Expectation::Replace {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        guard.calls.push(RecordedCall::Replace { scope, id, body });
                        let _ = respond_to.send(response);
                    }
                    (
                        PlatformRequest::Delete {
                            scope,
                            id,
                            respond_to,
                        },
                        Some(Expectation::Delete {
                            id: expected,
                            response,
                        }),
                    ) if id == expected => {
                        guard.calls.push(RecordedCall::Delete { scope, id });
                        let _ = respond_to.send(response);
                    }
                    (request, expectation) => {
                        let received = match request {
                            PlatformRequest::Create { .. } => "create".to_string(),
                            PlatformRequest::Fetch { id, .. } => format!("fetch {id}"),
                            PlatformRequest::Replace { id, .. } => format!("replace {id}"),
                            PlatformRequest::Delete { id, .. } => format!("delete {id}"),
                        };
                        let expected = expectation
                            .as_ref()
                            .map_or_else(|| "nothing".to_string(), Expectation::describe);
                        guard
                            .failures
                            .push(format!("received {received}, expected {expected}"));
                    }
                }
            }
        });

        Self {
            client: PlatformClient::new(sender),
            state,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> PlatformClient<T> {
        self.client.clone()
    }

    /// Expects a `create` request.
    pub fn expect_create(&mut self) -> CreateExpectationBuilder<T> {
        CreateExpectationBuilder {
            state: self.state.clone(),
        }
    }

    /// Expects a `fetch` request for `id`.
    pub fn expect_fetch(&mut self, id: impl Into<String>) -> FetchExpectationBuilder<T> {
        FetchExpectationBuilder {
            id: id.into(),
            state: self.state.clone(),
        }
    }

    /// Expects a `replace` request for `id`.
    pub fn expect_replace(&mut self, id: impl Into<String>) -> ReplaceExpectationBuilder<T> {
        ReplaceExpectationBuilder {
            id: id.into(),
            state: self.state.clone(),
        }
    }

    /// Expects a `delete` request for `id`.
    pub fn expect_delete(&mut self, id: impl Into<String>) -> DeleteExpectationBuilder<T> {
        DeleteExpectationBuilder {
            id: id.into(),
            state: self.state.clone(),
        }
    }

    /// Every request received so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall<T>> {
        lock(&self.state).calls.clone()
    }

    /// Verifies that all expectations were met and no request was unexpected.
    pub fn verify(&self) {
        let state = lock(&self.state);
        if !state.failures.is_empty() {
            panic!("Unexpected platform requests: {}", state.failures.join("; "));
        }
        if !state.expectations.is_empty() {
            panic!(
                "Not all expectations were met. {} remaining",
                state.expectations.len()
            );
        }
    }
}

/// Builder for `create` expectations.
pub struct CreateExpectationBuilder<T: RemoteEntity> {
    state: Shared<T>,
}

impl<T: RemoteEntity> CreateExpectationBuilder<T> {
    pub fn return_ok(self, object: T) {
        lock(&self.state).expectations.push_back(Expectation::Create {
            response: Ok(object),
        });
    }

    pub fn return_err(self, error: ApiError) {
        lock(&self.state).expectations.push_back(Expectation::Create {
            response: Err(error),
        });
    }
}

/// Builder for `fetch` expectations.
pub struct FetchExpectationBuilder<T: RemoteEntity> {
    id: String,
    state: Shared<T>,
}

impl<T: RemoteEntity> FetchExpectationBuilder<T> {
    pub fn return_ok(self, object: T) {
        lock(&self.state).expectations.push_back(Expectation::Fetch {
            id: self.id,
            response: Ok(object),
        });
    }

    pub fn return_err(self, error: ApiError) {
        lock(&self.state).expectations.push_back(Expectation::Fetch {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `replace` expectations.
pub struct ReplaceExpectationBuilder<T: RemoteEntity> {
    id: String,
    state: Shared<T>,
}

impl<T: RemoteEntity> ReplaceExpectationBuilder<T> {
    pub fn return_ok(self, object: T) {
        lock(&self.state).expectations.push_back(Expectation::Replace {
            id: self.id,
            response: Ok(object),
        });
    }

    pub fn return_err(self, error: ApiError) {
        lock(&self.state).expectations.push_back(Expectation::Replace {
            id: self.id,
            response: Err(error),
        });
    }
}

/// Builder for `delete` expectations.
pub struct DeleteExpectationBuilder<T: RemoteEntity> {
    id: String,
    state: Shared<T>,
}

impl<T: RemoteEntity> DeleteExpectationBuilder<T> {
    pub fn return_ok(self) {
        lock(&self.state).expectations.push_back(Expectation::Delete {
            id: self.id,
            response: Ok(()),
        });
    }

    pub fn return_err(self, error: ApiError) {
        lock(&self.state).expectations.push_back(Expectation::Delete {
            id: self.id,
            response: Err(error),
        });
    }
}
