//! The fetch state machine behind the NotasTareas screen.
//!
//! # Design
//! The current `UiState` lives in a `tokio::sync::watch` channel: the view
//! model is the only writer, presenters hold receivers. `retry()` publishes
//! `Loading` synchronously, then spawns one task per fetch on the runtime
//! handle it was built with. Overlapping retries are not coordinated;
//! whichever task finishes last writes the final state.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::error::ApiError;
use crate::repository::Repository;
use crate::state::{FailurePolicy, UiState};

struct Shared<R> {
    repository: Arc<R>,
    state: watch::Sender<UiState>,
    policy: FailurePolicy,
    runtime: Handle,
}

/// Owns the screen state and drives fetches through a `Repository`.
pub struct NotasViewModel<R> {
    shared: Arc<Shared<R>>,
}

impl<R> Clone for NotasViewModel<R> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<R: Repository> NotasViewModel<R> {
    /// Build the view model and start the initial fetch. Failures of every
    /// class end in `UiState::Error`.
    pub fn new(repository: Arc<R>, runtime: Handle) -> Self {
        Self::with_policy(repository, runtime, FailurePolicy::default())
    }

    pub fn with_policy(repository: Arc<R>, runtime: Handle, policy: FailurePolicy) -> Self {
        let (state, _) = watch::channel(UiState::Loading);
        let view_model = Self {
            shared: Arc::new(Shared {
                repository,
                state,
                policy,
                runtime,
            }),
        };
        // Auto-load; the handle is detached.
        view_model.retry();
        view_model
    }

    /// Publish `Loading` and start a fetch. Returns immediately.
    ///
    /// The task yields `Err` only when `FailurePolicy::RecoverIoOnly` lets a
    /// non-I/O failure through; the state is then left as `Loading`.
    pub fn retry(&self) -> JoinHandle<Result<(), ApiError>> {
        self.shared.state.send_replace(UiState::Loading);
        let shared = Arc::clone(&self.shared);
        self.shared.runtime.spawn(async move {
            debug!("fetch started");
            let result = shared.repository.fetch_all().await;
            let next = match UiState::from_fetch(result, shared.policy) {
                Ok(next) => next,
                Err(err) => {
                    error!(error = %err, "fetch failed with an unrecovered error");
                    return Err(err);
                }
            };
            match &next {
                UiState::Success(notas) => info!(count = notas.len(), "records loaded"),
                _ => warn!("fetch failed, showing error state"),
            }
            shared.state.send_replace(next);
            Ok(())
        })
    }

    /// A detached retry, for wiring to a button.
    pub fn retry_action(&self) -> impl Fn() + Send + Sync + 'static {
        let view_model = self.clone();
        move || {
            view_model.retry();
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> UiState {
        self.shared.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<UiState> {
        self.shared.state.subscribe()
    }

    pub fn policy(&self) -> FailurePolicy {
        self.shared.policy
    }
}
