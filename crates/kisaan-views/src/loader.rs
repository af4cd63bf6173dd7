//! One fetch per dependency change, latest wins.
//!
//! A [`Loader`] owns at most one in-flight fetch task. Starting a new fetch
//! aborts the previous one and bumps the generation; completed fetches
//! report `(generation, result)` over a channel, and a result whose
//! generation is no longer current is dropped. Dropping the loader aborts
//! whatever is still pending.

use std::future::Future;

use kisaan_api::ApiError;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::state::{DataState, Payload};

type Outcome<P> = (u64, Result<P, ApiError>);

pub struct Loader<P> {
    name: &'static str,
    state: DataState<P>,
    generation: u64,
    task: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<Outcome<P>>,
    rx: mpsc::UnboundedReceiver<Outcome<P>>,
}

impl<P> std::fmt::Debug for Loader<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loader")
            .field("name", &self.name)
            .field("state", &self.state.label())
            .field("generation", &self.generation)
            .field("pending", &self.task.is_some())
            .finish()
    }
}

impl<P: Payload + Send + 'static> Loader<P> {
    /// A loader in the `Loading` state with nothing started yet. `name`
    /// identifies the page section in logs.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            name,
            state: DataState::Loading,
            generation: 0,
            task: None,
            tx,
            rx,
        }
    }

    /// Abort the in-flight fetch, if any, and spawn `fetch` as the current
    /// generation. Must be called from within a tokio runtime.
    pub fn start<F>(&mut self, fetch: F)
    where
        F: Future<Output = Result<P, ApiError>> + Send + 'static,
    {
        if let Some(task) = self.task.take() {
            task.abort();
            tracing::debug!(loader = self.name, generation = self.generation, "aborted superseded fetch");
        }
        self.generation += 1;
        self.state = DataState::Loading;

        let generation = self.generation;
        let tx = self.tx.clone();
        self.task = Some(tokio::spawn(async move {
            let result = fetch.await;
            // The receiver lives as long as the loader; a send error means it is gone.
            let _ = tx.send((generation, result));
        }));
    }

    /// Current state without applying pending results.
    #[must_use]
    pub const fn state(&self) -> &DataState<P> {
        &self.state
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a fetch has been started and has not yet been applied.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.task.is_some()
    }

    /// Apply every result that has already arrived, without waiting.
    pub fn poll(&mut self) -> &DataState<P> {
        while let Ok((generation, result)) = self.rx.try_recv() {
            self.apply(generation, result);
        }
        &self.state
    }

    /// Wait for the current generation to resolve and return the state.
    ///
    /// Returns immediately when nothing is pending.
    pub async fn settle(&mut self) -> &DataState<P> {
        self.poll();
        while self.state.is_loading() {
            let Some(task) = self.task.as_mut() else {
                break;
            };
            let joined = task.await;
            self.poll();
            if self.state.is_loading() {
                // The task ended without reporting, so it panicked or was cancelled.
                let reason = joined.err().map_or_else(
                    || "fetch ended without a result".to_string(),
                    |e| e.to_string(),
                );
                tracing::warn!(loader = self.name, %reason, "fetch failed");
                self.task = None;
                self.state = DataState::Failed(reason);
            }
        }
        &self.state
    }

    fn apply(&mut self, generation: u64, result: Result<P, ApiError>) {
        if generation != self.generation {
            tracing::debug!(
                loader = self.name,
                stale = generation,
                current = self.generation,
                "discarded stale fetch result"
            );
            return;
        }
        self.task = None;
        if let Err(e) = &result {
            tracing::warn!(loader = self.name, error = %e, "fetch failed");
        }
        self.state = DataState::from_result(result);
    }
}

impl<P> Drop for Loader<P> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
