//! List synchronization with stale-response suppression.
//!
//! Every list the UI shows is refreshed wholesale after mutations, so two
//! fetches for the same collection can be in flight at once and complete out
//! of order. Each fetch takes a generation token from `begin`; `apply` only
//! accepts the result carrying the latest token and drops the rest.

use std::future::Future;

use leptos::{create_rw_signal, RwSignal, SignalUpdate, SignalWith};

use crate::api::ApiError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncPhase {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

#[derive(Clone, Debug)]
pub struct SyncState<T> {
    phase: SyncPhase,
    items: Vec<T>,
    latest_token: u64,
}

impl<T> SyncState<T> {
    pub fn new() -> Self {
        Self {
            phase: SyncPhase::Idle,
            items: Vec::new(),
            latest_token: 0,
        }
    }

    /// Starts a fetch and returns its token. Any earlier in-flight fetch is
    /// superseded from this point on.
    pub fn begin(&mut self) -> u64 {
        self.latest_token += 1;
        self.phase = SyncPhase::Loading;
        self.latest_token
    }

    /// Applies a fetch result. Returns `false` when the token has been
    /// superseded by a later `begin`, leaving the state untouched. A failure
    /// keeps the last good `items` visible alongside the error.
    pub fn apply(&mut self, token: u64, result: Result<Vec<T>, ApiError>) -> bool {
        if token != self.latest_token {
            return false;
        }
        match result {
            Ok(items) => {
                self.items = items;
                self.phase = SyncPhase::Loaded;
            }
            Err(err) => self.phase = SyncPhase::Failed(err.message),
        }
        true
    }

    pub fn phase(&self) -> &SyncPhase {
        &self.phase
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, SyncPhase::Idle | SyncPhase::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SyncPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for SyncState<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Standalone generation counter for loads that bypass `SyncState`, like the
/// per-employee summary batch. Same rule: only the result carrying the latest
/// token may land.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Generation {
    latest: u64,
}

impl Generation {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest
    }
}

/// Reactive wrapper used by the page view models.
pub struct SyncedCollection<T: 'static> {
    state: RwSignal<SyncState<T>>,
}

impl<T: 'static> Clone for SyncedCollection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SyncedCollection<T> {}

impl<T: Clone + 'static> SyncedCollection<T> {
    pub fn new() -> Self {
        Self {
            state: create_rw_signal(SyncState::new()),
        }
    }

    pub fn signal(&self) -> RwSignal<SyncState<T>> {
        self.state
    }

    pub fn items(&self) -> Vec<T> {
        self.state.with(|state| state.items().to_vec())
    }

    pub fn items_untracked(&self) -> Vec<T> {
        use leptos::SignalWithUntracked;
        self.state.with_untracked(|state| state.items().to_vec())
    }

    /// Drives one begin/apply cycle. Safe to call concurrently; only the
    /// newest call's result lands.
    pub async fn refresh<Fut>(&self, fetch: Fut)
    where
        Fut: Future<Output = Result<Vec<T>, ApiError>>,
    {
        let token = self
            .state
            .try_update(|state| state.begin())
            .unwrap_or_default();
        let result = fetch.await;
        let applied = self
            .state
            .try_update(|state| state.apply(token, result))
            .unwrap_or_default();
        if !applied {
            log::debug!("dropping superseded fetch result (token {})", token);
        }
    }
}
