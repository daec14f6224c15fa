//! Readiness state store.
//!
//! A watch channel replaces the subscribe-and-poll pattern: the bootstrap
//! layer awaits a readiness predicate as an explicit notification instead of
//! re-checking flags on every store change. Receivers are dropped as soon as
//! the predicate holds, so no subscription outlives the wait.

use tokio::sync::watch;

/// Readiness flags for the bootstrap sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BootstrapState {
    /// Persisted application state has been merged into memory.
    pub hydration_complete: bool,
    /// Locally persisted session data has been loaded.
    pub credentials_loaded: bool,
}

/// Handle to the process-wide readiness store.
///
/// Cloning produces another handle to the same underlying channel. Flags are
/// monotonic: once raised they stay raised for the process lifetime, and
/// the setters can only raise them.
#[derive(Debug, Clone)]
pub struct StateStore {
    tx: watch::Sender<BootstrapState>,
}

impl StateStore {
    /// Create a store with all flags cleared.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(BootstrapState::default());
        Self { tx }
    }

    /// Current state snapshot.
    pub fn state(&self) -> BootstrapState {
        *self.tx.borrow()
    }

    /// Raise `hydration_complete` and notify subscribers.
    pub fn mark_hydration_complete(&self) {
        self.tx.send_modify(|state| state.hydration_complete = true);
    }

    /// Raise `credentials_loaded` and notify subscribers.
    pub fn mark_credentials_loaded(&self) {
        self.tx.send_modify(|state| state.credentials_loaded = true);
    }

    /// Subscribe to state changes.
    ///
    /// The returned receiver observes every subsequent change. Dropping it is
    /// the unsubscribe.
    pub fn subscribe(&self) -> watch::Receiver<BootstrapState> {
        self.tx.subscribe()
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}
