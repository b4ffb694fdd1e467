//! Cart Store
//!
//! Holds the last cart snapshot read from the service. Uses Leptos
//! reactive_stores so the badge and the panel re-render on replacement.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::CartState;

/// What the page currently knows about the cart
#[derive(Clone, Debug, PartialEq)]
pub enum CartSnapshot {
    /// Result of the most recent successful read
    Loaded(CartState),
    /// The most recent read failed; contents are unknown, not empty
    Unavailable,
}

impl Default for CartSnapshot {
    fn default() -> Self {
        CartSnapshot::Loaded(CartState::default())
    }
}

#[derive(Clone, Debug, Default, Store)]
pub struct CartStoreState {
    pub snapshot: CartSnapshot,
}

/// Shared handle to the cart snapshot.
///
/// `replace` is the only write path: snapshots are swapped whole, never merged.
#[derive(Clone, Copy)]
pub struct CartStore {
    inner: Store<CartStoreState>,
}

impl CartStore {
    pub fn new() -> Self {
        Self { inner: Store::new(CartStoreState::default()) }
    }

    pub fn replace(&self, snapshot: CartSnapshot) {
        *self.inner.snapshot().write() = snapshot;
    }

    /// Current snapshot, tracked by the calling reactive scope
    pub fn snapshot(&self) -> CartSnapshot {
        self.inner.snapshot().get()
    }

    pub fn snapshot_untracked(&self) -> CartSnapshot {
        self.inner.snapshot().get_untracked()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
