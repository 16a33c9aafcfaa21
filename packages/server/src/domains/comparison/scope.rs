//! Session scope and handle for the comparison store.
//!
//! The store has a single owner: a `ComparisonScope` created once per
//! application session and dropped at teardown. UI code never holds the
//! store directly - it holds cloneable `ComparisonHandle`s issued by the
//! scope. Each membership mutation publishes its notice on a broadcast
//! channel after the state change completes, so notification delivery can
//! never block or reorder a mutation.
//!
//! Using a handle after its scope has been dropped is a programming error,
//! not a recoverable condition: the handle panics instead of silently
//! answering from a default.

use std::sync::{Arc, RwLock, Weak};

use tokio::sync::broadcast;
use uuid::Uuid;

use crate::common::ListingId;
use crate::domains::comparison::events::{ComparisonEvent, Notice};
use crate::domains::comparison::store::ComparisonStore;
use crate::domains::listings::PropertyListing;

/// Buffered notices per subscriber before lagging kicks in.
const NOTICE_CAPACITY: usize = 16;

struct ScopeInner {
    scope_id: Uuid,
    store: RwLock<ComparisonStore>,
    notices: broadcast::Sender<Notice>,
}

/// Owns the comparison store for the lifetime of one application session.
pub struct ComparisonScope {
    inner: Arc<ScopeInner>,
}

impl ComparisonScope {
    pub fn new() -> Self {
        let (notices, _) = broadcast::channel(NOTICE_CAPACITY);
        let scope_id = Uuid::new_v4();
        tracing::debug!(%scope_id, "comparison scope created");

        Self {
            inner: Arc::new(ScopeInner {
                scope_id,
                store: RwLock::new(ComparisonStore::new()),
                notices,
            }),
        }
    }

    /// Issue a handle for UI code. Handles are cheap to clone and become
    /// invalid (loudly) once the scope is dropped.
    pub fn handle(&self) -> ComparisonHandle {
        ComparisonHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl Default for ComparisonScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ComparisonScope {
    fn drop(&mut self) {
        tracing::debug!(scope_id = %self.inner.scope_id, "comparison scope torn down");
    }
}

/// Cloneable accessor to the session's comparison store.
#[derive(Clone)]
pub struct ComparisonHandle {
    inner: Weak<ScopeInner>,
}

impl ComparisonHandle {
    fn inner(&self) -> Arc<ScopeInner> {
        self.inner
            .upgrade()
            .expect("comparison handle used outside an active ComparisonScope")
    }

    /// Publish after the mutation completes; delivery never delays state.
    fn publish(inner: &ScopeInner, event: &ComparisonEvent) {
        // Ignore send errors (no active subscribers)
        let _ = inner.notices.send(event.notice());
    }

    /// Add a listing to the comparison set and surface the outcome notice.
    pub fn add(&self, listing: PropertyListing) -> ComparisonEvent {
        let inner = self.inner();
        let event = {
            let mut store = inner.store.write().expect("comparison store lock poisoned");
            store.add(listing)
        };
        Self::publish(&inner, &event);
        event
    }

    /// Remove a listing by id. Absent ids are a silent no-op.
    pub fn remove(&self, id: &ListingId) -> Option<ComparisonEvent> {
        let inner = self.inner();
        let event = {
            let mut store = inner.store.write().expect("comparison store lock poisoned");
            store.remove(id)
        };
        if let Some(event) = &event {
            Self::publish(&inner, event);
        }
        event
    }

    /// Empty the set and close the comparison view. No notice.
    pub fn clear(&self) {
        let inner = self.inner();
        let mut store = inner.store.write().expect("comparison store lock poisoned");
        store.clear();
    }

    pub fn contains(&self, id: &ListingId) -> bool {
        let inner = self.inner();
        let store = inner.store.read().expect("comparison store lock poisoned");
        store.contains(id)
    }

    /// Snapshot of the current comparison set, in insertion order.
    pub fn items(&self) -> Vec<PropertyListing> {
        let inner = self.inner();
        let store = inner.store.read().expect("comparison store lock poisoned");
        store.items().to_vec()
    }

    pub fn is_open(&self) -> bool {
        let inner = self.inner();
        let store = inner.store.read().expect("comparison store lock poisoned");
        store.is_open()
    }

    pub fn set_open(&self, open: bool) {
        let inner = self.inner();
        let mut store = inner.store.write().expect("comparison store lock poisoned");
        store.set_open(open);
    }

    /// Subscribe to mutation notices for this session.
    pub fn subscribe(&self) -> broadcast::Receiver<Notice> {
        self.inner().notices.subscribe()
    }
}
