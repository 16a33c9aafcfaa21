//! Comparison store state machine.
//!
//! Pure decision logic - NO IO, only state transitions. Notification
//! delivery lives in the session scope; everything here is synchronous and
//! directly testable.

use crate::common::ListingId;
use crate::domains::comparison::events::ComparisonEvent;
use crate::domains::listings::PropertyListing;

/// Maximum number of properties in a side-by-side comparison.
pub const MAX_COMPARE: usize = 3;

/// Properties currently selected for comparison, plus the open/closed state
/// of the comparison view.
#[derive(Debug, Default)]
pub struct ComparisonStore {
    items: Vec<PropertyListing>,
    is_open: bool,
}

impl ComparisonStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a listing to the comparison set.
    ///
    /// Rejections (set full, listing already selected) are soft: the state
    /// is left unchanged and the returned event says why. Insertion order is
    /// preserved.
    pub fn add(&mut self, listing: PropertyListing) -> ComparisonEvent {
        if self.items.len() >= MAX_COMPARE {
            return ComparisonEvent::CapacityReached { id: listing.id };
        }
        if self.contains(&listing.id) {
            return ComparisonEvent::DuplicateEntry {
                id: listing.id,
                address: listing.address,
            };
        }

        let event = ComparisonEvent::EntryAdded {
            id: listing.id.clone(),
            address: listing.address.clone(),
        };
        self.items.push(listing);
        event
    }

    /// Remove a listing by id. No-op when the id is not selected.
    pub fn remove(&mut self, id: &ListingId) -> Option<ComparisonEvent> {
        let position = self.items.iter().position(|item| &item.id == id)?;
        let removed = self.items.remove(position);
        Some(ComparisonEvent::EntryRemoved {
            id: removed.id,
            address: removed.address,
        })
    }

    /// Empty the comparison set and close the view.
    pub fn clear(&mut self) {
        self.items.clear();
        self.is_open = false;
    }

    pub fn contains(&self, id: &ListingId) -> bool {
        self.items.iter().any(|item| &item.id == id)
    }

    pub fn items(&self) -> &[PropertyListing] {
        &self.items
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }
}
