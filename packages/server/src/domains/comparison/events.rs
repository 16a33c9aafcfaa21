//! Comparison domain events and their user-facing notices.
//!
//! Events are immutable facts about what a mutation did (or refused to do).
//! The store returns them; the session scope publishes the corresponding
//! `Notice` on its broadcast channel. Keeping the fact separate from its
//! presentation keeps the state-transition logic testable without any
//! notification plumbing attached.

use crate::common::ListingId;
use crate::domains::comparison::store::MAX_COMPARE;

/// Outcome of a membership mutation on the comparison store.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonEvent {
    /// Listing appended to the comparison set.
    EntryAdded { id: ListingId, address: String },
    /// Add refused: the comparison set is full. State unchanged.
    CapacityReached { id: ListingId },
    /// Add refused: the listing is already selected. State unchanged.
    DuplicateEntry { id: ListingId, address: String },
    /// Listing removed from the comparison set.
    EntryRemoved { id: ListingId, address: String },
}

/// Severity of a transient user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeSeverity {
    Success,
    Info,
    Error,
}

/// A transient user notification describing a mutation outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub message: String,
}

impl ComparisonEvent {
    /// Project this event into the notice shown to the user.
    pub fn notice(&self) -> Notice {
        match self {
            ComparisonEvent::EntryAdded { address, .. } => Notice {
                severity: NoticeSeverity::Success,
                message: format!("Added {} to comparison", address),
            },
            ComparisonEvent::CapacityReached { .. } => Notice {
                severity: NoticeSeverity::Error,
                message: format!(
                    "You can compare up to {} properties at a time",
                    MAX_COMPARE
                ),
            },
            ComparisonEvent::DuplicateEntry { address, .. } => Notice {
                severity: NoticeSeverity::Error,
                message: format!("{} is already in your comparison", address),
            },
            ComparisonEvent::EntryRemoved { address, .. } => Notice {
                severity: NoticeSeverity::Info,
                message: format!("Removed {} from comparison", address),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn added_notice_is_success_and_names_the_address() {
        let event = ComparisonEvent::EntryAdded {
            id: ListingId::from("LKS-1"),
            address: "1 Test Ln".to_string(),
        };
        let notice = event.notice();
        assert_eq!(notice.severity, NoticeSeverity::Success);
        assert!(notice.message.contains("1 Test Ln"));
    }

    #[test]
    fn rejections_are_error_severity() {
        let full = ComparisonEvent::CapacityReached {
            id: ListingId::from("LKS-1"),
        };
        let dup = ComparisonEvent::DuplicateEntry {
            id: ListingId::from("LKS-1"),
            address: "1 Test Ln".to_string(),
        };
        assert_eq!(full.notice().severity, NoticeSeverity::Error);
        assert_eq!(dup.notice().severity, NoticeSeverity::Error);
    }

    #[test]
    fn removal_notice_is_info() {
        let event = ComparisonEvent::EntryRemoved {
            id: ListingId::from("LKS-1"),
            address: "1 Test Ln".to_string(),
        };
        assert_eq!(event.notice().severity, NoticeSeverity::Info);
    }
}
