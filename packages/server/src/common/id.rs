//! Typed listing identifier.
//!
//! Listing ids are MLS-style strings (e.g. `LKS-10421`), not UUIDs, so the
//! wrapper is a string newtype rather than a `Uuid` one. The point is the
//! same as any typed id: a `ListingId` cannot be accidentally swapped with
//! an address or any other plain string at a call site.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A typed wrapper around an MLS-style listing identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListingId(String);

impl ListingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListingId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ListingId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
