//! In-memory listing catalog.
//!
//! The marketing site serves a curated set of listings; there is no database
//! behind it. The catalog is loaded once at startup, either from the bundled
//! data file or from a JSON file pointed at by `LISTINGS_PATH`, and is
//! immutable afterwards.

use anyhow::{Context, Result};

use crate::common::ListingId;
use crate::domains::listings::models::PropertyListing;

/// Bundled demo catalog, compiled into the binary.
const BUNDLED_LISTINGS: &str = include_str!("../../../data/listings.json");

#[derive(Debug, Clone)]
pub struct ListingCatalog {
    listings: Vec<PropertyListing>,
}

impl ListingCatalog {
    /// Parse a catalog from a JSON array of listings.
    pub fn from_json(json: &str) -> Result<Self> {
        let listings: Vec<PropertyListing> =
            serde_json::from_str(json).context("Failed to parse listing catalog JSON")?;
        Ok(Self { listings })
    }

    /// Load a catalog from a JSON file on disk.
    pub fn from_path(path: &str) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read listing catalog from {}", path))?;
        Self::from_json(&json)
    }

    /// The catalog compiled into the binary.
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_LISTINGS)
            .expect("Bundled listing data is valid JSON and should always parse")
    }

    pub fn get(&self, id: &ListingId) -> Option<&PropertyListing> {
        self.listings.iter().find(|listing| &listing.id == id)
    }

    pub fn all(&self) -> &[PropertyListing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}
