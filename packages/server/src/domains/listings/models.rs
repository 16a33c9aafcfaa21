//! Property listing record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::ListingId;

/// A property listing as shown on the marketing site.
///
/// Only `id` and `address` participate in comparison logic; everything else
/// is display payload. Fields not modeled here (photo URLs, tour links,
/// agent notes) ride along in `extra` untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyListing {
    pub id: ListingId,
    pub address: String,
    /// Asking price in whole dollars.
    pub price: u64,
    pub bedrooms: u8,
    /// Half-baths count as 0.5.
    pub bathrooms: f32,
    pub square_feet: u32,
    pub listed_at: DateTime<Utc>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl PropertyListing {
    /// Short display label used in notices and logs.
    pub fn label(&self) -> &str {
        &self.address
    }
}
