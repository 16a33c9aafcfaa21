// Listings domain - property records and the in-memory catalog

pub mod catalog;
pub mod models;

pub use catalog::ListingCatalog;
pub use models::PropertyListing;
