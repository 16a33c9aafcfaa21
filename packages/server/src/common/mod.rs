// Common types and utilities shared across the application

pub mod id;

pub use id::ListingId;
