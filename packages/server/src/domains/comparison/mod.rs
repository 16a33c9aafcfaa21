// Comparison domain - side-by-side property comparison state

pub mod events;
pub mod scope;
pub mod store;

pub use events::{ComparisonEvent, Notice, NoticeSeverity};
pub use scope::{ComparisonHandle, ComparisonScope};
pub use store::{ComparisonStore, MAX_COMPARE};
