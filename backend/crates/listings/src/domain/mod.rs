//! Domain Layer
//!
//! Contains entities, value objects, filters, and repository traits.

pub mod entity;
pub mod filter;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::listing::{Listing, ListingDetail, ListingPatch, ListingSummary, PhotoRef};
pub use filter::ListingFilter;
pub use repository::ListingRepository;
