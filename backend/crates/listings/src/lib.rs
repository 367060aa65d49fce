//! Listings Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Listing search by city, minimum price and property type
//! - Full listing detail with ordered photos and owner contact
//! - Listing creation with a batched photo insert
//! - Partial updates gated by an ownership check
//!
//! ## Authorization Model
//! - Mutations require a bearer identity (see `auth::middleware`)
//! - Updates are permitted only when the caller's user id equals the
//!   listing's recorded owner id

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{ListingError, ListingResult};
pub use infra::postgres::PgListingRepository;
pub use presentation::router::listing_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::filter::ListingFilter;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}

pub mod handlers {
    pub use crate::presentation::handlers::*;
}

pub mod store {
    pub use crate::infra::postgres::PgListingRepository as ListingStore;
}

pub mod router {
    pub use crate::presentation::router::*;
}
